//! Launch URL helpers

/// `url` up to, not including, the first `?`
///
/// Only cuts when the `?` is past index 1. No other change is made to the URL;
/// ports, trailing slashes and case are preserved exactly.
pub fn strip_off_query(url: &str) -> &str {
    match url.find('?') {
        Some(pos) if pos > 1 => &url[..pos],
        _ => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_off_query() {
        let cases = [
            ("http://localhost:8080", "http://localhost:8080"),
            ("http://localhost:8080/", "http://localhost:8080/"),
            ("http://localhost:8080/zap", "http://localhost:8080/zap"),
            ("http://localhost:8080/zap/", "http://localhost:8080/zap/"),
            ("http://localhost:8080/zap/bob.php?x=1234", "http://localhost:8080/zap/bob.php"),
            ("https://www.py4e.com", "https://www.py4e.com"),
            ("https://www.py4e.com/", "https://www.py4e.com/"),
            ("https://www.py4e.com/zap/", "https://www.py4e.com/zap/"),
            ("https://www.py4e.com/zap/bob.php?x=1234", "https://www.py4e.com/zap/bob.php"),
            ("https://www.py4e.com:443/zap/bob.php?x=1234", "https://www.py4e.com:443/zap/bob.php"),
            ("https://www.sakailms.org/", "https://www.sakailms.org/"),
        ];

        for (url, expected) in cases {
            assert_eq!(strip_off_query(url), expected);
        }
    }

    #[test]
    fn test_leading_question_mark_kept() {
        assert_eq!(strip_off_query("?x=1"), "?x=1");
        assert_eq!(strip_off_query("a?x=1"), "a?x=1");
        assert_eq!(strip_off_query("ab?x=1"), "ab");
        assert_eq!(strip_off_query(""), "");
    }
}
