//! Custom parameter adjustment
//!
//! Custom parameters are stored one `key=value` pair per line. Older tool
//! configurations packed them on one line separated by `;`; those are unpacked
//! here. Anything that does not look exactly like that is left alone.

use std::borrow::Cow;

/// Converts `a=1;b=2[;]` into `a=1\nb=2[\n]`, otherwise returns the input
///
/// Left unchanged: blank input, input already containing a newline, input
/// with fewer than two `=`, and any input where a `;`-separated segment does
/// not hold exactly one `=`.
pub fn adjust_custom(custom: &str) -> Cow<'_, str> {
    let trimmed = custom.trim();
    if trimmed.is_empty() || trimmed.contains('\n') || trimmed.matches('=').count() < 2 {
        return Cow::Borrowed(custom);
    }

    let body = trimmed.strip_suffix(';').unwrap_or(trimmed);
    if body.split(';').all(|segment| segment.matches('=').count() == 1) {
        Cow::Owned(custom.replace(';', "\n"))
    } else {
        Cow::Borrowed(custom)
    }
}
