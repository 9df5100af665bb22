//! Numeric coercion of loosely typed values
//!
//! Content and tool records arrive as JSON maps where numbers are sometimes
//! numbers and sometimes strings. These helpers never fail; they return `None`
//! for anything that is not a number.
//!
//! The empty string is the one asymmetry: [`long_or_none`] maps it to `-1`
//! while [`double_or_none`] maps it to `None`. Callers rely on both.

use serde_json::Value;

/// Integer value of `value`
///
/// Floats truncate toward zero. Strings must parse as integers, so `"2.5"`
/// is `None`. `""` is `Some(-1)`; `"null"` in any case is `None`.
pub fn long_or_none(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64().or_else(|| number.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) if s.is_empty() => Some(-1),
        Value::String(s) if s.eq_ignore_ascii_case("null") => None,
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Floating point value of `value`
///
/// `""` and `"null"` in any case are `None`.
pub fn double_or_none(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(s) if s.is_empty() || s.eq_ignore_ascii_case("null") => None,
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
