//! Grade rounding

use crate::error::{LaunchError, Result};

/// Score for `fraction` of `points`, rounded to two decimals
///
/// Formatted the way the gradebook displays it: `57.0`, `56.55`.
pub fn rounded_grade(fraction: f64, points: f64) -> Result<String> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(LaunchError::GradeOutOfRange(fraction));
    }

    let rounded = (fraction * points * 100.0).round() / 100.0;
    Ok(format!("{rounded:?}"))
}
