//! Presentation rounding.
//!
//! Metrics are computed at full precision; apply these only when rendering a
//! value, never before feeding it into another computation.

/// Round toward negative infinity, as whole-number totals are shown.
pub fn floor(value: f64) -> f64 {
    value.floor()
}

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}
