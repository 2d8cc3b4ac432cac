//! Decimal-place rounding for binary floating point values.
//!
//! These scale by a power of ten, round, and scale back. The result is the
//! nearest `f64` to the rounded decimal, which is what reported rates and
//! convergence comparisons need.

/// Rounds `value` to `decimals` decimal places, halves away from zero.
///
/// ```rust
/// use finrate_math::rounding::round_to;
///
/// assert_eq!(round_to(14.105398, 2), 14.11);
/// assert_eq!(round_to(-79.362973, 2), -79.36);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).round() / factor
}

/// Rounds `value` up to `decimals` decimal places.
#[must_use]
pub fn ceil_to(value: f64, decimals: u32) -> f64 {
    let factor = scale(decimals);
    (value * factor).ceil() / factor
}

/// Returns true if `a` and `b` are equal once rounded to `decimals` places.
///
/// NaN never agrees with anything.
#[must_use]
pub fn agree_to(a: f64, b: f64, decimals: u32) -> bool {
    round_to(a, decimals) == round_to(b, decimals)
}

fn scale(decimals: u32) -> f64 {
    10f64.powi(decimals.min(i32::MAX as u32) as i32)
}
