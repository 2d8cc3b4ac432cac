//! Day count conventions.
//!
//! A day count convention turns the distance between two dates into a
//! fraction of a year. Rate-of-return calculations here use a simple
//! elapsed-time model: actual days over a fixed 365-day year.
//!
//! # Usage
//!
//! ```rust
//! use finrate_core::daycounts::{Act365Fixed, DayCount};
//! use finrate_core::types::Date;
//!
//! let dc = Act365Fixed;
//! let start = Date::from_ymd(2025, 1, 1).unwrap();
//! let end = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! assert_eq!(dc.day_count(start, end), 365);
//! assert_eq!(dc.year_fraction(start, end), 1.0);
//! ```

mod act365;

pub use act365::Act365Fixed;

use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`).
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end` is before `start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}
