//! Calendar date type for dated cash flows.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use crate::error::{FinrateError, FinrateResult};

/// A calendar date attached to a cash flow.
///
/// This is a newtype wrapper around `chrono::NaiveDate`. Dates carry no
/// time-of-day or time zone, so the distance between two dates is always a
/// whole number of days.
///
/// # Example
///
/// ```rust
/// use finrate_core::types::Date;
///
/// let start = Date::from_ymd(2015, 12, 1).unwrap();
/// let end = Date::parse("2016-08-01").unwrap();
/// assert_eq!(start.days_between(&end), 244);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `FinrateError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> FinrateResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| FinrateError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `FinrateError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> FinrateResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| FinrateError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Calculates the number of calendar days between two dates.
    ///
    /// Positive when `other` is after `self`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = FinrateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse() {
        let date = Date::parse("2013-12-31").unwrap();
        assert_eq!(date, Date::from_ymd(2013, 12, 31).unwrap());
        assert_eq!(date.to_string(), "2013-12-31");

        assert!(Date::parse("31/12/2013").is_err());
        assert!("2014-05-15".parse::<Date>().is_ok());
    }

    #[test]
    fn test_days_between() {
        let start = Date::from_ymd(2013, 12, 31).unwrap();
        let end = Date::from_ymd(2014, 5, 15).unwrap();

        assert_eq!(start.days_between(&end), 135);
        assert_eq!(end.days_between(&start), -135);
        assert_eq!(end - start, 135);
    }

    #[test]
    fn test_leap_year_span() {
        // 2016 is a leap year: Dec 1 to Aug 1 includes Feb 29
        let start = Date::from_ymd(2015, 12, 1).unwrap();
        let end = Date::from_ymd(2016, 8, 1).unwrap();
        assert_eq!(start.days_between(&end), 244);
        assert_eq!(start.add_days(244), end);
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2020, 1, 1).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2020-01-01\"");

        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
