//! Date series and the elapsed-year offsets derived from them.

use serde::{Deserialize, Serialize};

use super::Date;
use crate::daycounts::DayCount;

/// An ordered sequence of dates, one per cash flow.
///
/// The dates are expected to be non-decreasing, but this is not enforced:
/// offsets are measured as absolute distances from the first date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateSeries(Vec<Date>);

impl DateSeries {
    /// Creates a series from the given dates.
    #[must_use]
    pub fn new(dates: Vec<Date>) -> Self {
        Self(dates)
    }

    /// Returns the number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the series holds no dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the dates as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Date] {
        &self.0
    }

    /// Returns the reference (first) date.
    #[must_use]
    pub fn first(&self) -> Option<Date> {
        self.0.first().copied()
    }

    /// Converts the dates into year offsets from the first date.
    ///
    /// Each offset is the absolute year fraction between the first date and
    /// that date under `day_count`. The first offset is always zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use finrate_core::daycounts::Act365Fixed;
    /// use finrate_core::types::{Date, DateSeries};
    ///
    /// let dates = DateSeries::new(vec![
    ///     Date::from_ymd(2013, 12, 31).unwrap(),
    ///     Date::from_ymd(2014, 5, 15).unwrap(),
    /// ]);
    /// let years = dates.elapsed_years(&Act365Fixed);
    /// assert_eq!(years.as_slice(), &[0.0, 135.0 / 365.0]);
    /// ```
    #[must_use]
    pub fn elapsed_years<D: DayCount + ?Sized>(&self, day_count: &D) -> ElapsedYears {
        let Some(reference) = self.first() else {
            return ElapsedYears::default();
        };

        self.0
            .iter()
            .map(|&date| day_count.year_fraction(reference, date).abs())
            .collect()
    }
}

impl From<Vec<Date>> for DateSeries {
    fn from(dates: Vec<Date>) -> Self {
        Self(dates)
    }
}

impl FromIterator<Date> for DateSeries {
    fn from_iter<I: IntoIterator<Item = Date>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Non-negative year offsets of each cash flow from the first date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElapsedYears(Vec<f64>);

impl ElapsedYears {
    /// Returns the number of offsets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no offsets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the offsets as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl FromIterator<f64> for ElapsedYears {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
