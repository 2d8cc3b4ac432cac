//! Ordered cash flow series.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::{FinrateError, FinrateResult};

/// An ordered sequence of signed cash flows, one per period.
///
/// Negative values are payments (outflows), positive values are receipts
/// (inflows). The first element is the flow at time zero.
///
/// A rate of return only makes sense for a series holding at least one
/// strictly positive and one strictly negative value; see
/// [`CashFlowSeries::has_sign_change`].
///
/// # Example
///
/// ```rust
/// use finrate_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::from(&[-1000.0, 1200.0][..]);
/// assert_eq!(flows.len(), 2);
/// assert!(flows.has_sign_change());
/// assert!(!CashFlowSeries::new(vec![100.0, 200.0]).has_sign_change());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CashFlowSeries(Vec<f64>);

impl CashFlowSeries {
    /// Creates a series from the given amounts.
    #[must_use]
    pub fn new(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }

    /// Returns the number of cash flows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the series holds no cash flows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the amounts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterates over the amounts in order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Returns the flow at time zero, if any.
    #[must_use]
    pub fn initial(&self) -> Option<f64> {
        self.0.first().copied()
    }

    /// Returns the flows after time zero.
    #[must_use]
    pub fn subsequent(&self) -> &[f64] {
        self.0.get(1..).unwrap_or(&[])
    }

    /// Returns true if any amount is strictly positive.
    #[must_use]
    pub fn has_positive(&self) -> bool {
        self.0.iter().any(|&cf| cf > 0.0)
    }

    /// Returns true if any amount is strictly negative.
    #[must_use]
    pub fn has_negative(&self) -> bool {
        self.0.iter().any(|&cf| cf < 0.0)
    }

    /// Returns true if the series holds both a strictly positive and a
    /// strictly negative amount.
    #[must_use]
    pub fn has_sign_change(&self) -> bool {
        self.has_positive() && self.has_negative()
    }

    /// Checks that the series holds both an inflow and an outflow.
    ///
    /// # Errors
    ///
    /// Returns `FinrateError::InvalidCashFlow` naming the missing side.
    pub fn ensure_sign_change(&self) -> FinrateResult<()> {
        match (self.has_positive(), self.has_negative()) {
            (true, true) => Ok(()),
            (false, true) => Err(FinrateError::invalid_cash_flow(
                "series has no positive value",
            )),
            (true, false) => Err(FinrateError::invalid_cash_flow(
                "series has no negative value",
            )),
            (false, false) => Err(FinrateError::invalid_cash_flow(
                "series has neither a positive nor a negative value",
            )),
        }
    }
}

impl From<Vec<f64>> for CashFlowSeries {
    fn from(amounts: Vec<f64>) -> Self {
        Self(amounts)
    }
}

impl From<&[f64]> for CashFlowSeries {
    fn from(amounts: &[f64]) -> Self {
        Self(amounts.to_vec())
    }
}

impl FromIterator<f64> for CashFlowSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<usize> for CashFlowSeries {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a CashFlowSeries {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
