//! Evaluation budget shared across solver stages.

use crate::error::{MathError, MathResult};

/// Counts objective evaluations against a fixed limit.
///
/// A single counter can span several solver stages (for example bracket
/// expansion followed by bisection) so that the total work of a call is
/// bounded. The counter is an ordinary value owned by the caller; wrap an
/// objective with [`EvaluationCounter::counted`] to charge every call to it.
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::EvaluationCounter;
///
/// let mut counter = EvaluationCounter::new(2);
/// let mut f = counter.counted(|x| x * 2.0);
///
/// assert_eq!(f(1.0).unwrap(), 2.0);
/// assert_eq!(f(2.0).unwrap(), 4.0);
/// assert!(f(3.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationCounter {
    count: u32,
    limit: u32,
}

impl EvaluationCounter {
    /// Creates a counter allowing at most `limit` evaluations.
    #[must_use]
    pub fn new(limit: u32) -> Self {
        Self { count: 0, limit }
    }

    /// Records one evaluation.
    ///
    /// # Errors
    ///
    /// Returns `MathError::EvaluationBudgetExceeded` once the count goes
    /// past the limit.
    pub fn tick(&mut self) -> MathResult<()> {
        self.count = self.count.saturating_add(1);
        if self.count > self.limit {
            return Err(MathError::EvaluationBudgetExceeded { limit: self.limit });
        }
        Ok(())
    }

    /// Number of evaluations recorded so far, including a rejected one.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Maximum number of evaluations allowed.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Evaluations still available.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.limit.saturating_sub(self.count)
    }

    /// Wraps `f` so that each call is charged to this counter.
    pub fn counted<'a, F>(&'a mut self, mut f: F) -> impl FnMut(f64) -> MathResult<f64> + 'a
    where
        F: FnMut(f64) -> f64 + 'a,
    {
        move |x| {
            self.tick()?;
            Ok(f(x))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_within_limit() {
        let mut counter = EvaluationCounter::new(3);
        for _ in 0..3 {
            counter.tick().unwrap();
        }
        assert_eq!(counter.count(), 3);
        assert_eq!(counter.remaining(), 0);
    }

    #[test]
    fn test_tick_past_limit() {
        let mut counter = EvaluationCounter::new(1);
        counter.tick().unwrap();

        assert_eq!(
            counter.tick(),
            Err(MathError::EvaluationBudgetExceeded { limit: 1 })
        );
        assert_eq!(counter.count(), 2);
    }

    #[test]
    fn test_zero_limit_rejects_first_call() {
        let mut counter = EvaluationCounter::new(0);
        assert!(counter.tick().is_err());
    }

    #[test]
    fn test_counted_closure_charges_counter() {
        let mut counter = EvaluationCounter::new(10);
        {
            let mut f = counter.counted(|x| x + 1.0);
            assert_eq!(f(1.0).unwrap(), 2.0);
            assert_eq!(f(2.0).unwrap(), 3.0);
        }
        assert_eq!(counter.count(), 2);
        assert_eq!(counter.limit(), 10);
    }
}
