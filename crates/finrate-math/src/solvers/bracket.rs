//! Upward bracket expansion.

use log::{debug, trace};

use crate::error::{MathError, MathResult};

/// A candidate interval `[low, high]` for a bracketing solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    /// Lower end of the interval.
    pub low: f64,
    /// Upper end of the interval.
    pub high: f64,
}

impl Bracket {
    /// Creates a new interval.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }
}

/// Schedule for pushing the upper end of a bracket outwards.
///
/// The upper bound first grows by `step` until it reaches `step_ceiling`,
/// then doubles until it reaches `hard_ceiling`.
///
/// This is an empirical schedule tuned for percentage rates of return. It
/// does not guarantee to find a sign change for every objective shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BracketLadder {
    /// Linear increment used below `step_ceiling`.
    pub step: f64,
    /// Upper bound at which linear growth switches to doubling.
    pub step_ceiling: f64,
    /// Upper bound at which expansion stops.
    pub hard_ceiling: f64,
}

impl Default for BracketLadder {
    fn default() -> Self {
        Self {
            step: 100.0,
            step_ceiling: 10_000.0,
            hard_ceiling: 1_000_000.0,
        }
    }
}

impl BracketLadder {
    /// Creates a ladder from its three parameters.
    #[must_use]
    pub fn new(step: f64, step_ceiling: f64, hard_ceiling: f64) -> Self {
        Self {
            step,
            step_ceiling,
            hard_ceiling,
        }
    }

    fn check(&self) -> MathResult<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(MathError::invalid_input(format!(
                "ladder step must be positive and finite, got {}",
                self.step
            )));
        }
        if !(self.step_ceiling.is_finite() && self.hard_ceiling.is_finite()) {
            return Err(MathError::invalid_input("ladder ceilings must be finite"));
        }
        Ok(())
    }
}

/// Grows the upper end of `initial` while the objective there is positive.
///
/// Follows `ladder`: linear steps up to `step_ceiling`, then doubling up to
/// `hard_ceiling`. Expansion stops at the first upper bound where `f` is not
/// positive, or once the ceilings are exhausted. The returned interval is
/// not guaranteed to bracket a sign change; the bracketing solver it feeds
/// is responsible for rejecting it.
///
/// Objective errors (such as an exhausted evaluation budget) are propagated.
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::{expand_bracket, Bracket, BracketLadder};
///
/// // Sign change at x = 250
/// let bracket = expand_bracket(
///     |x: f64| Ok(250.0 - x),
///     Bracket::new(-100.0, 100.0),
///     &BracketLadder::default(),
/// )
/// .unwrap();
/// assert_eq!(bracket, Bracket::new(-100.0, 300.0));
/// ```
pub fn expand_bracket<F>(mut f: F, initial: Bracket, ladder: &BracketLadder) -> MathResult<Bracket>
where
    F: FnMut(f64) -> MathResult<f64>,
{
    ladder.check()?;

    let mut high = initial.high;
    let mut f_high = f(high)?;

    while f_high > 0.0 && high < ladder.step_ceiling {
        high += ladder.step;
        f_high = f(high)?;
        trace!("bracket step: f({high}) = {f_high:e}");
    }

    // Doubling only moves a positive bound upwards
    while f_high > 0.0 && high > 0.0 && high < ladder.hard_ceiling {
        high *= 2.0;
        f_high = f(high)?;
        trace!("bracket doubling: f({high}) = {f_high:e}");
    }

    debug!(
        "bracket expanded to [{}, {high}] (f(high) = {f_high:e})",
        initial.low
    );

    Ok(Bracket::new(initial.low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::EvaluationCounter;

    #[test]
    fn test_no_expansion_needed() {
        let bracket =
            expand_bracket(|x: f64| Ok(-x), Bracket::new(-100.0, 100.0), &BracketLadder::default())
                .unwrap();

        assert_eq!(bracket, Bracket::new(-100.0, 100.0));
    }

    #[test]
    fn test_linear_steps() {
        let bracket = expand_bracket(
            |x: f64| Ok(4_950.0 - x),
            Bracket::new(-100.0, 100.0),
            &BracketLadder::default(),
        )
        .unwrap();

        assert_eq!(bracket.high, 5_000.0);
    }

    #[test]
    fn test_doubling_phase() {
        let bracket = expand_bracket(
            |x: f64| Ok(30_000.0 - x),
            Bracket::new(-100.0, 100.0),
            &BracketLadder::default(),
        )
        .unwrap();

        // 10_000 -> 20_000 -> 40_000
        assert_eq!(bracket.high, 40_000.0);
    }

    #[test]
    fn test_stops_at_hard_ceiling() {
        let mut calls = 0;
        let bracket = expand_bracket(
            |_x: f64| {
                calls += 1;
                Ok(1.0)
            },
            Bracket::new(-100.0, 100.0),
            &BracketLadder::default(),
        )
        .unwrap();

        // 10_000 * 2^7 is the first doubling at or above 1_000_000
        assert_eq!(bracket.high, 1_280_000.0);
        // initial + 99 linear steps + 7 doublings
        assert_eq!(calls, 107);
    }

    #[test]
    fn test_zero_at_high_stops_expansion() {
        let bracket = expand_bracket(
            |x: f64| Ok(if x >= 300.0 { 0.0 } else { 1.0 }),
            Bracket::new(0.0, 100.0),
            &BracketLadder::default(),
        )
        .unwrap();

        assert_eq!(bracket.high, 300.0);
    }

    #[test]
    fn test_invalid_ladder() {
        let ladder = BracketLadder::new(0.0, 10_000.0, 1_000_000.0);
        let result = expand_bracket(|_x: f64| Ok(1.0), Bracket::new(0.0, 1.0), &ladder);

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }

    #[test]
    fn test_budget_exhausted_during_expansion() {
        let mut counter = EvaluationCounter::new(10);
        let f = counter.counted(|_x| 1.0);

        let result = expand_bracket(f, Bracket::new(-100.0, 100.0), &BracketLadder::default());

        assert_eq!(result, Err(MathError::EvaluationBudgetExceeded { limit: 10 }));
    }

    #[test]
    fn test_bracket_helpers() {
        let bracket = Bracket::new(-100.0, 300.0);
        assert_eq!(bracket.width(), 400.0);
        assert_eq!(bracket.midpoint(), 100.0);
    }
}
