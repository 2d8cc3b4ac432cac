//! Bisection root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::solvers::{Bracket, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// A simple and reliable bracketing method that works by repeatedly
/// halving the interval and keeping the half whose endpoints still have
/// opposite signs.
///
/// Requires: `f(a) * f(b) < 0` (opposite signs at endpoints). An endpoint
/// where `f` is exactly zero is returned as the root.
///
/// The loop stops once the bracket is no wider than `config.tolerance` and
/// returns its midpoint. A midpoint where `f` is exactly zero is returned
/// immediately.
///
/// The objective returns a `MathResult` so that an evaluation budget can
/// abort the search; such errors are propagated unchanged.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is invalid
/// or the width tolerance is not reached within `config.max_iterations`.
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| Ok(x * x - 2.0);
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(mut f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> MathResult<f64>,
{
    let mut bracket = Bracket::new(a.min(b), a.max(b));

    let mut f_lo = f(bracket.low)?;
    let f_hi = f(bracket.high)?;

    // Handle case where endpoint is the root
    if f_lo == 0.0 {
        return Ok(SolverResult {
            root: bracket.low,
            iterations: 0,
            residual: f_lo,
        });
    }
    if f_hi == 0.0 {
        return Ok(SolverResult {
            root: bracket.high,
            iterations: 0,
            residual: f_hi,
        });
    }

    // Check that root is bracketed. NaN at either end fails here too.
    let bracketed = f_lo * f_hi < 0.0;
    if !bracketed {
        return Err(MathError::InvalidBracket {
            a: bracket.low,
            b: bracket.high,
            fa: f_lo,
            fb: f_hi,
        });
    }

    debug!(
        "bisection on [{}, {}] with width tolerance {}",
        bracket.low, bracket.high, config.tolerance
    );

    let mut iterations = 0;
    let mut residual = f_hi;

    while bracket.width() > config.tolerance {
        if iterations >= config.max_iterations {
            return Err(MathError::convergence_failed(iterations, bracket.width()));
        }

        let mid = bracket.midpoint();
        let f_mid = f(mid)?;
        iterations += 1;
        residual = f_mid;

        trace!("bisection iteration {iterations}: f({mid}) = {f_mid:e}");

        if f_mid == 0.0 {
            return Ok(SolverResult {
                root: mid,
                iterations,
                residual: f_mid,
            });
        }

        // Update bracket
        if f_lo * f_mid < 0.0 {
            bracket.high = mid;
        } else {
            bracket.low = mid;
            f_lo = f_mid;
        }
    }

    let root = bracket.midpoint();
    debug!("bisection converged to {root} after {iterations} iterations");

    Ok(SolverResult {
        root,
        iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::EvaluationCounter;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| Ok(x * x - 2.0);

        let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_reversed_bracket() {
        let f = |x: f64| Ok(x * x - 2.0);

        // Reversed bracket should still work
        let result = bisection(f, 2.0, 1.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_invalid_bracket() {
        let f = |x: f64| Ok(x * x - 2.0);

        // Both endpoints have same sign
        let result = bisection(f, 2.0, 3.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_nan_endpoint_is_not_a_bracket() {
        let f = |x: f64| Ok(if x < 0.0 { f64::NAN } else { x - 1.0 });

        let result = bisection(f, -1.0, 2.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_root_at_endpoint() {
        let f = |x: f64| Ok(x - 1.0);

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 1.0);
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_exact_midpoint_root() {
        let f = |x: f64| Ok(x);

        let result = bisection(f, -4.0, 4.0, &SolverConfig::default()).unwrap();

        assert_eq!(result.root, 0.0);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_negative_root() {
        let f = |x: f64| Ok(x + 1.0);

        let result = bisection(f, -2.0, 0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, -1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_width_tolerance() {
        let f = |x: f64| Ok(x - 0.3);
        let config = SolverConfig::new(1e-3, 100);

        let result = bisection(f, 0.0, 1.0, &config).unwrap();

        // 1 / 2^10 < 1e-3 <= 1 / 2^9
        assert_eq!(result.iterations, 10);
        assert!((result.root - 0.3).abs() <= 1e-3);
    }

    #[test]
    fn test_iteration_cap() {
        let f = |x: f64| Ok(x - 0.3);
        let config = SolverConfig::new(1e-12, 5);

        let result = bisection(f, 0.0, 1.0, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 5, .. })
        ));
    }

    #[test]
    fn test_budget_error_propagates() {
        let mut counter = EvaluationCounter::new(4);
        let f = counter.counted(|x| x - 0.3);

        let result = bisection(f, 0.0, 1.0, &SolverConfig::default());

        assert_eq!(result, Err(MathError::EvaluationBudgetExceeded { limit: 4 }));
        assert_eq!(counter.count(), 5);
    }
}
