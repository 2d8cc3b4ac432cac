//! Newton-Raphson root-finding algorithm.

use log::{debug, trace};

use crate::error::{MathError, MathResult};
use crate::rounding::agree_to;
use crate::solvers::{SolverResult, DEFAULT_MAX_ITERATIONS};

/// Maximum number of times a step is halved to stay above the lower bound.
const MAX_STEP_HALVINGS: u32 = 64;

/// Configuration for Newton-Raphson iteration.
///
/// Convergence is declared when two successive guesses are equal after
/// rounding to `decimals` decimal places.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Maximum number of updates.
    pub max_iterations: u32,
    /// Decimal places two successive guesses must agree to.
    pub decimals: u32,
    /// Exclusive lower bound of the objective's domain. Steps that would
    /// land at or below it are halved until they do not.
    pub lower_bound: Option<f64>,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            decimals: 5,
            lower_bound: None,
        }
    }
}

impl NewtonConfig {
    /// Sets the maximum number of updates.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the decimal places used for the convergence test.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the exclusive lower bound of the domain.
    #[must_use]
    pub fn with_lower_bound(mut self, lower_bound: f64) -> Self {
        self.lower_bound = Some(lower_bound);
        self
    }

    /// Applies `step` to `x`, halving it while the result would fall at or
    /// below the lower bound.
    fn advance(&self, x: f64, step: f64) -> MathResult<f64> {
        let mut next = x - step;
        let Some(bound) = self.lower_bound else {
            return Ok(next);
        };

        let mut step = step;
        let mut halvings = 0;
        while next <= bound && halvings < MAX_STEP_HALVINGS {
            step /= 2.0;
            next = x - step;
            halvings += 1;
        }

        if next <= bound {
            return Err(MathError::DomainViolation { value: next, bound });
        }
        if halvings > 0 {
            trace!("newton step halved {halvings} times to stay above {bound}");
        }
        Ok(next)
    }
}

/// Newton-Raphson root-finding algorithm.
///
/// Uses the iteration:
/// `x_{n+1} = x_n - f(x_n) / f'(x_n)`
///
/// This method has quadratic convergence near the root but requires
/// the derivative of the function.
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `df` - The derivative of the function
/// * `initial_guess` - Starting point for the iteration
/// * `config` - Solver configuration
///
/// # Example
///
/// ```rust
/// use finrate_math::solvers::{newton_raphson, NewtonConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let config = NewtonConfig::default().with_decimals(10);
/// let result = newton_raphson(f, df, 1.5, &config).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    mut f: F,
    mut df: DF,
    initial_guess: f64,
    config: &NewtonConfig,
) -> MathResult<SolverResult>
where
    F: FnMut(f64) -> f64,
    DF: FnMut(f64) -> f64,
{
    newton_raphson_ratio(|x| f(x) / df(x), initial_guess, config)
}

/// Newton-Raphson driven by a combined step ratio.
///
/// `ratio(x)` must return `f(x) / f'(x)`. Computing the ratio in one pass
/// lets callers share intermediate terms between the function and its
/// derivative.
///
/// The iteration stops when the previous and the new guess agree to
/// `config.decimals` decimal places, and fails after
/// `config.max_iterations` updates without agreement.
///
/// # Errors
///
/// - `MathError::ConvergenceFailed` if the iteration cap is reached
/// - `MathError::NonFiniteValue` if a guess becomes NaN or infinite
///   (for example when the derivative vanishes)
/// - `MathError::DomainViolation` if a step cannot be kept above
///   `config.lower_bound`
pub fn newton_raphson_ratio<R>(
    mut ratio: R,
    initial_guess: f64,
    config: &NewtonConfig,
) -> MathResult<SolverResult>
where
    R: FnMut(f64) -> f64,
{
    debug!(
        "newton iteration from {initial_guess} ({} decimals, max {} iterations)",
        config.decimals, config.max_iterations
    );

    let mut guess = initial_guess;
    let mut step = f64::NAN;

    for iteration in 1..=config.max_iterations {
        let last = guess;
        step = ratio(last);

        guess = config.advance(last, step)?;
        if !guess.is_finite() {
            return Err(MathError::NonFiniteValue { iteration });
        }

        trace!("newton iteration {iteration}: {last} -> {guess}");

        if agree_to(last, guess, config.decimals) {
            debug!("newton converged to {guess} after {iteration} iterations");
            return Ok(SolverResult {
                root: guess,
                iterations: iteration,
                residual: step,
            });
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, step.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sqrt_2() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let config = NewtonConfig::default().with_decimals(10);
        let result = newton_raphson(f, df, 1.5, &config).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
        assert!(result.iterations < 10); // Should converge quickly
    }

    #[test]
    fn test_cube_root() {
        // Find cube root of 27 (should be 3)
        let f = |x: f64| x * x * x - 27.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 2.0, &NewtonConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_ratio_form() {
        // f(x) = x^2 - 9, f'(x) = 2x
        let ratio = |x: f64| (x * x - 9.0) / (2.0 * x);

        let result = newton_raphson_ratio(ratio, 1.0, &NewtonConfig::default()).unwrap();

        assert_relative_eq!(result.root, 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_zero_derivative_error() {
        // f(x) = x^3 - 1 with initial guess at 0 has zero derivative
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = newton_raphson(f, df, 0.0, &NewtonConfig::default());

        assert!(matches!(
            result,
            Err(MathError::NonFiniteValue { iteration: 1 })
        ));
    }

    #[test]
    fn test_convergence_fail() {
        // x^2 + 1 has no real root; Newton wanders forever
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let config = NewtonConfig::default().with_max_iterations(50);
        let result = newton_raphson(f, df, 0.5, &config);

        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 50, .. })
        ));
    }

    #[test]
    fn test_lower_bound_halves_step() {
        // ln(x) has its root at 1 and is undefined for x <= 0.
        // From x = 3 the raw step lands at 3 - 3 ln 3 < 0.
        let ratio = |x: f64| x.ln() * x;

        let config = NewtonConfig::default().with_lower_bound(0.0);
        let result = newton_raphson_ratio(ratio, 3.0, &config).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_domain_violation() {
        // Starting below the bound cannot be repaired by halving
        let config = NewtonConfig::default().with_lower_bound(0.0);
        let result = newton_raphson_ratio(|_x: f64| 1.0, -1.0, &config);

        assert!(matches!(result, Err(MathError::DomainViolation { .. })));
    }
}
