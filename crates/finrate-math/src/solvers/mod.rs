//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding the root of a single
//! real-valued function:
//!
//! - [`bisection`]: reliable bracketing method, halves an interval known to
//!   contain a sign change
//! - [`expand_bracket`]: grows the upper end of an interval until the
//!   objective stops being positive there
//! - [`newton_raphson`] / [`newton_raphson_ratio`]: quadratic convergence from
//!   a starting guess, stopping once successive guesses agree to a fixed
//!   number of decimal places
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative or step ratio |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//!
//! Bracketing objectives return `MathResult<f64>` so that an
//! [`EvaluationCounter`] can abort a search that has run too long.
//!
//! # Example: Rate of Return
//!
//! ```rust
//! use finrate_math::solvers::{bisection, expand_bracket, Bracket, BracketLadder, SolverConfig};
//!
//! // -100 today, 60 in one period, 60 in two periods (rate in percent)
//! let npv = |r: f64| {
//!     let m = 1.0 + r / 100.0;
//!     Ok(-100.0 + 60.0 / m + 60.0 / (m * m))
//! };
//!
//! let bracket = expand_bracket(npv, Bracket::new(-100.0, 100.0), &BracketLadder::default()).unwrap();
//! let config = SolverConfig::new(1e-5, 200);
//! let result = bisection(npv, bracket.low, bracket.high, &config).unwrap();
//! assert!((result.root - 13.066).abs() < 1e-3);
//! ```

mod bisection;
mod bracket;
mod budget;
mod newton;

pub use bisection::bisection;
pub use bracket::{expand_bracket, Bracket, BracketLadder};
pub use budget::EvaluationCounter;
pub use newton::{newton_raphson, newton_raphson_ratio, NewtonConfig};

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for bracketing root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence. For bisection this is the bracket width.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual. Bisection reports the last objective value it
    /// evaluated; Newton-Raphson reports the last step taken.
    pub residual: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_solver_config() {
        let config = SolverConfig::default()
            .with_tolerance(1e-8)
            .with_max_iterations(50);

        assert!((config.tolerance - 1e-8).abs() < f64::EPSILON);
        assert_eq!(config.max_iterations, 50);
    }

    /// Price of an annual-pay bond as a function of yield in percent.
    fn bond_price(yield_pct: f64, coupon: f64, face: f64, years: i32) -> f64 {
        let m = 1.0 + yield_pct / 100.0;
        let mut pv = 0.0;
        for t in 1..=years {
            pv += coupon / m.powi(t);
        }
        pv + face / m.powi(years)
    }

    #[test]
    fn test_bisection_and_newton_agree() {
        let target = 95.0;
        let f = |y: f64| bond_price(y, 5.0, 100.0, 5) - target;

        let config = SolverConfig::new(1e-9, 200);
        let bisected = bisection(|y| Ok(f(y)), 0.0, 20.0, &config).unwrap();

        let newton = newton_raphson(
            f,
            |y: f64| (f(y + 1e-6) - f(y - 1e-6)) / 2e-6,
            5.0,
            &NewtonConfig::default().with_decimals(8),
        )
        .unwrap();

        assert!(bisected.root > 5.0);
        assert_relative_eq!(bisected.root, newton.root, epsilon = 1e-6);
    }

    #[test]
    fn test_par_bond_yield() {
        // A bond priced at par yields its coupon rate
        let f = |y: f64| Ok(bond_price(y, 6.0, 100.0, 10) - 100.0);
        let result = bisection(f, 0.0, 50.0, &SolverConfig::new(1e-8, 200)).unwrap();

        assert_relative_eq!(result.root, 6.0, epsilon = 1e-6);
    }

    #[test]
    fn test_expanded_bracket_feeds_bisection() {
        // Root far above the initial interval: 1 -> 101 in one period (10_000%)
        let f = |r: f64| Ok(-1.0 + 101.0 / (1.0 + r / 100.0));
        let bracket =
            expand_bracket(f, Bracket::new(-99.0, 100.0), &BracketLadder::default()).unwrap();
        assert!(bracket.high >= 10_000.0);

        let result = bisection(f, bracket.low, bracket.high, &SolverConfig::new(1e-6, 200)).unwrap();
        assert_relative_eq!(result.root, 10_000.0, epsilon = 1e-4);
    }
}
