//! Error types for numerical solvers.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur while solving for a root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },

    /// The objective was evaluated more often than allowed.
    #[error("Evaluation budget of {limit} objective evaluations exceeded")]
    EvaluationBudgetExceeded {
        /// Maximum number of evaluations allowed.
        limit: u32,
    },

    /// An iterate became NaN or infinite.
    #[error("Non-finite iterate at iteration {iteration}")]
    NonFiniteValue {
        /// Iteration that produced the value.
        iteration: u32,
    },

    /// An iterate could not be kept above the solver's lower bound.
    #[error("Iterate {value} is not above the lower bound {bound}")]
    DomainViolation {
        /// The offending iterate.
        value: f64,
        /// Exclusive lower bound of the domain.
        bound: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns true if the error means the solver gave up without an answer,
    /// as opposed to being handed unusable input.
    #[must_use]
    pub fn is_non_convergence(&self) -> bool {
        matches!(
            self,
            Self::ConvergenceFailed { .. }
                | Self::NonFiniteValue { .. }
                | Self::DomainViolation { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::convergence_failed(100, 1e-6);
        assert!(err.to_string().contains("100 iterations"));
    }

    #[test]
    fn test_budget_display() {
        let err = MathError::EvaluationBudgetExceeded { limit: 1000 };
        assert!(err.to_string().contains("1000"));
    }

    #[test]
    fn test_non_convergence_classification() {
        assert!(MathError::convergence_failed(1, 0.0).is_non_convergence());
        assert!(MathError::NonFiniteValue { iteration: 3 }.is_non_convergence());
        assert!(!MathError::invalid_input("bad").is_non_convergence());
        assert!(!MathError::EvaluationBudgetExceeded { limit: 1 }.is_non_convergence());
    }
}
