//! Error types for the rate-of-return analytics.

use finrate_core::FinrateError;
use finrate_math::MathError;
use thiserror::Error;

/// Unified error type for all analytics operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    // ========== Input Errors ==========
    /// Cash flows lack a positive or a negative value
    #[error("invalid cash flows: {0}")]
    InvalidCashFlow(String),

    /// Cash flow and date series have different lengths
    #[error("mismatched lengths: {cash_flows} cash flows but {dates} dates")]
    MismatchedLength {
        /// Number of cash flows supplied.
        cash_flows: usize,
        /// Number of dates supplied.
        dates: usize,
    },

    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid solver configuration
    #[error("invalid configuration: {field}: {message}")]
    InvalidConfig {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    // ========== Solver Errors ==========
    /// No sign change found after expanding the bracket
    #[error("no bracket found: NPV has the same sign at {low}% and {high}%")]
    NoBracketFound {
        /// Lower end of the final interval, in percent.
        low: f64,
        /// Upper end of the final interval, in percent.
        high: f64,
    },

    /// The objective was evaluated more often than allowed
    #[error("evaluation budget exceeded: more than {limit} NPV evaluations")]
    EvaluationBudgetExceeded {
        /// Maximum number of evaluations allowed.
        limit: u32,
    },

    /// The solver ran out of iterations before reaching its tolerance
    #[error("solver did not converge after {iterations} iterations")]
    ConvergenceFailed {
        /// Iterations performed.
        iterations: u32,
    },

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

impl From<FinrateError> for AnalyticsError {
    fn from(err: FinrateError) -> Self {
        match err {
            FinrateError::InvalidCashFlow { reason } => AnalyticsError::InvalidCashFlow(reason),
            FinrateError::InvalidDate { message } => AnalyticsError::InvalidInput(message),
        }
    }
}

impl From<MathError> for AnalyticsError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::InvalidBracket { a, b, .. } => AnalyticsError::NoBracketFound { low: a, high: b },
            MathError::EvaluationBudgetExceeded { limit } => {
                AnalyticsError::EvaluationBudgetExceeded { limit }
            }
            MathError::InvalidInput { reason } => AnalyticsError::InvalidInput(reason),
            MathError::ConvergenceFailed { iterations, .. } => {
                AnalyticsError::ConvergenceFailed { iterations }
            }
            other => AnalyticsError::MathError(other.to_string()),
        }
    }
}
