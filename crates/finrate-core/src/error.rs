//! Error types for the finrate core types.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type FinrateResult<T> = Result<T, FinrateError>;

/// Errors raised while constructing or validating core domain types.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinrateError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Invalid cash flow series.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },
}

impl FinrateError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FinrateError::invalid_date("2024-02-30 is not a valid date");
        assert!(err.to_string().contains("Invalid date"));
    }

    #[test]
    fn test_cash_flow_error() {
        let err = FinrateError::invalid_cash_flow("no negative value");
        assert_eq!(err.to_string(), "Invalid cash flow: no negative value");
    }
}
