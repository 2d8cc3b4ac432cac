//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Malformed dated cash flow.
    #[error("Invalid cash flow: {0}. Use DATE=AMOUNT, e.g. 2024-01-15=-1000.")]
    InvalidFlow(String),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] finrate_analytics::AnalyticsError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
