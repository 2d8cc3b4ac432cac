//! CLI command implementations.

pub mod config;
pub mod irr;
pub mod npv;
pub mod tvm;
pub mod xirr;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use irr::IrrArgs;
pub use npv::NpvArgs;
pub use tvm::TvmArgs;
pub use xirr::XirrArgs;

use finrate_core::types::Date;

use crate::error::{CliError, CliResult};

/// A cash flow on a specific date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatedFlow {
    pub date: Date,
    pub amount: f64,
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a `DATE=AMOUNT` pair.
pub fn parse_flow(s: &str) -> CliResult<DatedFlow> {
    let (date, amount) = s
        .split_once('=')
        .ok_or_else(|| CliError::InvalidFlow(s.to_string()))?;

    let date = parse_date(date.trim())?;
    let amount = amount
        .trim()
        .parse::<f64>()
        .map_err(|_| CliError::InvalidFlow(s.to_string()))?;

    Ok(DatedFlow { date, amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flow() {
        let flow = parse_flow("2016-08-19=1200").unwrap();
        assert_eq!(flow.date, Date::from_ymd(2016, 8, 19).unwrap());
        assert_eq!(flow.amount, 1200.0);

        let flow = parse_flow("2015-12-01 = -1000.5").unwrap();
        assert_eq!(flow.amount, -1000.5);
    }

    #[test]
    fn test_parse_flow_errors() {
        assert!(matches!(parse_flow("2016-08-19"), Err(CliError::InvalidFlow(_))));
        assert!(matches!(parse_flow("2016-13-01=5"), Err(CliError::InvalidDate(_))));
        assert!(matches!(parse_flow("2016-08-19=abc"), Err(CliError::InvalidFlow(_))));
    }
}
