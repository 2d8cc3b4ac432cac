//! Domain types for rate-of-return calculations.

mod cashflow;
mod date;
mod series;

pub use cashflow::CashFlowSeries;
pub use date::Date;
pub use series::{DateSeries, ElapsedYears};
