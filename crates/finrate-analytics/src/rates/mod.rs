//! Rate-of-return calculations.
//!
//! - **IRR**: the percentage rate at which the NPV of periodic cash flows is
//!   zero. Solved by expanding a bracket upwards from `[-100%, 100%]` and
//!   bisecting it, under a fixed budget of NPV evaluations.
//!
//! - **XIRR**: the annualized rate for cash flows on arbitrary dates. Solved
//!   by Newton-Raphson on the date-weighted NPV; a search that does not
//!   settle yields `None` rather than an error.
//!
//! Both validate their inputs before any iteration: a series needs at least
//! one strictly positive and one strictly negative flow.
//!
//! # Usage
//!
//! ```rust
//! use finrate_analytics::rates::{irr, xirr};
//! use finrate_core::types::{CashFlowSeries, Date, DateSeries};
//!
//! let flows = CashFlowSeries::new(vec![-37_987_348.0, 21_191_041.0]);
//! let dates = DateSeries::new(vec![
//!     Date::from_ymd(2013, 12, 31).unwrap(),
//!     Date::from_ymd(2014, 5, 15).unwrap(),
//! ]);
//!
//! assert_eq!(xirr(&flows, &dates, 0.0).unwrap(), Some(-79.36));
//! assert!(irr(&flows, 1000).unwrap() < 0.0);
//! ```
//!
//! # Known limitation
//!
//! The IRR bracket ladder (steps of 100 up to 10 000%, then doubling up to
//! 1 000 000%) is empirical. A series whose NPV has the same sign at -100%
//! and at the top of the ladder fails with `NoBracketFound`, even when it
//! has two rates in between.

mod irr;
mod objective;
mod xirr;

pub use irr::{irr, irr_batch, irr_with_config, IrrSolution};
pub use objective::{npv_at, xnpv, xnpv_derivative, xnpv_ratio};
pub use xirr::{xirr, xirr_with_config, XirrSolution};
