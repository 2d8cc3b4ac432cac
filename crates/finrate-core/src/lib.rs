//! # Finrate Core
//!
//! Core types for the finrate financial calculations library.
//!
//! This crate provides the building blocks shared by the solver and
//! analytics crates:
//!
//! - **Types**: `Date`, `CashFlowSeries`, `DateSeries`, `ElapsedYears`
//! - **Day Count Conventions**: elapsed-time-in-years between dates
//!
//! ## Example
//!
//! ```rust
//! use finrate_core::prelude::*;
//!
//! let flows = CashFlowSeries::new(vec![-1000.0, 300.0, 800.0]);
//! assert!(flows.has_sign_change());
//!
//! let dates = DateSeries::new(vec![
//!     Date::from_ymd(2024, 1, 1).unwrap(),
//!     Date::from_ymd(2024, 7, 1).unwrap(),
//!     Date::from_ymd(2025, 1, 1).unwrap(),
//! ]);
//! let years = dates.elapsed_years(&Act365Fixed);
//! assert_eq!(years.as_slice()[0], 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{FinrateError, FinrateResult};
    pub use crate::types::{CashFlowSeries, Date, DateSeries, ElapsedYears};
}

// Re-export commonly used types at crate root
pub use error::{FinrateError, FinrateResult};
pub use types::{CashFlowSeries, Date, DateSeries, ElapsedYears};
