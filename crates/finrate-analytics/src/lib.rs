//! # Finrate Analytics
//!
//! Rate-of-return analytics built on the finrate solvers.
//!
//! This crate provides:
//! - **Rates**: periodic IRR (bracket expansion + bisection) and dated XIRR
//!   (Newton-Raphson), with the NPV objectives they solve
//! - **Formulas**: closed-form present/future value, NPV, amortization,
//!   payback, profitability and growth measures
//! - **Config**: serde-loadable solver settings with validation
//!
//! ## Usage
//!
//! ```rust
//! use finrate_analytics::prelude::*;
//! use finrate_core::types::CashFlowSeries;
//!
//! let flows = CashFlowSeries::new(vec![-1000.0, 1200.0]);
//!
//! let rate = irr(&flows, 1000)?;
//! assert!((rate - 20.0).abs() < 1e-5);
//!
//! let npv = net_present_value(10.0, &flows)?;
//! assert_eq!(npv, 90.91);
//! # Ok::<(), finrate_analytics::AnalyticsError>(())
//! ```
//!
//! ## Features
//!
//! - `parallel`: solve [`rates::irr_batch`] on the rayon thread pool.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::uninlined_format_args)]

pub mod config;
pub mod error;
pub mod formulas;
pub mod rates;

// Re-export the error type
pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use finrate_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::config::{IrrConfig, SolverSettings, Validate, ValidationError, XirrConfig};
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Rates
    pub use crate::rates::{
        irr, irr_batch, irr_with_config, npv_at, xirr, xirr_with_config, IrrSolution,
        XirrSolution,
    };

    // Formulas
    pub use crate::formulas::{
        amortization, capital_asset_pricing_model, compound_annual_growth_rate,
        compound_interest, discount_factors, future_value, inflation_adjusted_return,
        leverage_ratio, net_present_value, payback_period, payment, present_value,
        profitability_index, return_on_investment, rule_of_72, stock_present_value,
        weighted_average_cost_of_capital, AmortizationTerm, PaybackMode, PaymentTiming,
    };
}
