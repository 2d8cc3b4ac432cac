//! Periodic internal rate of return.

use log::debug;
use serde::{Deserialize, Serialize};

use finrate_core::types::CashFlowSeries;
use finrate_math::rounding::round_to;
use finrate_math::solvers::{bisection, expand_bracket, EvaluationCounter};

use super::objective::npv_at;
use crate::config::{IrrConfig, Validate};
use crate::error::AnalyticsResult;

/// Result of a converged IRR search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IrrSolution {
    /// Rate in percent, rounded to the configured decimals.
    pub rate: f64,
    /// NPV evaluations spent, including bracket expansion.
    pub evaluations: u32,
    /// Upper end of the bracket handed to bisection, in percent.
    pub upper_bound: f64,
    /// Bisection halvings performed.
    pub bisection_iterations: u32,
}

/// Internal rate of return of periodic cash flows, in percent.
///
/// Equivalent to [`irr_with_config`] with the default configuration and
/// the given evaluation budget.
///
/// # Errors
///
/// - `AnalyticsError::InvalidCashFlow` without both a positive and a
///   negative flow
/// - `AnalyticsError::NoBracketFound` if the NPV never changes sign on the
///   expansion ladder
/// - `AnalyticsError::EvaluationBudgetExceeded` after more than
///   `max_evaluations` NPV evaluations
///
/// # Example
///
/// ```rust
/// use finrate_analytics::rates::irr;
/// use finrate_core::types::CashFlowSeries;
///
/// let flows = CashFlowSeries::new(vec![-1000.0, 1200.0]);
/// let rate = irr(&flows, 1000).unwrap();
/// assert!((rate - 20.0).abs() < 1e-5);
/// ```
pub fn irr(cash_flows: &CashFlowSeries, max_evaluations: u32) -> AnalyticsResult<f64> {
    let config = IrrConfig::default().with_max_evaluations(max_evaluations);
    irr_with_config(cash_flows, &config).map(|solution| solution.rate)
}

/// Internal rate of return with explicit solver settings.
///
/// The NPV is viewed as a function of the percentage rate. Starting from
/// `[initial_low, initial_high]`, the upper bound is pushed out along the
/// configured ladder while the NPV there is positive, then the interval is
/// bisected down to `precision`. Every NPV evaluation of both stages is
/// charged to one budget.
pub fn irr_with_config(
    cash_flows: &CashFlowSeries,
    config: &IrrConfig,
) -> AnalyticsResult<IrrSolution> {
    config.validate_or_error()?;
    cash_flows.ensure_sign_change()?;

    let flows = cash_flows.as_slice();
    let npv = |rate: f64| npv_at(flows, rate);
    let mut counter = EvaluationCounter::new(config.max_evaluations);

    let bracket = expand_bracket(counter.counted(npv), config.bracket(), &config.ladder())?;
    let result = bisection(
        counter.counted(npv),
        bracket.low,
        bracket.high,
        &config.solver_config(),
    )?;

    debug!(
        "irr of {} flows: {}% after {} evaluations ({} left)",
        flows.len(),
        result.root,
        counter.count(),
        counter.remaining()
    );

    Ok(IrrSolution {
        rate: round_to(result.root, config.result_decimals),
        evaluations: counter.count(),
        upper_bound: bracket.high,
        bisection_iterations: result.iterations,
    })
}

/// Solves many series in parallel, each with its own evaluation budget.
#[cfg(feature = "parallel")]
pub fn irr_batch(
    series: &[CashFlowSeries],
    config: &IrrConfig,
) -> Vec<AnalyticsResult<IrrSolution>> {
    use rayon::prelude::*;

    series
        .par_iter()
        .map(|cash_flows| irr_with_config(cash_flows, config))
        .collect()
}

/// Solves many series sequentially, each with its own evaluation budget.
#[cfg(not(feature = "parallel"))]
pub fn irr_batch(
    series: &[CashFlowSeries],
    config: &IrrConfig,
) -> Vec<AnalyticsResult<IrrSolution>> {
    series
        .iter()
        .map(|cash_flows| irr_with_config(cash_flows, config))
        .collect()
}
