//! Internal rate of return for irregularly dated cash flows.

use log::debug;
use serde::{Deserialize, Serialize};

use finrate_core::daycounts::Act365Fixed;
use finrate_core::types::{CashFlowSeries, DateSeries};
use finrate_math::rounding::round_to;
use finrate_math::solvers::newton_raphson_ratio;

use super::objective::xnpv_ratio;
use crate::config::{Validate, XirrConfig};
use crate::error::{AnalyticsError, AnalyticsResult};

/// Result of a converged XIRR search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct XirrSolution {
    /// Annual rate in percent, rounded to the configured decimals.
    pub rate: f64,
    /// Unrounded annual rate as a decimal fraction.
    pub unscaled_rate: f64,
    /// Newton updates performed.
    pub iterations: u32,
}

/// Annualized internal rate of return of dated cash flows, in percent.
///
/// `guess` is a decimal fraction (`0.1` for 10%); NaN starts from 0.
/// Returns `Ok(None)` when the iteration does not settle within 100
/// updates, or when `guess` is at or below -1.
///
/// # Errors
///
/// - `AnalyticsError::MismatchedLength` if the series lengths differ
/// - `AnalyticsError::InvalidCashFlow` without both a positive and a
///   negative flow
///
/// # Example
///
/// ```rust
/// use finrate_analytics::rates::xirr;
/// use finrate_core::types::{CashFlowSeries, Date, DateSeries};
///
/// let flows = CashFlowSeries::new(vec![-1000.0, -100.0, 1200.0]);
/// let dates = DateSeries::new(vec![
///     Date::from_ymd(2015, 12, 1).unwrap(),
///     Date::from_ymd(2016, 8, 1).unwrap(),
///     Date::from_ymd(2016, 8, 19).unwrap(),
/// ]);
///
/// assert_eq!(xirr(&flows, &dates, 0.0).unwrap(), Some(14.11));
/// ```
pub fn xirr(
    cash_flows: &CashFlowSeries,
    dates: &DateSeries,
    guess: f64,
) -> AnalyticsResult<Option<f64>> {
    let config = XirrConfig::default().with_guess(guess);
    Ok(xirr_with_config(cash_flows, dates, &config)?.map(|solution| solution.rate))
}

/// XIRR with explicit solver settings.
///
/// Offsets are measured in ACT/365F years from the first date. Newton
/// steps that would take the rate to -100% or below are shortened.
///
/// Input series are checked before the configuration, so a bad series is
/// reported as such whatever the settings.
pub fn xirr_with_config(
    cash_flows: &CashFlowSeries,
    dates: &DateSeries,
    config: &XirrConfig,
) -> AnalyticsResult<Option<XirrSolution>> {
    if cash_flows.len() != dates.len() {
        return Err(AnalyticsError::MismatchedLength {
            cash_flows: cash_flows.len(),
            dates: dates.len(),
        });
    }
    cash_flows.ensure_sign_change()?;
    config.validate_or_error()?;

    let guess = config.starting_guess();
    if guess <= -1.0 {
        debug!("xirr guess {guess} is outside the domain");
        return Ok(None);
    }

    let flows = cash_flows.as_slice();
    let years = dates.elapsed_years(&Act365Fixed);
    let years = years.as_slice();

    let result = match newton_raphson_ratio(
        |rate| xnpv_ratio(flows, years, rate),
        guess,
        &config.newton_config(),
    ) {
        Ok(result) => result,
        Err(err) if err.is_non_convergence() => {
            debug!("xirr found no solution: {err}");
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let rate = round_to(result.root * 100.0, config.result_decimals);
    if !rate.is_finite() {
        return Ok(None);
    }

    Ok(Some(XirrSolution {
        rate,
        unscaled_rate: result.root,
        iterations: result.iterations,
    }))
}
