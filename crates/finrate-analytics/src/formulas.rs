//! Closed-form time-value-of-money formulas.
//!
//! Rates are in percent (`5.0` for 5%) unless a function says otherwise.
//! Monetary results are rounded to cents, matching how they are usually
//! quoted.

use serde::{Deserialize, Serialize};

use finrate_core::types::CashFlowSeries;
use finrate_math::rounding::{ceil_to, round_to};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::rates::npv_at;

/// Discount multiplier `1 / (1 + rate%)^periods`.
fn discount(rate: f64, periods: f64) -> f64 {
    1.0 / (1.0 + rate / 100.0).powf(periods)
}

fn non_empty(cash_flows: &CashFlowSeries) -> AnalyticsResult<()> {
    if cash_flows.is_empty() {
        return Err(AnalyticsError::invalid_input("cash flow series is empty"));
    }
    Ok(())
}

fn non_zero(value: f64, name: &str) -> AnalyticsResult<f64> {
    if value == 0.0 {
        return Err(AnalyticsError::invalid_input(format!("{name} must be non-zero")));
    }
    Ok(value)
}

// =============================================================================
// DISCOUNTING
// =============================================================================

/// Present value of a single cash flow received after `periods` periods.
///
/// ```rust
/// use finrate_analytics::formulas::present_value;
///
/// assert_eq!(present_value(5.0, 100.0, 1.0), 95.24);
/// ```
#[must_use]
pub fn present_value(rate: f64, cash_flow: f64, periods: f64) -> f64 {
    round_to(cash_flow * discount(rate, periods), 2)
}

/// Future value of a single cash flow after `periods` periods.
#[must_use]
pub fn future_value(rate: f64, cash_flow: f64, periods: f64) -> f64 {
    round_to(cash_flow * (1.0 + rate / 100.0).powf(periods), 2)
}

/// Net present value of periodic cash flows, the first undiscounted.
pub fn net_present_value(rate: f64, cash_flows: &CashFlowSeries) -> AnalyticsResult<f64> {
    non_empty(cash_flows)?;
    Ok(round_to(npv_at(cash_flows.as_slice(), rate), 2))
}

/// Discount factors for periods `0..periods - 1`, rounded up to three
/// decimals.
///
/// ```rust
/// use finrate_analytics::formulas::discount_factors;
///
/// assert_eq!(discount_factors(10.0, 6), vec![1.0, 0.91, 0.827, 0.752, 0.684]);
/// ```
#[must_use]
pub fn discount_factors(rate: f64, periods: u32) -> Vec<f64> {
    (0..periods.saturating_sub(1))
        .map(|i| ceil_to(discount(rate, f64::from(i)), 3))
        .collect()
}

/// Profitability index: present value of future flows per unit invested.
///
/// The first flow is the investment; its sign is ignored.
pub fn profitability_index(rate: f64, cash_flows: &CashFlowSeries) -> AnalyticsResult<f64> {
    let investment = cash_flows
        .initial()
        .ok_or_else(|| AnalyticsError::invalid_input("cash flow series is empty"))?;
    non_zero(investment, "initial investment")?;

    let future: f64 = cash_flows
        .subsequent()
        .iter()
        .enumerate()
        .map(|(i, &cf)| cf * discount(rate, (i + 1) as f64))
        .sum();

    Ok(round_to(future / investment.abs(), 2))
}

// =============================================================================
// PAYBACK AND RETURNS
// =============================================================================

/// How the flows after the investment are interpreted for payback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaybackMode {
    /// Every period returns the same amount, given by the second flow.
    Even,
    /// Flows differ per period and are accumulated in order.
    Uneven,
}

/// Number of periods until the investment in the first flow is recovered.
///
/// Returns `None` for uneven flows that never recover the investment.
pub fn payback_period(cash_flows: &CashFlowSeries, mode: PaybackMode) -> AnalyticsResult<Option<f64>> {
    let investment = cash_flows
        .initial()
        .ok_or_else(|| AnalyticsError::invalid_input("cash flow series is empty"))?;

    match mode {
        PaybackMode::Even => {
            let per_period = cash_flows
                .subsequent()
                .first()
                .copied()
                .ok_or_else(|| AnalyticsError::invalid_input("even payback needs a periodic flow"))?;
            non_zero(per_period, "periodic flow")?;
            Ok(Some(investment.abs() / per_period))
        }
        PaybackMode::Uneven => {
            let mut cumulative = investment;
            let mut periods = 1.0;
            for &cf in cash_flows.subsequent() {
                cumulative += cf;
                if cumulative > 0.0 {
                    // Fraction of this period still spent recovering
                    periods += (cumulative - cf) / cf;
                    return Ok(Some(periods));
                }
                periods += 1.0;
            }
            Ok(None)
        }
    }
}

/// Return on investment in percent.
pub fn return_on_investment(initial: f64, earnings: f64) -> AnalyticsResult<f64> {
    let cost = non_zero(initial, "initial investment")?.abs();
    Ok(round_to((earnings - cost) / cost * 100.0, 2))
}

/// Compound annual growth rate in percent.
pub fn compound_annual_growth_rate(
    beginning_value: f64,
    ending_value: f64,
    periods: f64,
) -> AnalyticsResult<f64> {
    non_zero(beginning_value, "beginning value")?;
    non_zero(periods, "number of periods")?;

    let growth = (ending_value / beginning_value).powf(1.0 / periods) - 1.0;
    Ok(round_to(growth * 100.0, 2))
}

/// Real return in percent, from nominal return and inflation given as
/// decimal fractions.
///
/// ```rust
/// use finrate_analytics::formulas::inflation_adjusted_return;
///
/// let real = inflation_adjusted_return(0.08, 0.03).unwrap();
/// assert!((real - 4.854_368_932).abs() < 1e-9);
/// ```
pub fn inflation_adjusted_return(investment_return: f64, inflation_rate: f64) -> AnalyticsResult<f64> {
    let deflator = non_zero(1.0 + inflation_rate, "1 + inflation rate")?;
    Ok(100.0 * ((1.0 + investment_return) / deflator - 1.0))
}

/// Expected return from the capital asset pricing model, as a decimal
/// fraction. Inputs are in percent.
#[must_use]
pub fn capital_asset_pricing_model(risk_free_rate: f64, beta: f64, market_return: f64) -> f64 {
    let rf = risk_free_rate / 100.0;
    rf + beta * (market_return / 100.0 - rf)
}

// =============================================================================
// LOANS AND GROWTH
// =============================================================================

/// Length of an amortizing loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AmortizationTerm {
    /// Term in years of twelve monthly payments.
    Years(u32),
    /// Term in monthly payments.
    Months(u32),
}

impl AmortizationTerm {
    /// Number of monthly payments.
    #[must_use]
    pub fn months(self) -> u32 {
        match self {
            Self::Years(years) => years.saturating_mul(12),
            Self::Months(months) => months,
        }
    }
}

/// When each payment is made within its period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentTiming {
    /// Payment at period end (ordinary annuity).
    #[default]
    End,
    /// Payment at period start (annuity due); the first period accrues no
    /// interest.
    Beginning,
}

/// Monthly payment on a loan at an annual `rate`.
///
/// ```rust
/// use finrate_analytics::formulas::{amortization, AmortizationTerm, PaymentTiming};
///
/// let monthly = amortization(20_000.0, 7.5, AmortizationTerm::Years(5), PaymentTiming::End).unwrap();
/// assert_eq!(monthly, 400.76);
/// ```
pub fn amortization(
    principal: f64,
    rate: f64,
    term: AmortizationTerm,
    timing: PaymentTiming,
) -> AnalyticsResult<f64> {
    let payments = term.months();
    if payments == 0 {
        return Err(AnalyticsError::invalid_input("amortization term must be positive"));
    }
    let n = f64::from(payments);

    if rate == 0.0 {
        return Ok(round_to(principal / n, 2));
    }

    let monthly = rate / 12.0 / 100.0;
    let accruals = match timing {
        PaymentTiming::End => n,
        PaymentTiming::Beginning => n - 1.0,
    };

    let numerator = monthly * (1.0 + monthly).powf(accruals);
    let denominator = (1.0 + monthly).powf(n) - 1.0;
    Ok(round_to(principal * numerator / denominator, 2))
}

/// Per-period loan payment. The sign is opposite to `principal`.
///
/// ```rust
/// use finrate_analytics::formulas::payment;
///
/// assert_eq!(payment(2.0, 36, -1_000_000.0).unwrap(), 39_232.85);
/// ```
pub fn payment(rate: f64, payments: u32, principal: f64) -> AnalyticsResult<f64> {
    if payments == 0 {
        return Err(AnalyticsError::invalid_input("number of payments must be positive"));
    }
    let n = f64::from(payments);

    if rate == 0.0 {
        return Ok(round_to(-principal / n, 2));
    }

    let r = rate / 100.0;
    Ok(round_to(-(principal * r) / (1.0 - (1.0 + r).powf(-n)), 2))
}

/// Balance after compounding `compoundings` times per period.
pub fn compound_interest(
    rate: f64,
    compoundings: f64,
    principal: f64,
    periods: f64,
) -> AnalyticsResult<f64> {
    non_zero(compoundings, "compoundings per period")?;
    let per_compounding = rate / 100.0 / compoundings;
    Ok(round_to(
        principal * (1.0 + per_compounding).powf(compoundings * periods),
        2,
    ))
}

/// Years for money to double at `rate` percent, by the rule of 72.
pub fn rule_of_72(rate: f64) -> AnalyticsResult<f64> {
    Ok(72.0 / non_zero(rate, "rate")?)
}

/// Value of a stock whose dividend grows at `growth` percent forever.
///
/// Rounded to a whole amount.
pub fn stock_present_value(growth: f64, required_return: f64, dividend: f64) -> AnalyticsResult<f64> {
    if required_return == growth {
        return Err(AnalyticsError::invalid_input(
            "required return must differ from the growth rate",
        ));
    }
    let g = growth / 100.0;
    let ke = required_return / 100.0;
    Ok(round_to(dividend * (1.0 + g) / (ke - g), 0))
}

// =============================================================================
// CAPITAL STRUCTURE
// =============================================================================

/// Leverage ratio `(liabilities + debts) / income`.
pub fn leverage_ratio(total_liabilities: f64, total_debts: f64, total_income: f64) -> AnalyticsResult<f64> {
    let income = non_zero(total_income, "total income")?;
    Ok((total_liabilities + total_debts) / income)
}

/// Weighted average cost of capital in percent, rounded to one decimal.
///
/// Costs and the tax rate are in percent.
pub fn weighted_average_cost_of_capital(
    equity: f64,
    debt: f64,
    cost_of_equity: f64,
    cost_of_debt: f64,
    tax_rate: f64,
) -> AnalyticsResult<f64> {
    let value = non_zero(equity + debt, "total capital")?;

    let equity_part = equity / value * cost_of_equity / 100.0;
    let debt_part = debt / value * cost_of_debt / 100.0 * (1.0 - tax_rate / 100.0);
    Ok(round_to((equity_part + debt_part) * 100.0, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flows(values: &[f64]) -> CashFlowSeries {
        CashFlowSeries::from(values)
    }

    #[test]
    fn test_present_and_future_value() {
        assert_eq!(present_value(5.0, 100.0, 1.0), 95.24);
        assert_eq!(present_value(5.0, 100.0, 5.0), 78.35);
        assert_eq!(future_value(0.5, 1000.0, 12.0), 1061.68);
    }

    #[test]
    fn test_net_present_value() {
        let npv =
            net_present_value(10.0, &flows(&[-500_000.0, 200_000.0, 300_000.0, 200_000.0])).unwrap();
        assert_eq!(npv, 80_015.03);

        assert!(net_present_value(10.0, &CashFlowSeries::default()).is_err());
    }

    #[test]
    fn test_payback_even() {
        let pp = payback_period(&flows(&[-105.0, 25.0]), PaybackMode::Even).unwrap();
        assert_eq!(pp, Some(4.2));

        assert!(payback_period(&flows(&[-105.0]), PaybackMode::Even).is_err());
        assert!(payback_period(&flows(&[-105.0, 0.0]), PaybackMode::Even).is_err());
    }

    #[test]
    fn test_payback_uneven() {
        let pp = payback_period(&flows(&[-50.0, 10.0, 13.0, 16.0, 19.0, 22.0]), PaybackMode::Uneven)
            .unwrap()
            .unwrap();
        assert!(pp > 3.3 && pp < 3.6);
        assert_relative_eq!(pp, 4.0 - 11.0 / 19.0);
    }

    #[test]
    fn test_payback_never_recovered() {
        let pp = payback_period(&flows(&[-100.0, 10.0, 10.0]), PaybackMode::Uneven).unwrap();
        assert_eq!(pp, None);
    }

    #[test]
    fn test_return_on_investment() {
        assert_eq!(return_on_investment(-55_000.0, 60_000.0).unwrap(), 9.09);
        assert!(return_on_investment(0.0, 60_000.0).is_err());
    }

    #[test]
    fn test_amortization() {
        let years = amortization(20_000.0, 7.5, AmortizationTerm::Years(5), PaymentTiming::End).unwrap();
        let months =
            amortization(20_000.0, 7.5, AmortizationTerm::Months(60), PaymentTiming::End).unwrap();
        let due =
            amortization(20_000.0, 7.5, AmortizationTerm::Years(5), PaymentTiming::Beginning).unwrap();

        assert_eq!(years, 400.76);
        assert_eq!(months, 400.76);
        assert_eq!(due, 398.27);
    }

    #[test]
    fn test_amortization_zero_rate_and_term() {
        let flat = amortization(1200.0, 0.0, AmortizationTerm::Years(1), PaymentTiming::End).unwrap();
        assert_eq!(flat, 100.0);

        let err = amortization(1200.0, 5.0, AmortizationTerm::Months(0), PaymentTiming::End);
        assert!(matches!(err, Err(AnalyticsError::InvalidInput(_))));
    }

    #[test]
    fn test_profitability_index() {
        let pi = profitability_index(
            10.0,
            &flows(&[-40_000.0, 18_000.0, 12_000.0, 10_000.0, 9_000.0, 6_000.0]),
        )
        .unwrap();
        assert_eq!(pi, 1.09);

        assert!(profitability_index(10.0, &flows(&[0.0, 100.0])).is_err());
    }

    #[test]
    fn test_discount_factors() {
        assert_eq!(discount_factors(10.0, 6), vec![1.0, 0.91, 0.827, 0.752, 0.684]);
        assert!(discount_factors(10.0, 0).is_empty());
    }

    #[test]
    fn test_compound_interest() {
        assert_eq!(compound_interest(4.3, 4.0, 1500.0, 6.0).unwrap(), 1938.84);
        assert!(compound_interest(4.3, 0.0, 1500.0, 6.0).is_err());
    }

    #[test]
    fn test_cagr() {
        assert_eq!(compound_annual_growth_rate(10_000.0, 19_500.0, 3.0).unwrap(), 24.93);
        assert!(compound_annual_growth_rate(0.0, 19_500.0, 3.0).is_err());
    }

    #[test]
    fn test_ratios() {
        assert_eq!(leverage_ratio(25.0, 10.0, 20.0).unwrap(), 1.75);
        assert_eq!(rule_of_72(10.0).unwrap(), 7.2);
        assert!(leverage_ratio(25.0, 10.0, 0.0).is_err());
        assert!(rule_of_72(0.0).is_err());
    }

    #[test]
    fn test_wacc() {
        let wacc = weighted_average_cost_of_capital(600_000.0, 400_000.0, 6.0, 5.0, 35.0).unwrap();
        assert_eq!(wacc, 4.9);
    }

    #[test]
    fn test_payment() {
        assert_eq!(payment(2.0, 36, -1_000_000.0).unwrap(), 39_232.85);
        assert_eq!(payment(0.0, 10, -1_000.0).unwrap(), 100.0);
        assert!(payment(2.0, 0, -1_000.0).is_err());
    }

    #[test]
    fn test_inflation_adjusted_return() {
        assert_relative_eq!(
            inflation_adjusted_return(0.08, 0.03).unwrap(),
            4.854_368_932_038_833
        );
        assert!(inflation_adjusted_return(0.08, -1.0).is_err());
    }

    #[test]
    fn test_capm() {
        assert_relative_eq!(capital_asset_pricing_model(2.0, 2.0, 10.0), 0.18, epsilon = 1e-12);
    }

    #[test]
    fn test_stock_present_value() {
        assert_eq!(stock_present_value(5.0, 15.0, 10.0).unwrap(), 105.0);
        assert!(stock_present_value(5.0, 5.0, 10.0).is_err());
    }
}
