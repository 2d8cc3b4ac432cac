//! Objective functions for the rate solvers.

/// Net present value of periodic cash flows at `rate_pct` percent.
///
/// `cash_flows[0]` is undiscounted; flow `i` is discounted by
/// `(1 + rate_pct / 100)^i`. Zero flows contribute nothing at any rate.
///
/// At exactly -100% the value is the limit from above: the latest non-zero
/// flow after time zero dominates, so the result is an infinity of its sign.
///
/// ```rust
/// use finrate_analytics::rates::npv_at;
///
/// assert_eq!(npv_at(&[-1000.0, 1200.0], 20.0), 0.0);
/// assert_eq!(npv_at(&[-1000.0, 0.0, 1210.0], -100.0), f64::INFINITY);
/// ```
#[must_use]
pub fn npv_at(cash_flows: &[f64], rate_pct: f64) -> f64 {
    let growth = 1.0 + rate_pct / 100.0;
    if growth == 0.0 {
        return total_loss_limit(cash_flows);
    }

    cash_flows
        .iter()
        .enumerate()
        .filter(|&(_, &cf)| cf != 0.0)
        .map(|(i, &cf)| if i == 0 { cf } else { cf / growth.powf(i as f64) })
        .sum()
}

fn total_loss_limit(cash_flows: &[f64]) -> f64 {
    match cash_flows.iter().skip(1).rev().find(|&&cf| cf != 0.0) {
        Some(&latest) => latest.signum() * f64::INFINITY,
        None => cash_flows.first().copied().unwrap_or(0.0),
    }
}

/// Date-weighted net present value at the unscaled rate `rate`.
///
/// `years[i]` is the offset of `cash_flows[i]` from the first date.
#[must_use]
pub fn xnpv(cash_flows: &[f64], years: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .zip(years)
        .map(|(&cf, &t)| cf / (1.0 + rate).powf(t))
        .sum()
}

/// Derivative of [`xnpv`] with respect to the rate.
#[must_use]
pub fn xnpv_derivative(cash_flows: &[f64], years: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .zip(years)
        .map(|(&cf, &t)| -cf * t * (1.0 + rate).powf(-1.0 - t))
        .sum()
}

/// Newton step `xnpv / xnpv'` at `rate`.
///
/// NaN or infinite when the derivative vanishes, for example when every
/// flow falls on the first date.
#[must_use]
pub fn xnpv_ratio(cash_flows: &[f64], years: &[f64], rate: f64) -> f64 {
    xnpv(cash_flows, years, rate) / xnpv_derivative(cash_flows, years, rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_npv_at_zero_rate_is_sum() {
        assert_eq!(npv_at(&[-100.0, 60.0, 60.0], 0.0), 20.0);
    }

    #[test]
    fn test_npv_at_ten_percent() {
        let npv = npv_at(&[-500_000.0, 200_000.0, 300_000.0, 200_000.0], 10.0);
        assert_relative_eq!(npv, 80_015.026_3, epsilon = 1e-3);
    }

    #[test]
    fn test_npv_single_flow_is_undiscounted() {
        assert_eq!(npv_at(&[42.0], 50.0), 42.0);
        assert_eq!(npv_at(&[], 50.0), 0.0);
    }

    #[test]
    fn test_npv_zero_flows_at_total_loss() {
        assert_eq!(npv_at(&[-1000.0, 0.0, 1210.0], -100.0), f64::INFINITY);
        assert_eq!(npv_at(&[0.0, -1000.0, 1100.0], -100.0), f64::INFINITY);
        assert_eq!(npv_at(&[-100.0, 50.0, -10.0, 0.0], -100.0), f64::NEG_INFINITY);
        assert_eq!(npv_at(&[-100.0, 0.0, 0.0], -100.0), -100.0);
    }

    #[test]
    fn test_npv_zero_flow_is_skipped() {
        assert_relative_eq!(npv_at(&[-1000.0, 0.0, 1210.0], 10.0), 0.0, epsilon = 1e-9);
        assert_eq!(npv_at(&[0.0, 0.0], 50.0), 0.0);
    }

    #[test]
    fn test_xnpv_one_year() {
        // -1000 today, 1100 in one year at 10%
        let flows = [-1000.0, 1100.0];
        let years = [0.0, 1.0];

        assert_relative_eq!(xnpv(&flows, &years, 0.1), 0.0, epsilon = 1e-9);
        assert_relative_eq!(xnpv_derivative(&flows, &years, 0.0), -1100.0);
    }

    #[test]
    fn test_xnpv_ratio_at_root_is_zero() {
        let flows = [-1000.0, 1100.0];
        let years = [0.0, 1.0];

        assert_relative_eq!(xnpv_ratio(&flows, &years, 0.1), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_xnpv_ratio_undefined_on_single_date() {
        let flows = [-1000.0, 1100.0];
        let years = [0.0, 0.0];

        assert!(xnpv_ratio(&flows, &years, 0.0).is_infinite());
    }
}
