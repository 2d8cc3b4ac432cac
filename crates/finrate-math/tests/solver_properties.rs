//! Property tests for the root-finding solvers.

use approx::assert_relative_eq;
use finrate_math::prelude::*;
use proptest::prelude::*;

/// NPV of `-1` today and `payoff` after one period, rate in percent.
fn one_period_npv(payoff: f64) -> impl Fn(f64) -> f64 + Copy {
    move |r| -1.0 + payoff / (1.0 + r / 100.0)
}

proptest! {
    #[test]
    fn bisection_lands_within_tolerance(root in -50.0f64..50.0, width in 1.0f64..100.0) {
        let f = |x: f64| Ok(x - root);
        let config = SolverConfig::new(1e-6, 200);

        let result = bisection(f, root - width, root + width * 0.7, &config).unwrap();

        prop_assert!((result.root - root).abs() <= 1e-6);
    }

    #[test]
    fn expanded_bracket_contains_one_period_root(payoff in 0.5f64..5_000.0) {
        let npv = one_period_npv(payoff);
        let expected = (payoff - 1.0) * 100.0;

        let bracket = expand_bracket(
            |r| Ok(npv(r)),
            Bracket::new(-99.0, 100.0),
            &BracketLadder::default(),
        )
        .unwrap();

        prop_assert!(bracket.low <= expected);
        prop_assert!(bracket.high >= expected);
    }

    #[test]
    fn counter_never_exceeds_limit_on_success(limit in 1u32..500) {
        let mut counter = EvaluationCounter::new(limit);
        let npv = one_period_npv(1.2);
        let outcome = {
            let f = counter.counted(npv);
            bisection(f, -99.0, 100.0, &SolverConfig::new(1e-5, 200))
        };

        match outcome {
            Ok(_) => prop_assert!(counter.count() <= limit),
            Err(err) => {
                prop_assert_eq!(err, MathError::EvaluationBudgetExceeded { limit });
                prop_assert_eq!(counter.count(), limit + 1);
            }
        }
    }

    #[test]
    fn newton_agrees_with_closed_form_rate(growth in 0.5f64..3.0, years in 1.0f64..10.0) {
        // -1 today, `growth` after `years`: rate = growth^(1/years) - 1
        let ratio = |g: f64| {
            let f = -1.0 + growth / (1.0 + g).powf(years);
            let df = -growth * years * (1.0 + g).powf(-1.0 - years);
            f / df
        };
        let config = NewtonConfig::default().with_decimals(8).with_lower_bound(-1.0);

        let result = newton_raphson_ratio(ratio, 0.0, &config).unwrap();

        assert_relative_eq!(result.root, growth.powf(1.0 / years) - 1.0, epsilon = 1e-6);
    }
}

#[test]
fn rounding_is_stable_under_repeated_application() {
    for value in [14.105_398, -79.362_973, 4_951.294_171_3, 0.0] {
        let once = round_to(value, 2);
        assert_eq!(round_to(once, 2), once);
    }
}
