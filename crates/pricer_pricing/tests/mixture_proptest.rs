//! Property-based tests for the jump-diffusion mixture.
//!
//! Parameters are drawn over realistic equity ranges; every converged call
//! must satisfy the weight bound and the no-arbitrage price bounds.

use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
use pricer_core::types::{Date, DayCountConvention};
use pricer_models::instruments::{Exercise, PayoffType, PlainVanillaPayoff};
use pricer_models::models::{BlackScholesProcess, Merton76Process};
use pricer_pricing::engines::AnalyticEuropeanEngine;
use pricer_pricing::jump_diffusion::{
    JumpDiffusionArguments, JumpDiffusionConfig, JumpDiffusionEngine,
};
use proptest::prelude::*;

fn args(
    payoff_type: PayoffType,
    strike: f64,
    days: u64,
    lambda: f64,
    mu: f64,
    delta: f64,
) -> JumpDiffusionArguments {
    let today = Date::from_ymd(2025, 1, 1).unwrap();
    let dc = DayCountConvention::Actual365Fixed;
    JumpDiffusionArguments::new(
        PlainVanillaPayoff::new(payoff_type, strike).unwrap(),
        Exercise::european(today.add_days(days).unwrap()),
        Merton76Process::new(
            BlackScholesProcess::without_dividends(
                SimpleQuote::new("spot", 100.0),
                YieldTermStructure::flat(today, 0.03, dc),
                BlackVolTermStructure::flat(today, 0.2, dc),
            ),
            SimpleQuote::new("jump_intensity", lambda),
            SimpleQuote::new("log_jump_mean", mu),
            SimpleQuote::new("log_jump_volatility", delta),
        ),
    )
}

fn engine() -> JumpDiffusionEngine<AnalyticEuropeanEngine> {
    let config = JumpDiffusionConfig::builder()
        .relative_accuracy(1e-8)
        .max_iterations(500)
        .build()
        .unwrap();
    JumpDiffusionEngine::new(AnalyticEuropeanEngine::new(), config)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_cumulative_weight_bounded(
        lambda in 0.0f64..3.0,
        mu in -0.5f64..0.3,
        delta in 0.0f64..0.5,
        days in 30u64..1095,
    ) {
        let mut engine = engine();
        engine.calculate(&args(PayoffType::Call, 100.0, days, lambda, mu, delta)).unwrap();
        let report = engine.last_report().unwrap();

        prop_assert!(report.cumulative_weight > 0.0);
        prop_assert!(report.cumulative_weight <= 1.0 + 1e-12);
        prop_assert_eq!(report.contributions.len() as u64, report.iterations);
    }

    #[test]
    fn prop_call_within_no_arbitrage_bounds(
        strike in 60.0f64..140.0,
        lambda in 0.0f64..2.0,
        mu in -0.4f64..0.2,
        delta in 0.01f64..0.4,
    ) {
        let mut engine = engine();
        let results = engine
            .calculate(&args(PayoffType::Call, strike, 365, lambda, mu, delta))
            .unwrap();

        let df = (-0.03f64).exp();
        prop_assert!(results.value <= 100.0 + 1e-9);
        prop_assert!(results.value >= (100.0 - strike * df).max(0.0) - 1e-6);
        prop_assert!(results.delta >= -1e-12 && results.delta <= 1.0 + 1e-12);
        prop_assert!(results.gamma >= 0.0);
    }
}
