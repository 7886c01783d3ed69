//! Closed-form Black-Scholes-Merton engine for European exercise.
//!
//! Curves are read at the expiry date and collapsed to the constant
//! parameters of the closed form, with `T` the volatility year fraction:
//!
//! ```text
//! r = −ln D_r(T) / T,   q = −ln D_q(T) / T,   σ = √(variance(T, K) / T)
//! ```
//!
//! Rho and dividend rho are rescaled to each curve's own year fraction so
//! they remain sensitivities to that curve's zero rate.

use pricer_models::analytical::BlackScholes;
use pricer_models::instruments::{Exercise, PlainVanillaPayoff};
use pricer_models::models::BlackScholesProcess;

use super::{DiffusionArguments, DiffusionEngine, EngineError, OptionResults};

/// Analytic engine for European calls and puts on a [`BlackScholesProcess`].
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::instruments::{Exercise, PayoffType, PlainVanillaPayoff};
/// use pricer_models::models::BlackScholesProcess;
/// use pricer_pricing::engines::{AnalyticEuropeanEngine, DiffusionEngine};
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let dc = DayCountConvention::Actual365Fixed;
/// let process = BlackScholesProcess::without_dividends(
///     SimpleQuote::new("spot", 100.0),
///     YieldTermStructure::flat(today, 0.05, dc),
///     BlackVolTermStructure::flat(today, 0.2, dc),
/// );
///
/// let mut engine = AnalyticEuropeanEngine::new();
/// engine.arguments_mut().set(
///     PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap(),
///     Exercise::european(Date::from_ymd(2026, 1, 1).unwrap()),
///     process,
/// );
/// engine.validate().unwrap();
/// engine.calculate().unwrap();
///
/// assert!((engine.results().value - 10.4506).abs() < 1e-3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct AnalyticEuropeanEngine {
    arguments: DiffusionArguments,
    results: OptionResults,
}

/// Expiry inputs read off the process.
struct ExpiryInputs {
    spot: f64,
    strike: f64,
    t: f64,
    t_rate: f64,
    t_dividend: f64,
    rate_discount: f64,
    dividend_discount: f64,
    variance: f64,
}

impl AnalyticEuropeanEngine {
    /// Creates an engine with empty arguments.
    pub fn new() -> Self {
        Self::default()
    }

    fn checked_spot(process: &BlackScholesProcess) -> Result<f64, EngineError> {
        let spot = process.spot().checked_value()?;
        if spot <= 0.0 {
            return Err(EngineError::InvalidSpot { spot });
        }
        Ok(spot)
    }

    fn expiry_inputs(
        payoff: &PlainVanillaPayoff,
        exercise: &Exercise,
        process: &BlackScholesProcess,
    ) -> Result<ExpiryInputs, EngineError> {
        let expiry = exercise.last_date();
        let volatility = process.volatility();
        let strike = payoff.strike();
        Ok(ExpiryInputs {
            spot: Self::checked_spot(process)?,
            strike,
            t: volatility.time_from_reference(expiry)?,
            t_rate: process.risk_free_curve().time_from_reference(expiry)?,
            t_dividend: process.dividend_curve().time_from_reference(expiry)?,
            rate_discount: process.risk_free_curve().discount(expiry)?,
            dividend_discount: process.dividend_curve().discount(expiry)?,
            variance: volatility.black_variance(expiry, strike)?,
        })
    }

    /// Zero-variance or expired option: the terminal spot is the forward.
    fn deterministic(payoff: &PlainVanillaPayoff, inputs: &ExpiryInputs) -> OptionResults {
        let phi = if payoff.payoff_type().is_call() { 1.0 } else { -1.0 };
        let spot_leg = inputs.spot * inputs.dividend_discount;
        let strike_leg = inputs.strike * inputs.rate_discount;
        let intrinsic = phi * (spot_leg - strike_leg);
        if intrinsic <= 0.0 {
            return OptionResults::default();
        }

        let theta = if inputs.t > 0.0 {
            let r = -inputs.rate_discount.ln() / inputs.t;
            let q = -inputs.dividend_discount.ln() / inputs.t;
            phi * (q * spot_leg - r * strike_leg)
        } else {
            0.0
        };
        OptionResults {
            value: intrinsic,
            delta: phi * inputs.dividend_discount,
            gamma: 0.0,
            theta,
            vega: 0.0,
            rho: phi * strike_leg * inputs.t_rate,
            dividend_rho: -phi * spot_leg * inputs.t_dividend,
        }
    }

    fn closed_form(
        payoff: &PlainVanillaPayoff,
        inputs: &ExpiryInputs,
    ) -> Result<OptionResults, EngineError> {
        let t = inputs.t;
        let rate = -inputs.rate_discount.ln() / t;
        let dividend_yield = -inputs.dividend_discount.ln() / t;
        let sigma = (inputs.variance / t).sqrt();

        let model = BlackScholes::new(inputs.spot, rate, sigma)?.with_dividend_yield(dividend_yield);
        let payoff_type = payoff.payoff_type();
        let is_call = payoff_type.is_call();
        let k = inputs.strike;

        Ok(OptionResults {
            value: model.price(payoff_type, k, t),
            delta: model.delta(k, t, is_call),
            gamma: model.gamma(k, t),
            theta: model.theta(k, t, is_call),
            vega: model.vega(k, t),
            rho: model.rho(k, t, is_call) * inputs.t_rate / t,
            dividend_rho: model.dividend_rho(k, t, is_call) * inputs.t_dividend / t,
        })
    }
}

impl DiffusionEngine for AnalyticEuropeanEngine {
    fn reset(&mut self) {
        self.results = OptionResults::default();
    }

    fn arguments(&self) -> &DiffusionArguments {
        &self.arguments
    }

    fn arguments_mut(&mut self) -> &mut DiffusionArguments {
        &mut self.arguments
    }

    fn validate(&self) -> Result<(), EngineError> {
        let (_, exercise, process) = self.arguments.require()?;
        if !exercise.is_european() {
            return Err(EngineError::UnsupportedExercise {
                style: exercise.name(),
            });
        }
        Self::checked_spot(process)?;

        // Expiry must not precede any of the curve anchors.
        let expiry = exercise.last_date();
        process.risk_free_curve().time_from_reference(expiry)?;
        process.dividend_curve().time_from_reference(expiry)?;
        process.volatility().time_from_reference(expiry)?;
        Ok(())
    }

    fn calculate(&mut self) -> Result<(), EngineError> {
        self.validate()?;
        let (payoff, exercise, process) = self.arguments.require()?;
        let inputs = Self::expiry_inputs(payoff, exercise, process)?;

        let results = if inputs.t > 0.0 && inputs.variance > 0.0 {
            Self::closed_form(payoff, &inputs)?
        } else {
            Self::deterministic(payoff, &inputs)
        };

        if let Some(field) = first_non_finite(&results) {
            return Err(EngineError::NonFiniteResult { field });
        }
        self.results = results;
        Ok(())
    }

    fn results(&self) -> &OptionResults {
        &self.results
    }
}

fn first_non_finite(results: &OptionResults) -> Option<&'static str> {
    [
        ("value", results.value),
        ("delta", results.delta),
        ("gamma", results.gamma),
        ("theta", results.theta),
        ("vega", results.vega),
        ("rho", results.rho),
        ("dividend_rho", results.dividend_rho),
    ]
    .into_iter()
    .find(|(_, x)| !x.is_finite())
    .map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
    use pricer_core::types::{Date, DayCountConvention};
    use pricer_models::instruments::PayoffType;

    const DC: DayCountConvention = DayCountConvention::Actual365Fixed;

    fn today() -> Date {
        Date::from_ymd(2025, 1, 1).unwrap()
    }

    fn one_year() -> Date {
        today().add_days(365).unwrap()
    }

    fn process(spot: f64, q: f64, r: f64, sigma: f64) -> BlackScholesProcess {
        BlackScholesProcess::new(
            SimpleQuote::new("spot", spot),
            YieldTermStructure::flat(today(), q, DC),
            YieldTermStructure::flat(today(), r, DC),
            BlackVolTermStructure::flat(today(), sigma, DC),
        )
    }

    fn priced(payoff_type: PayoffType, strike: f64, process: BlackScholesProcess) -> OptionResults {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(payoff_type, strike).unwrap(),
            Exercise::european(one_year()),
            process,
        );
        engine.validate().unwrap();
        engine.calculate().unwrap();
        engine.results().clone()
    }

    // ==========================================================
    // Closed form
    // ==========================================================

    #[test]
    fn test_matches_black_scholes_reference() {
        let call = priced(PayoffType::Call, 100.0, process(100.0, 0.0, 0.05, 0.2));
        assert_relative_eq!(call.value, 10.450583572185565, epsilon = 1e-10);

        let put = priced(PayoffType::Put, 100.0, process(100.0, 0.0, 0.05, 0.2));
        assert_relative_eq!(put.value, 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_greeks_agree_with_model() {
        let results = priced(PayoffType::Call, 95.0, process(100.0, 0.02, 0.05, 0.25));
        let model = BlackScholes::new(100.0, 0.05, 0.25)
            .unwrap()
            .with_dividend_yield(0.02);
        assert_relative_eq!(results.delta, model.delta(95.0, 1.0, true), epsilon = 1e-12);
        assert_relative_eq!(results.gamma, model.gamma(95.0, 1.0), epsilon = 1e-12);
        assert_relative_eq!(results.vega, model.vega(95.0, 1.0), epsilon = 1e-10);
        assert_relative_eq!(results.rho, model.rho(95.0, 1.0, true), epsilon = 1e-10);
        assert_relative_eq!(
            results.dividend_rho,
            model.dividend_rho(95.0, 1.0, true),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_rho_rescaled_to_rate_day_count() {
        let base = process(100.0, 0.0, 0.05, 0.2);
        let act360 = BlackScholesProcess::new(
            base.spot().clone(),
            YieldTermStructure::flat(today(), 0.0, DayCountConvention::Actual360),
            YieldTermStructure::flat(today(), 0.05, DayCountConvention::Actual360),
            base.volatility().clone(),
        );
        let r = priced(PayoffType::Call, 100.0, act360.clone());

        // Bump the ACT/360 zero rate and reprice.
        let h = 1e-6;
        let bumped = BlackScholesProcess::new(
            act360.spot().clone(),
            act360.dividend_curve().clone(),
            YieldTermStructure::flat(today(), 0.05 + h, DayCountConvention::Actual360),
            act360.volatility().clone(),
        );
        let up = priced(PayoffType::Call, 100.0, bumped);
        assert_relative_eq!(r.rho, (up.value - r.value) / h, max_relative = 1e-4);
    }

    // ==========================================================
    // Degenerate inputs
    // ==========================================================

    #[test]
    fn test_expiry_on_reference_date_is_intrinsic() {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(PayoffType::Put, 110.0).unwrap(),
            Exercise::european(today()),
            process(100.0, 0.0, 0.05, 0.2),
        );
        engine.calculate().unwrap();
        assert_relative_eq!(engine.results().value, 10.0, epsilon = 1e-14);
        assert_eq!(engine.results().delta, -1.0);
        assert_eq!(engine.results().theta, 0.0);
    }

    #[test]
    fn test_zero_volatility_prices_discounted_forward() {
        let r = priced(PayoffType::Call, 90.0, process(100.0, 0.0, 0.05, 0.0));
        let df = (-0.05_f64).exp();
        assert_relative_eq!(r.value, 100.0 - 90.0 * df, epsilon = 1e-12);
        assert_eq!(r.gamma, 0.0);
        assert_eq!(r.vega, 0.0);
    }

    // ==========================================================
    // Validation
    // ==========================================================

    #[test]
    fn test_rejects_american_exercise() {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(PayoffType::Put, 100.0).unwrap(),
            Exercise::american(today(), one_year()).unwrap(),
            process(100.0, 0.0, 0.05, 0.2),
        );
        assert_eq!(
            engine.validate(),
            Err(EngineError::UnsupportedExercise { style: "American" })
        );
    }

    #[test]
    fn test_rejects_expiry_before_curve_anchor() {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap(),
            Exercise::european(Date::from_ymd(2024, 6, 1).unwrap()),
            process(100.0, 0.0, 0.05, 0.2),
        );
        assert!(matches!(engine.validate(), Err(EngineError::MarketData(_))));
    }

    #[test]
    fn test_rejects_non_positive_spot() {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap(),
            Exercise::european(one_year()),
            process(0.0, 0.0, 0.05, 0.2),
        );
        assert_eq!(
            engine.validate(),
            Err(EngineError::InvalidSpot { spot: 0.0 })
        );
    }

    #[test]
    fn test_reset_clears_results() {
        let mut engine = AnalyticEuropeanEngine::new();
        engine.arguments_mut().set(
            PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap(),
            Exercise::european(one_year()),
            process(100.0, 0.0, 0.05, 0.2),
        );
        engine.calculate().unwrap();
        assert!(engine.results().value > 0.0);

        engine.reset();
        assert_eq!(engine.results(), &OptionResults::default());
        assert!(engine.arguments().require().is_ok());
    }
}
