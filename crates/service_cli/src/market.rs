//! Assembly of pricing inputs from a validated request

use pricer_core::market_data::{
    BlackVolTermStructure, CurveEnum, InterpolatedCurve, SimpleQuote, VarianceCurveVol,
    VolSurfaceEnum, YieldTermStructure,
};
use pricer_models::instruments::{Exercise, PlainVanillaPayoff};
use pricer_models::models::{BlackScholesProcess, Merton76Process};
use pricer_pricing::jump_diffusion::{JumpDiffusionArguments, JumpDiffusionConfig};

use crate::config::{interpolation_method, EngineSection, MarketSection, PricingRequest};
use crate::{CliError, Result};

/// Engine configuration from the `[engine]` section
pub fn engine_config(engine: &EngineSection) -> Result<JumpDiffusionConfig> {
    JumpDiffusionConfig::builder()
        .relative_accuracy(engine.relative_accuracy)
        .max_iterations(engine.max_iterations)
        .parallel_batch_size(engine.batch_size)
        .build()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))
}

/// Risk-free curve: flat rate or interpolated zero curve
fn risk_free_curve(market: &MarketSection) -> Result<YieldTermStructure> {
    match (&market.risk_free_rate, &market.rate_curve) {
        (Some(rate), _) => Ok(YieldTermStructure::flat(
            market.reference_date,
            *rate,
            market.day_count,
        )),
        (None, Some(curve)) => {
            let method = interpolation_method(&curve.interpolation)?;
            let interpolated = InterpolatedCurve::new(&curve.tenors, &curve.rates, method, true)?;
            Ok(YieldTermStructure::new(
                market.reference_date,
                market.day_count,
                CurveEnum::Interpolated(interpolated),
            ))
        }
        (None, None) => Err(CliError::InvalidArgument(
            "no risk-free rate given".to_string(),
        )),
    }
}

/// Black volatility: flat or a variance-interpolated term structure
fn volatility(market: &MarketSection) -> Result<BlackVolTermStructure> {
    match (&market.volatility, &market.vol_curve) {
        (Some(sigma), _) => Ok(BlackVolTermStructure::flat(
            market.reference_date,
            *sigma,
            market.day_count,
        )),
        (None, Some(curve)) => {
            let surface = VarianceCurveVol::from_volatilities(&curve.expiries, &curve.vols, true)?;
            Ok(BlackVolTermStructure::new(
                market.reference_date,
                market.day_count,
                VolSurfaceEnum::VarianceCurve(surface),
            ))
        }
        (None, None) => Err(CliError::InvalidArgument("no volatility given".to_string())),
    }
}

/// Merton process for the `[market]` section
pub fn merton_process(market: &MarketSection) -> Result<Merton76Process> {
    let dividend_curve =
        YieldTermStructure::flat(market.reference_date, market.dividend_yield, market.day_count);
    let diffusion = BlackScholesProcess::new(
        SimpleQuote::new("spot", market.spot),
        dividend_curve,
        risk_free_curve(market)?,
        volatility(market)?,
    );
    Ok(Merton76Process::new(
        diffusion,
        SimpleQuote::new("jump_intensity", market.jumps.intensity),
        SimpleQuote::new("log_jump_mean", market.jumps.log_mean),
        SimpleQuote::new("log_jump_volatility", market.jumps.log_volatility),
    ))
}

/// Full mixture arguments for a request
pub fn jump_arguments(request: &PricingRequest) -> Result<JumpDiffusionArguments> {
    let payoff = PlainVanillaPayoff::new(request.option.payoff, request.option.strike)?;
    Ok(JumpDiffusionArguments::new(
        payoff,
        Exercise::european(request.option.expiry),
        merton_process(&request.market)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::types::{Date, PricingError};

    const SAMPLE: &str = include_str!("../requests/merton_call.toml");
    const TERM_STRUCTURE: &str = include_str!("../requests/term_structure_put.toml");

    #[test]
    fn test_flat_market() {
        let request = PricingRequest::from_toml(SAMPLE).unwrap();
        let args = jump_arguments(&request).unwrap();
        let process = args.process.as_jump_diffusion().unwrap();
        let expiry = Date::from_ymd(2026, 1, 1).unwrap();

        assert_eq!(process.jump_intensity().value(), 1.0);
        let df = process.diffusion().risk_free_curve().discount(expiry).unwrap();
        assert_relative_eq!(df, (-0.05f64).exp(), epsilon = 1e-14);
    }

    #[test]
    fn test_term_structure_market() {
        let request = PricingRequest::from_toml(TERM_STRUCTURE).unwrap();
        let process = merton_process(&request.market).unwrap();
        let vol = process.diffusion().volatility();
        let reference = request.market.reference_date;

        // 1y pillar: variance = 0.25² × 1
        let one_year = reference.add_days(365).unwrap();
        assert_relative_eq!(
            vol.black_variance(one_year, 48.0).unwrap(),
            0.0625,
            epsilon = 1e-12
        );
        assert!(!process.diffusion().risk_free_curve().curve().is_flat());
    }

    #[test]
    fn test_engine_config_rejects_zero_iterations() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request.engine.max_iterations = 0;
        assert!(matches!(
            engine_config(&request.engine),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unsorted_vol_pillars_rejected() {
        let mut request = PricingRequest::from_toml(TERM_STRUCTURE).unwrap();
        if let Some(curve) = request.market.vol_curve.as_mut() {
            curve.expiries = vec![1.0, 0.25, 3.0];
        }
        assert!(matches!(
            merton_process(&request.market),
            Err(CliError::Pricing(PricingError::InvalidInput(_)))
        ));
    }
}
