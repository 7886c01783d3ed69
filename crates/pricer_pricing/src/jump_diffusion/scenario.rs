//! Conditional diffusion given exactly `i` jumps.
//!
//! Conditioned on `i` jumps before expiry, the Merton process is a
//! lognormal diffusion with
//!
//! ```text
//! vᵢ = √((variance + i·δ²) / t)
//! rᵢ = r₀ − λ₀·k + i·(μ + δ²/2) / t
//! ```
//!
//! Each scenario owns freshly built flat curves; nothing is shared with the
//! caller's process or with other scenarios except the spot quote value and
//! the dividend curve, which are cloned.
//!
//! `rᵢ` is a rate on the vol clock `t`. The scenario rate curve keeps the
//! risk-free curve's day count and quotes `rᵢ·t / t_rate` on it, so its
//! discount factor is `exp(−rᵢ·t)` and a diffusion engine reports rho
//! against the same clock as it does for the caller's curve.

use pricer_core::market_data::{BlackVolTermStructure, YieldTermStructure};
use pricer_models::models::BlackScholesProcess;

use super::{JumpDiffusionError, JumpParameters};

/// Diffusion inputs of one mixture term.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Jump count `i`.
    pub jumps: u64,
    /// Risk-free rate `rᵢ` on the vol clock.
    pub rate: f64,
    /// Flat volatility `vᵢ`.
    pub volatility: f64,
    /// Process handed to the diffusion engine.
    pub process: BlackScholesProcess,
}

/// Builds [`Scenario`]s from the parameters of one pricing call.
#[derive(Clone, Debug)]
pub struct ScenarioBuilder<'a> {
    params: &'a JumpParameters,
    diffusion: &'a BlackScholesProcess,
}

impl<'a> ScenarioBuilder<'a> {
    /// Builder over `params`, cloning spot and dividends from `diffusion`.
    pub fn new(params: &'a JumpParameters, diffusion: &'a BlackScholesProcess) -> Self {
        Self { params, diffusion }
    }

    /// Scenario with exactly `jumps` jumps.
    ///
    /// # Errors
    ///
    /// `InvalidScenarioVariance` if `variance + i·δ²` is negative or not
    /// finite.
    pub fn build(&self, jumps: u64) -> Result<Scenario, JumpDiffusionError> {
        let p = self.params;
        let i = jumps as f64;

        let total_variance = p.variance + i * p.jump_square_vol;
        if !total_variance.is_finite() || total_variance < 0.0 {
            return Err(JumpDiffusionError::InvalidScenarioVariance {
                iteration: jumps,
                variance: total_variance,
            });
        }
        let volatility = (total_variance / p.t).sqrt();
        let rate = p.r0 - p.jump_intensity * p.k + i * p.mu_plus_half_square_vol / p.t;

        let curve_rate = if p.rate_time > 0.0 {
            rate * p.t / p.rate_time
        } else {
            rate
        };

        let process = BlackScholesProcess::new(
            self.diffusion.spot().clone(),
            self.diffusion.dividend_curve().clone(),
            YieldTermStructure::flat(p.rate_reference_date, curve_rate, p.rate_day_count),
            BlackVolTermStructure::flat(p.rate_reference_date, volatility, p.vol_day_count),
        );

        Ok(Scenario {
            jumps,
            rate,
            volatility,
            process,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::SimpleQuote;
    use pricer_core::types::{Date, DayCountConvention};

    fn today() -> Date {
        Date::from_ymd(2025, 1, 1).unwrap()
    }

    fn params(variance: f64) -> JumpParameters {
        let mu: f64 = -0.1;
        let delta: f64 = 0.2;
        let k = (mu + 0.5 * delta * delta).exp() - 1.0;
        JumpParameters {
            jump_intensity: 1.0,
            jump_square_vol: delta * delta,
            mu_plus_half_square_vol: mu + 0.5 * delta * delta,
            k,
            lambda: 1.0 + k,
            variance,
            t: 0.5,
            r0: 0.05,
            expiry: Date::from_ymd(2025, 7, 2).unwrap(),
            rate_reference_date: today(),
            rate_time: 182.0 / 360.0,
            rate_day_count: DayCountConvention::Actual360,
            vol_day_count: DayCountConvention::Actual365Fixed,
        }
    }

    fn diffusion() -> BlackScholesProcess {
        BlackScholesProcess::new(
            SimpleQuote::new("spot", 100.0),
            YieldTermStructure::flat(today(), 0.01, DayCountConvention::Actual360),
            YieldTermStructure::flat(today(), 0.05, DayCountConvention::Actual360),
            BlackVolTermStructure::flat(today(), 0.2, DayCountConvention::Actual365Fixed),
        )
    }

    #[test]
    fn test_rates_and_vols_per_jump_count() {
        let p = params(0.02);
        let base = diffusion();
        let builder = ScenarioBuilder::new(&p, &base);

        for i in 0..5_u64 {
            let s = builder.build(i).unwrap();
            let fi = i as f64;
            assert_eq!(s.jumps, i);
            assert_relative_eq!(
                s.volatility,
                ((0.02 + fi * 0.04) / 0.5).sqrt(),
                epsilon = 1e-15
            );
            assert_relative_eq!(
                s.rate,
                0.05 - p.k + fi * p.mu_plus_half_square_vol / 0.5,
                epsilon = 1e-15
            );
        }
    }

    #[test]
    fn test_curves_anchored_on_rate_reference_with_own_day_counts() {
        let p = params(0.02);
        let base = diffusion();
        let s = ScenarioBuilder::new(&p, &base).build(2).unwrap();

        let rf = s.process.risk_free_curve();
        assert_eq!(rf.reference_date(), today());
        assert_eq!(rf.day_count(), DayCountConvention::Actual360);
        // Discounting over the vol clock t whatever the curve's day count.
        assert_relative_eq!(
            rf.discount(p.expiry).unwrap(),
            (-s.rate * p.t).exp(),
            epsilon = 1e-14
        );
        assert_eq!(
            s.process.volatility().day_count(),
            DayCountConvention::Actual365Fixed
        );
        // Dividends and spot come through untouched.
        assert_eq!(s.process.dividend_curve(), base.dividend_curve());
        assert_eq!(s.process.spot(), base.spot());
    }

    #[test]
    fn test_scenarios_do_not_alias() {
        let p = params(0.02);
        let base = diffusion();
        let builder = ScenarioBuilder::new(&p, &base);
        let first = builder.build(1).unwrap();
        let mut second = builder.build(1).unwrap();

        second.process = builder.build(3).unwrap().process;
        assert_ne!(second, first);
        assert_eq!(builder.build(1).unwrap(), first);
        assert_eq!(&base, &diffusion());
    }

    #[test]
    fn test_negative_variance_is_reported() {
        let p = params(-0.1);
        let base = diffusion();
        let builder = ScenarioBuilder::new(&p, &base);
        assert_eq!(
            builder.build(0),
            Err(JumpDiffusionError::InvalidScenarioVariance {
                iteration: 0,
                variance: -0.1
            })
        );
        // Enough jump variance makes later scenarios valid again.
        assert!(builder.build(3).is_ok());
    }
}
