//! Jump and diffusion parameters read once per pricing call.
//!
//! With `λ₀` the jump intensity and `ln J ~ N(μ, δ²)`:
//!
//! ```text
//! k      = exp(μ + δ²/2) − 1
//! λ'     = (1 + k)·λ₀
//! t      = year fraction (vol day count) from vol reference date to expiry
//! r₀     = −ln D_r(expiry) / t
//! ```
//!
//! The jump count over the option's life is Poisson with mean `λ'·t`.

use pricer_core::types::{Date, DayCountConvention};
use pricer_models::models::Merton76Process;

use super::{JumpDiffusionArguments, JumpDiffusionError};

/// Scalars shared by every scenario of one pricing call.
#[derive(Clone, Debug, PartialEq)]
pub struct JumpParameters {
    /// Jump intensity λ₀.
    pub jump_intensity: f64,
    /// δ².
    pub jump_square_vol: f64,
    /// μ + δ²/2.
    pub mu_plus_half_square_vol: f64,
    /// Expected relative jump size k.
    pub k: f64,
    /// Intensity under the jump-size-adjusted measure, (1 + k)·λ₀.
    pub lambda: f64,
    /// Black variance of the diffusion at expiry and strike.
    pub variance: f64,
    /// Year fraction to expiry on the vol day count.
    pub t: f64,
    /// Continuously compounded risk-free rate to expiry over `t`.
    pub r0: f64,
    /// Last exercise date.
    pub expiry: Date,
    /// Reference date of the risk-free curve; scenario curves start here.
    pub rate_reference_date: Date,
    /// Year fraction to expiry on the risk-free curve's own day count.
    pub rate_time: f64,
    /// Day count of the risk-free curve; scenario rate curves keep it.
    pub rate_day_count: DayCountConvention,
    /// Day count of the vol surface; scenario vol curves use it.
    pub vol_day_count: DayCountConvention,
}

impl JumpParameters {
    /// Reads the parameters off `args`.
    ///
    /// # Errors
    ///
    /// - `NotJumpDiffusion` if the process has no jump-diffusion view
    /// - `InvalidJumpParameter` for a negative intensity or jump volatility
    /// - `NonPositiveTime` if expiry is not after the vol reference date
    /// - `MarketData` for non-finite quotes or failed curve lookups
    pub fn extract(args: &JumpDiffusionArguments) -> Result<Self, JumpDiffusionError> {
        let process = args.process.as_jump_diffusion().ok_or(
            JumpDiffusionError::NotJumpDiffusion {
                process: args.process.name(),
            },
        )?;
        let (jump_intensity, mu, delta) = jump_quotes(process)?;

        let jump_square_vol = delta * delta;
        let mu_plus_half_square_vol = mu + 0.5 * jump_square_vol;
        let k = mu_plus_half_square_vol.exp() - 1.0;
        let lambda = (k + 1.0) * jump_intensity;

        let expiry = args.exercise.last_date();
        let volatility = process.volatility();
        let t = volatility
            .day_count()
            .year_fraction(volatility.reference_date(), expiry);
        if t.is_nan() || t <= 0.0 {
            return Err(JumpDiffusionError::NonPositiveTime { t });
        }
        let variance = volatility.black_variance(expiry, args.payoff.strike())?;

        let risk_free = process.risk_free_curve();
        let r0 = -risk_free.discount(expiry)?.ln() / t;
        let rate_time = risk_free.time_from_reference(expiry)?;

        Ok(Self {
            jump_intensity,
            jump_square_vol,
            mu_plus_half_square_vol,
            k,
            lambda,
            variance,
            t,
            r0,
            expiry,
            rate_reference_date: risk_free.reference_date(),
            rate_time,
            rate_day_count: risk_free.day_count(),
            vol_day_count: volatility.day_count(),
        })
    }

    /// Mean number of jumps over the option's life, `λ'·t`.
    #[inline]
    pub fn poisson_mean(&self) -> f64 {
        self.lambda * self.t
    }
}

fn jump_quotes(process: &Merton76Process) -> Result<(f64, f64, f64), JumpDiffusionError> {
    let intensity = process.jump_intensity().checked_value()?;
    let mu = process.log_jump_mean().checked_value()?;
    let delta = process.log_jump_volatility().checked_value()?;
    if intensity < 0.0 {
        return Err(JumpDiffusionError::InvalidJumpParameter {
            name: "jump_intensity",
            value: intensity,
        });
    }
    if delta < 0.0 {
        return Err(JumpDiffusionError::InvalidJumpParameter {
            name: "log_jump_volatility",
            value: delta,
        });
    }
    Ok((intensity, mu, delta))
}
