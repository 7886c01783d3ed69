//! Merton (1976) jump-diffusion process.
//!
//! ```text
//! dS/S = (r − q − λ·k) dt + σ dW + (J − 1) dN
//! ```
//!
//! where `N` is a Poisson process with intensity `λ`, `ln J ~ N(μ, δ²)` and
//! `k = exp(μ + δ²/2) − 1` is the expected relative jump size.

use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};

use super::BlackScholesProcess;

/// Black-Scholes diffusion with lognormal jumps arriving at Poisson times.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::models::{BlackScholesProcess, Merton76Process};
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let dc = DayCountConvention::Actual365Fixed;
/// let diffusion = BlackScholesProcess::without_dividends(
///     SimpleQuote::new("spot", 100.0),
///     YieldTermStructure::flat(today, 0.05, dc),
///     BlackVolTermStructure::flat(today, 0.2, dc),
/// );
///
/// let process = Merton76Process::new(
///     diffusion,
///     SimpleQuote::new("jump_intensity", 1.0),
///     SimpleQuote::new("log_jump_mean", -0.1),
///     SimpleQuote::new("log_jump_volatility", 0.2),
/// );
///
/// let k = (-0.1_f64 + 0.5 * 0.04).exp() - 1.0;
/// assert!((process.jump_compensator() - k).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Merton76Process {
    diffusion: BlackScholesProcess,
    jump_intensity: SimpleQuote,
    log_jump_mean: SimpleQuote,
    log_jump_volatility: SimpleQuote,
}

impl Merton76Process {
    /// Attach jump parameters to a diffusion process.
    pub fn new(
        diffusion: BlackScholesProcess,
        jump_intensity: SimpleQuote,
        log_jump_mean: SimpleQuote,
        log_jump_volatility: SimpleQuote,
    ) -> Self {
        Self {
            diffusion,
            jump_intensity,
            log_jump_mean,
            log_jump_volatility,
        }
    }

    /// Continuous part of the dynamics.
    #[inline]
    pub fn diffusion(&self) -> &BlackScholesProcess {
        &self.diffusion
    }

    /// Poisson intensity λ (expected jumps per year).
    #[inline]
    pub fn jump_intensity(&self) -> &SimpleQuote {
        &self.jump_intensity
    }

    /// Mean μ of the log jump size.
    #[inline]
    pub fn log_jump_mean(&self) -> &SimpleQuote {
        &self.log_jump_mean
    }

    /// Standard deviation δ of the log jump size.
    #[inline]
    pub fn log_jump_volatility(&self) -> &SimpleQuote {
        &self.log_jump_volatility
    }

    /// Expected relative jump size k = exp(μ + δ²/2) − 1.
    pub fn jump_compensator(&self) -> f64 {
        let mu = self.log_jump_mean.value();
        let delta = self.log_jump_volatility.value();
        (mu + 0.5 * delta * delta).exp() - 1.0
    }

    /// Underlying spot quote.
    #[inline]
    pub fn spot(&self) -> &SimpleQuote {
        self.diffusion.spot()
    }

    /// Continuous dividend yield curve.
    #[inline]
    pub fn dividend_curve(&self) -> &YieldTermStructure {
        self.diffusion.dividend_curve()
    }

    /// Risk-free discount curve.
    #[inline]
    pub fn risk_free_curve(&self) -> &YieldTermStructure {
        self.diffusion.risk_free_curve()
    }

    /// Black volatility of the diffusion part.
    #[inline]
    pub fn volatility(&self) -> &BlackVolTermStructure {
        self.diffusion.volatility()
    }
}
