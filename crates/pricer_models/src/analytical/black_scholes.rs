//! Black-Scholes-Merton pricing model for European options.
//!
//! Closed-form prices and Greeks under lognormal dynamics with a
//! continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(−qT)·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put Price**: P = K·e^(−rT)·N(−d₂) − S·e^(−qT)·N(−d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r − q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::PayoffType;

/// Expiries at or below this are treated as expired.
const EXPIRY_EPSILON: f64 = 1e-10;

/// Black-Scholes-Merton model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();
/// let call_price = bs.price_call(100.0, 1.0);
/// let put_price = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes<T: Float> {
    spot: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new model with zero dividend yield.
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !volatility.is_finite() || volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield: zero,
            volatility,
        })
    }

    /// Returns a copy with the continuous dividend yield `q`.
    #[inline]
    pub fn with_dividend_yield(mut self, dividend_yield: T) -> Self {
        self.dividend_yield = dividend_yield;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn expired(expiry: T) -> bool {
        expiry <= T::from(EXPIRY_EPSILON).unwrap_or_else(T::zero)
    }

    #[inline]
    fn sign(is_call: bool) -> T {
        if is_call {
            T::one()
        } else {
            -T::one()
        }
    }

    /// Forward price S·e^((r−q)T).
    #[inline]
    pub fn forward(&self, expiry: T) -> T {
        self.spot * ((self.rate - self.dividend_yield) * expiry).exp()
    }

    /// Computes d₁ = (ln(S/K) + (r − q + σ²/2)T) / (σ√T).
    ///
    /// At expiry returns ±infinity depending on moneyness.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return if self.spot > strike {
                T::infinity()
            } else {
                T::neg_infinity()
            };
        }
        let half = T::from(0.5).unwrap_or_else(T::nan);
        let sigma_sqrt_t = self.volatility * expiry.sqrt();
        ((self.spot / strike).ln()
            + (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry)
            / sigma_sqrt_t
    }

    /// Computes d₂ = d₁ − σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return self.d1(strike, expiry);
        }
        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Prices a call or put.
    pub fn price(&self, payoff_type: PayoffType, strike: T, expiry: T) -> T {
        let is_call = payoff_type.is_call();
        let phi = Self::sign(is_call);

        if Self::expired(expiry) {
            return (phi * (self.spot - strike)).max(T::zero());
        }

        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        phi * (self.spot * df_q * norm_cdf(phi * d1) - strike * df_r * norm_cdf(phi * d2))
    }

    /// Prices a European call.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.price(PayoffType::Call, strike, expiry)
    }

    /// Prices a European put.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.price(PayoffType::Put, strike, expiry)
    }

    /// Delta (∂V/∂S) = φ·e^(−qT)·N(φd₁).
    pub fn delta(&self, strike: T, expiry: T, is_call: bool) -> T {
        let phi = Self::sign(is_call);
        if Self::expired(expiry) {
            let itm = phi * (self.spot - strike) > T::zero();
            return if itm { phi } else { T::zero() };
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        phi * df_q * norm_cdf(phi * self.d1(strike, expiry))
    }

    /// Gamma (∂²V/∂S²) = e^(−qT)·φ(d₁) / (S·σ·√T). Same for calls and puts.
    pub fn gamma(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        df_q * norm_pdf(self.d1(strike, expiry)) / (self.spot * self.volatility * expiry.sqrt())
    }

    /// Vega (∂V/∂σ) = S·e^(−qT)·√T·φ(d₁). Same for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        let df_q = (-self.dividend_yield * expiry).exp();
        self.spot * df_q * expiry.sqrt() * norm_pdf(self.d1(strike, expiry))
    }

    /// Theta (∂V/∂t, calendar time), usually negative.
    ///
    /// θ = −S·e^(−qT)·φ(d₁)·σ/(2√T) − φ·r·K·e^(−rT)·N(φd₂) + φ·q·S·e^(−qT)·N(φd₁)
    pub fn theta(&self, strike: T, expiry: T, is_call: bool) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        let phi = Self::sign(is_call);
        let two = T::from(2.0).unwrap_or_else(T::nan);
        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);
        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();

        let decay = -(self.spot * df_q * norm_pdf(d1) * self.volatility) / (two * expiry.sqrt());
        decay - phi * self.rate * strike * df_r * norm_cdf(phi * d2)
            + phi * self.dividend_yield * self.spot * df_q * norm_cdf(phi * d1)
    }

    /// Rho (∂V/∂r) = φ·K·T·e^(−rT)·N(φd₂).
    pub fn rho(&self, strike: T, expiry: T, is_call: bool) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        let phi = Self::sign(is_call);
        let df_r = (-self.rate * expiry).exp();
        phi * strike * expiry * df_r * norm_cdf(phi * self.d2(strike, expiry))
    }

    /// Dividend rho (∂V/∂q) = −φ·S·T·e^(−qT)·N(φd₁).
    pub fn dividend_rho(&self, strike: T, expiry: T, is_call: bool) -> T {
        if Self::expired(expiry) {
            return T::zero();
        }
        let phi = Self::sign(is_call);
        let df_q = (-self.dividend_yield * expiry).exp();
        -phi * self.spot * expiry * df_q * norm_cdf(phi * self.d1(strike, expiry))
    }
}
