//! Generalized Black-Scholes diffusion process.
//!
//! ```text
//! dS/S = (r(t) − q(t)) dt + σ(t, S) dW
//! ```
//!
//! The process only bundles its market inputs; pricing engines read the
//! curves they need and decide how to use them.

use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};

/// Diffusion-only process: spot, dividend curve, risk-free curve and
/// Black volatility.
///
/// # Examples
/// ```
/// use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::models::BlackScholesProcess;
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let dc = DayCountConvention::Actual365Fixed;
///
/// let process = BlackScholesProcess::new(
///     SimpleQuote::new("spot", 100.0),
///     YieldTermStructure::flat(today, 0.02, dc),
///     YieldTermStructure::flat(today, 0.05, dc),
///     BlackVolTermStructure::flat(today, 0.2, dc),
/// );
/// assert_eq!(process.spot().value(), 100.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlackScholesProcess {
    spot: SimpleQuote,
    dividend_curve: YieldTermStructure,
    risk_free_curve: YieldTermStructure,
    volatility: BlackVolTermStructure,
}

impl BlackScholesProcess {
    /// Assemble a process from its market inputs.
    pub fn new(
        spot: SimpleQuote,
        dividend_curve: YieldTermStructure,
        risk_free_curve: YieldTermStructure,
        volatility: BlackVolTermStructure,
    ) -> Self {
        Self {
            spot,
            dividend_curve,
            risk_free_curve,
            volatility,
        }
    }

    /// Process without dividends: the dividend curve is a flat zero curve
    /// sharing the risk-free curve's reference date and day count.
    pub fn without_dividends(
        spot: SimpleQuote,
        risk_free_curve: YieldTermStructure,
        volatility: BlackVolTermStructure,
    ) -> Self {
        let dividend_curve = YieldTermStructure::flat(
            risk_free_curve.reference_date(),
            0.0,
            risk_free_curve.day_count(),
        );
        Self::new(spot, dividend_curve, risk_free_curve, volatility)
    }

    /// Underlying spot quote.
    #[inline]
    pub fn spot(&self) -> &SimpleQuote {
        &self.spot
    }

    /// Continuous dividend yield curve.
    #[inline]
    pub fn dividend_curve(&self) -> &YieldTermStructure {
        &self.dividend_curve
    }

    /// Risk-free discount curve.
    #[inline]
    pub fn risk_free_curve(&self) -> &YieldTermStructure {
        &self.risk_free_curve
    }

    /// Black volatility term structure.
    #[inline]
    pub fn volatility(&self) -> &BlackVolTermStructure {
        &self.volatility
    }
}
