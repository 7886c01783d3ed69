//! Interpolated yield curve implementation.

use super::YieldCurve;
use crate::market_data::error::MarketDataError;
use crate::market_data::pillars;
use num_traits::Float;

/// Interpolation method for yield curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurveInterpolation {
    /// Linear interpolation on zero rates.
    #[default]
    Linear,

    /// Linear interpolation on log discount factors (piecewise constant
    /// forward rates).
    LogLinear,
}

/// Yield curve defined by zero-rate pillars.
///
/// Beyond the pillar domain the boundary zero rate is held flat when
/// `allow_extrapolation` is set; otherwise lookups fail with
/// `MarketDataError::OutOfBounds`. `t = 0` always discounts to 1.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{YieldCurve, InterpolatedCurve, CurveInterpolation};
///
/// let curve = InterpolatedCurve::new(
///     &[0.5_f64, 1.0, 2.0],
///     &[0.02, 0.03, 0.04],
///     CurveInterpolation::Linear,
///     false,
/// ).unwrap();
///
/// let r = curve.zero_rate(1.5).unwrap();
/// assert!((r - 0.035).abs() < 1e-12);
/// assert!(curve.discount_factor(3.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolatedCurve<T: Float> {
    tenors: Vec<T>,
    rates: Vec<T>,
    method: CurveInterpolation,
    allow_extrapolation: bool,
}

impl<T: Float> InterpolatedCurve<T> {
    /// Construct a curve from tenor and zero-rate pillars.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InsufficientData` for fewer than two pillars or
    ///   mismatched lengths
    /// - `MarketDataError::UnsortedPillars` if tenors are not strictly
    ///   increasing and positive
    pub fn new(
        tenors: &[T],
        rates: &[T],
        method: CurveInterpolation,
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        pillars::validate(tenors, rates)?;
        Ok(Self {
            tenors: tenors.to_vec(),
            rates: rates.to_vec(),
            method,
            allow_extrapolation,
        })
    }

    /// Return the tenor domain `(t_min, t_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.tenors[0], self.tenors[self.tenors.len() - 1])
    }

    /// Return the interpolation method.
    #[inline]
    pub fn method(&self) -> CurveInterpolation {
        self.method
    }

    /// Return whether flat extrapolation is allowed.
    #[inline]
    pub fn allow_extrapolation(&self) -> bool {
        self.allow_extrapolation
    }

    fn log_discount(&self, t: T) -> Result<T, MarketDataError> {
        let (t_min, t_max) = self.domain();
        if t < t_min || t > t_max {
            if !self.allow_extrapolation {
                return Err(pillars::out_of_bounds(&self.tenors, t));
            }
            let rate = if t < t_min {
                self.rates[0]
            } else {
                self.rates[self.rates.len() - 1]
            };
            return Ok(-rate * t);
        }

        let (i, w) = pillars::bracket(&self.tenors, t);
        let one = T::one();
        match self.method {
            CurveInterpolation::Linear => {
                let rate = self.rates[i] * (one - w) + self.rates[i + 1] * w;
                Ok(-rate * t)
            }
            CurveInterpolation::LogLinear => {
                let left = -self.rates[i] * self.tenors[i];
                let right = -self.rates[i + 1] * self.tenors[i + 1];
                Ok(left * (one - w) + right * w)
            }
        }
    }
}

impl<T: Float> YieldCurve<T> for InterpolatedCurve<T> {
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        if t == T::zero() {
            return Ok(T::one());
        }
        Ok(self.log_discount(t)?.exp())
    }
}
