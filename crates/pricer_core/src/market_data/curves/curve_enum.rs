//! Static dispatch over the concrete yield curves.

use super::{FlatCurve, InterpolatedCurve, YieldCurve};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete yield curve implementations.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::{CurveEnum, YieldCurve};
///
/// let curve = CurveEnum::flat(0.05_f64);
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum CurveEnum<T: Float> {
    /// Flat (constant rate) yield curve
    Flat(FlatCurve<T>),
    /// Interpolated yield curve with pillar points
    Interpolated(InterpolatedCurve<T>),
}

impl<T: Float> CurveEnum<T> {
    /// Create a flat curve variant.
    #[inline]
    pub fn flat(rate: T) -> Self {
        CurveEnum::Flat(FlatCurve::new(rate))
    }

    /// Return `true` for the flat variant.
    #[inline]
    pub fn is_flat(&self) -> bool {
        matches!(self, CurveEnum::Flat(_))
    }
}

impl<T: Float> YieldCurve<T> for CurveEnum<T> {
    #[inline]
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.discount_factor(t),
            CurveEnum::Interpolated(c) => c.discount_factor(t),
        }
    }

    #[inline]
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.zero_rate(t),
            CurveEnum::Interpolated(c) => c.zero_rate(t),
        }
    }

    #[inline]
    fn forward_rate(&self, t1: T, t2: T) -> Result<T, MarketDataError> {
        match self {
            CurveEnum::Flat(c) => c.forward_rate(t1, t2),
            CurveEnum::Interpolated(c) => c.forward_rate(t1, t2),
        }
    }
}

impl<T: Float> From<FlatCurve<T>> for CurveEnum<T> {
    fn from(curve: FlatCurve<T>) -> Self {
        CurveEnum::Flat(curve)
    }
}

impl<T: Float> From<InterpolatedCurve<T>> for CurveEnum<T> {
    fn from(curve: InterpolatedCurve<T>) -> Self {
        CurveEnum::Interpolated(curve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market_data::curves::CurveInterpolation;

    #[test]
    fn test_dispatch_matches_inner() {
        let inner = InterpolatedCurve::new(
            &[1.0, 2.0],
            &[0.01, 0.02],
            CurveInterpolation::Linear,
            true,
        )
        .unwrap();
        let wrapped: CurveEnum<f64> = inner.clone().into();
        assert!(!wrapped.is_flat());
        assert_eq!(
            wrapped.discount_factor(1.5).unwrap(),
            inner.discount_factor(1.5).unwrap()
        );
    }

    #[test]
    fn test_flat_constructor() {
        let curve = CurveEnum::flat(0.03_f64);
        assert!(curve.is_flat());
        assert_eq!(curve.zero_rate(2.0).unwrap(), 0.03);
    }
}
