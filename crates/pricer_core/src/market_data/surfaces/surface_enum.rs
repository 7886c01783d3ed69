//! Static dispatch over the concrete volatility surfaces.

use super::{FlatVol, VarianceCurveVol, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Static dispatch enum wrapping concrete volatility surfaces.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolSurfaceEnum, VolatilitySurface};
///
/// let surface = VolSurfaceEnum::flat(0.2_f64);
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum VolSurfaceEnum<T: Float> {
    /// Constant volatility
    Flat(FlatVol<T>),
    /// Term structure interpolated in total variance
    VarianceCurve(VarianceCurveVol<T>),
}

impl<T: Float> VolSurfaceEnum<T> {
    /// Create a flat surface variant.
    #[inline]
    pub fn flat(sigma: T) -> Self {
        VolSurfaceEnum::Flat(FlatVol::new(sigma))
    }
}

impl<T: Float> VolatilitySurface<T> for VolSurfaceEnum<T> {
    #[inline]
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolSurfaceEnum::Flat(s) => s.volatility(strike, expiry),
            VolSurfaceEnum::VarianceCurve(s) => s.volatility(strike, expiry),
        }
    }

    #[inline]
    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        match self {
            VolSurfaceEnum::Flat(s) => s.black_variance(strike, expiry),
            VolSurfaceEnum::VarianceCurve(s) => s.black_variance(strike, expiry),
        }
    }

    fn strike_domain(&self) -> (T, T) {
        match self {
            VolSurfaceEnum::Flat(s) => s.strike_domain(),
            VolSurfaceEnum::VarianceCurve(s) => s.strike_domain(),
        }
    }

    fn expiry_domain(&self) -> (T, T) {
        match self {
            VolSurfaceEnum::Flat(s) => s.expiry_domain(),
            VolSurfaceEnum::VarianceCurve(s) => s.expiry_domain(),
        }
    }
}

impl<T: Float> From<FlatVol<T>> for VolSurfaceEnum<T> {
    fn from(surface: FlatVol<T>) -> Self {
        VolSurfaceEnum::Flat(surface)
    }
}

impl<T: Float> From<VarianceCurveVol<T>> for VolSurfaceEnum<T> {
    fn from(surface: VarianceCurveVol<T>) -> Self {
        VolSurfaceEnum::VarianceCurve(surface)
    }
}
