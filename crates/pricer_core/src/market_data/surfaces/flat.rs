//! Flat volatility surface implementation.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Constant implied volatility for every strike and expiry.
///
/// Each jump-count scenario prices under one of these, carrying the
/// scenario's adjusted volatility.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(80.0, 0.5).unwrap(), 0.20);
/// assert_eq!(surface.volatility(120.0, 2.0).unwrap(), 0.20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatVol<T: Float> {
    sigma: T,
}

impl<T: Float> FlatVol<T> {
    /// Construct a flat volatility surface.
    #[inline]
    pub fn new(sigma: T) -> Self {
        Self { sigma }
    }

    /// Return the constant volatility.
    #[inline]
    pub fn sigma(&self) -> T {
        self.sigma
    }
}

impl<T: Float> VolatilitySurface<T> for FlatVol<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        Ok(self.sigma)
    }

    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn expiry_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }
}
