//! Volatility surface trait definition.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Black implied volatility indexed by strike and time to expiry.
///
/// # Contract
///
/// - `volatility(strike, expiry)` returns σ(K, T) for `K > 0`, `T >= 0`
/// - `black_variance(strike, expiry)` returns the total variance σ²T
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
///
/// let surface = FlatVol::new(0.20_f64);
/// assert_eq!(surface.volatility(100.0, 1.0).unwrap(), 0.20);
/// assert!((surface.black_variance(100.0, 2.0).unwrap() - 0.08).abs() < 1e-15);
/// ```
pub trait VolatilitySurface<T: Float> {
    /// Implied volatility for the given strike and expiry.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InvalidStrike` if the strike is not positive
    /// - `MarketDataError::InvalidExpiry` if the expiry is negative
    /// - `MarketDataError::OutOfBounds` outside the surface domain
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError>;

    /// Total Black variance σ²(K, T)·T.
    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        let sigma = self.volatility(strike, expiry)?;
        Ok(sigma * sigma * expiry)
    }

    /// Valid strike range `(K_min, K_max)`.
    fn strike_domain(&self) -> (T, T);

    /// Valid expiry range `(T_min, T_max)`.
    fn expiry_domain(&self) -> (T, T);
}

/// Reject non-positive or non-finite strikes and negative expiries.
pub(crate) fn check_query<T: Float>(strike: T, expiry: T) -> Result<(), MarketDataError> {
    if !strike.is_finite() || strike <= T::zero() {
        return Err(MarketDataError::InvalidStrike {
            strike: strike.to_f64().unwrap_or(f64::NAN),
        });
    }
    if expiry.is_nan() || expiry < T::zero() {
        return Err(MarketDataError::InvalidExpiry {
            expiry: expiry.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}
