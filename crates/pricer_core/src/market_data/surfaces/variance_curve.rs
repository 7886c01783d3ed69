//! Strike-independent volatility term structure interpolated in total variance.

use super::traits::check_query;
use super::VolatilitySurface;
use crate::market_data::error::MarketDataError;
use crate::market_data::pillars;
use num_traits::Float;

/// ATM volatility term structure with linear interpolation in total variance.
///
/// Total variance is anchored at zero for `T = 0`, interpolated linearly
/// between expiry pillars, and extrapolated at the last pillar's
/// volatility when `allow_extrapolation` is set.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::{VarianceCurveVol, VolatilitySurface};
///
/// let surface = VarianceCurveVol::from_volatilities(
///     &[0.5_f64, 1.0, 2.0],
///     &[0.25, 0.20, 0.18],
///     true,
/// ).unwrap();
///
/// // Pillars are reproduced exactly
/// assert!((surface.volatility(100.0, 1.0).unwrap() - 0.20).abs() < 1e-14);
///
/// // Between 1y and 2y the total variance is linear
/// let var = surface.black_variance(100.0, 1.5).unwrap();
/// let expected = 0.5 * (0.20_f64 * 0.20) + 0.5 * (0.18_f64 * 0.18 * 2.0);
/// assert!((var - expected).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct VarianceCurveVol<T: Float> {
    expiries: Vec<T>,
    variances: Vec<T>,
    allow_extrapolation: bool,
}

impl<T: Float> VarianceCurveVol<T> {
    /// Construct from expiry and total-variance pillars.
    ///
    /// # Errors
    ///
    /// - `MarketDataError::InsufficientData` / `UnsortedPillars` for bad
    ///   expiry pillars
    /// - `MarketDataError::InvalidVariance` if a variance is negative or
    ///   smaller than the previous pillar's
    pub fn new(
        expiries: &[T],
        variances: &[T],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        pillars::validate(expiries, variances)?;

        let mut previous = T::zero();
        for (&t, &v) in expiries.iter().zip(variances) {
            if !v.is_finite() || v < previous {
                return Err(MarketDataError::InvalidVariance {
                    expiry: t.to_f64().unwrap_or(f64::NAN),
                    variance: v.to_f64().unwrap_or(f64::NAN),
                });
            }
            previous = v;
        }

        Ok(Self {
            expiries: expiries.to_vec(),
            variances: variances.to_vec(),
            allow_extrapolation,
        })
    }

    /// Construct from expiry and Black volatility pillars.
    pub fn from_volatilities(
        expiries: &[T],
        vols: &[T],
        allow_extrapolation: bool,
    ) -> Result<Self, MarketDataError> {
        if vols.len() != expiries.len() {
            return Err(MarketDataError::InsufficientData {
                got: vols.len(),
                need: expiries.len(),
            });
        }
        let variances: Vec<T> = expiries
            .iter()
            .zip(vols)
            .map(|(&t, &v)| v * v * t)
            .collect();
        Self::new(expiries, &variances, allow_extrapolation)
    }

    /// Expiry pillars in years.
    #[inline]
    pub fn expiries(&self) -> &[T] {
        &self.expiries
    }

    fn total_variance(&self, expiry: T) -> Result<T, MarketDataError> {
        let first = self.expiries[0];
        let last_idx = self.expiries.len() - 1;
        let last = self.expiries[last_idx];

        if expiry <= first {
            return Ok(self.variances[0] * expiry / first);
        }
        if expiry > last {
            if !self.allow_extrapolation {
                return Err(pillars::out_of_bounds(&self.expiries, expiry));
            }
            return Ok(self.variances[last_idx] * expiry / last);
        }

        let (i, w) = pillars::bracket(&self.expiries, expiry);
        Ok(self.variances[i] * (T::one() - w) + self.variances[i + 1] * w)
    }
}

impl<T: Float> VolatilitySurface<T> for VarianceCurveVol<T> {
    fn volatility(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        if expiry == T::zero() {
            return Ok((self.variances[0] / self.expiries[0]).sqrt());
        }
        Ok((self.total_variance(expiry)? / expiry).sqrt())
    }

    fn black_variance(&self, strike: T, expiry: T) -> Result<T, MarketDataError> {
        check_query(strike, expiry)?;
        self.total_variance(expiry)
    }

    fn strike_domain(&self) -> (T, T) {
        (T::zero(), T::infinity())
    }

    fn expiry_domain(&self) -> (T, T) {
        let upper = if self.allow_extrapolation {
            T::infinity()
        } else {
            self.expiries[self.expiries.len() - 1]
        };
        (T::zero(), upper)
    }
}
