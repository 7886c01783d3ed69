//! Dated Black volatility term structure.

use super::{VolSurfaceEnum, VolatilitySurface};
use crate::market_data::error::MarketDataError;
use crate::types::{Date, DayCountConvention};

/// Volatility surface anchored at a reference date.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::surfaces::BlackVolTermStructure;
/// use pricer_core::types::{Date, DayCountConvention};
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let vol = BlackVolTermStructure::flat(today, 0.2, DayCountConvention::Actual365Fixed);
///
/// let expiry = Date::from_ymd(2026, 1, 1).unwrap();
/// let var = vol.black_variance(expiry, 100.0).unwrap();
/// assert!((var - 0.04).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BlackVolTermStructure {
    reference_date: Date,
    day_count: DayCountConvention,
    surface: VolSurfaceEnum<f64>,
}

impl BlackVolTermStructure {
    /// Wrap a surface with its reference date and day count.
    pub fn new(
        reference_date: Date,
        day_count: DayCountConvention,
        surface: VolSurfaceEnum<f64>,
    ) -> Self {
        Self {
            reference_date,
            day_count,
            surface,
        }
    }

    /// Flat volatility.
    pub fn flat(reference_date: Date, sigma: f64, day_count: DayCountConvention) -> Self {
        Self::new(reference_date, day_count, VolSurfaceEnum::flat(sigma))
    }

    /// Reference date (t = 0).
    #[inline]
    pub fn reference_date(&self) -> Date {
        self.reference_date
    }

    /// Day count used to convert dates to times.
    #[inline]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Underlying time-indexed surface.
    #[inline]
    pub fn surface(&self) -> &VolSurfaceEnum<f64> {
        &self.surface
    }

    /// Year fraction from the reference date to `date`.
    ///
    /// # Errors
    /// `MarketDataError::DateBeforeReference` if `date` precedes the
    /// reference date.
    pub fn time_from_reference(&self, date: Date) -> Result<f64, MarketDataError> {
        if date < self.reference_date {
            return Err(MarketDataError::DateBeforeReference {
                date,
                reference: self.reference_date,
            });
        }
        Ok(self.day_count.year_fraction(self.reference_date, date))
    }

    /// Total Black variance to `date` at `strike`.
    pub fn black_variance(&self, date: Date, strike: f64) -> Result<f64, MarketDataError> {
        let t = self.time_from_reference(date)?;
        self.surface.black_variance(strike, t)
    }

    /// Black volatility to `date` at `strike`.
    pub fn black_vol(&self, date: Date, strike: f64) -> Result<f64, MarketDataError> {
        let t = self.time_from_reference(date)?;
        self.surface.volatility(strike, t)
    }
}
