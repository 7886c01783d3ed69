//! Dated yield term structure.

use super::{CurveEnum, YieldCurve};
use crate::market_data::error::MarketDataError;
use crate::types::{Date, DayCountConvention};

/// Yield curve anchored at a reference date.
///
/// Converts dates to times with its own day count convention and delegates
/// to the wrapped [`CurveEnum`].
///
/// # Example
///
/// ```
/// use pricer_core::market_data::curves::YieldTermStructure;
/// use pricer_core::types::{Date, DayCountConvention};
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = YieldTermStructure::flat(today, 0.05, DayCountConvention::Actual365Fixed);
///
/// let expiry = Date::from_ymd(2026, 1, 1).unwrap();
/// let df = curve.discount(expiry).unwrap();
/// assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct YieldTermStructure {
    reference_date: Date,
    day_count: DayCountConvention,
    curve: CurveEnum<f64>,
}

impl YieldTermStructure {
    /// Wrap a curve with its reference date and day count.
    pub fn new(reference_date: Date, day_count: DayCountConvention, curve: CurveEnum<f64>) -> Self {
        Self {
            reference_date,
            day_count,
            curve,
        }
    }

    /// Flat continuously compounded curve.
    pub fn flat(reference_date: Date, rate: f64, day_count: DayCountConvention) -> Self {
        Self::new(reference_date, day_count, CurveEnum::flat(rate))
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

    /// Underlying time-indexed curve.
    #[inline]
    pub fn curve(&self) -> &CurveEnum<f64> {
        &self.curve
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

    /// Discount factor for `date`.
    pub fn discount(&self, date: Date) -> Result<f64, MarketDataError> {
        let t = self.time_from_reference(date)?;
        self.curve.discount_factor(t)
    }

    /// Continuously compounded zero rate to `date`.
    pub fn zero_rate(&self, date: Date) -> Result<f64, MarketDataError> {
        let t = self.time_from_reference(date)?;
        self.curve.zero_rate(t)
    }
}
