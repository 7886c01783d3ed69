//! Market data error types.
//!
//! Structured errors for quote, yield curve and volatility lookups.

use crate::types::{Date, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidMaturity`: Negative time to maturity
/// - `InvalidStrike`: Non-positive or non-finite strike
/// - `InvalidExpiry`: Negative time to expiry
/// - `OutOfBounds`: Query outside the pillar domain with extrapolation off
/// - `InsufficientData`: Not enough pillars for construction
/// - `UnsortedPillars`: Pillars not strictly increasing
/// - `InvalidVariance`: Negative or decreasing total variance pillar
/// - `DateBeforeReference`: Dated query earlier than the reference date
/// - `InvalidQuote`: Quote holding a non-finite value
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Invalid maturity (negative time).
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid expiry (negative).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Query point outside valid domain.
    #[error("Out of bounds: {x} not in [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Pillar times not strictly increasing and positive.
    #[error("Pillar {index} is not strictly increasing and positive: t = {t}")]
    UnsortedPillars {
        /// Index of the offending pillar
        index: usize,
        /// Offending pillar time
        t: f64,
    },

    /// Total variance pillar is negative or decreases in time.
    #[error("Invalid total variance {variance} at expiry {expiry}")]
    InvalidVariance {
        /// Pillar expiry in years
        expiry: f64,
        /// Offending total variance
        variance: f64,
    },

    /// Dated query earlier than the term structure's reference date.
    #[error("Date {date} is before reference date {reference}")]
    DateBeforeReference {
        /// Queried date
        date: Date,
        /// Term structure reference date
        reference: Date,
    },

    /// Quote with no usable value.
    #[error("Invalid quote '{name}': {value}")]
    InvalidQuote {
        /// Quote name
        name: String,
        /// Quote value
        value: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
