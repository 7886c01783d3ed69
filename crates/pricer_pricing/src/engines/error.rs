//! Error types for diffusion pricing engines.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

/// Failures raised by a diffusion engine while validating or calculating.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::engines::EngineError;
///
/// let err = EngineError::UnsupportedExercise { style: "American" };
/// assert!(err.to_string().contains("American"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// An argument slot was never filled.
    #[error("Missing engine argument: {0}")]
    MissingArgument(&'static str),

    /// The engine cannot price this exercise style.
    #[error("Unsupported exercise style: {style}")]
    UnsupportedExercise {
        /// Exercise style name
        style: &'static str,
    },

    /// Spot quote is not a positive number.
    #[error("Invalid spot: S = {spot}")]
    InvalidSpot {
        /// Offending spot value
        spot: f64,
    },

    /// `calculate` produced a non-finite result.
    #[error("Non-finite engine result for {field}")]
    NonFiniteResult {
        /// First non-finite field
        field: &'static str,
    },

    /// Curve or surface lookup failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Closed-form model rejected its inputs.
    #[error("Analytical model error: {0}")]
    Analytical(#[from] AnalyticalError),
}

impl From<EngineError> for PricingError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnsupportedExercise { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            EngineError::NonFiniteResult { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            EngineError::MarketData(e) => e.into(),
            EngineError::Analytical(e) => e.into(),
            EngineError::MissingArgument(_) | EngineError::InvalidSpot { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
        }
    }
}
