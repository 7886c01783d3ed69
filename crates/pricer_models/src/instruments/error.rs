//! Instrument error types.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument construction errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive or not finite
/// - `InvalidExerciseSchedule`: Exercise dates empty or out of order
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Exercise dates are empty or not increasing.
    #[error("Invalid exercise schedule: {message}")]
    InvalidExerciseSchedule {
        /// Description of the schedule problem
        message: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
