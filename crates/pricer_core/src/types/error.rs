//! Workspace-wide error categories and date errors.

use thiserror::Error;

/// Categorised pricing errors.
///
/// Module-level errors across the workspace collapse into these four
/// categories; the message carries the detailed cause.
///
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PricingError {
    /// Rejected market data, parameters or configuration
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A series or ratio left the finite range, or failed to settle
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// The model produced a state it cannot price from
    #[error("Model failure: {0}")]
    ModelFailure(String),

    /// The engine does not handle this product or process
    #[error("Unsupported instrument: {0}")]
    UnsupportedInstrument(String),
}

/// Date construction, arithmetic and parsing errors.
///
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Components do not name a calendar day.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year
        year: i32,
        /// Month, 1-12
        month: u32,
        /// Day of month
        day: u32,
    },

    /// Text is not an ISO `YYYY-MM-DD` date.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Adding days overflowed the calendar.
    #[error("Date arithmetic out of range")]
    OutOfRange,

    /// Day count name not in `ACT/365`, `ACT/360`, `30/360`.
    #[error("Unknown day count convention: {0}")]
    UnknownDayCount(String),
}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
