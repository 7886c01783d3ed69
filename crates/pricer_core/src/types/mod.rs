//! Time and error types.
//!
//! This module provides:
//! - `time`: `Date` and `DayCountConvention`
//! - `error`: `PricingError` and `DateError`
//!
//! # Re-exports
//!
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, PricingError};
pub use time::{Date, DayCountConvention};
