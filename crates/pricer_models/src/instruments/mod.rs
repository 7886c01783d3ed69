//! Vanilla option building blocks.
//!
//! This module provides:
//! - [`PayoffType`] and [`PlainVanillaPayoff`]: call/put against a fixed strike
//! - [`Exercise`]: European, American and Bermudan exercise with `last_date()`
//! - [`InstrumentError`]: construction errors

pub mod error;
pub mod exercise;
pub mod payoff;

pub use error::InstrumentError;
pub use exercise::{Exercise, ExerciseDates};
pub use payoff::{PayoffType, PlainVanillaPayoff};
