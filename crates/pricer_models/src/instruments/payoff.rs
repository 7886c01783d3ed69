//! Vanilla payoff definitions.

use std::fmt;
use std::str::FromStr;

use super::error::InstrumentError;

/// Type of vanilla option payoff.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Call.intrinsic(110.0, 100.0), 10.0);
/// assert_eq!(PayoffType::Put.intrinsic(110.0, 100.0), 0.0);
/// assert_eq!("put".parse::<PayoffType>().unwrap(), PayoffType::Put);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Intrinsic value at spot `spot` and strike `strike`.
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            PayoffType::Call => (spot - strike).max(0.0),
            PayoffType::Put => (strike - spot).max(0.0),
        }
    }

    /// Returns whether this is a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns whether this is a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }
}

impl fmt::Display for PayoffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayoffType::Call => write!(f, "Call"),
            PayoffType::Put => write!(f, "Put"),
        }
    }
}

impl FromStr for PayoffType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "call" | "c" => Ok(PayoffType::Call),
            "put" | "p" => Ok(PayoffType::Put),
            _ => Err(format!("Unknown payoff type: {}", s)),
        }
    }
}

/// Call or put paying against a fixed strike.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{PayoffType, PlainVanillaPayoff};
///
/// let payoff = PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap();
/// assert_eq!(payoff.value(120.0), 20.0);
/// assert!(PlainVanillaPayoff::new(PayoffType::Put, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainVanillaPayoff {
    payoff_type: PayoffType,
    strike: f64,
}

impl PlainVanillaPayoff {
    /// Creates a payoff.
    ///
    /// # Errors
    /// `InstrumentError::InvalidStrike` if the strike is not positive and finite.
    pub fn new(payoff_type: PayoffType, strike: f64) -> Result<Self, InstrumentError> {
        if !strike.is_finite() || strike <= 0.0 {
            return Err(InstrumentError::InvalidStrike { strike });
        }
        Ok(Self {
            payoff_type,
            strike,
        })
    }

    /// Call or put.
    #[inline]
    pub fn payoff_type(&self) -> PayoffType {
        self.payoff_type
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Payoff at terminal spot `spot`.
    #[inline]
    pub fn value(&self, spot: f64) -> f64 {
        self.payoff_type.intrinsic(spot, self.strike)
    }
}
