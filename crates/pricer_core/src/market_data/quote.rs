//! Scalar market quotes.

use super::error::MarketDataError;

/// A named scalar market observable (spot, jump intensity, ...).
///
/// Quotes are plain values: a process holds its own copy, so re-marking a
/// quote never reaches into curves built from an earlier value.
///
/// # Example
///
/// ```
/// use pricer_core::market_data::SimpleQuote;
///
/// let mut q = SimpleQuote::new("spot", 100.0);
/// assert_eq!(q.value(), 100.0);
///
/// q.set_value(101.5);
/// assert_eq!(q.value(), 101.5);
/// assert!(q.checked_value().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleQuote {
    name: String,
    value: f64,
}

impl SimpleQuote {
    /// Create a quote with the given name and value.
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Quote name, used in error messages.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Replace the current value.
    #[inline]
    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    /// Current value, or `MarketDataError::InvalidQuote` if it is not finite.
    pub fn checked_value(&self) -> Result<f64, MarketDataError> {
        if self.value.is_finite() {
            Ok(self.value)
        } else {
            Err(MarketDataError::InvalidQuote {
                name: self.name.clone(),
                value: self.value,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_value_rejects_nan() {
        let q = SimpleQuote::new("jump_intensity", f64::NAN);
        match q.checked_value() {
            Err(MarketDataError::InvalidQuote { name, .. }) => assert_eq!(name, "jump_intensity"),
            other => panic!("Expected InvalidQuote, got {:?}", other),
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let original = SimpleQuote::new("spot", 100.0);
        let mut copy = original.clone();
        copy.set_value(50.0);
        assert_eq!(original.value(), 100.0);
        assert_eq!(copy.value(), 50.0);
    }
}
