//! Price and sensitivities produced by a pricing engine.

/// Value and first/second-order sensitivities of a vanilla option.
///
/// Every field defaults to zero, which is also the starting point of a
/// weighted accumulation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::engines::OptionResults;
///
/// let term = OptionResults {
///     value: 10.0,
///     delta: 0.6,
///     ..OptionResults::default()
/// };
///
/// let mut total = OptionResults::default();
/// total.add_weighted(0.25, &term);
/// total.add_weighted(0.25, &term);
///
/// assert_eq!(total.value, 5.0);
/// assert_eq!(total.delta, 0.3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionResults {
    /// Present value.
    pub value: f64,
    /// ∂V/∂S.
    pub delta: f64,
    /// ∂²V/∂S².
    pub gamma: f64,
    /// ∂V/∂t per year of calendar time.
    pub theta: f64,
    /// ∂V/∂σ.
    pub vega: f64,
    /// ∂V/∂r on the risk-free zero rate.
    pub rho: f64,
    /// ∂V/∂q on the dividend zero rate.
    pub dividend_rho: f64,
}

impl OptionResults {
    /// Adds `weight · other` to every field.
    #[inline]
    pub fn add_weighted(&mut self, weight: f64, other: &OptionResults) {
        self.value += weight * other.value;
        self.delta += weight * other.delta;
        self.gamma += weight * other.gamma;
        self.theta += weight * other.theta;
        self.vega += weight * other.vega;
        self.rho += weight * other.rho;
        self.dividend_rho += weight * other.dividend_rho;
    }

    /// Returns whether every field is finite.
    pub fn is_finite(&self) -> bool {
        [
            self.value,
            self.delta,
            self.gamma,
            self.theta,
            self.vega,
            self.rho,
            self.dividend_rho,
        ]
        .iter()
        .all(|x| x.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> OptionResults {
        OptionResults {
            value: 1.0,
            delta: 2.0,
            gamma: 3.0,
            theta: -4.0,
            vega: 5.0,
            rho: 6.0,
            dividend_rho: -7.0,
        }
    }

    #[test]
    fn test_default_is_zero() {
        let r = OptionResults::default();
        assert_eq!(r.value, 0.0);
        assert_eq!(r.dividend_rho, 0.0);
    }

    #[test]
    fn test_add_weighted_touches_all_fields() {
        let mut acc = OptionResults::default();
        acc.add_weighted(0.5, &sample());
        assert_eq!(
            acc,
            OptionResults {
                value: 0.5,
                delta: 1.0,
                gamma: 1.5,
                theta: -2.0,
                vega: 2.5,
                rho: 3.0,
                dividend_rho: -3.5,
            }
        );
    }

    #[test]
    fn test_is_finite() {
        let mut r = sample();
        assert!(r.is_finite());
        r.gamma = f64::NAN;
        assert!(!r.is_finite());
    }
}
