//! Normal and Poisson distribution functions.
//!
//! This module provides:
//! - `norm_cdf`, `norm_pdf`: Standard normal CDF and density
//! - [`JumpCountWeights`]: Probability of observing exactly `i` jumps
//! - [`PoissonWeights`]: Poisson jump-count probabilities backed by `statrs`

use num_traits::Float;
use statrs::distribution::{Discrete, Poisson};
use statrs::function::erf::erfc;

use super::error::AnalyticalError;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½·erfc(−x/√2), evaluated in double precision.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.96_f64) - 0.9750021).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let x = x.to_f64().unwrap_or(f64::NAN);
    T::from(0.5 * erfc(-x / std::f64::consts::SQRT_2)).unwrap_or_else(T::nan)
}

/// Standard normal probability density function.
///
/// φ(x) = (1/√(2π))·exp(−x²/2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap_or_else(T::nan);
    let half = T::from(0.5).unwrap_or_else(T::nan);
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

/// Source of jump-count probabilities.
///
/// `weight(i)` returns P(N = i) for the number of jumps N over the option's
/// life. Implementations must return values in `[0, 1]` whose partial sums
/// never exceed one.
pub trait JumpCountWeights {
    /// Probability of exactly `jumps` jumps.
    fn weight(&self, jumps: u64) -> f64;
}

#[derive(Debug, Clone)]
enum PoissonKind {
    /// Mean zero: all mass on zero jumps.
    PointMass,
    Poisson(Poisson),
}

/// Poisson jump-count probabilities, P(N = i) = e^(−m)·mⁱ/i!.
///
/// A mean of exactly zero is accepted and puts all the mass on `i = 0`.
///
/// # Examples
/// ```
/// use pricer_models::analytical::{JumpCountWeights, PoissonWeights};
///
/// let weights = PoissonWeights::new(1.5).unwrap();
/// assert!((weights.weight(0) - (-1.5_f64).exp()).abs() < 1e-15);
///
/// let none = PoissonWeights::new(0.0).unwrap();
/// assert_eq!(none.weight(0), 1.0);
/// assert_eq!(none.weight(3), 0.0);
///
/// assert!(PoissonWeights::new(-1.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct PoissonWeights {
    mean: f64,
    kind: PoissonKind,
}

impl PoissonWeights {
    /// Create the distribution with mean `mean`.
    ///
    /// # Errors
    /// `AnalyticalError::InvalidPoissonMean` if `mean` is negative or not
    /// finite.
    pub fn new(mean: f64) -> Result<Self, AnalyticalError> {
        if !mean.is_finite() || mean < 0.0 {
            return Err(AnalyticalError::InvalidPoissonMean { mean });
        }
        let kind = if mean == 0.0 {
            PoissonKind::PointMass
        } else {
            let poisson =
                Poisson::new(mean).map_err(|e| AnalyticalError::NumericalInstability {
                    message: e.to_string(),
                })?;
            PoissonKind::Poisson(poisson)
        };
        Ok(Self { mean, kind })
    }

    /// Distribution mean.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }
}

impl JumpCountWeights for PoissonWeights {
    fn weight(&self, jumps: u64) -> f64 {
        match &self.kind {
            PoissonKind::PointMass => {
                if jumps == 0 {
                    1.0
                } else {
                    0.0
                }
            }
            PoissonKind::Poisson(p) => p.pmf(jumps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ==========================================================
    // Normal distribution tests
    // ==========================================================

    #[test]
    fn test_norm_cdf_symmetry() {
        for x in [-3.0, -1.0, -0.25, 0.0, 0.5, 2.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_norm_cdf_known_values() {
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841_344_746_068_543, epsilon = 1e-12);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022_750_131_948_179, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_pdf_known_value() {
        assert_relative_eq!(norm_pdf(1.0_f64), 0.241_970_724_519_143, epsilon = 1e-12);
    }

    #[test]
    fn test_norm_cdf_f32() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-6);
    }

    // ==========================================================
    // Poisson weight tests
    // ==========================================================

    #[test]
    fn test_poisson_matches_closed_form() {
        let m: f64 = 0.923;
        let weights = PoissonWeights::new(m).unwrap();
        let mut factorial = 1.0;
        for i in 0..10u64 {
            if i > 0 {
                factorial *= i as f64;
            }
            let expected = (-m).exp() * m.powi(i as i32) / factorial;
            assert_relative_eq!(weights.weight(i), expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_poisson_rejects_nan() {
        assert!(matches!(
            PoissonWeights::new(f64::NAN),
            Err(AnalyticalError::InvalidPoissonMean { .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_partial_sums_monotone_and_bounded(mean in 0.0f64..20.0) {
            let weights = PoissonWeights::new(mean).unwrap();
            let mut total = 0.0;
            for i in 0..200u64 {
                let w = weights.weight(i);
                prop_assert!(w >= 0.0);
                let next = total + w;
                prop_assert!(next >= total);
                prop_assert!(next <= 1.0 + 1e-12);
                total = next;
            }
            prop_assert!((total - 1.0).abs() < 1e-9);
        }
    }
}
