//! Pillar validation and bracketing shared by curves and surfaces.

use super::error::MarketDataError;
use num_traits::Float;

/// Check that `times` has at least two strictly increasing, positive pillars
/// and that `values` matches it in length.
pub(crate) fn validate<T: Float>(times: &[T], values: &[T]) -> Result<(), MarketDataError> {
    if times.len() < 2 {
        return Err(MarketDataError::InsufficientData {
            got: times.len(),
            need: 2,
        });
    }
    if values.len() != times.len() {
        return Err(MarketDataError::InsufficientData {
            got: values.len(),
            need: times.len(),
        });
    }
    for (i, &t) in times.iter().enumerate() {
        if t <= T::zero() || (i > 0 && t <= times[i - 1]) {
            return Err(MarketDataError::UnsortedPillars {
                index: i,
                t: t.to_f64().unwrap_or(f64::NAN),
            });
        }
    }
    Ok(())
}

/// Find the segment `[times[i], times[i + 1]]` containing `t` and the
/// linear weight of the right end.
///
/// `t` must lie inside the pillar domain.
pub(crate) fn bracket<T: Float>(times: &[T], t: T) -> (usize, T) {
    let last = times.len() - 2;
    let i = times
        .windows(2)
        .position(|w| t <= w[1])
        .unwrap_or(last);
    let w = (t - times[i]) / (times[i + 1] - times[i]);
    (i, w)
}

/// Build an `OutOfBounds` error for `t` against the pillar domain.
pub(crate) fn out_of_bounds<T: Float>(times: &[T], t: T) -> MarketDataError {
    MarketDataError::OutOfBounds {
        x: t.to_f64().unwrap_or(f64::NAN),
        min: times[0].to_f64().unwrap_or(f64::NAN),
        max: times[times.len() - 1].to_f64().unwrap_or(f64::NAN),
    }
}
