//! Jump-diffusion engine configuration.
//!
//! Controls when the Poisson mixture is truncated and how the parallel
//! variant batches its scenarios.

use super::error::ConfigError;

/// Default relative contribution below which the series stops.
pub const DEFAULT_RELATIVE_ACCURACY: f64 = 1e-4;

/// Default cap on the number of mixture terms.
pub const DEFAULT_MAX_ITERATIONS: u64 = 100;

/// Default number of scenarios evaluated per parallel batch.
pub const DEFAULT_BATCH_SIZE: usize = 8;

/// Upper bound accepted for `max_iterations`.
pub const MAX_ITERATIONS: u64 = 100_000;

/// Truncation and batching parameters of a [`JumpDiffusionEngine`].
///
/// [`JumpDiffusionEngine`]: super::JumpDiffusionEngine
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::jump_diffusion::JumpDiffusionConfig;
///
/// let config = JumpDiffusionConfig::builder()
///     .relative_accuracy(1e-6)
///     .max_iterations(50)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.relative_accuracy(), 1e-6);
/// assert_eq!(config.max_iterations(), 50);
/// assert_eq!(config.parallel_batch_size(), 8);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JumpDiffusionConfig {
    /// Stop once a term's share of the running value is at most this.
    relative_accuracy: f64,
    /// Maximum number of terms evaluated, counting `i = 0`.
    max_iterations: u64,
    /// Scenarios per rayon batch in `calculate_parallel`.
    parallel_batch_size: usize,
}

impl Default for JumpDiffusionConfig {
    fn default() -> Self {
        Self {
            relative_accuracy: DEFAULT_RELATIVE_ACCURACY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            parallel_batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

impl JumpDiffusionConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> JumpDiffusionConfigBuilder {
        JumpDiffusionConfigBuilder::default()
    }

    /// Returns the relative accuracy threshold.
    #[inline]
    pub fn relative_accuracy(&self) -> f64 {
        self.relative_accuracy
    }

    /// Returns the maximum number of mixture terms.
    #[inline]
    pub fn max_iterations(&self) -> u64 {
        self.max_iterations
    }

    /// Returns the parallel batch size.
    #[inline]
    pub fn parallel_batch_size(&self) -> usize {
        self.parallel_batch_size
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `relative_accuracy` is negative or not finite
    /// - `max_iterations` is 0 or greater than 100,000
    /// - `parallel_batch_size` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.relative_accuracy.is_finite() || self.relative_accuracy < 0.0 {
            return Err(ConfigError::InvalidRelativeAccuracy(self.relative_accuracy));
        }
        if self.max_iterations == 0 || self.max_iterations > MAX_ITERATIONS {
            return Err(ConfigError::InvalidMaxIterations(self.max_iterations));
        }
        if self.parallel_batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.parallel_batch_size));
        }
        Ok(())
    }
}

/// Builder for [`JumpDiffusionConfig`].
///
/// Unset fields fall back to the defaults; the result is validated in
/// [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct JumpDiffusionConfigBuilder {
    relative_accuracy: Option<f64>,
    max_iterations: Option<u64>,
    parallel_batch_size: Option<usize>,
}

impl JumpDiffusionConfigBuilder {
    /// Sets the relative accuracy threshold.
    ///
    /// # Arguments
    ///
    /// * `relative_accuracy` - Finite, non-negative threshold
    #[inline]
    pub fn relative_accuracy(mut self, relative_accuracy: f64) -> Self {
        self.relative_accuracy = Some(relative_accuracy);
        self
    }

    /// Sets the maximum number of mixture terms.
    ///
    /// # Arguments
    ///
    /// * `max_iterations` - Number of terms in [1, 100_000]
    #[inline]
    pub fn max_iterations(mut self, max_iterations: u64) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Sets the number of scenarios priced per parallel batch.
    #[inline]
    pub fn parallel_batch_size(mut self, parallel_batch_size: usize) -> Self {
        self.parallel_batch_size = Some(parallel_batch_size);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field is out of range.
    pub fn build(self) -> Result<JumpDiffusionConfig, ConfigError> {
        let config = JumpDiffusionConfig {
            relative_accuracy: self
                .relative_accuracy
                .unwrap_or(DEFAULT_RELATIVE_ACCURACY),
            max_iterations: self.max_iterations.unwrap_or(DEFAULT_MAX_ITERATIONS),
            parallel_batch_size: self.parallel_batch_size.unwrap_or(DEFAULT_BATCH_SIZE),
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = JumpDiffusionConfig::builder().build().unwrap();
        assert_eq!(config, JumpDiffusionConfig::default());
        assert_eq!(config.relative_accuracy(), 1e-4);
        assert_eq!(config.max_iterations(), 100);
    }

    #[test]
    fn test_tiny_accuracy_is_valid() {
        let config = JumpDiffusionConfig::builder()
            .relative_accuracy(1e-30)
            .max_iterations(3)
            .build()
            .unwrap();
        assert_eq!(config.max_iterations(), 3);
    }

    #[test]
    fn test_invalid_accuracy() {
        for bad in [-1e-4, f64::NAN, f64::INFINITY] {
            let result = JumpDiffusionConfig::builder().relative_accuracy(bad).build();
            assert!(matches!(result, Err(ConfigError::InvalidRelativeAccuracy(_))));
        }
    }

    #[test]
    fn test_invalid_iterations() {
        let result = JumpDiffusionConfig::builder().max_iterations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidMaxIterations(0))));

        let result = JumpDiffusionConfig::builder()
            .max_iterations(MAX_ITERATIONS + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidMaxIterations(_))));
    }

    #[test]
    fn test_invalid_batch_size() {
        let result = JumpDiffusionConfig::builder().parallel_batch_size(0).build();
        assert_eq!(result, Err(ConfigError::InvalidBatchSize(0)));
    }
}
