//! Error types for the jump-diffusion engine.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use thiserror::Error;

use crate::engines::EngineError;

/// Configuration error for [`JumpDiffusionConfig`](super::JumpDiffusionConfig).
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    /// Relative accuracy negative or not finite.
    #[error("Invalid relative accuracy {0}: must be finite and non-negative")]
    InvalidRelativeAccuracy(f64),
    /// Iteration cap outside [1, 100_000].
    #[error("Invalid max iterations {0}: must be in range [1, 100_000]")]
    InvalidMaxIterations(u64),
    /// Parallel batch size of zero.
    #[error("Invalid parallel batch size {0}: must be at least 1")]
    InvalidBatchSize(usize),
}

/// Failures of a jump-diffusion pricing call.
///
/// No partial results are returned alongside any of these.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::PricingError;
/// use pricer_pricing::jump_diffusion::JumpDiffusionError;
///
/// let err = JumpDiffusionError::AccuracyNotReached {
///     iterations: 3,
///     relative_accuracy: 1e-30,
///     last_contribution: 0.2,
///     running_value: 11.0,
/// };
/// assert!(err.to_string().contains("accuracy not reached"));
/// assert!(matches!(
///     PricingError::from(err),
///     PricingError::NumericalInstability(_)
/// ));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum JumpDiffusionError {
    /// The process has no jump-diffusion view.
    #[error("{process} process is not a jump-diffusion process")]
    NotJumpDiffusion {
        /// Name of the process supplied
        process: &'static str,
    },

    /// No diffusion engine was supplied.
    #[error("no base diffusion engine given")]
    MissingBaseEngine,

    /// The series was cut at `max_iterations` before converging.
    #[error(
        "accuracy not reached after {iterations} iterations: last contribution \
         {last_contribution:e} above {relative_accuracy:e} (running value {running_value})"
    )]
    AccuracyNotReached {
        /// Terms evaluated
        iterations: u64,
        /// Configured threshold
        relative_accuracy: f64,
        /// Relative contribution of the last term
        last_contribution: f64,
        /// Accumulated value when the cap was hit
        running_value: f64,
    },

    /// Scenario variance negative or not finite.
    #[error("invalid variance {variance} for scenario {iteration}")]
    InvalidScenarioVariance {
        /// Scenario index (jump count)
        iteration: u64,
        /// Total variance `variance + i·δ²`
        variance: f64,
    },

    /// Relative contribution could not be formed.
    #[error(
        "invalid contribution at scenario {iteration}: {numerator} over running value {running_value}"
    )]
    InvalidContribution {
        /// Scenario index (jump count)
        iteration: u64,
        /// Weighted scenario value
        numerator: f64,
        /// Accumulated value after the term
        running_value: f64,
    },

    /// Expiry not after the volatility reference date.
    #[error("non-positive time to expiry: t = {t}")]
    NonPositiveTime {
        /// Year fraction to expiry
        t: f64,
    },

    /// Jump parameter outside its domain.
    #[error("invalid jump parameter {name}: {value}")]
    InvalidJumpParameter {
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Invalid engine configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The diffusion engine failed on a scenario.
    #[error("Diffusion engine error: {0}")]
    Engine(#[from] EngineError),

    /// Market data lookup failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Jump-count distribution could not be built.
    #[error("Jump-count weights error: {0}")]
    Weights(#[from] AnalyticalError),
}

impl From<JumpDiffusionError> for PricingError {
    fn from(err: JumpDiffusionError) -> Self {
        match err {
            JumpDiffusionError::NotJumpDiffusion { .. } => {
                PricingError::UnsupportedInstrument(err.to_string())
            }
            JumpDiffusionError::AccuracyNotReached { .. }
            | JumpDiffusionError::InvalidContribution { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
            JumpDiffusionError::InvalidScenarioVariance { .. } => {
                PricingError::ModelFailure(err.to_string())
            }
            JumpDiffusionError::Engine(e) => e.into(),
            JumpDiffusionError::MarketData(e) => e.into(),
            JumpDiffusionError::Weights(e) => e.into(),
            JumpDiffusionError::MissingBaseEngine
            | JumpDiffusionError::NonPositiveTime { .. }
            | JumpDiffusionError::InvalidJumpParameter { .. }
            | JumpDiffusionError::Config(_) => PricingError::InvalidInput(err.to_string()),
        }
    }
}
