//! Merton (1976) jump-diffusion pricing as a Poisson mixture of diffusions.
//!
//! A pricing call runs three stages:
//!
//! 1. [`JumpParameters::extract`] reads jump and market parameters once.
//! 2. [`ScenarioBuilder`] turns a jump count `i` into a flat-curve diffusion.
//! 3. [`MixtureAccumulator`] weights each scenario's results by
//!    `P(N = i)` and decides when to stop.
//!
//! [`JumpDiffusionEngine`] drives the three stages over any
//! [`DiffusionEngine`](crate::engines::DiffusionEngine), sequentially or in
//! rayon batches.

mod accumulator;
mod arguments;
mod config;
mod engine;
mod error;
mod extractor;
mod parallel;
mod scenario;

pub use accumulator::{ConvergenceReport, MixtureAccumulator, MixtureState};
pub use arguments::JumpDiffusionArguments;
pub use config::{
    JumpDiffusionConfig, JumpDiffusionConfigBuilder, DEFAULT_BATCH_SIZE, DEFAULT_MAX_ITERATIONS,
    DEFAULT_RELATIVE_ACCURACY, MAX_ITERATIONS,
};
pub use engine::JumpDiffusionEngine;
pub use error::{ConfigError, JumpDiffusionError};
pub use extractor::JumpParameters;
pub use scenario::{Scenario, ScenarioBuilder};
