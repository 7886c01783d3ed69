//! CLI error types
//!
//! Library errors from market data, instruments and the pricing engine are
//! folded into a [`PricingError`] category as they cross into the CLI; the
//! category prefixes the detailed message.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use pricer_models::instruments::InstrumentError;
use pricer_pricing::jump_diffusion::JumpDiffusionError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Request file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Bad command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Categorised library failure
    #[error("{0}")]
    Pricing(#[from] PricingError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<MarketDataError> for CliError {
    fn from(err: MarketDataError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<InstrumentError> for CliError {
    fn from(err: InstrumentError) -> Self {
        CliError::Pricing(err.into())
    }
}

impl From<JumpDiffusionError> for CliError {
    fn from(err: JumpDiffusionError) -> Self {
        CliError::Pricing(err.into())
    }
}

/// CLI result alias
pub type Result<T> = std::result::Result<T, CliError>;
