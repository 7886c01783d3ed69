//! Neutryx jump-diffusion CLI
//!
//! Prices European vanilla options under Merton jump-diffusion from a TOML
//! request file.
//!
//! # Commands
//!
//! - `neutryx-jd price --request <file>` - Price the option in a request
//! - `neutryx-jd check --request <file>` - Validate a request and show the
//!   extracted jump parameters
//!
//! Engine settings resolve as CLI flags, then `JD_*` environment variables,
//! then the request file, then defaults.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod market;

pub use error::{CliError, Result};

use std::path::Path;

use config::{file_log_level, CliOverrides, LogLevel};

/// Neutryx jump-diffusion pricing CLI
#[derive(Parser)]
#[command(name = "neutryx-jd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "JD_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option described by a request file
    Price {
        /// Path to the TOML request
        #[arg(short, long)]
        request: String,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Relative contribution at which the series stops
        #[arg(long)]
        relative_accuracy: Option<f64>,

        /// Maximum number of jump scenarios
        #[arg(long)]
        max_iterations: Option<u64>,

        /// Price scenarios in parallel batches
        #[arg(long)]
        parallel: bool,

        /// Price scenarios one at a time, even if the request asks for parallel
        #[arg(long, conflicts_with = "parallel")]
        sequential: bool,

        /// Scenarios per parallel batch
        #[arg(long)]
        batch_size: Option<usize>,
    },

    /// Validate a request file without pricing
    Check {
        /// Path to the TOML request
        #[arg(short, long)]
        request: String,
    },
}

/// Parallel mode requested on the command line; `None` defers to the request.
fn parallel_override(parallel: bool, sequential: bool) -> Option<bool> {
    match (parallel, sequential) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let request_path = match &cli.command {
        Commands::Price { request, .. } | Commands::Check { request } => request,
    };
    let level = match (&cli.log_level, cli.verbose) {
        (Some(level), _) => level.clone(),
        (None, true) => LogLevel::Debug.to_string(),
        (None, false) => file_log_level(Path::new(request_path))
            .unwrap_or_default()
            .to_string(),
    };
    init_tracing(&level);
    debug!("Verbose mode enabled");

    match cli.command {
        Commands::Price {
            request,
            format,
            relative_accuracy,
            max_iterations,
            parallel,
            sequential,
            batch_size,
        } => {
            let overrides = CliOverrides {
                relative_accuracy,
                max_iterations,
                parallel: parallel_override(parallel, sequential),
                batch_size,
                log_level: cli.log_level.clone(),
            };
            commands::price::run(&request, &overrides, &format)
                .with_context(|| format!("failed to price {}", request))
        }
        Commands::Check { request } => {
            commands::check::run(&request).with_context(|| format!("invalid request {}", request))
        }
    }
}
