//! Price command implementation
//!
//! Prices one European option under Merton jump-diffusion with the
//! closed-form Black-Scholes engine as the per-scenario pricer.

use std::path::Path;
use std::str::FromStr;

use pricer_pricing::engines::{AnalyticEuropeanEngine, OptionResults};
use pricer_pricing::jump_diffusion::{ConvergenceReport, JumpDiffusionEngine};
use serde::Serialize;
use tracing::info;

use crate::config::{build_config, CliOverrides, PricingRequest};
use crate::market::{engine_config, jump_arguments};
use crate::{CliError, Result};

/// Output formats for the price command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, table",
                other
            ))),
        }
    }
}

/// Priced option with its convergence record
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub payoff: String,
    pub strike: f64,
    pub expiry: String,
    pub results: OptionResults,
    pub convergence: ConvergenceReport,
}

/// Price a validated request
pub fn price_request(request: &PricingRequest) -> Result<PriceReport> {
    let config = engine_config(&request.engine)?;
    let args = jump_arguments(request)?;
    let mut engine = JumpDiffusionEngine::new(AnalyticEuropeanEngine::new(), config);

    let outcome = if request.engine.parallel {
        engine.calculate_parallel(&args, AnalyticEuropeanEngine::new)
    } else {
        engine.calculate(&args)
    };
    let results = outcome?;
    let convergence = engine
        .last_report()
        .cloned()
        .unwrap_or_default();

    Ok(PriceReport {
        payoff: request.option.payoff.to_string().to_lowercase(),
        strike: request.option.strike,
        expiry: request.option.expiry.to_string(),
        results,
        convergence,
    })
}

/// Render a report as a fixed-width table
pub fn render_table(report: &PriceReport) -> String {
    let r = &report.results;
    let c = &report.convergence;
    let rows = [
        ("Value", r.value),
        ("Delta", r.delta),
        ("Gamma", r.gamma),
        ("Theta", r.theta),
        ("Vega", r.vega),
        ("Rho", r.rho),
        ("Dividend rho", r.dividend_rho),
    ];

    let mut out = String::new();
    out.push_str(&format!(
        "{} {} expiring {}\n",
        report.payoff, report.strike, report.expiry
    ));
    out.push_str("┌──────────────┬──────────────────┐\n");
    for (name, value) in rows {
        out.push_str(&format!("│ {:<12} │ {:>16.8} │\n", name, value));
    }
    out.push_str("└──────────────┴──────────────────┘\n");
    out.push_str(&format!(
        "{:?} after {} terms (last contribution {:.3e}, weight {:.10})\n",
        c.state, c.iterations, c.last_contribution, c.cumulative_weight
    ));
    out
}

/// Run the price command
pub fn run(request_path: &str, overrides: &CliOverrides, format: &str) -> Result<()> {
    let format = OutputFormat::from_str(format)?;
    let path = Path::new(request_path);
    if !path.exists() {
        return Err(CliError::FileNotFound(request_path.to_string()));
    }

    let request = build_config(path, overrides)?;
    info!(
        relative_accuracy = request.engine.relative_accuracy,
        max_iterations = request.engine.max_iterations,
        parallel = request.engine.parallel,
        "Pricing {}",
        request_path
    );

    let report = price_request(&request)?;
    info!(
        value = report.results.value,
        iterations = report.convergence.iterations,
        "Pricing complete"
    );

    match format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
