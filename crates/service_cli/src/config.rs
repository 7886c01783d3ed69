//! Pricing request configuration
//!
//! Loads a request from a TOML file, applies `JD_*` environment overrides and
//! command line flags, then validates the result.
//!
//! Priority (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Request file
//! 4. Default values

use std::path::Path;
use std::str::FromStr;

use pricer_core::types::{Date, DayCountConvention};
use pricer_models::instruments::PayoffType;
use pricer_pricing::jump_diffusion::{
    DEFAULT_BATCH_SIZE, DEFAULT_MAX_ITERATIONS, DEFAULT_RELATIVE_ACCURACY,
};
use serde::Deserialize;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {name}: {reason}")]
    InvalidField { name: &'static str, reason: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

fn invalid(name: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidField {
        name,
        reason: reason.into(),
    }
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// `[engine]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineSection {
    pub relative_accuracy: f64,
    pub max_iterations: u64,
    /// Evaluate scenarios in rayon batches
    pub parallel: bool,
    pub batch_size: usize,
}

impl Default for EngineSection {
    fn default() -> Self {
        Self {
            relative_accuracy: DEFAULT_RELATIVE_ACCURACY,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            parallel: false,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// `[market.rate_curve]`: zero rates at tenor pillars
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RateCurveSection {
    pub tenors: Vec<f64>,
    pub rates: Vec<f64>,
    /// `linear` (zero rates) or `log-linear` (discount factors)
    #[serde(default = "default_interpolation")]
    pub interpolation: String,
}

fn default_interpolation() -> String {
    "linear".to_string()
}

/// `[market.vol_curve]`: Black vols at expiry pillars
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VolCurveSection {
    pub expiries: Vec<f64>,
    pub vols: Vec<f64>,
}

/// `[market.jumps]`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JumpSection {
    pub intensity: f64,
    pub log_mean: f64,
    pub log_volatility: f64,
}

/// `[market]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketSection {
    pub reference_date: Date,
    #[serde(default)]
    pub day_count: DayCountConvention,
    pub spot: f64,
    #[serde(default)]
    pub dividend_yield: f64,
    /// Flat rate; exclusive with `rate_curve`
    pub risk_free_rate: Option<f64>,
    pub rate_curve: Option<RateCurveSection>,
    /// Flat vol; exclusive with `vol_curve`
    pub volatility: Option<f64>,
    pub vol_curve: Option<VolCurveSection>,
    pub jumps: JumpSection,
}

/// `[option]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionSection {
    pub payoff: PayoffType,
    pub strike: f64,
    pub expiry: Date,
}

/// A complete pricing request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PricingRequest {
    #[serde(default, deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub engine: EngineSection,
    pub market: MarketSection,
    pub option: OptionSection,
}

/// Command line overrides
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub relative_accuracy: Option<f64>,
    pub max_iterations: Option<u64>,
    /// `Some(false)` forces sequential pricing over a file's `parallel = true`
    pub parallel: Option<bool>,
    pub batch_size: Option<usize>,
    pub log_level: Option<String>,
}

impl PricingRequest {
    /// Parse a request from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load a request from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Apply `JD_*` overrides read through `lookup`
    ///
    /// `lookup` is `std::env::var` in production; tests pass a map.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("JD_LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&v)?;
        }
        if let Some(v) = lookup("JD_RELATIVE_ACCURACY") {
            self.engine.relative_accuracy = parse_env("JD_RELATIVE_ACCURACY", &v)?;
        }
        if let Some(v) = lookup("JD_MAX_ITERATIONS") {
            self.engine.max_iterations = parse_env("JD_MAX_ITERATIONS", &v)?;
        }
        if let Some(v) = lookup("JD_PARALLEL") {
            self.engine.parallel = parse_env("JD_PARALLEL", &v.to_lowercase())?;
        }
        if let Some(v) = lookup("JD_BATCH_SIZE") {
            self.engine.batch_size = parse_env("JD_BATCH_SIZE", &v)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) -> Result<(), ConfigError> {
        if let Some(v) = cli.relative_accuracy {
            self.engine.relative_accuracy = v;
        }
        if let Some(v) = cli.max_iterations {
            self.engine.max_iterations = v;
        }
        if let Some(v) = cli.parallel {
            self.engine.parallel = v;
        }
        if let Some(v) = cli.batch_size {
            self.engine.batch_size = v;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        Ok(())
    }

    /// Validate the request
    ///
    /// Engine limits are checked again by the engine config builder; this
    /// catches request-shape problems with field names attached.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let market = &self.market;
        if !market.spot.is_finite() || market.spot <= 0.0 {
            return Err(invalid("market.spot", format!("{} is not positive", market.spot)));
        }
        match (&market.risk_free_rate, &market.rate_curve) {
            (Some(_), Some(_)) => {
                return Err(invalid(
                    "market.risk_free_rate",
                    "give either risk_free_rate or rate_curve, not both",
                ))
            }
            (None, None) => {
                return Err(invalid(
                    "market.risk_free_rate",
                    "one of risk_free_rate or rate_curve is required",
                ))
            }
            _ => {}
        }
        match (&market.volatility, &market.vol_curve) {
            (Some(_), Some(_)) => {
                return Err(invalid(
                    "market.volatility",
                    "give either volatility or vol_curve, not both",
                ))
            }
            (None, None) => {
                return Err(invalid(
                    "market.volatility",
                    "one of volatility or vol_curve is required",
                ))
            }
            (Some(sigma), None) if !sigma.is_finite() || *sigma < 0.0 => {
                return Err(invalid("market.volatility", format!("{} is negative", sigma)))
            }
            _ => {}
        }
        if let Some(curve) = &market.rate_curve {
            interpolation_method(&curve.interpolation)?;
        }
        if self.option.expiry <= market.reference_date {
            return Err(invalid(
                "option.expiry",
                format!(
                    "{} is not after reference date {}",
                    self.option.expiry, market.reference_date
                ),
            ));
        }
        if self.engine.batch_size == 0 {
            return Err(invalid("engine.batch_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// Parse the `interpolation` key of `[market.rate_curve]`
pub fn interpolation_method(
    name: &str,
) -> Result<pricer_core::market_data::CurveInterpolation, ConfigError> {
    use pricer_core::market_data::CurveInterpolation;
    match name.to_lowercase().as_str() {
        "linear" => Ok(CurveInterpolation::Linear),
        "log-linear" | "loglinear" | "log_linear" => Ok(CurveInterpolation::LogLinear),
        other => Err(invalid(
            "market.rate_curve.interpolation",
            format!("unknown method '{}'. Supported: linear, log-linear", other),
        )),
    }
}

fn parse_env<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::EnvError(format!("{}={} is not valid", key, value)))
}

/// Log level named in a request file, if it parses
///
/// Tracing starts before the request is fully resolved, so this reads only
/// the top-level `log_level` key and ignores every other problem.
pub fn file_log_level(path: &Path) -> Option<LogLevel> {
    let content = std::fs::read_to_string(path).ok()?;
    let table: toml::Table = toml::from_str(&content).ok()?;
    table.get("log_level")?.as_str()?.parse().ok()
}

/// Build a request from all sources
pub fn build_config(path: &Path, cli: &CliOverrides) -> Result<PricingRequest, ConfigError> {
    let mut request = PricingRequest::from_file(path)?;
    request.apply_env(|key| std::env::var(key).ok())?;
    request.merge_with_cli(cli)?;
    request.validate()?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../requests/merton_call.toml");
    const TERM_STRUCTURE: &str = include_str!("../requests/term_structure_put.toml");

    #[test]
    fn test_sample_request_parses() {
        let request = PricingRequest::from_toml(SAMPLE).unwrap();
        assert_eq!(request.log_level, LogLevel::Info);
        assert_eq!(request.engine.max_iterations, 20);
        assert_eq!(request.market.day_count, DayCountConvention::Actual365Fixed);
        assert_eq!(request.market.jumps.log_mean, -0.1);
        assert_eq!(request.option.payoff, PayoffType::Call);
        assert_eq!(
            request.option.expiry,
            Date::from_ymd(2026, 1, 1).unwrap()
        );
        request.validate().unwrap();
    }

    #[test]
    fn test_term_structure_request_parses() {
        let request = PricingRequest::from_toml(TERM_STRUCTURE).unwrap();
        assert!(request.engine.parallel);
        assert_eq!(request.market.rate_curve.as_ref().unwrap().tenors.len(), 4);
        assert_eq!(request.market.vol_curve.as_ref().unwrap().vols.len(), 3);
        assert_eq!(request.log_level, LogLevel::Warn);
        request.validate().unwrap();
    }

    #[test]
    fn test_engine_section_defaults() {
        let without_engine: String = SAMPLE
            .lines()
            .filter(|l| {
                !l.starts_with("relative_accuracy")
                    && !l.starts_with("max_iterations")
                    && !l.starts_with("parallel")
                    && !l.starts_with("batch_size")
                    && !l.starts_with("[engine]")
            })
            .collect::<Vec<_>>()
            .join("\n");
        let request = PricingRequest::from_toml(&without_engine).unwrap();
        assert_eq!(request.engine, EngineSection::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let bad = SAMPLE.replace("strike = 100.0", "strike = 100.0\nbarrier = 120.0");
        assert!(matches!(
            PricingRequest::from_toml(&bad),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        let env: HashMap<&str, &str> = [
            ("JD_RELATIVE_ACCURACY", "1e-8"),
            ("JD_PARALLEL", "TRUE"),
            ("JD_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();
        request
            .apply_env(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(request.engine.relative_accuracy, 1e-8);
        assert!(request.engine.parallel);
        assert_eq!(request.log_level, LogLevel::Debug);
        assert_eq!(request.engine.max_iterations, 20);
    }

    #[test]
    fn test_bad_env_value() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        let result = request.apply_env(|key| {
            (key == "JD_MAX_ITERATIONS").then(|| "many".to_string())
        });
        assert!(matches!(result, Err(ConfigError::EnvError(_))));
    }

    #[test]
    fn test_cli_takes_precedence() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request
            .apply_env(|key| (key == "JD_MAX_ITERATIONS").then(|| "50".to_string()))
            .unwrap();
        request
            .merge_with_cli(&CliOverrides {
                max_iterations: Some(75),
                ..CliOverrides::default()
            })
            .unwrap();
        assert_eq!(request.engine.max_iterations, 75);
    }

    #[test]
    fn test_cli_switches_parallel_mode_both_ways() {
        let mut request = PricingRequest::from_toml(TERM_STRUCTURE).unwrap();
        request.merge_with_cli(&CliOverrides::default()).unwrap();
        assert!(request.engine.parallel);

        request
            .merge_with_cli(&CliOverrides {
                parallel: Some(false),
                ..CliOverrides::default()
            })
            .unwrap();
        assert!(!request.engine.parallel);

        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request
            .apply_env(|key| (key == "JD_PARALLEL").then(|| "false".to_string()))
            .unwrap();
        request
            .merge_with_cli(&CliOverrides {
                parallel: Some(true),
                ..CliOverrides::default()
            })
            .unwrap();
        assert!(request.engine.parallel);
    }

    #[test]
    fn test_validation_errors() {
        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request.market.rate_curve = Some(RateCurveSection {
            tenors: vec![1.0],
            rates: vec![0.05],
            interpolation: "linear".to_string(),
        });
        assert!(matches!(
            request.validate(),
            Err(ConfigError::InvalidField {
                name: "market.risk_free_rate",
                ..
            })
        ));

        let mut request = PricingRequest::from_toml(SAMPLE).unwrap();
        request.option.expiry = request.market.reference_date;
        assert!(matches!(
            request.validate(),
            Err(ConfigError::InvalidField {
                name: "option.expiry",
                ..
            })
        ));

        assert!(interpolation_method("cubic").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let request = PricingRequest::from_file(file.path()).unwrap();
        assert_eq!(request.option.strike, 100.0);

        let missing = PricingRequest::from_file(Path::new("/nonexistent/request.toml"));
        assert!(matches!(missing, Err(ConfigError::FileError(_))));
    }

    #[test]
    fn test_file_log_level() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        assert_eq!(file_log_level(file.path()), Some(LogLevel::Info));
        assert_eq!(file_log_level(Path::new("/nonexistent/request.toml")), None);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("TRACE").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }
}
