//! # Pricer Pricing (Layer 3: Engines)
//!
//! Pricing engines for vanilla options on the processes of `pricer_models`.
//!
//! This crate provides:
//! - The [`DiffusionEngine`](engines::DiffusionEngine) protocol and a
//!   closed-form [`AnalyticEuropeanEngine`](engines::AnalyticEuropeanEngine)
//! - The Merton (1976) [`JumpDiffusionEngine`](jump_diffusion::JumpDiffusionEngine),
//!   which prices a jump-diffusion as a Poisson-weighted mixture of
//!   diffusion prices computed by any `DiffusionEngine`
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
//! use pricer_core::types::{Date, DayCountConvention};
//! use pricer_models::instruments::{Exercise, PayoffType, PlainVanillaPayoff};
//! use pricer_models::models::{BlackScholesProcess, Merton76Process};
//! use pricer_pricing::engines::AnalyticEuropeanEngine;
//! use pricer_pricing::jump_diffusion::{
//!     JumpDiffusionArguments, JumpDiffusionConfig, JumpDiffusionEngine,
//! };
//!
//! let today = Date::from_ymd(2025, 1, 1).unwrap();
//! let dc = DayCountConvention::Actual365Fixed;
//! let process = Merton76Process::new(
//!     BlackScholesProcess::without_dividends(
//!         SimpleQuote::new("spot", 100.0),
//!         YieldTermStructure::flat(today, 0.05, dc),
//!         BlackVolTermStructure::flat(today, 0.2, dc),
//!     ),
//!     SimpleQuote::new("jump_intensity", 0.5),
//!     SimpleQuote::new("log_jump_mean", -0.2),
//!     SimpleQuote::new("log_jump_volatility", 0.3),
//! );
//!
//! let args = JumpDiffusionArguments::new(
//!     PlainVanillaPayoff::new(PayoffType::Put, 90.0).unwrap(),
//!     Exercise::european(Date::from_ymd(2025, 7, 1).unwrap()),
//!     process,
//! );
//!
//! let mut engine = JumpDiffusionEngine::new(
//!     AnalyticEuropeanEngine::new(),
//!     JumpDiffusionConfig::default(),
//! );
//! let results = engine.calculate(&args).unwrap();
//! assert!(results.value > 0.0);
//! assert!(results.delta < 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for results, reports and config

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod engines;
pub mod jump_diffusion;
