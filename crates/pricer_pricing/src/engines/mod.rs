//! Diffusion-only pricing engines.
//!
//! [`DiffusionEngine`] is the protocol the jump-diffusion core drives once
//! per scenario; [`AnalyticEuropeanEngine`] is the closed-form
//! implementation used by default.

mod analytic_european;
mod arguments;
mod error;
mod results;
mod traits;

pub use analytic_european::AnalyticEuropeanEngine;
pub use arguments::DiffusionArguments;
pub use error::EngineError;
pub use results::OptionResults;
pub use traits::DiffusionEngine;
