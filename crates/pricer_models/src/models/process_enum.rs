//! Static dispatch enum for stochastic processes.
//!
//! Engines receive a `StochasticProcessEnum` and ask it for the capability
//! they need. A capability the process lacks comes back as `None` rather
//! than a failed downcast.
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
//! use pricer_core::types::{Date, DayCountConvention};
//! use pricer_models::models::{BlackScholesProcess, StochasticProcessEnum};
//!
//! let today = Date::from_ymd(2025, 1, 1).unwrap();
//! let dc = DayCountConvention::Actual365Fixed;
//! let process: StochasticProcessEnum = BlackScholesProcess::without_dividends(
//!     SimpleQuote::new("spot", 100.0),
//!     YieldTermStructure::flat(today, 0.05, dc),
//!     BlackVolTermStructure::flat(today, 0.2, dc),
//! ).into();
//!
//! assert_eq!(process.name(), "BlackScholes");
//! assert!(process.as_jump_diffusion().is_none());
//! ```

use super::{BlackScholesProcess, Merton76Process};

/// Processes understood by the pricing engines.
#[derive(Debug, Clone, PartialEq)]
pub enum StochasticProcessEnum {
    /// Pure diffusion
    BlackScholes(BlackScholesProcess),
    /// Diffusion with lognormal Poisson jumps
    Merton76(Merton76Process),
}

impl StochasticProcessEnum {
    /// Jump-diffusion view of the process, if it has one.
    #[inline]
    pub fn as_jump_diffusion(&self) -> Option<&Merton76Process> {
        match self {
            StochasticProcessEnum::Merton76(p) => Some(p),
            StochasticProcessEnum::BlackScholes(_) => None,
        }
    }

    /// Diffusion part of the process.
    #[inline]
    pub fn diffusion(&self) -> &BlackScholesProcess {
        match self {
            StochasticProcessEnum::BlackScholes(p) => p,
            StochasticProcessEnum::Merton76(p) => p.diffusion(),
        }
    }

    /// Process name.
    pub fn name(&self) -> &'static str {
        match self {
            StochasticProcessEnum::BlackScholes(_) => "BlackScholes",
            StochasticProcessEnum::Merton76(_) => "Merton76",
        }
    }
}

impl From<BlackScholesProcess> for StochasticProcessEnum {
    fn from(process: BlackScholesProcess) -> Self {
        StochasticProcessEnum::BlackScholes(process)
    }
}

impl From<Merton76Process> for StochasticProcessEnum {
    fn from(process: Merton76Process) -> Self {
        StochasticProcessEnum::Merton76(process)
    }
}
