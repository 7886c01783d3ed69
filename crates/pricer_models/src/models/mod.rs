//! Stochastic processes consumed by the pricing engines.
//!
//! - [`BlackScholesProcess`]: spot, dividend and risk-free curves, Black vol
//! - [`Merton76Process`]: Black-Scholes diffusion plus lognormal Poisson jumps
//! - [`StochasticProcessEnum`]: static dispatch over both

pub mod black_scholes_process;
pub mod merton76;
pub mod process_enum;

pub use black_scholes_process::BlackScholesProcess;
pub use merton76::Merton76Process;
pub use process_enum::StochasticProcessEnum;
