//! Analytical formulas and distributions.
//!
//! This module provides:
//! - Black-Scholes-Merton prices and Greeks with a continuous dividend yield
//! - Standard normal CDF and density
//! - Poisson jump-count weights behind the [`JumpCountWeights`] trait
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for the closed-form model
//! - **Numerical Stability**: erfc-based CDF from `statrs`

pub mod black_scholes;
pub mod distributions;
pub mod error;

pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf, JumpCountWeights, PoissonWeights};
pub use error::AnalyticalError;
