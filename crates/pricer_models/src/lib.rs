//! # Pricer Models (L2: Business Logic)
//!
//! Instruments, stochastic processes and closed-form formulas.
//!
//! This crate provides:
//! - Vanilla payoffs and exercise definitions (`instruments`)
//! - Black-Scholes and Merton (1976) jump-diffusion processes (`models`)
//! - Black-Scholes-Merton prices and Greeks, normal and Poisson
//!   distributions (`analytical`)
//!
//! ## Design Principles
//!
//! - **Enum-based processes** for static dispatch, with typed capability
//!   queries instead of downcasts
//! - **Validated constructors** returning module-level `thiserror` errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod models;
