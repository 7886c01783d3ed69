//! # pricer_core: Market Data Foundation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Error types: `PricingError`, `DateError` (`types::error`)
//! - Quotes: `SimpleQuote` (`market_data::quote`)
//! - Yield curves and dated yield term structures (`market_data::curves`)
//! - Volatility surfaces and dated Black vol term structures (`market_data::surfaces`)
//!
//! Layer 1 has no dependencies on other pricer_* crates.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{BlackVolTermStructure, YieldTermStructure};
//! use pricer_core::types::{Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2025, 1, 1).unwrap();
//! let expiry = Date::from_ymd(2026, 1, 1).unwrap();
//!
//! let rates = YieldTermStructure::flat(today, 0.05, DayCountConvention::Actual365Fixed);
//! let vols = BlackVolTermStructure::flat(today, 0.2, DayCountConvention::Actual365Fixed);
//!
//! let df = rates.discount(expiry).unwrap();
//! let var = vols.black_variance(expiry, 100.0).unwrap();
//! # assert!((df - (-0.05_f64).exp()).abs() < 1e-12);
//! # assert!((var - 0.04).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date` and `DayCountConvention`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
