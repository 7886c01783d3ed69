//! Market data: quotes, yield curves and volatility surfaces.
//!
//! Curves and surfaces come in two layers. The time-indexed layer is
//! generic over `T: Float` ([`curves::YieldCurve`],
//! [`surfaces::VolatilitySurface`]); the dated layer
//! ([`YieldTermStructure`], [`BlackVolTermStructure`]) adds a reference date
//! and a day count convention on top of the static dispatch enums.
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::curves::{YieldCurve, FlatCurve};
//! use pricer_core::market_data::surfaces::{VolatilitySurface, FlatVol};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//!
//! let vol_surface = FlatVol::new(0.20_f64);
//! assert_eq!(vol_surface.volatility(100.0, 1.0).unwrap(), 0.20);
//! ```

pub mod curves;
pub mod error;
mod pillars;
pub mod quote;
pub mod surfaces;

pub use curves::{
    CurveEnum, CurveInterpolation, FlatCurve, InterpolatedCurve, YieldCurve, YieldTermStructure,
};
pub use error::MarketDataError;
pub use quote::SimpleQuote;
pub use surfaces::{
    BlackVolTermStructure, FlatVol, VarianceCurveVol, VolSurfaceEnum, VolatilitySurface,
};
