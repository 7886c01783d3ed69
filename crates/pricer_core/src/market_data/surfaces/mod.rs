//! Volatility surface abstractions.
//!
//! This module provides:
//! - [`VolatilitySurface`]: Implied volatility and total variance lookup
//! - [`FlatVol`]: Constant volatility
//! - [`VarianceCurveVol`]: Strike-independent term structure, linear in total variance
//! - [`VolSurfaceEnum`]: Static dispatch over the concrete surfaces
//! - [`BlackVolTermStructure`]: Surface anchored at a reference date with a day count

mod flat;
mod surface_enum;
mod term_structure;
mod traits;
mod variance_curve;

pub use flat::FlatVol;
pub use surface_enum::VolSurfaceEnum;
pub use term_structure::BlackVolTermStructure;
pub use traits::VolatilitySurface;
pub use variance_curve::VarianceCurveVol;
