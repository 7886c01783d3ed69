//! Yield curve abstractions.
//!
//! This module provides:
//! - [`YieldCurve`]: Discount factor and rate calculations by time
//! - [`FlatCurve`]: Constant rate curve
//! - [`InterpolatedCurve`]: Pillar-based curve with [`CurveInterpolation`]
//! - [`CurveEnum`]: Static dispatch over the concrete curves
//! - [`YieldTermStructure`]: Curve anchored at a reference date with a day count

mod curve_enum;
mod flat;
mod interpolated;
mod term_structure;
mod traits;

pub use curve_enum::CurveEnum;
pub use flat::FlatCurve;
pub use interpolated::{CurveInterpolation, InterpolatedCurve};
pub use term_structure::YieldTermStructure;
pub use traits::YieldCurve;
