//! Inputs of a jump-diffusion pricing call.

use pricer_models::instruments::{Exercise, PlainVanillaPayoff};
use pricer_models::models::StochasticProcessEnum;

/// Payoff, exercise and process of the option being priced.
///
/// The process is the general enum; the engine asks it for its
/// jump-diffusion view and fails if there is none.
#[derive(Clone, Debug, PartialEq)]
pub struct JumpDiffusionArguments {
    /// Vanilla payoff, passed to every scenario unchanged.
    pub payoff: PlainVanillaPayoff,
    /// Exercise schedule, passed to every scenario unchanged.
    pub exercise: Exercise,
    /// Underlying process.
    pub process: StochasticProcessEnum,
}

impl JumpDiffusionArguments {
    /// Bundles the three inputs.
    pub fn new(
        payoff: PlainVanillaPayoff,
        exercise: Exercise,
        process: impl Into<StochasticProcessEnum>,
    ) -> Self {
        Self {
            payoff,
            exercise,
            process: process.into(),
        }
    }
}
