//! Inputs written into a diffusion engine before it calculates.

use pricer_models::instruments::{Exercise, PlainVanillaPayoff};
use pricer_models::models::BlackScholesProcess;

use super::error::EngineError;

/// Mutable argument slots of a [`DiffusionEngine`](super::DiffusionEngine).
///
/// Slots start empty; `validate` on the engine reports the first one still
/// missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DiffusionArguments {
    /// Vanilla payoff.
    pub payoff: Option<PlainVanillaPayoff>,
    /// Exercise schedule.
    pub exercise: Option<Exercise>,
    /// Diffusion process holding spot, curves and volatility.
    pub process: Option<BlackScholesProcess>,
}

impl DiffusionArguments {
    /// Fills every slot at once.
    pub fn set(
        &mut self,
        payoff: PlainVanillaPayoff,
        exercise: Exercise,
        process: BlackScholesProcess,
    ) {
        self.payoff = Some(payoff);
        self.exercise = Some(exercise);
        self.process = Some(process);
    }

    /// Empties every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Borrows the three slots, failing on the first empty one.
    pub fn require(
        &self,
    ) -> Result<(&PlainVanillaPayoff, &Exercise, &BlackScholesProcess), EngineError> {
        let payoff = self
            .payoff
            .as_ref()
            .ok_or(EngineError::MissingArgument("payoff"))?;
        let exercise = self
            .exercise
            .as_ref()
            .ok_or(EngineError::MissingArgument("exercise"))?;
        let process = self
            .process
            .as_ref()
            .ok_or(EngineError::MissingArgument("process"))?;
        Ok((payoff, exercise, process))
    }
}
