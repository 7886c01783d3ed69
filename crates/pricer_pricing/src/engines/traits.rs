//! Contract between the jump-diffusion core and the engine it drives.

use super::{DiffusionArguments, EngineError, OptionResults};

/// A pricing engine for pure-diffusion processes.
///
/// Callers follow a fixed protocol: write the argument slots through
/// [`arguments_mut`](Self::arguments_mut), call [`validate`](Self::validate),
/// then [`calculate`](Self::calculate) and read [`results`](Self::results).
/// `validate` must run after every argument change and before `calculate`.
pub trait DiffusionEngine {
    /// Clears the results of the previous calculation.
    fn reset(&mut self);

    /// Read access to the argument slots.
    fn arguments(&self) -> &DiffusionArguments;

    /// Write access to the argument slots.
    fn arguments_mut(&mut self) -> &mut DiffusionArguments;

    /// Checks the arguments are complete and mutually consistent.
    fn validate(&self) -> Result<(), EngineError>;

    /// Prices the current arguments into [`results`](Self::results).
    fn calculate(&mut self) -> Result<(), EngineError>;

    /// Results of the last successful calculation.
    fn results(&self) -> &OptionResults;
}
