//! Batch-parallel evaluation of the mixture on rayon.
//!
//! Scenarios `[start, start + batch)` are priced concurrently, each worker
//! holding its own diffusion engine from the caller's factory. The batch is
//! then folded into the accumulator sequentially in index order, so the
//! stopping rule sees exactly the terms the sequential path would and the
//! sums are formed in the same order. Terms priced past the stopping index
//! are discarded, including their errors.

use pricer_models::analytical::{JumpCountWeights, PoissonWeights};
use rayon::prelude::*;
use tracing::{debug_span, trace};

use crate::engines::{DiffusionEngine, OptionResults};

use super::engine::price_scenario;
use super::{
    JumpDiffusionArguments, JumpDiffusionEngine, JumpDiffusionError, MixtureAccumulator,
    MixtureState, ScenarioBuilder,
};

impl<E: DiffusionEngine> JumpDiffusionEngine<E> {
    /// Prices `args` like [`calculate`](Self::calculate), evaluating
    /// scenarios in parallel batches.
    ///
    /// `factory` builds one fresh diffusion engine per rayon worker; the
    /// engine owned by `self` is not used. Results are bit-for-bit equal to
    /// the sequential path for any deterministic engine.
    pub fn calculate_parallel<F>(
        &mut self,
        args: &JumpDiffusionArguments,
        factory: F,
    ) -> Result<OptionResults, JumpDiffusionError>
    where
        F: Fn() -> E + Sync + Send,
    {
        let span = debug_span!(
            "jump_diffusion_parallel",
            strike = args.payoff.strike(),
            batch = self.config().parallel_batch_size(),
        );
        let _enter = span.enter();

        let params = self.prepare(args)?;
        let weights = PoissonWeights::new(params.poisson_mean())?;
        let builder = ScenarioBuilder::new(&params, args.process.diffusion());
        let mut acc = MixtureAccumulator::new(self.config());

        let batch = self.config().parallel_batch_size() as u64;
        let max_iterations = self.config().max_iterations();

        while acc.state() == MixtureState::Iterating {
            let start = acc.next_index();
            let end = (start + batch).min(max_iterations);
            let indices: Vec<u64> = (start..end).collect();

            let terms: Vec<Result<OptionResults, JumpDiffusionError>> = indices
                .par_iter()
                .map_init(
                    || {
                        let mut engine = factory();
                        engine.reset();
                        engine
                    },
                    |engine, &i| price_scenario(engine, args, builder.build(i)?),
                )
                .collect();

            for (&i, term) in indices.iter().zip(terms) {
                let term = term?;
                let weight = weights.weight(i);
                trace!(jumps = i, weight, value = term.value, "priced scenario");
                if acc.add_term(weight, &term)? != MixtureState::Iterating {
                    break;
                }
            }
        }
        self.conclude(acc)
    }
}
