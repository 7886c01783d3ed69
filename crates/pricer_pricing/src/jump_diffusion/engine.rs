//! Merton (1976) jump-diffusion engine.
//!
//! Prices a vanilla option as the Poisson mixture
//!
//! ```text
//! V = Σᵢ P(N = i; λ'·t) · V_BS(rᵢ, vᵢ)
//! ```
//!
//! where each `V_BS` comes from the wrapped diffusion engine on the
//! scenario built for `i` jumps. Terms are added in increasing `i` until
//! the relative contribution of the last one drops to the configured
//! accuracy.

use pricer_models::analytical::{JumpCountWeights, PoissonWeights};
use tracing::{debug, debug_span, trace, warn};

use crate::engines::{DiffusionEngine, OptionResults};

use super::{
    ConvergenceReport, JumpDiffusionArguments, JumpDiffusionConfig, JumpDiffusionError,
    JumpParameters, MixtureAccumulator, MixtureState, Scenario, ScenarioBuilder,
};

/// Jump-diffusion engine wrapping a diffusion engine `E`.
///
/// The wrapped engine is owned exclusively and reused for every scenario.
///
/// # Examples
///
/// ```rust
/// use pricer_core::market_data::{BlackVolTermStructure, SimpleQuote, YieldTermStructure};
/// use pricer_core::types::{Date, DayCountConvention};
/// use pricer_models::instruments::{Exercise, PayoffType, PlainVanillaPayoff};
/// use pricer_models::models::{BlackScholesProcess, Merton76Process};
/// use pricer_pricing::engines::AnalyticEuropeanEngine;
/// use pricer_pricing::jump_diffusion::{
///     JumpDiffusionArguments, JumpDiffusionConfig, JumpDiffusionEngine,
/// };
///
/// let today = Date::from_ymd(2025, 1, 1).unwrap();
/// let dc = DayCountConvention::Actual365Fixed;
/// let process = Merton76Process::new(
///     BlackScholesProcess::without_dividends(
///         SimpleQuote::new("spot", 100.0),
///         YieldTermStructure::flat(today, 0.05, dc),
///         BlackVolTermStructure::flat(today, 0.2, dc),
///     ),
///     SimpleQuote::new("jump_intensity", 1.0),
///     SimpleQuote::new("log_jump_mean", -0.1),
///     SimpleQuote::new("log_jump_volatility", 0.2),
/// );
/// let args = JumpDiffusionArguments::new(
///     PlainVanillaPayoff::new(PayoffType::Call, 100.0).unwrap(),
///     Exercise::european(Date::from_ymd(2026, 1, 1).unwrap()),
///     process,
/// );
///
/// let config = JumpDiffusionConfig::builder().max_iterations(20).build().unwrap();
/// let mut engine = JumpDiffusionEngine::new(AnalyticEuropeanEngine::new(), config);
/// let results = engine.calculate(&args).unwrap();
///
/// assert!(results.value > 10.45);
/// assert!(engine.last_report().unwrap().iterations < 20);
/// ```
#[derive(Clone, Debug)]
pub struct JumpDiffusionEngine<E> {
    base: E,
    config: JumpDiffusionConfig,
    last_report: Option<ConvergenceReport>,
}

impl<E: DiffusionEngine> JumpDiffusionEngine<E> {
    /// Wraps `base` with the given configuration.
    pub fn new(base: E, config: JumpDiffusionConfig) -> Self {
        Self {
            base,
            config,
            last_report: None,
        }
    }

    /// Wraps an optional engine handle.
    ///
    /// # Errors
    ///
    /// `MissingBaseEngine` if `base` is `None`.
    pub fn try_from_handle(
        base: Option<E>,
        config: JumpDiffusionConfig,
    ) -> Result<Self, JumpDiffusionError> {
        let base = base.ok_or(JumpDiffusionError::MissingBaseEngine)?;
        Ok(Self::new(base, config))
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &JumpDiffusionConfig {
        &self.config
    }

    /// Wrapped diffusion engine.
    #[inline]
    pub fn base(&self) -> &E {
        &self.base
    }

    /// Report of the most recent pricing call, converged or not.
    #[inline]
    pub fn last_report(&self) -> Option<&ConvergenceReport> {
        self.last_report.as_ref()
    }

    /// Prices `args` with Poisson jump-count weights.
    ///
    /// # Errors
    ///
    /// Any [`JumpDiffusionError`]; no partial results are returned.
    pub fn calculate(
        &mut self,
        args: &JumpDiffusionArguments,
    ) -> Result<OptionResults, JumpDiffusionError> {
        let span = debug_span!(
            "jump_diffusion",
            payoff = %args.payoff.payoff_type(),
            strike = args.payoff.strike(),
            expiry = %args.exercise.last_date(),
        );
        let _enter = span.enter();

        let params = self.prepare(args)?;
        let weights = PoissonWeights::new(params.poisson_mean())?;
        self.run_sequential(args, &params, &weights)
    }

    /// Prices `args` with a caller-supplied jump-count distribution.
    ///
    /// `weights.weight(i)` is used in place of the Poisson probability for
    /// `i` jumps.
    pub fn calculate_with_weights<W: JumpCountWeights>(
        &mut self,
        args: &JumpDiffusionArguments,
        weights: &W,
    ) -> Result<OptionResults, JumpDiffusionError> {
        let span = debug_span!("jump_diffusion", strike = args.payoff.strike());
        let _enter = span.enter();

        let params = self.prepare(args)?;
        self.run_sequential(args, &params, weights)
    }

    pub(super) fn prepare(
        &mut self,
        args: &JumpDiffusionArguments,
    ) -> Result<JumpParameters, JumpDiffusionError> {
        self.last_report = None;
        self.config.validate()?;
        let params = JumpParameters::extract(args)?;
        debug!(
            lambda = params.lambda,
            t = params.t,
            r0 = params.r0,
            variance = params.variance,
            "extracted jump parameters"
        );
        Ok(params)
    }

    fn run_sequential<W: JumpCountWeights>(
        &mut self,
        args: &JumpDiffusionArguments,
        params: &JumpParameters,
        weights: &W,
    ) -> Result<OptionResults, JumpDiffusionError> {
        let builder = ScenarioBuilder::new(params, args.process.diffusion());
        let mut acc = MixtureAccumulator::new(&self.config);
        self.base.reset();

        loop {
            let i = acc.next_index();
            let scenario = builder.build(i)?;
            let term = price_scenario(&mut self.base, args, scenario)?;
            let weight = weights.weight(i);
            trace!(jumps = i, weight, value = term.value, "priced scenario");
            if acc.add_term(weight, &term)? != MixtureState::Iterating {
                break;
            }
        }
        self.conclude(acc)
    }

    pub(super) fn conclude(
        &mut self,
        acc: MixtureAccumulator,
    ) -> Result<OptionResults, JumpDiffusionError> {
        self.last_report = Some(acc.report().clone());
        match acc.finish() {
            Ok((results, report)) => {
                debug!(
                    iterations = report.iterations,
                    last_contribution = report.last_contribution,
                    value = results.value,
                    "jump-diffusion mixture converged"
                );
                Ok(results)
            }
            Err(err) => {
                warn!(error = %err, "jump-diffusion mixture did not converge");
                Err(err)
            }
        }
    }
}

/// Runs one scenario through `engine` following the argument protocol.
pub(super) fn price_scenario<E: DiffusionEngine>(
    engine: &mut E,
    args: &JumpDiffusionArguments,
    scenario: Scenario,
) -> Result<OptionResults, JumpDiffusionError> {
    engine
        .arguments_mut()
        .set(args.payoff, args.exercise.clone(), scenario.process);
    engine.validate()?;
    engine.calculate()?;
    Ok(engine.results().clone())
}
