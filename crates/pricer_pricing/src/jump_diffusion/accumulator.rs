//! Weighted accumulation of scenario results and the stopping rule.
//!
//! After adding term `i` with weight `wᵢ` the accumulator forms
//!
//! ```text
//! cᵢ = wᵢ·valueᵢ / running_value
//! ```
//!
//! and stops once `cᵢ ≤ relative_accuracy`. Weights are used as given;
//! the truncated tail is not renormalised.
//!
//! Division policy: `0 / 0` counts as a zero contribution, but it only
//! stops the series once the weight not yet evaluated, `1 − Σwᵢ`, is within
//! `relative_accuracy`; until then the series keeps iterating. A zero
//! running value under a non-zero numerator, or any non-finite ratio, is an
//! error.

use crate::engines::OptionResults;

use super::{JumpDiffusionConfig, JumpDiffusionError};

/// Where the series stands after the latest term.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MixtureState {
    /// More terms are needed.
    #[default]
    Iterating,
    /// The last contribution fell to the threshold.
    Converged,
    /// The iteration cap was hit first.
    Exhausted,
}

/// Diagnostics of a finished mixture.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceReport {
    /// Final state.
    pub state: MixtureState,
    /// Number of terms evaluated.
    pub iterations: u64,
    /// Relative contribution of the last term.
    pub last_contribution: f64,
    /// Sum of the weights used.
    pub cumulative_weight: f64,
    /// Relative contribution of every term, in index order.
    pub contributions: Vec<f64>,
}

/// Running sums of one pricing call.
#[derive(Clone, Debug)]
pub struct MixtureAccumulator {
    relative_accuracy: f64,
    max_iterations: u64,
    results: OptionResults,
    report: ConvergenceReport,
}

impl MixtureAccumulator {
    /// Empty accumulator: all fields zero, state `Iterating`.
    pub fn new(config: &JumpDiffusionConfig) -> Self {
        Self {
            relative_accuracy: config.relative_accuracy(),
            max_iterations: config.max_iterations(),
            results: OptionResults::default(),
            report: ConvergenceReport {
                last_contribution: f64::INFINITY,
                ..ConvergenceReport::default()
            },
        }
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> MixtureState {
        self.report.state
    }

    /// Running weighted sums.
    #[inline]
    pub fn results(&self) -> &OptionResults {
        &self.results
    }

    /// Index of the next term to add.
    #[inline]
    pub fn next_index(&self) -> u64 {
        self.report.iterations
    }

    /// Adds the next term and applies the stopping rule.
    ///
    /// # Errors
    ///
    /// `InvalidContribution` when the contribution cannot be formed (see
    /// the module docs).
    pub fn add_term(
        &mut self,
        weight: f64,
        term: &OptionResults,
    ) -> Result<MixtureState, JumpDiffusionError> {
        let iteration = self.report.iterations;
        self.results.add_weighted(weight, term);

        let numerator = weight * term.value;
        let running_value = self.results.value;
        let cumulative_weight = self.report.cumulative_weight + weight;
        let (contribution, settled) = if numerator == 0.0 && running_value == 0.0 {
            (0.0, 1.0 - cumulative_weight <= self.relative_accuracy)
        } else {
            let contribution = numerator / running_value;
            if !contribution.is_finite() {
                return Err(JumpDiffusionError::InvalidContribution {
                    iteration,
                    numerator,
                    running_value,
                });
            }
            (contribution, contribution <= self.relative_accuracy)
        };

        self.report.iterations += 1;
        self.report.last_contribution = contribution;
        self.report.cumulative_weight = cumulative_weight;
        self.report.contributions.push(contribution);
        self.report.state = if settled {
            MixtureState::Converged
        } else if self.report.iterations >= self.max_iterations {
            MixtureState::Exhausted
        } else {
            MixtureState::Iterating
        };
        Ok(self.report.state)
    }

    /// Report of the terms added so far.
    #[inline]
    pub fn report(&self) -> &ConvergenceReport {
        &self.report
    }

    /// Converged results, or `AccuracyNotReached` otherwise.
    pub fn finish(self) -> Result<(OptionResults, ConvergenceReport), JumpDiffusionError> {
        match self.report.state {
            MixtureState::Converged => Ok((self.results, self.report)),
            MixtureState::Iterating | MixtureState::Exhausted => {
                Err(JumpDiffusionError::AccuracyNotReached {
                    iterations: self.report.iterations,
                    relative_accuracy: self.relative_accuracy,
                    last_contribution: self.report.last_contribution,
                    running_value: self.results.value,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config(relative_accuracy: f64, max_iterations: u64) -> JumpDiffusionConfig {
        JumpDiffusionConfig::builder()
            .relative_accuracy(relative_accuracy)
            .max_iterations(max_iterations)
            .build()
            .unwrap()
    }

    fn term(value: f64) -> OptionResults {
        OptionResults {
            value,
            delta: value / 10.0,
            ..OptionResults::default()
        }
    }

    // ==========================================================
    // Stopping rule
    // ==========================================================

    #[test]
    fn test_first_term_contributes_everything() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        assert_eq!(acc.add_term(0.4, &term(10.0)).unwrap(), MixtureState::Iterating);
        assert_eq!(acc.report().last_contribution, 1.0);
        assert_eq!(acc.next_index(), 1);
    }

    #[test]
    fn test_converges_when_contribution_small() {
        let mut acc = MixtureAccumulator::new(&config(1e-2, 10));
        acc.add_term(0.9, &term(10.0)).unwrap();
        let state = acc.add_term(0.001, &term(10.0)).unwrap();
        assert_eq!(state, MixtureState::Converged);

        let (results, report) = acc.finish().unwrap();
        assert_relative_eq!(results.value, 9.01, epsilon = 1e-12);
        assert_relative_eq!(results.delta, 0.901, epsilon = 1e-12);
        assert_eq!(report.iterations, 2);
        assert_relative_eq!(report.cumulative_weight, 0.901, epsilon = 1e-15);
        assert_eq!(report.contributions.len(), 2);
    }

    #[test]
    fn test_converging_on_last_allowed_term_succeeds() {
        let mut acc = MixtureAccumulator::new(&config(1e-2, 2));
        acc.add_term(0.9, &term(10.0)).unwrap();
        assert_eq!(
            acc.add_term(0.001, &term(10.0)).unwrap(),
            MixtureState::Converged
        );
        assert!(acc.finish().is_ok());
    }

    #[test]
    fn test_exhaustion_reports_accuracy_not_reached() {
        let mut acc = MixtureAccumulator::new(&config(1e-30, 3));
        acc.add_term(0.5, &term(10.0)).unwrap();
        acc.add_term(0.3, &term(12.0)).unwrap();
        assert_eq!(
            acc.add_term(0.1, &term(14.0)).unwrap(),
            MixtureState::Exhausted
        );

        match acc.finish() {
            Err(JumpDiffusionError::AccuracyNotReached {
                iterations,
                relative_accuracy,
                running_value,
                ..
            }) => {
                assert_eq!(iterations, 3);
                assert_eq!(relative_accuracy, 1e-30);
                assert_relative_eq!(running_value, 5.0 + 3.6 + 1.4, epsilon = 1e-12);
            }
            other => panic!("expected AccuracyNotReached, got {:?}", other),
        }
    }

    // ==========================================================
    // Division policy
    // ==========================================================

    #[test]
    fn test_zero_over_zero_converges_with_full_weight() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        assert_eq!(
            acc.add_term(1.0, &term(0.0)).unwrap(),
            MixtureState::Converged
        );
        let (results, report) = acc.finish().unwrap();
        assert_eq!(results.value, 0.0);
        assert_eq!(report.last_contribution, 0.0);
    }

    #[test]
    fn test_zero_over_zero_keeps_iterating_while_weight_remains() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        assert_eq!(
            acc.add_term(0.3, &term(0.0)).unwrap(),
            MixtureState::Iterating
        );
        assert_eq!(acc.report().last_contribution, 0.0);

        // First valuable term contributes everything.
        assert_eq!(
            acc.add_term(0.4, &term(5.0)).unwrap(),
            MixtureState::Iterating
        );
        assert_eq!(acc.report().last_contribution, 1.0);
        assert_relative_eq!(acc.results().value, 2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_all_zero_terms_exhaust_before_weight_is_covered() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 2));
        acc.add_term(0.3, &term(0.0)).unwrap();
        assert_eq!(
            acc.add_term(0.3, &term(0.0)).unwrap(),
            MixtureState::Exhausted
        );
        assert!(matches!(
            acc.finish(),
            Err(JumpDiffusionError::AccuracyNotReached { iterations: 2, .. })
        ));
    }

    #[test]
    fn test_zero_weight_term_converges() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        acc.add_term(1.0, &term(8.0)).unwrap();
        assert_eq!(
            acc.add_term(0.0, &term(9.0)).unwrap(),
            MixtureState::Converged
        );
    }

    #[test]
    fn test_cancelling_running_value_is_an_error() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        acc.add_term(1.0, &term(2.0)).unwrap();
        assert_eq!(
            acc.add_term(1.0, &term(-2.0)),
            Err(JumpDiffusionError::InvalidContribution {
                iteration: 1,
                numerator: -2.0,
                running_value: 0.0,
            })
        );
    }

    #[test]
    fn test_nan_value_is_an_error() {
        let mut acc = MixtureAccumulator::new(&config(1e-4, 10));
        assert!(matches!(
            acc.add_term(0.5, &term(f64::NAN)),
            Err(JumpDiffusionError::InvalidContribution { iteration: 0, .. })
        ));
    }
}
