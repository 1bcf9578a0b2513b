//! Simulation parameters.
//!
//! Every knob has a compile-time default; [`SimulationConfig::default`]
//! reproduces the classic two-arm setup, and the builder validates any
//! override before a simulation can start.

use crate::arm::ArmSpec;
use crate::error::{BanditError, Result};
use crate::policies::validate_epsilon;

/// Exploration rate of the epsilon-greedy policy.
pub const DEFAULT_EPSILON: f64 = 0.15;
/// Plays per run.
pub const DEFAULT_TRIAL_BUDGET: u64 = 30;
/// Independent runs per policy.
pub const DEFAULT_NUM_RUNS: usize = 1000;
/// Ground truth of the default arms as `(success_probability, reward_magnitude)`.
///
/// Rare large payouts against frequent small ones.
pub const DEFAULT_ARMS: [(f64, f64); 2] = [(0.2, 20.0), (0.8, 2.0)];

/// Minimum number of arms a policy can choose between.
pub const MIN_ARMS: usize = 2;

/// Validated parameters of an experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    epsilon: f64,
    trial_budget: u64,
    num_runs: usize,
    arms: Vec<ArmSpec>,
    seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            trial_budget: DEFAULT_TRIAL_BUDGET,
            num_runs: DEFAULT_NUM_RUNS,
            arms: default_arms(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a new builder starting from the default parameters
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn trial_budget(&self) -> u64 {
        self.trial_budget
    }

    pub fn num_runs(&self) -> usize {
        self.num_runs
    }

    pub fn arms(&self) -> &[ArmSpec] {
        &self.arms
    }

    /// Seed of the experiment RNG; `None` means seed from OS entropy.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Largest reward a single play can pay, exclusive.
    pub fn max_reward_magnitude(&self) -> f64 {
        self.arms
            .iter()
            .map(ArmSpec::reward_magnitude)
            .fold(0.0, f64::max)
    }
}

/// Builder for [`SimulationConfig`] with a fluent API
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    epsilon: f64,
    trial_budget: u64,
    num_runs: usize,
    arms: Option<Vec<(f64, f64)>>,
    seed: Option<u64>,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            trial_budget: DEFAULT_TRIAL_BUDGET,
            num_runs: DEFAULT_NUM_RUNS,
            arms: None,
            seed: None,
        }
    }
}

impl SimulationConfigBuilder {
    /// Set the exploration rate of the epsilon-greedy policy
    pub fn epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the number of plays per run
    pub fn trial_budget(mut self, trial_budget: u64) -> Self {
        self.trial_budget = trial_budget;
        self
    }

    /// Set the number of independent runs per policy
    pub fn num_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    /// Append one arm. The first call replaces the default arm set.
    pub fn arm(mut self, success_probability: f64, reward_magnitude: f64) -> Self {
        self.arms
            .get_or_insert_with(Vec::new)
            .push((success_probability, reward_magnitude));
        self
    }

    /// Replace the arm set
    pub fn arms<I>(mut self, arms: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        self.arms = Some(arms.into_iter().collect());
        self
    }

    /// Fix the RNG seed for reproducible experiments
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<SimulationConfig> {
        validate_epsilon(self.epsilon)?;

        if self.num_runs == 0 {
            return Err(BanditError::InvalidParameter {
                message: "num_runs must be at least 1".into(),
            });
        }

        let arms = match self.arms {
            Some(raw) => raw
                .into_iter()
                .map(|(p, magnitude)| ArmSpec::new(p, magnitude))
                .collect::<Result<Vec<_>>>()?,
            None => default_arms(),
        };

        if arms.len() < MIN_ARMS {
            return Err(BanditError::TooFewArms { got: arms.len() });
        }

        Ok(SimulationConfig {
            epsilon: self.epsilon,
            trial_budget: self.trial_budget,
            num_runs: self.num_runs,
            arms,
            seed: self.seed,
        })
    }
}

fn default_arms() -> Vec<ArmSpec> {
    DEFAULT_ARMS
        .iter()
        .map(|&(success_probability, reward_magnitude)| ArmSpec {
            success_probability,
            reward_magnitude,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_builder_default() {
        let built = SimulationConfig::builder().build().unwrap();
        assert_eq!(built, SimulationConfig::default());

        assert_eq!(built.epsilon(), 0.15);
        assert_eq!(built.trial_budget(), 30);
        assert_eq!(built.num_runs(), 1000);
        assert_eq!(built.arms().len(), 2);
        assert_eq!(built.arms()[0].success_probability(), 0.2);
        assert_eq!(built.arms()[0].reward_magnitude(), 20.0);
        assert_eq!(built.arms()[1].success_probability(), 0.8);
        assert_eq!(built.arms()[1].reward_magnitude(), 2.0);
        assert_eq!(built.seed(), None);
        assert_eq!(built.max_reward_magnitude(), 20.0);
    }

    #[test]
    fn test_arm_replaces_defaults() {
        let config = SimulationConfig::builder()
            .arm(0.1, 50.0)
            .arm(0.5, 4.0)
            .arm(0.9, 1.0)
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(config.arms().len(), 3);
        assert_eq!(config.arms()[0].reward_magnitude(), 50.0);
        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_invalid_configurations() {
        assert_eq!(
            SimulationConfig::builder().arm(0.5, 2.0).build(),
            Err(BanditError::TooFewArms { got: 1 })
        );
        assert_eq!(
            SimulationConfig::builder().arms(Vec::new()).build(),
            Err(BanditError::TooFewArms { got: 0 })
        );
        assert_eq!(
            SimulationConfig::builder().arms([(0.5, 2.0), (1.2, 2.0)]).build(),
            Err(BanditError::InvalidProbability { value: 1.2 })
        );
        assert_eq!(
            SimulationConfig::builder().arms([(0.5, 2.0), (0.5, 0.0)]).build(),
            Err(BanditError::InvalidRewardMagnitude { value: 0.0 })
        );
        assert!(matches!(
            SimulationConfig::builder().epsilon(1.01).build(),
            Err(BanditError::InvalidParameter { .. })
        ));
        assert!(matches!(
            SimulationConfig::builder().num_runs(0).build(),
            Err(BanditError::InvalidParameter { .. })
        ));
    }
}
