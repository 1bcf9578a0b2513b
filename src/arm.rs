//! Arm type for multi-armed bandits.
//!
//! An [`Arm`] is a slot machine with a hidden payout rate. It keeps its own
//! play statistics and is the only place where rewards are drawn.

use rand::Rng;

use crate::error::{BanditError, Result};

/// Ground-truth parameters of an arm.
///
/// A fresh [`Arm`] is built from its spec at the start of every run, so the
/// spec is the only part of an arm that outlives a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArmSpec {
    pub(crate) success_probability: f64,
    pub(crate) reward_magnitude: f64,
}

impl ArmSpec {
    /// Creates a validated arm spec.
    ///
    /// # Errors
    /// Returns [`BanditError::InvalidProbability`] when `success_probability`
    /// is outside `[0, 1]` and [`BanditError::InvalidRewardMagnitude`] when
    /// `reward_magnitude` is not a positive finite number.
    pub fn new(success_probability: f64, reward_magnitude: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&success_probability) {
            return Err(BanditError::InvalidProbability {
                value: success_probability,
            });
        }
        if !reward_magnitude.is_finite() || reward_magnitude <= 0.0 {
            return Err(BanditError::InvalidRewardMagnitude {
                value: reward_magnitude,
            });
        }
        Ok(Self {
            success_probability,
            reward_magnitude,
        })
    }

    pub fn success_probability(&self) -> f64 {
        self.success_probability
    }

    pub fn reward_magnitude(&self) -> f64 {
        self.reward_magnitude
    }
}

/// One reward source of the bandit together with its play statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct Arm {
    trials: u64,
    successes: u64,
    total_reward: f64,
    spec: ArmSpec,
}

impl Arm {
    /// Creates an unplayed arm, validating its parameters.
    ///
    /// # Errors
    /// See [`ArmSpec::new`].
    pub fn new(success_probability: f64, reward_magnitude: f64) -> Result<Self> {
        ArmSpec::new(success_probability, reward_magnitude).map(Self::from_spec)
    }

    /// Creates an unplayed arm from an already validated spec.
    #[must_use]
    pub fn from_spec(spec: ArmSpec) -> Self {
        Self {
            trials: 0,
            successes: 0,
            total_reward: 0.0,
            spec,
        }
    }

    /// Mean reward per play, `0.0` for an arm that was never played.
    pub fn average_reward(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            self.total_reward / self.trials as f64
        }
    }

    /// Pulls the arm once and returns the reward it paid.
    ///
    /// The play succeeds with the arm's success probability. A success pays an
    /// integer drawn uniformly below the reward magnitude, so a success can
    /// still pay nothing. The trial counter is bumped either way.
    pub fn play(&mut self, rng: &mut dyn rand::RngCore) -> f64 {
        self.trials += 1;

        let draw: f64 = rng.random();
        if draw >= self.spec.success_probability {
            return 0.0;
        }

        self.successes += 1;
        // magnitude > 0 so the exclusive bound is at least 1
        let bound = self.spec.reward_magnitude.ceil() as u64;
        let reward = rng.random_range(0..bound) as f64;
        self.total_reward += reward;
        reward
    }

    pub fn trials(&self) -> u64 {
        self.trials
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn total_reward(&self) -> f64 {
        self.total_reward
    }

    pub fn spec(&self) -> &ArmSpec {
        &self.spec
    }

    pub fn success_probability(&self) -> f64 {
        self.spec.success_probability
    }

    pub fn reward_magnitude(&self) -> f64 {
        self.spec.reward_magnitude
    }

    /// Builds an arm with preset statistics. Only used to stage policy tests.
    #[cfg(test)]
    pub(crate) fn with_stats(
        spec: ArmSpec,
        trials: u64,
        successes: u64,
        total_reward: f64,
    ) -> Self {
        Self {
            trials,
            successes,
            total_reward,
            spec,
        }
    }
}
