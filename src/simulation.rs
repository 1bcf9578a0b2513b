//! Single-run simulation.
//!
//! A [`Simulation`] owns the ground truth of the arms and the trial budget.
//! Every call to [`Simulation::run`] builds a fresh arm set, lets the policy
//! pick and play an arm once per trial, and reports what the run earned.

use tracing::{debug, trace};

use crate::arm::{Arm, ArmSpec};
use crate::config::{MIN_ARMS, SimulationConfig};
use crate::error::{BanditError, Result};
use crate::policy::Policy;

/// What happened on one trial of a run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialEvent {
    /// Zero-based trial number within the run.
    pub trial: u64,
    /// Index of the arm that was played.
    pub arm: usize,
    /// Whether the policy flagged the choice as exploration.
    pub exploring: bool,
    /// Reward paid by the play.
    pub reward: f64,
}

/// Per-trial hook for instrumentation.
///
/// Implemented for any `FnMut(&TrialEvent)`.
pub trait TrialObserver {
    fn on_trial(&mut self, event: &TrialEvent);
}

impl<F> TrialObserver for F
where
    F: FnMut(&TrialEvent),
{
    fn on_trial(&mut self, event: &TrialEvent) {
        self(event)
    }
}

/// Outcome of one run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    /// Reward accumulated across all arms.
    pub total_reward: f64,
    /// `total_reward` divided by the trial budget, `0.0` for an empty budget.
    pub average_reward: f64,
    /// Number of trials the policy flagged as exploration.
    pub explorations: u64,
    /// Final state of the arm set.
    pub arms: Vec<Arm>,
}

impl RunReport {
    /// Plays executed across all arms.
    pub fn total_plays(&self) -> u64 {
        self.arms.iter().map(Arm::trials).sum()
    }
}

/// Runs one policy against a fixed arm set for a fixed number of trials.
#[derive(Clone, Debug, PartialEq)]
pub struct Simulation {
    arms: Vec<ArmSpec>,
    trial_budget: u64,
}

impl Simulation {
    /// Creates a simulation over the given arms.
    ///
    /// # Errors
    /// Returns [`BanditError::TooFewArms`] for fewer than two arms.
    pub fn new(arms: Vec<ArmSpec>, trial_budget: u64) -> Result<Self> {
        if arms.len() < MIN_ARMS {
            return Err(BanditError::TooFewArms { got: arms.len() });
        }
        Ok(Self { arms, trial_budget })
    }

    /// Builds the simulation described by an already validated config.
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            arms: config.arms().to_vec(),
            trial_budget: config.trial_budget(),
        }
    }

    pub fn trial_budget(&self) -> u64 {
        self.trial_budget
    }

    pub fn arm_specs(&self) -> &[ArmSpec] {
        &self.arms
    }

    /// Run the policy once from fresh arm state.
    pub fn run<P>(&self, policy: &P, rng: &mut dyn rand::RngCore) -> RunReport
    where
        P: Policy + ?Sized,
    {
        self.run_with_observer(policy, rng, &mut |_: &TrialEvent| {})
    }

    /// Run the policy once, reporting every trial to `observer`.
    pub fn run_with_observer<P>(
        &self,
        policy: &P,
        rng: &mut dyn rand::RngCore,
        observer: &mut dyn TrialObserver,
    ) -> RunReport
    where
        P: Policy + ?Sized,
    {
        let mut arms: Vec<Arm> = self.arms.iter().copied().map(Arm::from_spec).collect();
        let mut explorations = 0;

        for trial in 0..self.trial_budget {
            let selection = policy.select(&arms, trial, rng);
            let reward = arms[selection.arm].play(rng);
            if selection.exploring {
                explorations += 1;
            }

            let event = TrialEvent {
                trial,
                arm: selection.arm,
                exploring: selection.exploring,
                reward,
            };
            trace!(policy = policy.name(), ?event, "trial");
            observer.on_trial(&event);
        }

        let total_reward: f64 = arms.iter().map(Arm::total_reward).sum();
        let average_reward = if self.trial_budget == 0 {
            0.0
        } else {
            total_reward / self.trial_budget as f64
        };

        debug!(policy = policy.name(), total_reward, explorations, "run finished");

        RunReport {
            total_reward,
            average_reward,
            explorations,
            arms,
        }
    }
}
