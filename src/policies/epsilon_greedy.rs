use rand::Rng;

use crate::arm::Arm;
use crate::config::DEFAULT_EPSILON;
use crate::error::{BanditError, Result};
use crate::policy::{Policy, Selection};

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
///
/// Exploration here is inverted-greedy: instead of picking an arm uniformly
/// at random, an exploration step deliberately plays the arm with the lowest
/// empirical average reward. This converges differently from the textbook
/// algorithm of the same name and should not be compared against published
/// epsilon-greedy results without accounting for it.
#[derive(Clone, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl Default for EpsilonGreedy {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    ///
    /// # Errors
    /// Returns [`BanditError::InvalidParameter`] unless `epsilon` is in `[0, 1]`.
    pub fn new(epsilon: f64) -> Result<Self> {
        validate_epsilon(epsilon)?;
        Ok(Self { epsilon })
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Arm with the highest average reward.
    ///
    /// Equal averages go to the arm played fewer times, then to the lower index.
    pub fn find_best_arm(arms: &[Arm]) -> usize {
        let mut best = 0;
        for (idx, arm) in arms.iter().enumerate().skip(1) {
            let current = &arms[best];
            let (avg, best_avg) = (arm.average_reward(), current.average_reward());
            if avg > best_avg || (avg == best_avg && arm.trials() < current.trials()) {
                best = idx;
            }
        }
        best
    }

    /// Arm with the lowest average reward, drawn uniformly among equal lows.
    pub fn find_worst_arm(arms: &[Arm], rng: &mut dyn rand::RngCore) -> usize {
        let lowest = arms
            .iter()
            .map(Arm::average_reward)
            .fold(f64::INFINITY, f64::min);
        let candidates: Vec<usize> = arms
            .iter()
            .enumerate()
            .filter(|(_, arm)| arm.average_reward() == lowest)
            .map(|(idx, _)| idx)
            .collect();

        match candidates.as_slice() {
            [only] => *only,
            _ => candidates[rng.random_range(0..candidates.len())],
        }
    }
}

impl Policy for EpsilonGreedy {
    fn name(&self) -> &'static str {
        "epsilon-greedy"
    }

    fn select(&self, arms: &[Arm], _round: u64, rng: &mut dyn rand::RngCore) -> Selection {
        let r: f64 = rng.random();
        if r < self.epsilon {
            Selection::explore(Self::find_worst_arm(arms, rng))
        } else {
            Selection::exploit(Self::find_best_arm(arms))
        }
    }
}

pub(crate) fn validate_epsilon(epsilon: f64) -> Result<()> {
    if (0.0..=1.0).contains(&epsilon) {
        Ok(())
    } else {
        Err(BanditError::InvalidParameter {
            message: format!("epsilon must be between 0 and 1, got {epsilon}"),
        })
    }
}
