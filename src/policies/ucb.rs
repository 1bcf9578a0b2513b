use crate::arm::Arm;
use crate::policy::{Policy, Selection};

/// Upper Confidence Bound (UCB1) policy
///
/// Every arm is played once, in index order, before any scoring happens.
/// After that warm-start each arm is scored by its average reward plus a
/// confidence bonus `sqrt(2 ln t / n_i)` that shrinks the more often the arm
/// is played, and the highest score wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ucb;

impl Ucb {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// UCB score of every arm at round `round`.
    ///
    /// Unplayed arms score infinity; `round` is clamped to 1 so the log term
    /// never goes negative.
    pub fn scores(arms: &[Arm], round: u64) -> Vec<f64> {
        let log_round = (round.max(1) as f64).ln();
        arms.iter()
            .map(|arm| {
                if arm.trials() == 0 {
                    f64::INFINITY
                } else {
                    let exploitation = arm.average_reward();
                    let exploration = ((2.0 * log_round) / arm.trials() as f64).sqrt();
                    exploitation + exploration
                }
            })
            .collect()
    }
}

impl Policy for Ucb {
    fn name(&self) -> &'static str {
        "UCB1"
    }

    fn select(&self, arms: &[Arm], round: u64, _rng: &mut dyn rand::RngCore) -> Selection {
        // Warm-start: first unplayed arm in index order
        if let Some(idx) = arms.iter().position(|arm| arm.trials() == 0) {
            return Selection::explore(idx);
        }

        let scores = Self::scores(arms, round);
        let mut best = 0;
        for (idx, score) in scores.iter().enumerate().skip(1) {
            // strict comparison keeps exact ties on the lower index
            if *score > scores[best] {
                best = idx;
            }
        }
        Selection::exploit(best)
    }
}
