//! Policy trait definition for multi-armed bandit algorithms

use crate::arm::Arm;

/// Outcome of a single arm selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    /// Index of the chosen arm in the arm set.
    pub arm: usize,
    /// Whether the choice was made to gather information rather than to
    /// exploit the current estimates. Diagnostic only.
    pub exploring: bool,
}

impl Selection {
    pub fn exploit(arm: usize) -> Self {
        Self {
            arm,
            exploring: false,
        }
    }

    pub fn explore(arm: usize) -> Self {
        Self {
            arm,
            exploring: true,
        }
    }
}

/// Action-selection strategy over an ordered arm set.
///
/// Policies hold no per-run state: everything they learn is read back from
/// the arms' own statistics, and the arm slice is only borrowed for the
/// duration of one call.
///
/// Note: This trait takes `dyn rand::RngCore` rather than a generic parameter
/// so that `Box<dyn Policy>` stays object-safe.
pub trait Policy {
    /// Short human-readable name used in reports and logs.
    fn name(&self) -> &'static str;

    /// Choose the next arm to play.
    ///
    /// # Arguments
    /// - `arms`: The arm set, never empty
    /// - `round`: Number of plays already executed in this run
    /// - `rng`: Random number generator for stochastic policies
    fn select(&self, arms: &[Arm], round: u64, rng: &mut dyn rand::RngCore) -> Selection;
}

impl<P: Policy + ?Sized> Policy for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select(&self, arms: &[Arm], round: u64, rng: &mut dyn rand::RngCore) -> Selection {
        (**self).select(arms, round, rng)
    }
}

impl<P: Policy + ?Sized> Policy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select(&self, arms: &[Arm], round: u64, rng: &mut dyn rand::RngCore) -> Selection {
        (**self).select(arms, round, rng)
    }
}
