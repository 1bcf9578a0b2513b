//! Repeated independent runs and their averages.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::config::SimulationConfig;
use crate::error::Result;
use crate::policies::{EpsilonGreedy, Ucb};
use crate::policy::Policy;
use crate::simulation::Simulation;

/// Averages of one policy over many runs.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentSummary {
    /// Name of the policy that produced the runs.
    pub policy: &'static str,
    /// Number of runs averaged.
    pub runs: usize,
    /// Mean total reward per run.
    pub mean_total_reward: f64,
    /// Mean reward per trial.
    pub mean_reward_per_trial: f64,
    /// Mean number of exploration steps per run.
    pub mean_explorations: f64,
    /// Mean number of plays per run, by arm index.
    pub mean_arm_plays: Vec<f64>,
}

/// Side-by-side summaries of both policies on the same configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Comparison {
    pub epsilon_greedy: ExperimentSummary,
    pub ucb: ExperimentSummary,
}

/// Repeats a [`Simulation`] and averages its results.
#[derive(Clone, Debug)]
pub struct Experiment {
    config: SimulationConfig,
    simulation: Simulation,
}

impl Experiment {
    pub fn new(config: SimulationConfig) -> Self {
        let simulation = Simulation::from_config(&config);
        Self { config, simulation }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Random source for a whole experiment: seeded when the config has a
    /// seed, from OS entropy otherwise.
    pub fn make_rng(&self) -> StdRng {
        match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// Run `policy` for the configured number of runs and average the results.
    ///
    /// All runs draw from the same `rng` stream, one after another, so no two
    /// runs see the same random draws.
    pub fn run<P>(&self, policy: &P, rng: &mut dyn rand::RngCore) -> ExperimentSummary
    where
        P: Policy + ?Sized,
    {
        let runs = self.config.num_runs();
        let mut total_reward = 0.0;
        let mut average_reward = 0.0;
        let mut explorations = 0u64;
        let mut arm_plays = vec![0u64; self.simulation.arm_specs().len()];

        for _ in 0..runs {
            let report = self.simulation.run(policy, rng);
            total_reward += report.total_reward;
            average_reward += report.average_reward;
            explorations += report.explorations;
            for (plays, arm) in arm_plays.iter_mut().zip(&report.arms) {
                *plays += arm.trials();
            }
        }

        let n = runs as f64;
        let summary = ExperimentSummary {
            policy: policy.name(),
            runs,
            mean_total_reward: total_reward / n,
            mean_reward_per_trial: average_reward / n,
            mean_explorations: explorations as f64 / n,
            mean_arm_plays: arm_plays.iter().map(|&plays| plays as f64 / n).collect(),
        };

        info!(
            policy = summary.policy,
            runs,
            mean_total_reward = summary.mean_total_reward,
            mean_explorations = summary.mean_explorations,
            "experiment finished"
        );
        summary
    }

    /// Run epsilon-greedy then UCB1, both drawing from `rng`.
    ///
    /// # Errors
    /// Fails only if the configured epsilon is rejected by the policy.
    pub fn compare(&self, rng: &mut dyn rand::RngCore) -> Result<Comparison> {
        let epsilon_greedy = EpsilonGreedy::new(self.config.epsilon())?;
        Ok(Comparison {
            epsilon_greedy: self.run(&epsilon_greedy, rng),
            ucb: self.run(&Ucb::new(), rng),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_experiment(seed: u64) -> Experiment {
        let config = SimulationConfig::builder()
            .num_runs(200)
            .seed(seed)
            .build()
            .unwrap();
        Experiment::new(config)
    }

    #[test]
    fn test_summary_shape() {
        let experiment = small_experiment(42);
        let mut rng = experiment.make_rng();

        let summary = experiment.run(&Ucb::new(), &mut rng);
        assert_eq!(summary.policy, "UCB1");
        assert_eq!(summary.runs, 200);
        assert_eq!(summary.mean_arm_plays.len(), 2);
        assert_abs_diff_eq!(summary.mean_arm_plays.iter().sum::<f64>(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(
            summary.mean_reward_per_trial,
            summary.mean_total_reward / 30.0,
            epsilon = 1e-9
        );
        // UCB1 only explores during warm-start
        assert_abs_diff_eq!(summary.mean_explorations, 2.0);
    }

    #[test]
    fn test_seeded_experiments_are_reproducible() {
        let first = small_experiment(7);
        let second = small_experiment(7);

        let a = first.compare(&mut first.make_rng()).unwrap();
        let b = second.compare(&mut second.make_rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_compare_runs_both_policies() {
        let experiment = small_experiment(3);
        let comparison = experiment.compare(&mut experiment.make_rng()).unwrap();

        assert_eq!(comparison.epsilon_greedy.policy, "epsilon-greedy");
        assert_eq!(comparison.ucb.policy, "UCB1");
        assert!(comparison.epsilon_greedy.mean_explorations > 0.0);
        assert!(comparison.epsilon_greedy.mean_explorations < 30.0);
    }
}
