//! banditsim: epsilon-greedy versus UCB1 on a simulated multi-armed bandit.
//!
//! Each arm pays out with a hidden probability; a policy decides which arm to
//! play on every trial, and an experiment averages many independent runs so
//! the two policies can be compared on expected reward.
//!
//! # Quick Start
//!
//! ```
//! use banditsim::prelude::*;
//! use rand::SeedableRng;
//!
//! let config = SimulationConfig::builder()
//!     .arm(0.2, 20.0)
//!     .arm(0.8, 2.0)
//!     .trial_budget(30)
//!     .num_runs(100)
//!     .build()
//!     .unwrap();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! // One run
//! let simulation = Simulation::from_config(&config);
//! let report = simulation.run(&Ucb::new(), &mut rng);
//! assert_eq!(report.total_plays(), 30);
//!
//! // Many runs, averaged
//! let experiment = Experiment::new(config);
//! let summary = experiment.run(&EpsilonGreedy::new(0.15).unwrap(), &mut rng);
//! assert!(summary.mean_total_reward >= 0.0);
//! ```

mod arm;
pub mod config;
mod error;
mod experiment;
pub mod policies;
mod policy;
mod simulation;

pub use arm::{Arm, ArmSpec};
pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::{BanditError, Result};
pub use experiment::{Comparison, Experiment, ExperimentSummary};
pub use policy::{Policy, Selection};
pub use simulation::{RunReport, Simulation, TrialEvent, TrialObserver};

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use banditsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{EpsilonGreedy, Policy, Selection, Ucb};
    pub use crate::{
        Arm, ArmSpec, BanditError, Experiment, ExperimentSummary, Result, RunReport, Simulation,
        SimulationConfig, TrialEvent,
    };
}
