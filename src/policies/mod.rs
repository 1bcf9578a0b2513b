//! Action-selection policies
//!
//! Both policies read their beliefs straight from the arms' play statistics,
//! so they are plain parameter holders that can be shared across runs.

mod epsilon_greedy;
mod ucb;

pub use crate::policy::{Policy, Selection};
pub use epsilon_greedy::EpsilonGreedy;
pub(crate) use epsilon_greedy::validate_epsilon;
pub use ucb::Ucb;
