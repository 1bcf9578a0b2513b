use banditsim::{Experiment, SimulationConfig};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // stdout carries the results; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SimulationConfig::default();
    debug!(?config, "starting experiments");

    let experiment = Experiment::new(config);
    let mut rng = experiment.make_rng();
    let comparison = experiment.compare(&mut rng)?;

    println!(
        "epsilon-greedy average reward: {:.6}",
        comparison.epsilon_greedy.mean_total_reward
    );
    println!("UCB1 average reward: {:.6}", comparison.ucb.mean_total_reward);

    Ok(())
}
