//! Tests for configuration error handling

use banditsim::{BanditError, Experiment, SimulationConfig};

#[test]
fn test_degenerate_arm_sets_rejected() {
    let result = SimulationConfig::builder().arms([(0.5, 10.0)]).build();
    assert_eq!(result, Err(BanditError::TooFewArms { got: 1 }));

    if let Err(e) = result {
        assert!(e.to_string().contains("at least 2 arms"));
    }
}

#[test]
fn test_out_of_range_probability_rejected() {
    for p in [-0.01, 1.01, f64::NAN, f64::INFINITY] {
        let result = SimulationConfig::builder().arms([(0.5, 2.0), (p, 2.0)]).build();
        assert!(
            matches!(result, Err(BanditError::InvalidProbability { .. })),
            "p={p}"
        );
    }
}

#[test]
fn test_non_positive_magnitude_rejected() {
    for magnitude in [0.0, -1.0, f64::NAN] {
        let result = SimulationConfig::builder()
            .arms([(0.5, 2.0), (0.5, magnitude)])
            .build();
        assert!(
            matches!(result, Err(BanditError::InvalidRewardMagnitude { .. })),
            "magnitude={magnitude}"
        );
    }
}

#[test]
fn test_epsilon_bounds() {
    for epsilon in [0.0, 0.5, 1.0] {
        assert!(SimulationConfig::builder().epsilon(epsilon).build().is_ok());
    }
    let result = SimulationConfig::builder().epsilon(-0.1).build();
    assert!(matches!(result, Err(BanditError::InvalidParameter { .. })));
}

#[test]
fn test_valid_config_never_fails_mid_run() {
    let config = SimulationConfig::builder()
        .epsilon(1.0)
        .trial_budget(5)
        .num_runs(3)
        .arms([(0.0, 0.5), (1.0, 0.5)])
        .seed(1)
        .build()
        .unwrap();
    let experiment = Experiment::new(config);
    let comparison = experiment.compare(&mut experiment.make_rng()).unwrap();

    // magnitudes below 1 can only pay 0
    assert_eq!(comparison.epsilon_greedy.mean_total_reward, 0.0);
    assert_eq!(comparison.ucb.mean_total_reward, 0.0);
}
