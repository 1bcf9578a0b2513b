//! Error types for the banditsim library.

use thiserror::Error;

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, BanditError>;

/// Errors raised while configuring arms, policies or experiments.
///
/// Every variant is a configuration error: a simulation that was built
/// successfully never fails mid-run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BanditError {
    /// Policies compare arms against each other, so at least two are needed.
    #[error("at least 2 arms are required, got {got}")]
    TooFewArms { got: usize },

    /// Success probability outside `[0, 1]`.
    #[error("invalid success probability {value}: must be within [0, 1]")]
    InvalidProbability { value: f64 },

    /// Reward magnitude that is not a positive finite number.
    #[error("invalid reward magnitude {value}: must be positive and finite")]
    InvalidRewardMagnitude { value: f64 },

    /// Invalid parameter value.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BanditError::TooFewArms { got: 1 };
        assert_eq!(err.to_string(), "at least 2 arms are required, got 1");

        let err = BanditError::InvalidParameter {
            message: "epsilon must be between 0 and 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid parameter: epsilon must be between 0 and 1"
        );

        let err = BanditError::InvalidProbability { value: 1.5 };
        assert_eq!(
            err.to_string(),
            "invalid success probability 1.5: must be within [0, 1]"
        );

        let err = BanditError::InvalidRewardMagnitude { value: 0.0 };
        assert_eq!(
            err.to_string(),
            "invalid reward magnitude 0: must be positive and finite"
        );
    }
}
