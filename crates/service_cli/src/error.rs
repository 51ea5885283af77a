//! CLI error types

use thiserror::Error;
use variate_core::{ConfigurationError, SamplerError};

use crate::config::ConfigError;

/// Errors surfaced by the `variate` command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// Sampling call failed
    #[error("Sampling failed: {0}")]
    Sampler(#[from] SamplerError),

    /// Generator or request parameters rejected
    #[error("Invalid parameters: {0}")]
    Parameters(#[from] ConfigurationError),

    /// CLI configuration could not be built
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),

    /// Command line argument outside its accepted values
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversions() {
        let err: CliError = SamplerError::CapacityExceeded {
            budget: 16,
            rate_alpha: 2.0,
        }
        .into();
        assert!(err.to_string().starts_with("Sampling failed"));

        let err: CliError = ConfigurationError::NonPositiveModulus.into();
        assert!(err.to_string().contains("modulus"));

        let err: CliError = ConfigError::InvalidLogLevel("loud".to_string()).into();
        assert!(err.to_string().contains("loud"));
    }
}
