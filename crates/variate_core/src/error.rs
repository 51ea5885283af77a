//! Error types for structured error handling.
//!
//! This module provides:
//! - `ConfigurationError`: Invalid generator parameters or distribution requests
//! - `SamplerError`: Every failure a sampling call can surface
//!
//! All errors are local and recoverable: the caller adjusts the parameters
//! and calls again. Nothing in this crate retries on the caller's behalf.

use thiserror::Error;

/// Invalid generator parameters or distribution request fields.
///
/// Raised synchronously at call entry, before any draw is made, so an
/// engine is never partially consumed by a rejected request.
///
/// # Examples
/// ```
/// use variate_core::ConfigurationError;
///
/// let err = ConfigurationError::InvertedInterval { low: 5.0, high: 2.0 };
/// assert_eq!(format!("{}", err), "Invalid interval: low 5 exceeds high 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    /// Modulus of zero makes the recurrence undefined.
    #[error("Invalid modulus: must be positive")]
    NonPositiveModulus,

    /// Modulus too wide for `x / modulus` to stay below 1.0 in `f64`.
    #[error("Invalid modulus {modulus}: must not exceed {max}")]
    ModulusTooLarge {
        /// The rejected modulus
        modulus: u64,
        /// Largest supported modulus
        max: u64,
    },

    /// Lower bound above upper bound.
    #[error("Invalid interval: low {low} exceeds high {high}")]
    InvertedInterval {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// Probability outside `[0, 1]`.
    #[error("Invalid probability {0}: must be in [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// Negative number of trials.
    #[error("Invalid trials {0}: must be non-negative")]
    NegativeTrials(i64),

    /// Trial count wider than a `u32` outcome can hold.
    #[error("Invalid trials {0}: must not exceed {max}", max = u32::MAX)]
    TooManyTrials(i64),

    /// Negative standard deviation.
    #[error("Invalid standard deviation {0}: must be non-negative")]
    NegativeStdDev(f64),

    /// Exponential rate not strictly positive.
    #[error("Invalid rate {0}: must be positive")]
    NonPositiveRate(f64),

    /// Poisson rate not strictly positive.
    #[error("Invalid rate_alpha {0}: must be positive")]
    NonPositiveAlpha(f64),

    /// NaN or infinite input.
    #[error("Invalid {name}: {value} is not finite")]
    NonFinite {
        /// Field name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// Unrecognised generator description.
    #[error("Invalid generator {0}")]
    InvalidGenerator(String),

    /// Histogram with no bins or an empty range.
    #[error("Invalid histogram: {0}")]
    InvalidHistogram(String),

    /// Poisson draw budget that could never terminate a draw.
    #[error("Invalid draw budget: {0}")]
    InvalidDrawBudget(String),
}

/// Failures surfaced by a sampling call.
///
/// # Variants
/// - `Configuration`: rejected before any draw
/// - `Domain`: a draw landed on a logarithm's undefined boundary twice
/// - `CapacityExceeded`: the Poisson draw budget ran out
///
/// # Examples
/// ```
/// use variate_core::{ConfigurationError, SamplerError};
///
/// let err: SamplerError = ConfigurationError::NonPositiveAlpha(0.0).into();
/// assert!(err.is_configuration());
/// assert!(err.to_string().contains("rate_alpha"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    /// Invalid parameters or request fields.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A uniform draw sat on the boundary of a logarithm's domain, and the
    /// single resample from the same engine did too.
    #[error("Domain error in {distribution} sampler: draw {draw} is outside the logarithm's domain after resampling")]
    Domain {
        /// Sampler that rejected the draw
        distribution: &'static str,
        /// The boundary draw
        draw: f64,
    },

    /// The Poisson sampler used its whole draw budget without terminating.
    #[error("Capacity exceeded: {budget} draws exhausted before termination (rate_alpha = {rate_alpha})")]
    CapacityExceeded {
        /// Draws allowed per outcome
        budget: usize,
        /// Requested Poisson rate
        rate_alpha: f64,
    },
}

impl SamplerError {
    /// Returns `true` for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SamplerError::Configuration(_))
    }
}

/// Result type used throughout variate_core.
pub type Result<T> = std::result::Result<T, SamplerError>;
