//! Bernoulli and Binomial samplers.
//!
//! Both threshold standard uniforms: a draw `u` counts as a success when
//! `u <= p`.

use super::ensure_probability;
use super::uniform::UniformStream;
use crate::buffer::SampleBuffer;
use crate::error::ConfigurationError;

/// Validated Bernoulli success probability.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BernoulliRequest {
    probability: f64,
}

impl BernoulliRequest {
    /// Creates a request; `probability` must lie in `[0, 1]`.
    pub fn new(probability: f64) -> Result<Self, ConfigurationError> {
        Ok(Self {
            probability: ensure_probability(probability)?,
        })
    }

    /// Returns the success probability.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Validated Binomial parameters.
///
/// Trials are taken as a signed integer so that a negative count is a
/// configuration error rather than a silent wrap.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::BinomialRequest;
///
/// let request = BinomialRequest::new(100, 0.75).unwrap();
/// assert_eq!(request.trials(), 100);
/// assert!(BinomialRequest::new(-1, 0.5).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinomialRequest {
    trials: u32,
    probability: f64,
}

impl BinomialRequest {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NegativeTrials`] when `trials < 0`
    /// - [`ConfigurationError::TooManyTrials`] when `trials > u32::MAX`
    /// - [`ConfigurationError::ProbabilityOutOfRange`] when `p` is outside `[0, 1]`
    pub fn new(trials: i64, probability: f64) -> Result<Self, ConfigurationError> {
        if trials < 0 {
            return Err(ConfigurationError::NegativeTrials(trials));
        }
        let trials = u32::try_from(trials).map_err(|_| ConfigurationError::TooManyTrials(trials))?;
        Ok(Self {
            trials,
            probability: ensure_probability(probability)?,
        })
    }

    /// Returns the number of trials per outcome.
    #[inline]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// Returns the per-trial success probability.
    #[inline]
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

/// Draws `count` Bernoulli outcomes (0 or 1) from one stream.
pub fn bernoulli(
    request: &BernoulliRequest,
    stream: &mut UniformStream,
    count: usize,
) -> SampleBuffer<u32> {
    let p = request.probability();
    (0..count)
        .map(|_| u32::from(stream.next_value() <= p))
        .collect()
}

/// Draws one Binomial outcome: the number of `trials` draws with `u <= p`.
///
/// Zero trials make no draws and return zero.
pub fn binomial_outcome(request: &BinomialRequest, stream: &mut UniformStream) -> u32 {
    let p = request.probability();
    let mut successes = 0u32;
    for _ in 0..request.trials() {
        if stream.next_value() <= p {
            successes += 1;
        }
    }
    successes
}
