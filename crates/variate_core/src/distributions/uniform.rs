//! Uniform sampler on `[low, high)`.

use tracing::warn;

use super::ensure_finite;
use crate::buffer::SampleBuffer;
use crate::engine::{GeneratorParameters, LcgEngine};
use crate::error::{ConfigurationError, Result};

/// Validated `[low, high)` interval.
///
/// `low == high` is accepted: it is well defined, but every draw is the
/// same constant, so a warning is logged at construction.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::UniformRequest;
///
/// let request = UniformRequest::new(-1.0, 3.0).unwrap();
/// assert_eq!(request.span(), 4.0);
/// assert!(UniformRequest::new(5.0, 2.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UniformRequest {
    low: f64,
    high: f64,
}

impl UniformRequest {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonFinite`] for NaN or infinite bounds
    /// - [`ConfigurationError::InvertedInterval`] when `low > high`
    pub fn new(low: f64, high: f64) -> std::result::Result<Self, ConfigurationError> {
        let low = ensure_finite("low", low)?;
        let high = ensure_finite("high", high)?;
        if low > high {
            return Err(ConfigurationError::InvertedInterval { low, high });
        }
        if !(high - low).is_finite() {
            return Err(ConfigurationError::NonFinite {
                name: "high - low",
                value: high - low,
            });
        }
        if low == high {
            warn!(low, high, "Degenerate uniform interval: every draw equals low");
        }
        Ok(Self { low, high })
    }

    /// The standard interval `[0, 1)`.
    #[inline]
    pub fn standard() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Returns the upper bound.
    #[inline]
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Returns `high - low`.
    #[inline]
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Returns `true` when the interval collapses to a point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }
}

impl Default for UniformRequest {
    fn default() -> Self {
        Self::standard()
    }
}

/// Engine output rescaled to `[low, high)`.
///
/// This is the only way the higher-level transforms see random numbers.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::UniformStream;
/// use variate_core::engine::{GeneratorParameters, LcgEngine};
///
/// let mut stream = UniformStream::standard(LcgEngine::new(GeneratorParameters::bad(3)));
/// assert_eq!(stream.next_value(), 5.0 / 11.0);
/// ```
#[derive(Clone, Debug)]
pub struct UniformStream {
    engine: LcgEngine,
    low: f64,
    span: f64,
}

impl UniformStream {
    /// Wraps an engine with the given interval.
    pub fn new(engine: LcgEngine, request: &UniformRequest) -> Self {
        Self {
            engine,
            low: request.low(),
            span: request.span(),
        }
    }

    /// Wraps an engine on `[0, 1)`.
    pub fn standard(engine: LcgEngine) -> Self {
        Self::new(engine, &UniformRequest::standard())
    }

    /// Draws the next value: `low + (high - low) * u`.
    #[inline]
    pub fn next_value(&mut self) -> f64 {
        self.low + self.span * self.engine.next_uniform()
    }

    /// Draws `count` values into a new buffer.
    pub fn take_buffer(&mut self, count: usize) -> SampleBuffer {
        (0..count).map(|_| self.next_value()).collect()
    }

    /// Returns the underlying engine.
    #[inline]
    pub fn engine(&self) -> &LcgEngine {
        &self.engine
    }
}

impl Iterator for UniformStream {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Draws `count` uniforms on `[low, high)` from one engine run.
///
/// # Errors
///
/// Returns a configuration error for `low > high` or non-finite bounds.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::uniform;
/// use variate_core::engine::GeneratorParameters;
///
/// let values = uniform(10.0, 20.0, GeneratorParameters::good(1), 100).unwrap();
/// assert!(values.iter().all(|&v| (10.0..20.0).contains(&v)));
/// ```
pub fn uniform(
    low: f64,
    high: f64,
    params: GeneratorParameters,
    count: usize,
) -> Result<SampleBuffer> {
    let request = UniformRequest::new(low, high)?;
    let mut stream = UniformStream::new(LcgEngine::new(params), &request);
    Ok(stream.take_buffer(count))
}
