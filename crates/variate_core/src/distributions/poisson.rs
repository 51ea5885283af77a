//! Poisson sampler via Knuth's product of uniforms.
//!
//! For one outcome: start with `P = 1`, `X = 0`; multiply `P` by the next
//! uniform and, while `P >= e^(-alpha)`, increment `X`. The first time `P`
//! drops below the threshold, `X` is the outcome. Multiplying uniforms is
//! summing exponential inter-arrival times in log space, so `X` counts the
//! arrivals that fit in one unit of time.
//!
//! The product is kept in log space: the outcome terminates once
//! `sum(-ln u) > alpha`. `e^(-alpha)` underflows to zero above alpha ~745,
//! while the log-space sum stays exact for any finite rate. A zero draw has
//! `-ln 0 = inf` and terminates the outcome.
//!
//! The number of draws an outcome needs is unbounded in principle. Each
//! outcome is given an explicit [`DrawBudget`]; running out of it is
//! [`SamplerError::CapacityExceeded`], never a truncated count.

use tracing::trace;

use super::ensure_finite;
use super::uniform::UniformStream;
use crate::error::{ConfigurationError, Result, SamplerError};

/// Default draws allowed per unit of `rate_alpha`.
pub const DEFAULT_DRAW_FACTOR: f64 = 5.0;

/// Default floor on draws per outcome, whatever `rate_alpha` is.
pub const DEFAULT_MINIMUM_DRAWS: usize = 16;

/// Draw budget per Poisson outcome: `max(ceil(factor * alpha), minimum_draws)`.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::DrawBudget;
///
/// let budget = DrawBudget::default();
/// assert_eq!(budget.draws_for(5.0), 25);
/// assert_eq!(budget.draws_for(0.5), 16);
///
/// let strict = DrawBudget::new(5.0, 1).unwrap();
/// assert_eq!(strict.draws_for(0.5), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawBudget {
    factor: f64,
    minimum_draws: usize,
}

impl DrawBudget {
    /// Creates a budget.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::InvalidDrawBudget`] when `factor` is not finite
    /// and positive, or `minimum_draws` is zero.
    pub fn new(factor: f64, minimum_draws: usize) -> std::result::Result<Self, ConfigurationError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(ConfigurationError::InvalidDrawBudget(format!(
                "factor {} must be finite and positive",
                factor
            )));
        }
        if minimum_draws == 0 {
            return Err(ConfigurationError::InvalidDrawBudget(
                "minimum_draws must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            factor,
            minimum_draws,
        })
    }

    /// Returns the draws-per-unit-rate factor.
    #[inline]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Returns the floor on draws per outcome.
    #[inline]
    pub fn minimum_draws(&self) -> usize {
        self.minimum_draws
    }

    /// Returns the number of draws allowed for one outcome at `rate_alpha`.
    #[inline]
    pub fn draws_for(&self, rate_alpha: f64) -> usize {
        // Float-to-int `as` saturates, so huge rates clamp to usize::MAX
        ((self.factor * rate_alpha).ceil() as usize).max(self.minimum_draws)
    }
}

impl Default for DrawBudget {
    fn default() -> Self {
        Self {
            factor: DEFAULT_DRAW_FACTOR,
            minimum_draws: DEFAULT_MINIMUM_DRAWS,
        }
    }
}

/// Hard ceiling on draws per outcome; one more would overflow a `u32` count.
const MAX_OUTCOME_DRAWS: usize = u32::MAX as usize;

/// Validated Poisson parameters, with the per-outcome draw budget
/// precomputed.
///
/// The budget is capped at `u32::MAX` draws so the outcome count can never
/// overflow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoissonRequest {
    rate_alpha: f64,
    max_draws: usize,
}

impl PoissonRequest {
    /// Creates a request with the default [`DrawBudget`].
    pub fn new(rate_alpha: f64) -> std::result::Result<Self, ConfigurationError> {
        Self::with_budget(rate_alpha, DrawBudget::default())
    }

    /// Creates a request with an explicit draw budget.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::NonFinite`] for NaN or infinite rates
    /// - [`ConfigurationError::NonPositiveAlpha`] when `rate_alpha <= 0`
    pub fn with_budget(
        rate_alpha: f64,
        budget: DrawBudget,
    ) -> std::result::Result<Self, ConfigurationError> {
        let rate_alpha = ensure_finite("rate_alpha", rate_alpha)?;
        if rate_alpha <= 0.0 {
            return Err(ConfigurationError::NonPositiveAlpha(rate_alpha));
        }
        Ok(Self {
            rate_alpha,
            max_draws: budget.draws_for(rate_alpha).min(MAX_OUTCOME_DRAWS),
        })
    }

    /// Returns the rate.
    #[inline]
    pub fn rate_alpha(&self) -> f64 {
        self.rate_alpha
    }

    /// Returns the draws allowed per outcome.
    #[inline]
    pub fn max_draws(&self) -> usize {
        self.max_draws
    }
}

/// Draws one Poisson outcome.
///
/// # Errors
///
/// [`SamplerError::CapacityExceeded`] when the summed log draws have not
/// passed `rate_alpha` after `max_draws` draws.
///
/// # Examples
///
/// ```rust
/// use variate_core::distributions::{poisson_outcome, PoissonRequest, UniformStream};
/// use variate_core::engine::{GeneratorParameters, LcgEngine};
///
/// // Bad configuration from seed 3 emits 5/11, 4/11, ...
/// let mut stream = UniformStream::standard(LcgEngine::new(GeneratorParameters::bad(3)));
/// let request = PoissonRequest::new(1.0).unwrap();
/// // 5/11 >= e^-1, then 20/121 < e^-1
/// assert_eq!(poisson_outcome(&request, &mut stream).unwrap(), 1);
/// ```
pub fn poisson_outcome(request: &PoissonRequest, stream: &mut UniformStream) -> Result<u32> {
    let mut elapsed = 0.0;
    let mut arrivals = 0u32;

    for draws in 1..=request.max_draws() {
        // ln(P) < -alpha, with P the running product of draws
        elapsed -= stream.next_value().ln();
        if elapsed > request.rate_alpha() {
            trace!(draws, arrivals, "Poisson outcome terminated");
            return Ok(arrivals);
        }
        arrivals = match arrivals.checked_add(1) {
            Some(next) => next,
            None => break,
        };
    }

    Err(SamplerError::CapacityExceeded {
        budget: request.max_draws(),
        rate_alpha: request.rate_alpha(),
    })
}
