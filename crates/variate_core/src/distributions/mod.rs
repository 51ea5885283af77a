//! # Distribution Samplers
//!
//! Layered transforms of the uniform stream. Nothing in this module reads
//! the engine directly: every transform consumes a [`UniformStream`], which
//! in turn owns one [`LcgEngine`](crate::engine::LcgEngine).
//!
//! ```text
//! LcgEngine -> UniformStream -> { bernoulli, binomial }      (discrete)
//!                            -> { normal, exponential }      (continuous)
//!                            -> { poisson }                  (compound event)
//! ```
//!
//! ## Requests
//!
//! Each sampler takes a validated request object; construction is the only
//! place parameters are checked, so a request that exists is always valid
//! and a rejected request never touches an engine.
//!
//! | Sampler | Request | Constraint |
//! |---------|---------|------------|
//! | Uniform | [`UniformRequest`] | `low <= high` |
//! | Bernoulli | [`BernoulliRequest`] | `0 <= p <= 1` |
//! | Binomial | [`BinomialRequest`] | `trials >= 0`, `0 <= p <= 1` |
//! | Normal | [`NormalRequest`] | `std_dev >= 0` |
//! | Exponential | [`ExponentialRequest`] | `rate > 0` |
//! | Poisson | [`PoissonRequest`] | `rate_alpha > 0` |
//!
//! ## Seeding
//!
//! The functions here draw from whatever stream they are handed. Deciding
//! when a fresh engine is needed is the job of [`Sampler`](crate::Sampler).

mod continuous;
mod discrete;
mod poisson;
mod uniform;

pub use continuous::{box_muller, exponential, normal, ExponentialRequest, NormalRequest};
pub use discrete::{bernoulli, binomial_outcome, BernoulliRequest, BinomialRequest};
pub use poisson::{
    poisson_outcome, DrawBudget, PoissonRequest, DEFAULT_DRAW_FACTOR, DEFAULT_MINIMUM_DRAWS,
};
pub use uniform::{uniform, UniformRequest, UniformStream};

use crate::error::ConfigurationError;

/// Rejects NaN and infinite inputs.
#[inline]
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, ConfigurationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigurationError::NonFinite { name, value })
    }
}

/// Rejects probabilities outside `[0, 1]`.
#[inline]
pub(crate) fn ensure_probability(value: f64) -> Result<f64, ConfigurationError> {
    let value = ensure_finite("probability", value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigurationError::ProbabilityOutOfRange(value))
    }
}
