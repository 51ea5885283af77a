//! # variate_core: Random Variates From Scratch
//!
//! ## Layered Design
//!
//! variate_core builds every random variate from one linear congruential
//! recurrence and elementary arithmetic, in strict layers:
//!
//! - Seed strategy (`seed`): a fresh seed for every independent call
//! - Engine (`engine`): `x <- (x * multiplier + 1) mod modulus` on `[0, 1)`
//! - Uniform sampler (`distributions::UniformStream`): `[low, high)`
//! - Discrete transforms: Bernoulli, Binomial
//! - Continuous transforms: Normal (Box-Muller), Exponential (inverse CDF)
//! - Compound-event sampler: Poisson (Knuth's product of uniforms)
//!
//! Each layer consumes only the one below it.
//!
//! ## Minimal Dependencies
//!
//! - thiserror: Structured error enums
//! - tracing: Diagnostics (seeding, degenerate requests, resamples)
//! - serde: Configuration serialisation (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use variate_core::engine::{generate, GeneratorParameters};
//! use variate_core::summary::SummaryStatistics;
//! use variate_core::{generate_normal, generate_poisson};
//!
//! // The engine on its own is fully reproducible
//! let params = GeneratorParameters::good(123_456_789);
//! assert_eq!(generate(params, 10), generate(params, 10));
//!
//! // The samplers reseed from the clock on every call
//! let heights = generate_normal(170.0, 10.0, 1_000).unwrap();
//! let stats = SummaryStatistics::from_samples(&heights);
//! assert!((stats.mean - 170.0).abs() < 3.0);
//!
//! let arrivals = generate_poisson(4.0, 100).unwrap();
//! assert_eq!(arrivals.len(), 100);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `SamplerConfig`,
//!   `GeneratorPreset` and `SummaryStatistics`
//!
//! The generator is deliberately weak and must never be used where
//! unpredictability matters.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod buffer;
pub mod config;
pub mod distributions;
pub mod engine;
pub mod error;
pub mod sampler;
pub mod seed;
pub mod summary;

pub use buffer::SampleBuffer;
pub use config::{GeneratorPreset, SamplerConfig};
pub use error::{ConfigurationError, Result, SamplerError};
pub use sampler::{
    generate_bernoulli, generate_binomial, generate_exponential, generate_normal,
    generate_poisson, generate_uniform, Sampler,
};
