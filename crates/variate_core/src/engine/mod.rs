//! # Linear Congruential Engine
//!
//! This module provides the foundation every sampler in the crate is built on:
//! a linear congruential generator (LCG) with additive increment fixed at 1,
//!
//! ```text
//! x_{i+1} = (x_i * multiplier + 1) mod modulus
//! ```
//!
//! emitting `x_i / modulus` on `[0, 1)`.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: a fixed `(multiplier, modulus, seed)` triple always
//!   yields the same sequence; non-determinism lives only in the seed source
//! - **Exact arithmetic**: `x * multiplier` is formed in 128-bit integers, so
//!   no bits are lost before the modular reduction for any 64-bit parameters
//! - **Exact floats**: the modulus is capped at 2^53, so `x / modulus` is
//!   strictly below 1.0 after rounding
//!
//! ## Module Structure
//!
//! - `params`: Validated generator parameters and the good/bad presets
//! - `lcg`: The engine itself, batch generation and period measurement
//!
//! ## Usage Example
//!
//! ```rust
//! use variate_core::engine::{GeneratorParameters, LcgEngine};
//!
//! let mut engine = LcgEngine::new(GeneratorParameters::good(123_456_789));
//! let first = engine.next_uniform();
//! assert!((0.0..1.0).contains(&first));
//!
//! // The short-period configuration cycles after five states
//! let bad = GeneratorParameters::bad(3);
//! assert_eq!(variate_core::engine::period(bad, 100), Some(5));
//! ```
//!
//! This is a deliberately weak, non-cryptographic generator.

mod lcg;
mod params;

pub use lcg::{generate, period, LcgEngine};
pub use params::{
    GeneratorParameters, BAD_MODULUS, BAD_MULTIPLIER, GOOD_MODULUS, GOOD_MULTIPLIER, MAX_MODULUS,
};

#[cfg(test)]
mod tests;
