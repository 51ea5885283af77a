//! The linear congruential engine.
//!
//! This module provides [`LcgEngine`], which owns one evolving state value
//! and emits uniforms on `[0, 1)`, plus [`generate`] and [`period`].

use tracing::debug;

use super::params::GeneratorParameters;
use crate::buffer::SampleBuffer;

/// One step of the recurrence `x <- (x * a + 1) mod m`.
///
/// The product is formed in `u128`, wide enough for any pair of `u64`
/// operands, so nothing is lost before the reduction.
#[inline(always)]
pub(crate) fn step(state: u64, multiplier: u64, modulus: u64) -> u64 {
    ((state as u128 * multiplier as u128 + 1) % modulus as u128) as u64
}

/// Linear congruential engine over `[0, 1)`.
///
/// The engine state starts at the seed; every draw advances the state once
/// and returns `state / modulus`. The first value emitted is therefore
/// `((seed * multiplier + 1) mod modulus) / modulus`.
///
/// `LcgEngine` is also an infinite [`Iterator`] of uniforms.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{GeneratorParameters, LcgEngine};
///
/// let mut engine = LcgEngine::new(GeneratorParameters::bad(3));
/// // (3 * 5 + 1) mod 11 = 5
/// assert_eq!(engine.next_state(), 5);
/// assert_eq!(engine.next_uniform(), 4.0 / 11.0);
///
/// let next_three: Vec<f64> = engine.take(3).collect();
/// assert_eq!(next_three, vec![10.0 / 11.0, 7.0 / 11.0, 3.0 / 11.0]);
/// ```
#[derive(Clone, Debug)]
pub struct LcgEngine {
    params: GeneratorParameters,
    state: u64,
}

impl LcgEngine {
    /// Creates an engine whose state is initialised to the parameters' seed.
    pub fn new(params: GeneratorParameters) -> Self {
        debug!(
            multiplier = params.multiplier(),
            modulus = params.modulus(),
            seed = params.seed(),
            "Seeded LCG engine"
        );
        Self {
            params,
            state: params.seed(),
        }
    }

    /// Returns the parameters the engine was built from.
    #[inline]
    pub fn params(&self) -> GeneratorParameters {
        self.params
    }

    /// Returns the current state (the last value emitted, or the seed).
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the recurrence once and returns the new state.
    #[inline]
    pub fn next_state(&mut self) -> u64 {
        self.state = step(
            self.state,
            self.params.multiplier(),
            self.params.modulus(),
        );
        self.state
    }

    /// Advances the recurrence once and returns `state / modulus`.
    #[inline]
    pub fn next_uniform(&mut self) -> f64 {
        self.next_state() as f64 / self.params.modulus() as f64
    }

    /// Fills the buffer with consecutive uniforms.
    ///
    /// Empty buffers are left untouched and do not advance the state.
    #[inline]
    pub fn fill_uniform(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_uniform();
        }
    }

    /// Draws `count` consecutive uniforms into a new [`SampleBuffer`].
    pub fn generate(&mut self, count: usize) -> SampleBuffer {
        let mut values = vec![0.0; count];
        self.fill_uniform(&mut values);
        values.into_iter().collect()
    }
}

impl Iterator for LcgEngine {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_uniform())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

/// Runs a fresh engine for `count` draws.
///
/// `count == 0` yields an empty buffer.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{generate, GeneratorParameters};
///
/// let params = GeneratorParameters::good(123_456_789);
/// assert_eq!(generate(params, 100), generate(params, 100));
/// assert!(generate(params, 0).is_empty());
/// ```
pub fn generate(params: GeneratorParameters, count: usize) -> SampleBuffer {
    LcgEngine::new(params).generate(count)
}

/// Measures the period of the sequence emitted from `params`.
///
/// Uses Brent's cycle detection, so seeds that fall in a non-repeating
/// tail before entering a cycle are handled as well. Returns `None` when
/// no cycle is found within `limit` steps.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::{period, GeneratorParameters};
///
/// assert_eq!(period(GeneratorParameters::bad(3), 1_000), Some(5));
/// assert_eq!(period(GeneratorParameters::good(1), 1_000), None);
/// ```
pub fn period(params: GeneratorParameters, limit: u64) -> Option<u64> {
    let (a, m) = (params.multiplier(), params.modulus());
    let start = step(params.seed(), a, m);

    let mut power = 1u64;
    let mut length = 1u64;
    let mut tortoise = start;
    let mut hare = step(start, a, m);
    let mut steps = 1u64;

    while tortoise != hare {
        if steps >= limit {
            return None;
        }
        if power == length {
            tortoise = hare;
            power = power.saturating_mul(2);
            length = 0;
        }
        hare = step(hare, a, m);
        length += 1;
        steps += 1;
    }

    Some(length)
}
