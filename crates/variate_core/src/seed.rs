//! Seed strategies.
//!
//! Every independent sampling call draws a fresh seed from a [`SeedSource`]
//! and builds its own engine from it, so unrelated calls never advance one
//! shared engine state.
//!
//! - [`ClockSeedSource`]: sub-second fraction of a process-wide monotonic
//!   clock, scrambled by [`mix_seed`] (the default; not reproducible)
//! - [`FixedSeed`]: the same seed every time
//! - [`SeedSequence`]: a caller-supplied list of seeds, cycled
//! - [`WeylSeeds`]: `start, start + stride, start + 2 * stride, ...`
//! - [`MixedSeeds`]: any source passed through [`mix_seed`]
//!
//! An LCG maps nearby seeds to nearby first draws: with multiplier 16807,
//! seeds `s` and `s + 1` start about `7.8e-6` apart. Sources whose seeds
//! come in runs of consecutive integers, like clock ticks, are scrambled
//! before they reach an engine.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;

/// Golden-ratio stride used by [`WeylSeeds::new`].
pub const DEFAULT_SEED_STRIDE: u64 = 0x9E37_79B9;

/// SplitMix64 output function: a bijection on `u64` that sends consecutive
/// inputs to unrelated outputs.
///
/// # Examples
///
/// ```rust
/// use variate_core::seed::mix_seed;
///
/// assert_ne!(mix_seed(1).wrapping_add(1), mix_seed(2));
/// assert_eq!(mix_seed(7), mix_seed(7));
/// ```
#[inline]
pub fn mix_seed(raw: u64) -> u64 {
    let mut z = raw.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Supplies one seed per independent sampling call.
pub trait SeedSource {
    /// Returns the seed for the next engine.
    fn next_seed(&mut self) -> u64;
}

impl<S: SeedSource + ?Sized> SeedSource for &mut S {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        (**self).next_seed()
    }
}

impl<S: SeedSource + ?Sized> SeedSource for Box<S> {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        (**self).next_seed()
    }
}

static CLOCK_ANCHOR: OnceLock<Instant> = OnceLock::new();
static LAST_CLOCK_SEED: AtomicU64 = AtomicU64::new(u64::MAX);

/// Seeds from the nanosecond fraction of a process-wide monotonic clock.
///
/// The raw reading is scrambled with [`mix_seed`], so adjacent ticks give
/// engines that start far apart. Two reads that land on the same tick
/// would still return the same seed and make back-to-back engines (the two
/// halves of Box-Muller, say) emit identical sequences. A collision with
/// the last seed this source issued, or with the last seed issued anywhere
/// in the process, is advanced by [`DEFAULT_SEED_STRIDE`].
///
/// # Examples
///
/// ```rust
/// use variate_core::seed::{ClockSeedSource, SeedSource};
///
/// let mut seeds = ClockSeedSource::new();
/// let first = seeds.next_seed();
/// let second = seeds.next_seed();
/// assert_ne!(first, second);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeedSource {
    last: Option<u64>,
}

impl ClockSeedSource {
    /// Creates a clock-backed seed source.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn read_clock() -> u64 {
        let anchor = CLOCK_ANCHOR.get_or_init(Instant::now);
        u64::from(anchor.elapsed().subsec_nanos())
    }
}

impl SeedSource for ClockSeedSource {
    fn next_seed(&mut self) -> u64 {
        let candidate = mix_seed(Self::read_clock());
        let mut global_last = LAST_CLOCK_SEED.load(Ordering::Relaxed);
        loop {
            let mut seed = candidate;
            while seed == global_last || Some(seed) == self.last {
                seed = seed.wrapping_add(DEFAULT_SEED_STRIDE);
            }
            match LAST_CLOCK_SEED.compare_exchange_weak(
                global_last,
                seed,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => {
                    self.last = Some(seed);
                    return seed;
                }
                Err(actual) => global_last = actual,
            }
        }
    }
}

/// Returns the same seed on every call.
///
/// Every engine built from it replays the same sequence, so samplers that
/// combine several engines (Box-Muller) see perfectly correlated inputs.
/// Use [`WeylSeeds`] for reproducible but independent-looking runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(pub u64);

impl SeedSource for FixedSeed {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        self.0
    }
}

/// Cycles through a caller-supplied list of seeds.
///
/// An empty list yields zero on every call.
///
/// # Examples
///
/// ```rust
/// use variate_core::seed::{SeedSequence, SeedSource};
///
/// let mut seeds = SeedSequence::new([3, 5]);
/// assert_eq!(seeds.next_seed(), 3);
/// assert_eq!(seeds.next_seed(), 5);
/// assert_eq!(seeds.next_seed(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SeedSequence {
    seeds: Vec<u64>,
    position: usize,
}

impl SeedSequence {
    /// Creates a sequence starting at the first seed.
    pub fn new(seeds: impl IntoIterator<Item = u64>) -> Self {
        Self {
            seeds: seeds.into_iter().collect(),
            position: 0,
        }
    }

    /// Returns how many seeds have been handed out.
    #[inline]
    pub fn issued(&self) -> usize {
        self.position
    }
}

impl SeedSource for SeedSequence {
    fn next_seed(&mut self) -> u64 {
        if self.seeds.is_empty() {
            return 0;
        }
        let seed = self.seeds[self.position % self.seeds.len()];
        self.position += 1;
        seed
    }
}

/// Arithmetic progression of seeds with wrapping addition.
///
/// A large odd stride scatters consecutive seeds across the generator's
/// state space, which gives reproducible runs whose per-call engines start
/// far apart.
///
/// # Examples
///
/// ```rust
/// use variate_core::seed::{SeedSource, WeylSeeds};
///
/// let mut seeds = WeylSeeds::with_stride(10, 7);
/// assert_eq!(seeds.next_seed(), 10);
/// assert_eq!(seeds.next_seed(), 17);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WeylSeeds {
    next: u64,
    stride: u64,
}

impl WeylSeeds {
    /// Starts at `start` with [`DEFAULT_SEED_STRIDE`].
    #[inline]
    pub fn new(start: u64) -> Self {
        Self::with_stride(start, DEFAULT_SEED_STRIDE)
    }

    /// Starts at `start` with a custom stride.
    #[inline]
    pub fn with_stride(start: u64, stride: u64) -> Self {
        Self {
            next: start,
            stride,
        }
    }
}

impl SeedSource for WeylSeeds {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        let seed = self.next;
        self.next = self.next.wrapping_add(self.stride);
        seed
    }
}

/// Passes every seed of another source through [`mix_seed`].
///
/// Useful when the inner source hands out runs of nearby integers.
///
/// # Examples
///
/// ```rust
/// use variate_core::seed::{mix_seed, MixedSeeds, SeedSequence, SeedSource};
///
/// let mut seeds = MixedSeeds::new(SeedSequence::new(10..20));
/// assert_eq!(seeds.next_seed(), mix_seed(10));
/// assert_eq!(seeds.next_seed(), mix_seed(11));
/// ```
#[derive(Clone, Debug, Default)]
pub struct MixedSeeds<S> {
    inner: S,
}

impl<S: SeedSource> MixedSeeds<S> {
    /// Wraps `inner`.
    #[inline]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped source.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<S: SeedSource> SeedSource for MixedSeeds<S> {
    #[inline]
    fn next_seed(&mut self) -> u64 {
        mix_seed(self.inner.next_seed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_seeds_never_repeat_back_to_back() {
        let mut seeds = ClockSeedSource::new();
        let mut previous = seeds.next_seed();
        for _ in 0..10_000 {
            let seed = seeds.next_seed();
            assert_ne!(seed, previous);
            previous = seed;
        }
    }

    #[test]
    fn test_clock_seeds_spread_beyond_tick_range() {
        let mut seeds = ClockSeedSource::new();
        // Scrambled nanosecond counts land anywhere in u64
        assert!((0..100).any(|_| seeds.next_seed() > 1_000_000_000));
    }

    #[test]
    fn test_mix_seed_scatters_consecutive_inputs() {
        let good_modulus = 2_147_483_647_u64;
        for raw in [0_u64, 1, 999_999_999] {
            let a = mix_seed(raw) % good_modulus;
            let b = mix_seed(raw + 1) % good_modulus;
            assert!(a.abs_diff(b) > 1_000, "{} and {} too close", a, b);
        }
    }

    #[test]
    fn test_mixed_seeds_wraps_inner_source() {
        let mut seeds = MixedSeeds::new(WeylSeeds::with_stride(5, 1));
        assert_eq!(seeds.next_seed(), mix_seed(5));
        assert_eq!(seeds.next_seed(), mix_seed(6));
        assert_eq!(seeds.inner().next, 7);
    }

    #[test]
    fn test_fixed_seed_repeats() {
        let mut seeds = FixedSeed(42);
        assert_eq!(seeds.next_seed(), 42);
        assert_eq!(seeds.next_seed(), 42);
    }

    #[test]
    fn test_seed_sequence_cycles() {
        let mut seeds = SeedSequence::new(vec![1, 2, 3]);
        let drawn: Vec<u64> = (0..7).map(|_| seeds.next_seed()).collect();
        assert_eq!(drawn, vec![1, 2, 3, 1, 2, 3, 1]);
        assert_eq!(seeds.issued(), 7);
    }

    #[test]
    fn test_empty_seed_sequence_yields_zero() {
        let mut seeds = SeedSequence::default();
        assert_eq!(seeds.next_seed(), 0);
        assert_eq!(seeds.issued(), 0);
    }

    #[test]
    fn test_weyl_seeds_wrap() {
        let mut seeds = WeylSeeds::with_stride(u64::MAX, 2);
        assert_eq!(seeds.next_seed(), u64::MAX);
        assert_eq!(seeds.next_seed(), 1);
    }

    #[test]
    fn test_seed_source_by_reference_and_box() {
        fn draw<S: SeedSource>(mut seeds: S) -> u64 {
            seeds.next_seed()
        }

        let mut weyl = WeylSeeds::new(0);
        assert_eq!(draw(&mut weyl), 0);
        assert_eq!(weyl.next_seed(), DEFAULT_SEED_STRIDE);

        let mut boxed: Box<dyn SeedSource> = Box::new(FixedSeed(9));
        assert_eq!(boxed.next_seed(), 9);
    }
}
