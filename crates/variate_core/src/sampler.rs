//! Sampling facade with the per-call seeding policy.
//!
//! [`Sampler`] owns a generator template (multiplier and modulus), a
//! [`SeedSource`] and a Poisson [`DrawBudget`]. Every independent call
//! builds fresh engines from new seeds:
//!
//! | Call | Fresh engines |
//! |------|---------------|
//! | `uniform`, `bernoulli`, `exponential` | one per call |
//! | `normal` | two per call (`U1` and `U2`) |
//! | `binomial`, `poisson` | one per outcome |
//!
//! The `generate_*` free functions use the good generator and clock
//! seeding, so repeated calls with identical arguments differ.

use tracing::debug;

use crate::buffer::SampleBuffer;
use crate::distributions::{
    bernoulli, binomial_outcome, exponential, normal, poisson_outcome, BernoulliRequest,
    BinomialRequest, DrawBudget, ExponentialRequest, NormalRequest, PoissonRequest,
    UniformRequest, UniformStream,
};
use crate::engine::{GeneratorParameters, LcgEngine};
use crate::error::Result;
use crate::seed::{ClockSeedSource, SeedSource};

/// Reseeding sampler over one generator configuration.
///
/// # Examples
///
/// ```rust
/// use variate_core::engine::GeneratorParameters;
/// use variate_core::seed::WeylSeeds;
/// use variate_core::Sampler;
///
/// let mut sampler = Sampler::with_seed_source(WeylSeeds::new(42))
///     .generator(GeneratorParameters::good(0));
///
/// let coin_flips = sampler.bernoulli(0.5, 10).unwrap();
/// assert_eq!(coin_flips.len(), 10);
///
/// let arrivals = sampler.poisson(3.0, 5).unwrap();
/// assert_eq!(arrivals.len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct Sampler<S: SeedSource = ClockSeedSource> {
    template: GeneratorParameters,
    seeds: S,
    budget: DrawBudget,
}

impl Sampler<ClockSeedSource> {
    /// Good generator, clock seeding, default Poisson budget.
    pub fn new() -> Self {
        Self::with_seed_source(ClockSeedSource::new())
    }
}

impl Default for Sampler<ClockSeedSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SeedSource> Sampler<S> {
    /// Good generator and default Poisson budget with a custom seed source.
    pub fn with_seed_source(seeds: S) -> Self {
        Self {
            template: GeneratorParameters::good(0),
            seeds,
            budget: DrawBudget::default(),
        }
    }

    /// Replaces the generator template; its seed is ignored.
    pub fn generator(mut self, template: GeneratorParameters) -> Self {
        self.template = template;
        self
    }

    /// Replaces the Poisson draw budget.
    pub fn draw_budget(mut self, budget: DrawBudget) -> Self {
        self.budget = budget;
        self
    }

    /// Returns the generator template.
    #[inline]
    pub fn template(&self) -> GeneratorParameters {
        self.template
    }

    /// Returns the Poisson draw budget.
    #[inline]
    pub fn budget(&self) -> DrawBudget {
        self.budget
    }

    /// Returns the seed source.
    #[inline]
    pub fn seed_source(&self) -> &S {
        &self.seeds
    }

    fn fresh_engine(&mut self) -> LcgEngine {
        LcgEngine::new(self.template.with_seed(self.seeds.next_seed()))
    }

    fn fresh_stream(&mut self) -> UniformStream {
        UniformStream::standard(self.fresh_engine())
    }

    /// Draws `count` uniforms on `[low, high)` from one fresh engine.
    pub fn uniform(&mut self, low: f64, high: f64, count: usize) -> Result<SampleBuffer> {
        let request = UniformRequest::new(low, high)?;
        debug!(low, high, count, "Sampling uniform");
        let mut stream = UniformStream::new(self.fresh_engine(), &request);
        Ok(stream.take_buffer(count))
    }

    /// Draws `count` Bernoulli outcomes from one fresh engine.
    pub fn bernoulli(&mut self, probability: f64, count: usize) -> Result<SampleBuffer<u32>> {
        let request = BernoulliRequest::new(probability)?;
        debug!(probability, count, "Sampling bernoulli");
        Ok(bernoulli(&request, &mut self.fresh_stream(), count))
    }

    /// Draws `count` Binomial outcomes, each from its own fresh engine.
    pub fn binomial(
        &mut self,
        trials: i64,
        probability: f64,
        count: usize,
    ) -> Result<SampleBuffer<u32>> {
        let request = BinomialRequest::new(trials, probability)?;
        debug!(trials, probability, count, "Sampling binomial");
        Ok((0..count)
            .map(|_| binomial_outcome(&request, &mut self.fresh_stream()))
            .collect())
    }

    /// Draws `count` Normal samples from two fresh engines.
    pub fn normal(&mut self, mean: f64, std_dev: f64, count: usize) -> Result<SampleBuffer> {
        let request = NormalRequest::new(mean, std_dev)?;
        debug!(mean, std_dev, count, "Sampling normal");
        let mut first = self.fresh_stream();
        let mut second = self.fresh_stream();
        normal(&request, &mut first, &mut second, count)
    }

    /// Draws `count` Exponential samples from one fresh engine.
    pub fn exponential(&mut self, rate: f64, count: usize) -> Result<SampleBuffer> {
        let request = ExponentialRequest::new(rate)?;
        debug!(rate, count, "Sampling exponential");
        exponential(&request, &mut self.fresh_stream(), count)
    }

    /// Draws `count` Poisson outcomes, each from its own fresh engine.
    ///
    /// Stops at the first outcome that exhausts the draw budget.
    pub fn poisson(&mut self, rate_alpha: f64, count: usize) -> Result<SampleBuffer<u32>> {
        let request = PoissonRequest::with_budget(rate_alpha, self.budget)?;
        debug!(
            rate_alpha,
            count,
            max_draws = request.max_draws(),
            "Sampling poisson"
        );
        (0..count)
            .map(|_| poisson_outcome(&request, &mut self.fresh_stream()))
            .collect()
    }
}

/// Uniforms on `[low, high)` from the good generator and the given seeds.
///
/// # Examples
///
/// ```rust
/// use variate_core::generate_uniform;
/// use variate_core::seed::FixedSeed;
///
/// let a = generate_uniform(0.0, 10.0, &mut FixedSeed(7), 5).unwrap();
/// let b = generate_uniform(0.0, 10.0, &mut FixedSeed(7), 5).unwrap();
/// assert_eq!(a, b);
/// assert!(generate_uniform(5.0, 2.0, &mut FixedSeed(7), 5).is_err());
/// ```
pub fn generate_uniform<S: SeedSource>(
    low: f64,
    high: f64,
    seed_source: &mut S,
    count: usize,
) -> Result<Vec<f64>> {
    Ok(Sampler::with_seed_source(seed_source)
        .uniform(low, high, count)?
        .into_vec())
}

/// Bernoulli outcomes with clock seeding.
pub fn generate_bernoulli(probability: f64, count: usize) -> Result<Vec<u32>> {
    Ok(Sampler::new().bernoulli(probability, count)?.into_vec())
}

/// Binomial outcomes with clock seeding.
pub fn generate_binomial(trials: i64, probability: f64, count: usize) -> Result<Vec<u32>> {
    Ok(Sampler::new()
        .binomial(trials, probability, count)?
        .into_vec())
}

/// Normal samples with clock seeding.
pub fn generate_normal(mean: f64, std_dev: f64, count: usize) -> Result<Vec<f64>> {
    Ok(Sampler::new().normal(mean, std_dev, count)?.into_vec())
}

/// Exponential samples with clock seeding.
pub fn generate_exponential(rate: f64, count: usize) -> Result<Vec<f64>> {
    Ok(Sampler::new().exponential(rate, count)?.into_vec())
}

/// Poisson outcomes with clock seeding and the default draw budget.
pub fn generate_poisson(rate_alpha: f64, count: usize) -> Result<Vec<u32>> {
    Ok(Sampler::new().poisson(rate_alpha, count)?.into_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigurationError, SamplerError};
    use crate::seed::{FixedSeed, SeedSequence, WeylSeeds};

    #[test]
    fn test_each_call_draws_fresh_seeds() {
        let mut sampler = Sampler::with_seed_source(SeedSequence::new(1..=1_000));

        sampler.uniform(0.0, 1.0, 10).unwrap();
        assert_eq!(sampler.seed_source().issued(), 1);

        sampler.normal(0.0, 1.0, 10).unwrap();
        assert_eq!(sampler.seed_source().issued(), 3);

        sampler.binomial(5, 0.5, 4).unwrap();
        assert_eq!(sampler.seed_source().issued(), 7);

        sampler.poisson(2.0, 6).unwrap();
        assert_eq!(sampler.seed_source().issued(), 13);
    }

    #[test]
    fn test_rejected_request_consumes_no_seed() {
        let mut sampler = Sampler::with_seed_source(SeedSequence::new([1, 2, 3]));

        assert!(sampler.bernoulli(1.5, 10).is_err());
        assert!(sampler.poisson(0.0, 10).is_err());
        assert!(sampler.uniform(5.0, 2.0, 10).is_err());
        assert_eq!(sampler.seed_source().issued(), 0);
    }

    #[test]
    fn test_generator_template_seed_is_ignored() {
        let mut a = Sampler::with_seed_source(FixedSeed(5)).generator(GeneratorParameters::bad(9));
        let mut b = Sampler::with_seed_source(FixedSeed(5)).generator(GeneratorParameters::bad(0));
        assert_eq!(
            a.uniform(0.0, 1.0, 20).unwrap(),
            b.uniform(0.0, 1.0, 20).unwrap()
        );
    }

    #[test]
    fn test_reproducible_with_deterministic_seeds() {
        let run = || {
            let mut sampler = Sampler::with_seed_source(WeylSeeds::new(2024));
            (
                sampler.normal(0.0, 1.0, 20).unwrap(),
                sampler.poisson(4.0, 20).unwrap(),
            )
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_zero_count_everywhere() {
        let mut sampler = Sampler::with_seed_source(WeylSeeds::new(1));
        assert!(sampler.uniform(0.0, 1.0, 0).unwrap().is_empty());
        assert!(sampler.bernoulli(0.5, 0).unwrap().is_empty());
        assert!(sampler.binomial(10, 0.5, 0).unwrap().is_empty());
        assert!(sampler.normal(0.0, 1.0, 0).unwrap().is_empty());
        assert!(sampler.exponential(1.0, 0).unwrap().is_empty());
        assert!(sampler.poisson(1.0, 0).unwrap().is_empty());
    }

    #[test]
    fn test_poisson_uses_configured_budget() {
        // A one-draw budget cannot produce any outcome above zero
        let mut sampler = Sampler::with_seed_source(WeylSeeds::new(3))
            .draw_budget(DrawBudget::new(0.01, 1).unwrap());
        let err = sampler.poisson(50.0, 10).unwrap_err();
        assert_eq!(
            err,
            SamplerError::CapacityExceeded {
                budget: 1,
                rate_alpha: 50.0
            }
        );
    }

    #[test]
    fn test_free_functions_validate() {
        assert_eq!(
            generate_bernoulli(1.5, 10).unwrap_err(),
            SamplerError::Configuration(ConfigurationError::ProbabilityOutOfRange(1.5))
        );
        assert_eq!(
            generate_poisson(0.0, 10).unwrap_err(),
            SamplerError::Configuration(ConfigurationError::NonPositiveAlpha(0.0))
        );
        assert!(generate_binomial(-1, 0.5, 10).is_err());
        assert!(generate_normal(0.0, -1.0, 10).is_err());
        assert!(generate_exponential(0.0, 10).is_err());
    }
}
