//! Sampling command implementations
//!
//! One command per distribution. Each draws `count` samples through a
//! `variate_core::Sampler` built from the CLI configuration and writes them
//! in the configured output format.

use std::io::Write;

use tracing::info;
use variate_core::seed::{ClockSeedSource, SeedSource, WeylSeeds};
use variate_core::{SampleBuffer, Sampler};

use crate::config::CliConfig;
use crate::output::SampleReport;
use crate::Result;

/// Distribution and parameters requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Uniform { low: f64, high: f64 },
    Bernoulli { probability: f64 },
    Binomial { trials: i64, probability: f64 },
    Normal { mean: f64, std_dev: f64 },
    Exponential { rate: f64 },
    Poisson { rate_alpha: f64 },
}

impl Distribution {
    /// Lowercase distribution name.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform { .. } => "uniform",
            Distribution::Bernoulli { .. } => "bernoulli",
            Distribution::Binomial { .. } => "binomial",
            Distribution::Normal { .. } => "normal",
            Distribution::Exponential { .. } => "exponential",
            Distribution::Poisson { .. } => "poisson",
        }
    }

    /// Named parameters for reports.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Distribution::Uniform { low, high } => vec![("low", low), ("high", high)],
            Distribution::Bernoulli { probability } => vec![("probability", probability)],
            Distribution::Binomial {
                trials,
                probability,
            } => vec![("trials", trials as f64), ("probability", probability)],
            Distribution::Normal { mean, std_dev } => vec![("mean", mean), ("std_dev", std_dev)],
            Distribution::Exponential { rate } => vec![("rate", rate)],
            Distribution::Poisson { rate_alpha } => vec![("rate_alpha", rate_alpha)],
        }
    }
}

/// Samples of either kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Samples {
    Continuous(SampleBuffer),
    Counts(SampleBuffer<u32>),
}

impl Samples {
    /// Number of samples.
    pub fn len(&self) -> usize {
        match self {
            Samples::Continuous(values) => values.len(),
            Samples::Counts(values) => values.len(),
        }
    }
}

/// Draws `count` samples of `distribution` from `sampler`.
pub fn draw<S: SeedSource>(
    distribution: &Distribution,
    sampler: &mut Sampler<S>,
    count: usize,
) -> variate_core::Result<Samples> {
    Ok(match *distribution {
        Distribution::Uniform { low, high } => {
            Samples::Continuous(sampler.uniform(low, high, count)?)
        }
        Distribution::Bernoulli { probability } => {
            Samples::Counts(sampler.bernoulli(probability, count)?)
        }
        Distribution::Binomial {
            trials,
            probability,
        } => Samples::Counts(sampler.binomial(trials, probability, count)?),
        Distribution::Normal { mean, std_dev } => {
            Samples::Continuous(sampler.normal(mean, std_dev, count)?)
        }
        Distribution::Exponential { rate } => Samples::Continuous(sampler.exponential(rate, count)?),
        Distribution::Poisson { rate_alpha } => Samples::Counts(sampler.poisson(rate_alpha, count)?),
    })
}

/// Draws and renders samples; `seed` switches from clock to Weyl seeding.
pub fn render(
    distribution: &Distribution,
    count: usize,
    seed: Option<u64>,
    config: &CliConfig,
) -> Result<String> {
    let samples = match seed {
        Some(start) => draw(
            distribution,
            &mut config.sampler.build_sampler(WeylSeeds::new(start))?,
            count,
        )?,
        None => draw(
            distribution,
            &mut config.sampler.build_sampler(ClockSeedSource::new())?,
            count,
        )?,
    };
    info!(drawn = samples.len(), "Sampling complete");

    let generator = config.sampler.generator.to_string();
    match &samples {
        Samples::Continuous(values) => SampleReport {
            distribution: distribution.name(),
            generator,
            seed,
            parameters: distribution.parameters(),
            values: values.as_slice(),
        }
        .render(config.output_format),
        Samples::Counts(values) => SampleReport {
            distribution: distribution.name(),
            generator,
            seed,
            parameters: distribution.parameters(),
            values: values.as_slice(),
        }
        .render(config.output_format),
    }
}

/// Run a sampling command
pub fn run(
    distribution: Distribution,
    count: usize,
    seed: Option<u64>,
    config: &CliConfig,
) -> Result<()> {
    info!(
        distribution = distribution.name(),
        count,
        generator = %config.sampler.generator,
        format = %config.output_format,
        "Starting sampling..."
    );

    let rendered = render(&distribution, count, seed, config)?;
    writeln!(std::io::stdout().lock(), "{}", rendered)?;
    Ok(())
}
