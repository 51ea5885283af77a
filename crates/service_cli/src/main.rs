//! variate CLI - Command Line Sampling
//!
//! This is the operational entry point for the variate_core samplers.
//!
//! # Commands
//!
//! - `variate engine` - Print raw generator states and their uniforms
//! - `variate period` - Measure a generator's period from a seed
//! - `variate uniform|bernoulli|binomial|normal|exponential|poisson` - Draw samples
//!
//! # Configuration
//!
//! Settings are read from `variate.toml` (or `--config`), then the
//! `VARIATE_LOG_LEVEL`, `VARIATE_GENERATOR` and `VARIATE_OUTPUT_FORMAT`
//! environment variables, then command line flags. `RUST_LOG` overrides the
//! configured log level. Logs go to stderr; samples go to stdout.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::sample::Distribution;
use config::{build_config, CliArgs, LogLevel};
pub use error::{CliError, Result};

/// Random variates from a linear congruential generator
#[derive(Parser)]
#[command(name = "variate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: variate.toml, if present]
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Generator: good, bad or <multiplier>/<modulus>
    #[arg(short, long, global = true)]
    generator: Option<String>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Seed for reproducible runs (clock seeding when absent)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print raw generator states and their uniforms
    Engine {
        /// Number of steps
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },

    /// Measure the generator's period from the seed
    Period {
        /// Maximum number of steps to search
        #[arg(short, long, default_value_t = 10_000_000)]
        limit: u64,
    },

    /// Uniform samples on [low, high)
    Uniform {
        /// Lower bound
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        low: f64,

        /// Upper bound
        #[arg(long, default_value_t = 1.0, allow_hyphen_values = true)]
        high: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },

    /// Bernoulli outcomes (1 with probability p)
    Bernoulli {
        /// Success probability in [0, 1]
        #[arg(short, long, allow_hyphen_values = true)]
        probability: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },

    /// Binomial outcomes (successes in a fixed number of trials)
    Binomial {
        /// Trials per outcome
        #[arg(short, long, allow_hyphen_values = true)]
        trials: i64,

        /// Success probability in [0, 1]
        #[arg(short, long, allow_hyphen_values = true)]
        probability: f64,

        /// Number of outcomes
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,
    },

    /// Normal samples via Box-Muller
    Normal {
        /// Mean
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        mean: f64,

        /// Standard deviation
        #[arg(short = 'd', long, default_value_t = 1.0, allow_hyphen_values = true)]
        std_dev: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },

    /// Exponential samples via the inverse CDF
    Exponential {
        /// Rate (1 / mean)
        #[arg(short, long, allow_hyphen_values = true)]
        rate: f64,

        /// Number of samples
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },

    /// Poisson arrival counts
    Poisson {
        /// Expected arrivals per interval
        #[arg(short, long, allow_hyphen_values = true)]
        alpha: f64,

        /// Number of outcomes
        #[arg(short = 'n', long, default_value_t = 1000)]
        count: usize,
    },
}

fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
        generator: cli.generator.clone(),
        output_format: cli.format.clone(),
    })?;

    init_tracing(config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    info!(
        generator = %config.sampler.generator,
        format = %config.output_format,
        "Configuration loaded"
    );

    let sample = |distribution, count| commands::sample::run(distribution, count, cli.seed, &config);

    match cli.command {
        Commands::Engine { count } => commands::engine::run(count, cli.seed, &config),
        Commands::Period { limit } => commands::period::run(limit, cli.seed, &config),
        Commands::Uniform { low, high, count } => {
            sample(Distribution::Uniform { low, high }, count)
        }
        Commands::Bernoulli { probability, count } => {
            sample(Distribution::Bernoulli { probability }, count)
        }
        Commands::Binomial {
            trials,
            probability,
            count,
        } => sample(
            Distribution::Binomial {
                trials,
                probability,
            },
            count,
        ),
        Commands::Normal {
            mean,
            std_dev,
            count,
        } => sample(Distribution::Normal { mean, std_dev }, count),
        Commands::Exponential { rate, count } => {
            sample(Distribution::Exponential { rate }, count)
        }
        Commands::Poisson { alpha, count } => {
            sample(Distribution::Poisson { rate_alpha: alpha }, count)
        }
    }
}
