//! Period command implementation
//!
//! Measures how many steps the configured generator takes to revisit a
//! state, starting from a given seed.

use std::io::Write;

use serde::Serialize;
use tracing::{info, warn};
use variate_core::engine::period;
use variate_core::seed::{ClockSeedSource, SeedSource};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{render_csv, render_table};
use crate::{CliError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
struct PeriodReport {
    generator: String,
    seed: u64,
    limit: u64,
    period: Option<u64>,
}

/// Measures and renders the period, searching at most `limit` steps.
pub fn render(limit: u64, seed: u64, config: &CliConfig) -> Result<String> {
    if limit == 0 {
        return Err(CliError::InvalidArgument(
            "Step limit must be positive".to_string(),
        ));
    }

    let params = config.sampler.generator.parameters(seed)?;
    let report = PeriodReport {
        generator: config.sampler.generator.to_string(),
        seed: params.seed(),
        limit,
        period: period(params, limit),
    };
    if report.period.is_none() {
        warn!(limit, "No repeated state within the step limit");
    }

    let shown = report
        .period
        .map_or_else(|| format!("> {}", limit), |p| p.to_string());
    Ok(match config.output_format {
        OutputFormat::Table => render_table(&[
            ("Generator".to_string(), report.generator.clone()),
            ("Seed".to_string(), report.seed.to_string()),
            ("Step limit".to_string(), limit.to_string()),
            ("Period".to_string(), shown),
        ]),
        OutputFormat::Csv => render_csv(
            &["generator", "seed", "limit", "period"],
            [vec![
                report.generator.clone(),
                report.seed.to_string(),
                limit.to_string(),
                report.period.map(|p| p.to_string()).unwrap_or_default(),
            ]],
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    })
}

/// Run the period command
pub fn run(limit: u64, seed: Option<u64>, config: &CliConfig) -> Result<()> {
    let seed = seed.unwrap_or_else(|| ClockSeedSource::new().next_seed());
    info!(limit, seed, generator = %config.sampler.generator, "Measuring period...");

    let rendered = render(limit, seed, config)?;
    writeln!(std::io::stdout().lock(), "{}", rendered)?;
    Ok(())
}
