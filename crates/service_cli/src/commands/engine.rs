//! Engine command implementation
//!
//! Prints the raw state sequence of the configured generator alongside the
//! uniforms it maps to.

use std::io::Write;

use serde::Serialize;
use tracing::info;
use variate_core::engine::LcgEngine;
use variate_core::seed::{ClockSeedSource, SeedSource};

use crate::config::{CliConfig, OutputFormat};
use crate::output::{render_csv, render_table};
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
struct EngineStep {
    index: usize,
    state: u64,
    uniform: f64,
}

#[derive(Serialize)]
struct EngineReport<'a> {
    generator: String,
    multiplier: u64,
    modulus: u64,
    seed: u64,
    steps: &'a [EngineStep],
}

/// Renders the first `count` engine steps from `seed`.
pub fn render(count: usize, seed: u64, config: &CliConfig) -> Result<String> {
    let params = config.sampler.generator.parameters(seed)?;
    let mut engine = LcgEngine::new(params);
    let steps: Vec<EngineStep> = (1..=count)
        .map(|index| {
            let state = engine.next_state();
            EngineStep {
                index,
                state,
                uniform: state as f64 / params.modulus() as f64,
            }
        })
        .collect();

    Ok(match config.output_format {
        OutputFormat::Table => {
            let mut rows = vec![
                ("Generator".to_string(), config.sampler.generator.to_string()),
                ("Seed".to_string(), params.seed().to_string()),
            ];
            rows.extend(steps.iter().map(|step| {
                (
                    format!("x{}", step.index),
                    format!("{} ({:.10})", step.state, step.uniform),
                )
            }));
            render_table(&rows)
        }
        OutputFormat::Csv => render_csv(
            &["index", "state", "uniform"],
            steps.iter().map(|step| {
                vec![
                    step.index.to_string(),
                    step.state.to_string(),
                    step.uniform.to_string(),
                ]
            }),
        ),
        OutputFormat::Json => serde_json::to_string_pretty(&EngineReport {
            generator: config.sampler.generator.to_string(),
            multiplier: params.multiplier(),
            modulus: params.modulus(),
            seed: params.seed(),
            steps: &steps,
        })?,
    })
}

/// Run the engine command
pub fn run(count: usize, seed: Option<u64>, config: &CliConfig) -> Result<()> {
    let seed = seed.unwrap_or_else(|| ClockSeedSource::new().next_seed());
    info!(count, seed, generator = %config.sampler.generator, "Stepping engine...");

    let rendered = render(count, seed, config)?;
    writeln!(std::io::stdout().lock(), "{}", rendered)?;
    Ok(())
}
