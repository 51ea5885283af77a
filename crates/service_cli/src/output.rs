//! Output rendering for table, CSV and JSON formats.

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::Serialize;
use variate_core::summary::SummaryStatistics;

use crate::config::OutputFormat;
use crate::Result;

/// Samples drawn by one command, with everything needed to describe them.
#[derive(Debug, Clone)]
pub struct SampleReport<'a, T> {
    /// Distribution name
    pub distribution: &'static str,
    /// Generator description (`good`, `bad` or `a/m`)
    pub generator: String,
    /// First seed when seeding deterministically
    pub seed: Option<u64>,
    /// Named distribution parameters
    pub parameters: Vec<(&'static str, f64)>,
    /// The samples
    pub values: &'a [T],
}

#[derive(Serialize)]
struct JsonSampleReport<'r, T> {
    distribution: &'r str,
    generator: &'r str,
    seed: Option<u64>,
    parameters: BTreeMap<&'r str, f64>,
    summary: SummaryStatistics,
    values: &'r [T],
}

impl<T> SampleReport<'_, T>
where
    T: Copy + Display + Into<f64> + Serialize,
{
    /// Summary statistics of the values.
    pub fn summary(&self) -> SummaryStatistics {
        SummaryStatistics::from_samples(self.values)
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(self.render_table()),
            OutputFormat::Csv => Ok(render_csv(
                &["value"],
                self.values.iter().map(|v| vec![v.to_string()]),
            )),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_table(&self) -> String {
        let summary = self.summary();
        let mut rows = vec![
            ("Distribution".to_string(), self.distribution.to_string()),
            ("Generator".to_string(), self.generator.clone()),
            (
                "Seeding".to_string(),
                self.seed
                    .map_or_else(|| "clock".to_string(), |s| format!("weyl from {}", s)),
            ),
        ];
        rows.extend(
            self.parameters
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string())),
        );
        rows.extend([
            ("Count".to_string(), summary.count.to_string()),
            ("Mean".to_string(), format!("{:.6}", summary.mean)),
            ("Std dev".to_string(), format!("{:.6}", summary.std_dev)),
            ("Variance".to_string(), format!("{:.6}", summary.variance)),
            ("Min".to_string(), format!("{:.6}", summary.min)),
            ("Max".to_string(), format!("{:.6}", summary.max)),
        ]);
        render_table(&rows)
    }

    fn render_json(&self) -> Result<String> {
        let report = JsonSampleReport {
            distribution: self.distribution,
            generator: &self.generator,
            seed: self.seed,
            parameters: self.parameters.iter().copied().collect(),
            summary: self.summary(),
            values: self.values,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

/// Two-column box table.
pub fn render_table(rows: &[(String, String)]) -> String {
    let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, v)| v.chars().count()).max().unwrap_or(0);
    let rule = |left: &str, middle: &str, right: &str| {
        format!(
            "{}{}{}{}{}",
            left,
            "─".repeat(key_width + 2),
            middle,
            "─".repeat(value_width + 2),
            right
        )
    };

    let mut lines = vec![rule("┌", "┬", "┐")];
    for (key, value) in rows {
        lines.push(format!(
            "│ {:<kw$} │ {:<vw$} │",
            key,
            value,
            kw = key_width,
            vw = value_width
        ));
    }
    lines.push(rule("└", "┴", "┘"));
    lines.join("\n")
}

/// Header line followed by one comma-separated line per record.
pub fn render_csv(header: &[&str], records: impl IntoIterator<Item = Vec<String>>) -> String {
    let mut lines = vec![header.join(",")];
    lines.extend(records.into_iter().map(|fields| fields.join(",")));
    lines.join("\n")
}
