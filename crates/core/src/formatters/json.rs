use crate::Result;
use crate::batch::{BatchEntry, BatchSummary};
use crate::report::SeoHealthReport;
use serde::Serialize;

/// JSON output structure for a batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchOutput<'a> {
    pub articles: &'a [BatchEntry],
    pub summary: BatchSummary,
}

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Pretty print JSON output
    pub pretty: bool,
}

fn to_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    if pretty { Ok(serde_json::to_string_pretty(value)?) } else { Ok(serde_json::to_string(value)?) }
}

/// Serialize a single report
pub fn report_to_json(report: &SeoHealthReport, config: &JsonConfig) -> Result<String> {
    to_string(report, config.pretty)
}

/// Serialize a batch with its summary
pub fn batch_to_json(entries: &[BatchEntry], config: &JsonConfig) -> Result<String> {
    let output = BatchOutput { articles: entries, summary: BatchSummary::from_entries(entries) };
    to_string(&output, config.pretty)
}

/// JSON formatter with configurable options
pub struct JsonFormatter {
    config: JsonConfig,
}

impl JsonFormatter {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn report(&self, report: &SeoHealthReport) -> Result<String> {
        report_to_json(report, &self.config)
    }

    pub fn batch(&self, entries: &[BatchEntry]) -> Result<String> {
        batch_to_json(entries, &self.config)
    }
}
