use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use crate::summary::domain::{AffectedComponent, CodeTally, ViolationSummary};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
struct SummaryDocument<'a> {
    success: Option<&'a Value>,
    component_count: usize,
    failures: &'a CodeTally,
    warnings: &'a CodeTally,
    affected_components: &'a [AffectedComponent],
}

impl<'a> From<&'a ViolationSummary> for SummaryDocument<'a> {
    fn from(summary: &'a ViolationSummary) -> Self {
        Self {
            success: summary.success.as_ref(),
            component_count: summary.component_count,
            failures: &summary.failures,
            warnings: &summary.warnings,
            affected_components: &summary.affected_components,
        }
    }
}

/// JsonFormatter adapter for machine-readable summaries
///
/// Tallies are emitted as arrays in the same descending-count order as
/// the console report.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for JsonFormatter {
    fn format(&self, summary: &ViolationSummary) -> Result<String> {
        let document = SummaryDocument::from(summary);
        let mut json = serde_json::to_string_pretty(&document)
            .map_err(|e| anyhow::anyhow!("Failed to serialize summary to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
