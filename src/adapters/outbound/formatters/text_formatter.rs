use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use crate::summary::domain::{CodeTally, ViolationSummary};
use std::fmt::Write;

const FAILURES_HEADER: &str = "=== FAILURES ===";
const WARNINGS_HEADER: &str = "=== WARNINGS ===";
const AFFECTED_HEADER: &str = "=== AFFECTED COMPONENTS ===";

/// TextFormatter adapter for the plain console report
///
/// The layout is consumed by people reading CI logs and by scripts that
/// grep them, so it is reproduced byte for byte:
///
/// ```text
/// Success: False
/// Components: 1
///
/// === FAILURES ===
///   1x X1
///      bad thing happened...
///
/// === WARNINGS ===
/// None
///
/// === AFFECTED COMPONENTS ===
/// comp1: 1 failures, 0 warnings
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_tally(output: &mut String, header: &str, tally: &CodeTally) -> std::fmt::Result {
        writeln!(output, "{}", header)?;
        if tally.is_empty() {
            writeln!(output, "None")?;
            writeln!(output)?;
            return Ok(());
        }

        for stats in tally.sorted() {
            writeln!(output, "{:3}x {}", stats.count, stats.code)?;
            writeln!(output, "     {}...", stats.sample)?;
            writeln!(output)?;
        }
        Ok(())
    }

    fn render(summary: &ViolationSummary) -> std::result::Result<String, std::fmt::Error> {
        let mut output = String::new();

        writeln!(output, "Success: {}", summary.success_label())?;
        writeln!(output, "Components: {}", summary.component_count)?;
        writeln!(output)?;

        Self::render_tally(&mut output, FAILURES_HEADER, &summary.failures)?;
        Self::render_tally(&mut output, WARNINGS_HEADER, &summary.warnings)?;

        writeln!(output, "{}", AFFECTED_HEADER)?;
        for component in &summary.affected_components {
            writeln!(
                output,
                "{}: {} failures, {} warnings",
                component.name, component.failures, component.warnings
            )?;
        }

        Ok(output)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for TextFormatter {
    fn format(&self, summary: &ViolationSummary) -> Result<String> {
        Self::render(summary).map_err(|e| anyhow::anyhow!("Failed to render text summary: {}", e))
    }
}
