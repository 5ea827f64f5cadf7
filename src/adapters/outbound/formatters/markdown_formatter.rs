use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;
use crate::summary::domain::{AffectedComponent, CodeTally, ViolationSummary};

/// Markdown table header for code tallies
const TALLY_TABLE_HEADER: &str = "| Count | Code | Sample |\n";

/// Markdown table separator line for code tallies
const TALLY_TABLE_SEPARATOR: &str = "|------:|------|--------|\n";

/// Markdown table header for affected components
const COMPONENT_TABLE_HEADER: &str = "| Component | Failures | Warnings |\n";

/// Markdown table separator line for affected components
const COMPONENT_TABLE_SEPARATOR: &str = "|-----------|---------:|---------:|\n";

/// MarkdownFormatter adapter for summaries posted to pull requests or CI job pages
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and line breaks for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|")
            .replace("\r\n", " ")
            .replace(['\r', '\n'], " ")
    }

    /// Wraps a table cell in a code span whose fence is longer than any
    /// backtick run inside it
    fn code_span(text: &str) -> String {
        let cell = Self::escape_markdown_table_cell(text);
        let longest_run = cell
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);

        if longest_run == 0 {
            return format!("`{}`", cell);
        }

        let fence = "`".repeat(longest_run + 1);
        format!("{} {} {}", fence, cell, fence)
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, summary: &ViolationSummary) {
        output.push_str("# Policy Violation Summary\n\n");
        output.push_str(&format!("- **Success:** {}\n", summary.success_label()));
        output.push_str(&format!("- **Components:** {}\n", summary.component_count));
        output.push_str(&format!(
            "- **Failures:** {} across {} code(s)\n",
            summary.failures.total(),
            summary.failures.len()
        ));
        output.push_str(&format!(
            "- **Warnings:** {} across {} code(s)\n\n",
            summary.warnings.total(),
            summary.warnings.len()
        ));
    }

    fn render_tally(&self, output: &mut String, title: &str, tally: &CodeTally) {
        output.push_str(&format!("## {}\n\n", title));

        if tally.is_empty() {
            output.push_str("_None_\n\n");
            return;
        }

        output.push_str(TALLY_TABLE_HEADER);
        output.push_str(TALLY_TABLE_SEPARATOR);
        for stats in tally.sorted() {
            output.push_str(&format!(
                "| {} | {} | {}... |\n",
                stats.count,
                Self::code_span(&stats.code),
                Self::escape_markdown_table_cell(&stats.sample)
            ));
        }
        output.push('\n');
    }

    fn render_affected_components(&self, output: &mut String, components: &[AffectedComponent]) {
        output.push_str("## Affected Components\n\n");

        if components.is_empty() {
            output.push_str("_None_\n");
            return;
        }

        output.push_str(COMPONENT_TABLE_HEADER);
        output.push_str(COMPONENT_TABLE_SEPARATOR);
        for component in components {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&component.name),
                component.failures,
                component.warnings
            ));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for MarkdownFormatter {
    fn format(&self, summary: &ViolationSummary) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, summary);
        self.render_tally(&mut output, "Failures", &summary.failures);
        self.render_tally(&mut output, "Warnings", &summary.warnings);
        self.render_affected_components(&mut output, &summary.affected_components);

        Ok(output)
    }
}
