use crate::shared::Result;
use crate::summary::domain::ViolationSummary;

/// SummaryFormatter port for rendering a violation summary
///
/// Implementations exist for the plain console report, JSON and Markdown.
pub trait SummaryFormatter {
    /// Renders the summary as a complete document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, summary: &ViolationSummary) -> Result<String>;
}
