use super::report::value_label;
use super::CodeTally;
use serde::Serialize;
use serde_json::Value;

/// Per-component totals for a component with at least one finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffectedComponent {
    pub name: String,
    pub failures: usize,
    pub warnings: usize,
}

/// Aggregated view of a policy report, ready for formatting
#[derive(Debug, Clone, PartialEq)]
pub struct ViolationSummary {
    /// Raw `success` value from the report, `None` when absent
    pub success: Option<Value>,
    pub component_count: usize,
    pub failures: CodeTally,
    pub warnings: CodeTally,
    pub affected_components: Vec<AffectedComponent>,
}

impl ViolationSummary {
    /// Renders the success flag the way the console report shows it:
    /// `True`/`False` for booleans, `None` when absent or null, strings
    /// unquoted and the compact JSON text for anything else.
    pub fn success_label(&self) -> String {
        match &self.success {
            Some(value) => value_label(value).into_owned(),
            None => "None".to_string(),
        }
    }
}
