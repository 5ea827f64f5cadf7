use crate::shared::error::SummaryError;
use crate::shared::Result;
use crate::summary::domain::{AffectedComponent, CodeTally, Report, ViolationSummary};

/// Number of characters of a finding message kept as the code's sample
pub const DEFAULT_SAMPLE_LENGTH: usize = 100;

/// ViolationAggregator - Groups a report's findings by classification code
///
/// Violations and warnings are tallied separately. Each tally stores the
/// first message seen for a code, truncated to `sample_length` characters.
#[derive(Debug, Clone, Copy)]
pub struct ViolationAggregator {
    sample_length: usize,
}

impl ViolationAggregator {
    /// # Errors
    /// Returns a validation error if `sample_length` is zero
    pub fn new(sample_length: usize) -> Result<Self> {
        if sample_length == 0 {
            return Err(SummaryError::Validation {
                message: "Sample length must be at least 1 character".to_string(),
            }
            .into());
        }
        Ok(Self { sample_length })
    }

    pub fn sample_length(&self) -> usize {
        self.sample_length
    }

    pub fn aggregate(&self, report: &Report) -> ViolationSummary {
        let mut failures = CodeTally::new();
        let mut warnings = CodeTally::new();
        let mut affected_components = Vec::new();

        for component in report.components() {
            for finding in component.violations() {
                failures.record(&finding.code(), self.sample(finding.message()));
            }
            for finding in component.warnings() {
                warnings.record(&finding.code(), self.sample(finding.message()));
            }

            if component.is_affected() {
                affected_components.push(AffectedComponent {
                    name: component.name().to_string(),
                    failures: component.violation_count(),
                    warnings: component.warning_count(),
                });
            }
        }

        ViolationSummary {
            success: report.success().cloned(),
            component_count: report.component_count(),
            failures,
            warnings,
            affected_components,
        }
    }

    fn sample<'m>(&self, message: &'m str) -> &'m str {
        truncate_chars(message, self.sample_length)
    }
}

impl Default for ViolationAggregator {
    fn default() -> Self {
        Self {
            sample_length: DEFAULT_SAMPLE_LENGTH,
        }
    }
}

/// Returns at most the first `max_chars` characters of `text`
fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::services::PayloadParser;
    use serde_json::json;

    fn report(value: serde_json::Value) -> Report {
        Report::new(value)
    }

    #[test]
    fn test_zero_components() {
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "success": true,
            "components": []
        })));

        assert_eq!(summary.component_count, 0);
        assert!(summary.failures.is_empty());
        assert!(summary.warnings.is_empty());
        assert!(summary.affected_components.is_empty());
    }

    #[test]
    fn test_same_code_keeps_first_sample() {
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "success": false,
            "components": [{
                "name": "comp1",
                "violations": [
                    {"msg": "first", "metadata": {"code": "X1"}},
                    {"msg": "second", "metadata": {"code": "X1"}}
                ],
                "warnings": []
            }]
        })));

        let stats = summary.failures.get("X1").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sample, "first");
    }

    #[test]
    fn test_violations_and_warnings_tallied_separately() {
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "components": [
                {
                    "name": "api",
                    "violations": [{"msg": "v", "metadata": {"code": "C1"}}],
                    "warnings": [
                        {"msg": "w1", "metadata": {"code": "C1"}},
                        {"msg": "w2", "metadata": {"code": "C2"}}
                    ]
                },
                {
                    "name": "worker",
                    "violations": [{"msg": "v2", "metadata": {"code": "C1"}}],
                    "warnings": []
                }
            ]
        })));

        assert_eq!(summary.failures.get("C1").unwrap().count, 2);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.warnings.get("C1").unwrap().sample, "w1");
        assert_eq!(summary.warnings.get("C2").unwrap().count, 1);
    }

    #[test]
    fn test_missing_metadata_groups_under_unknown() {
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "components": [{
                "name": "c",
                "violations": [{"msg": "a"}, {"msg": "b", "metadata": {}}]
            }]
        })));

        let stats = summary.failures.get("unknown").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sample, "a");
    }

    #[test]
    fn test_long_message_truncated_to_sample_length() {
        let long_message = "x".repeat(150);
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "components": [{
                "name": "c",
                "violations": [{"msg": long_message, "metadata": {"code": "LONG"}}]
            }]
        })));

        let sample = &summary.failures.get("LONG").unwrap().sample;
        assert_eq!(sample.chars().count(), 100);
        assert!(!sample.ends_with("..."));
    }

    #[test]
    fn test_truncation_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("日本語テキスト", 3), "日本語");
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 100), "");
    }

    #[test]
    fn test_custom_sample_length() {
        let aggregator = ViolationAggregator::new(5).unwrap();
        assert_eq!(aggregator.sample_length(), 5);

        let summary = aggregator.aggregate(&report(json!({
            "components": [{
                "name": "c",
                "warnings": [{"msg": "abcdefghij", "metadata": {"code": "W"}}]
            }]
        })));
        assert_eq!(summary.warnings.get("W").unwrap().sample, "abcde");
    }

    #[test]
    fn test_zero_sample_length_rejected() {
        assert!(ViolationAggregator::new(0).is_err());
    }

    #[test]
    fn test_affected_components_use_raw_counts_in_order() {
        let summary = ViolationAggregator::default().aggregate(&report(json!({
            "components": [
                {"name": "clean", "violations": [], "warnings": []},
                {"name": "warned", "violations": [], "warnings": [{"msg": "w"}]},
                {"name": "failed", "violations": [{"msg": "a"}, {"msg": "b"}], "warnings": [{"msg": "w"}]},
                {"name": "failed", "violations": [{"msg": "c"}], "warnings": []}
            ]
        })));

        assert_eq!(
            summary.affected_components,
            vec![
                AffectedComponent { name: "warned".to_string(), failures: 0, warnings: 1 },
                AffectedComponent { name: "failed".to_string(), failures: 2, warnings: 1 },
                AffectedComponent { name: "failed".to_string(), failures: 1, warnings: 0 },
            ]
        );
    }

    #[test]
    fn test_success_copied_from_report() {
        let parsed = PayloadParser::parse(r#"{"success": false, "components": []}"#).unwrap();
        let summary = ViolationAggregator::default().aggregate(&parsed);
        assert_eq!(summary.success, Some(json!(false)));
        assert_eq!(summary.success_label(), "False");
    }
}
