use serde::ser::{Serialize, Serializer};
use std::collections::HashMap;

/// Occurrence count and first-seen sample message for one code
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CodeStats {
    pub code: String,
    pub count: usize,
    pub sample: String,
}

/// Findings grouped by classification code.
///
/// Codes keep their first-seen order internally so that `sorted()` is
/// stable: codes with equal counts come out in the order they were first
/// recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTally {
    entries: Vec<CodeStats>,
    index: HashMap<String, usize>,
}

impl CodeTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finding. The sample is stored only on the first
    /// occurrence of a code and never overwritten afterwards.
    pub fn record(&mut self, code: &str, sample: &str) {
        match self.index.get(code) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.index.insert(code.to_string(), self.entries.len());
                self.entries.push(CodeStats {
                    code: code.to_string(),
                    count: 1,
                    sample: sample.to_string(),
                });
            }
        }
    }

    pub fn get(&self, code: &str) -> Option<&CodeStats> {
        self.index.get(code).map(|&position| &self.entries[position])
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct codes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Number of findings across all codes
    pub fn total(&self) -> usize {
        self.entries.iter().map(|stats| stats.count).sum()
    }

    /// Codes by descending count; ties keep first-seen order
    pub fn sorted(&self) -> Vec<&CodeStats> {
        let mut sorted: Vec<&CodeStats> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.count.cmp(&a.count));
        sorted
    }
}

impl Serialize for CodeTally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.sorted())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_and_keeps_first_sample() {
        let mut tally = CodeTally::new();
        tally.record("X1", "first message");
        tally.record("X1", "second message");

        let stats = tally.get("X1").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.sample, "first message");
        assert_eq!(tally.len(), 1);
        assert_eq!(tally.total(), 2);
    }

    #[test]
    fn test_empty_tally() {
        let tally = CodeTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total(), 0);
        assert!(tally.sorted().is_empty());
        assert!(tally.get("X1").is_none());
    }

    #[test]
    fn test_sorted_descending_with_stable_ties() {
        let mut tally = CodeTally::new();
        for _ in 0..5 {
            tally.record("A", "a");
        }
        for _ in 0..9 {
            tally.record("B", "b");
        }
        for _ in 0..9 {
            tally.record("C", "c");
        }

        let order: Vec<(&str, usize)> = tally
            .sorted()
            .iter()
            .map(|s| (s.code.as_str(), s.count))
            .collect();
        assert_eq!(order, vec![("B", 9), ("C", 9), ("A", 5)]);
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let mut tally = CodeTally::new();
        tally.record("low", "l");
        tally.record("high", "h");
        tally.record("high", "h2");

        let json = serde_json::to_value(&tally).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"code": "high", "count": 2, "sample": "h"},
                {"code": "low", "count": 1, "sample": "l"}
            ])
        );
    }
}
