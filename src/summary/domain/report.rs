use serde_json::Value;
use std::borrow::Cow;

/// Grouping key used when a finding carries no `metadata.code`
pub const UNKNOWN_CODE: &str = "unknown";

/// Decoded policy report.
///
/// The upstream tool's schema is not enforced: the report keeps the raw
/// JSON value and every accessor degrades to a default when a field is
/// missing or has an unexpected type.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    root: Value,
}

impl Report {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Raw `success` value, `None` when the field is absent
    pub fn success(&self) -> Option<&Value> {
        self.root.get("success")
    }

    /// Number of entries in `components`, including entries that are not objects
    pub fn component_count(&self) -> usize {
        self.component_values().len()
    }

    /// Components in document order. Entries that are not JSON objects are skipped.
    pub fn components(&self) -> impl Iterator<Item = Component<'_>> {
        self.component_values()
            .iter()
            .filter(|value| value.is_object())
            .map(Component::new)
    }

    fn component_values(&self) -> &[Value] {
        self.root
            .get("components")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// One evaluated unit (image, artifact, ...) inside a report
#[derive(Debug, Clone, Copy)]
pub struct Component<'a> {
    value: &'a Value,
}

impl<'a> Component<'a> {
    fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn name(&self) -> &'a str {
        self.value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_CODE)
    }

    pub fn violations(&self) -> impl Iterator<Item = Finding<'a>> {
        Self::findings(self.value, "violations")
    }

    pub fn warnings(&self) -> impl Iterator<Item = Finding<'a>> {
        Self::findings(self.value, "warnings")
    }

    pub fn violation_count(&self) -> usize {
        Self::finding_values(self.value, "violations").len()
    }

    pub fn warning_count(&self) -> usize {
        Self::finding_values(self.value, "warnings").len()
    }

    /// True when the component has at least one violation or warning
    pub fn is_affected(&self) -> bool {
        self.violation_count() > 0 || self.warning_count() > 0
    }

    fn finding_values(value: &'a Value, key: &str) -> &'a [Value] {
        value
            .get(key)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn findings(value: &'a Value, key: &str) -> impl Iterator<Item = Finding<'a>> {
        Self::finding_values(value, key).iter().map(Finding::new)
    }
}

/// A single violation or warning
#[derive(Debug, Clone, Copy)]
pub struct Finding<'a> {
    value: &'a Value,
}

impl<'a> Finding<'a> {
    fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// `metadata.code` as display text, or `unknown` when metadata or the
    /// code is missing or null
    pub fn code(&self) -> Cow<'a, str> {
        match self
            .value
            .get("metadata")
            .and_then(|metadata| metadata.get("code"))
        {
            None | Some(Value::Null) => Cow::Borrowed(UNKNOWN_CODE),
            Some(code) => value_label(code),
        }
    }

    /// Full message text, empty when absent
    pub fn message(&self) -> &'a str {
        self.value.get("msg").and_then(Value::as_str).unwrap_or("")
    }
}

/// Plain-text rendering of a JSON value: strings unquoted, booleans as
/// `True`/`False`, null as `None`, anything else as compact JSON
pub fn value_label(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text.as_str()),
        Value::Bool(true) => Cow::Borrowed("True"),
        Value::Bool(false) => Cow::Borrowed("False"),
        Value::Null => Cow::Borrowed("None"),
        other => Cow::Owned(other.to_string()),
    }
}
