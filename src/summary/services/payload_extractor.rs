use crate::shared::error::SummaryError;
use crate::shared::Result;
use regex::Regex;

/// Text the embedded JSON payload starts with
pub const DEFAULT_START_MARKER: &str = r#"{"success""#;

/// Prefix of the first log line after the payload
pub const DEFAULT_END_MARKER: &str = "step-";

/// Location and text of the payload found in a log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractedPayload<'a> {
    /// Byte offset of the start marker in the log text
    pub offset: usize,
    /// Payload text, verbatim
    pub text: &'a str,
}

/// PayloadExtractor - Locates the JSON payload inside free-form log text
///
/// The payload is the region that begins at the first occurrence of the
/// start marker and runs up to (not including) the newline of the first
/// following line that begins with the end marker. Without such a line
/// the region runs to the end of the text.
///
/// The end marker must never appear at the start of a line inside the
/// payload's own string values; the upstream log format guarantees this.
#[derive(Debug, Clone)]
pub struct PayloadExtractor {
    pattern: Regex,
}

impl PayloadExtractor {
    /// Creates an extractor for the given markers
    ///
    /// # Errors
    /// Returns a validation error if either marker is empty
    pub fn new(start_marker: &str, end_marker: &str) -> Result<Self> {
        if start_marker.is_empty() || end_marker.is_empty() {
            return Err(SummaryError::Validation {
                message: "Payload start and end markers must not be empty".to_string(),
            }
            .into());
        }

        // Lazy body plus the end-line alternative yields the earliest boundary.
        let pattern = Regex::new(&format!(
            r"(?s)({}.*?)(?:\n{}|\z)",
            regex::escape(start_marker),
            regex::escape(end_marker)
        ))?;

        Ok(Self { pattern })
    }

    /// Returns the first payload region in `text`, if any
    pub fn extract<'a>(&self, text: &'a str) -> Option<ExtractedPayload<'a>> {
        self.pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|region| ExtractedPayload {
                offset: region.start(),
                text: region.as_str(),
            })
    }
}
