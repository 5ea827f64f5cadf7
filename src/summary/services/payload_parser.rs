use crate::shared::error::SummaryError;
use crate::shared::Result;
use crate::summary::domain::Report;

/// PayloadParser - Decodes an extracted payload into a `Report`
///
/// Decoding is into a generic JSON value; no schema is enforced beyond
/// the best-effort accessors on `Report`.
pub struct PayloadParser;

impl PayloadParser {
    /// Decodes `payload` as a single JSON document
    ///
    /// # Errors
    /// Returns `SummaryError::PayloadDecodeError` carrying serde_json's
    /// message (with line and column) when the text is not valid JSON.
    pub fn parse(payload: &str) -> Result<Report> {
        let root: serde_json::Value =
            serde_json::from_str(payload).map_err(|e| SummaryError::PayloadDecodeError {
                details: e.to_string(),
            })?;
        Ok(Report::new(root))
    }
}
