use crate::shared::error::SummaryError;
use crate::shared::Result;
use crate::summary::services::{DEFAULT_END_MARKER, DEFAULT_SAMPLE_LENGTH, DEFAULT_START_MARKER};
use std::path::PathBuf;

/// SummaryRequest - Request DTO for the summarization use case
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRequest {
    /// Path to the policy tool's log
    pub log_path: PathBuf,
    /// Characters of a finding message kept as the per-code sample
    pub sample_length: usize,
    /// Text the embedded JSON payload starts with
    pub start_marker: String,
    /// Prefix of the first log line after the payload
    pub end_marker: String,
}

impl SummaryRequest {
    pub fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            sample_length: DEFAULT_SAMPLE_LENGTH,
            start_marker: DEFAULT_START_MARKER.to_string(),
            end_marker: DEFAULT_END_MARKER.to_string(),
        }
    }

    pub fn builder() -> SummaryRequestBuilder {
        SummaryRequestBuilder::default()
    }
}

/// Builder for `SummaryRequest`; unset options fall back to the defaults
#[derive(Debug, Default)]
pub struct SummaryRequestBuilder {
    log_path: Option<PathBuf>,
    sample_length: Option<usize>,
    start_marker: Option<String>,
    end_marker: Option<String>,
}

impl SummaryRequestBuilder {
    pub fn log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(log_path.into());
        self
    }

    pub fn sample_length(mut self, sample_length: usize) -> Self {
        self.sample_length = Some(sample_length);
        self
    }

    pub fn start_marker(mut self, start_marker: impl Into<String>) -> Self {
        self.start_marker = Some(start_marker.into());
        self
    }

    pub fn end_marker(mut self, end_marker: impl Into<String>) -> Self {
        self.end_marker = Some(end_marker.into());
        self
    }

    /// # Errors
    /// Returns a validation error when the log path is missing, the sample
    /// length is zero, or a marker is empty
    pub fn build(self) -> Result<SummaryRequest> {
        let log_path = self.log_path.ok_or_else(|| SummaryError::Validation {
            message: "log_path is required".to_string(),
        })?;

        let mut request = SummaryRequest::new(log_path);
        if let Some(sample_length) = self.sample_length {
            request.sample_length = sample_length;
        }
        if let Some(start_marker) = self.start_marker {
            request.start_marker = start_marker;
        }
        if let Some(end_marker) = self.end_marker {
            request.end_marker = end_marker;
        }

        if request.sample_length == 0 {
            return Err(SummaryError::Validation {
                message: "sample_length must be at least 1".to_string(),
            }
            .into());
        }
        if request.start_marker.is_empty() || request.end_marker.is_empty() {
            return Err(SummaryError::Validation {
                message: "start_marker and end_marker must not be empty".to_string(),
            }
            .into());
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_defaults() {
        let request = SummaryRequest::new(PathBuf::from("policy.log"));
        assert_eq!(request.sample_length, 100);
        assert_eq!(request.start_marker, "{\"success\"");
        assert_eq!(request.end_marker, "step-");
    }

    #[test]
    fn test_builder_overrides() {
        let request = SummaryRequest::builder()
            .log_path("ci/policy.log")
            .sample_length(40)
            .start_marker("{\"result\"")
            .end_marker("##[")
            .build()
            .unwrap();

        assert_eq!(request.log_path, PathBuf::from("ci/policy.log"));
        assert_eq!(request.sample_length, 40);
        assert_eq!(request.start_marker, "{\"result\"");
        assert_eq!(request.end_marker, "##[");
    }

    #[test]
    fn test_builder_requires_log_path() {
        let err = SummaryRequest::builder().build().unwrap_err();
        assert!(err.to_string().contains("log_path is required"));
    }

    #[test]
    fn test_builder_rejects_zero_sample_length() {
        let err = SummaryRequest::builder()
            .log_path("policy.log")
            .sample_length(0)
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("sample_length"));
    }

    #[test]
    fn test_builder_rejects_empty_marker() {
        let err = SummaryRequest::builder()
            .log_path("policy.log")
            .end_marker("")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }
}
