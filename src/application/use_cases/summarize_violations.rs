use crate::application::dto::{SummaryRequest, SummaryResponse};
use crate::ports::outbound::{LogReader, ProgressReporter};
use crate::shared::error::SummaryError;
use crate::shared::Result;
use crate::summary::services::{PayloadExtractor, PayloadParser, ViolationAggregator};

/// SummarizeViolationsUseCase - Core use case for summarizing a policy log
///
/// Runs the single pass: load the log, extract the embedded payload,
/// decode it and aggregate findings by code.
///
/// # Type Parameters
/// * `LR` - LogReader implementation
/// * `PR` - ProgressReporter implementation
pub struct SummarizeViolationsUseCase<LR, PR> {
    log_reader: LR,
    progress_reporter: PR,
}

impl<LR, PR> SummarizeViolationsUseCase<LR, PR>
where
    LR: LogReader,
    PR: ProgressReporter,
{
    /// Creates a new SummarizeViolationsUseCase with injected dependencies
    pub fn new(log_reader: LR, progress_reporter: PR) -> Self {
        Self {
            log_reader,
            progress_reporter,
        }
    }

    /// Executes the summarization
    ///
    /// # Errors
    /// - `SummaryError::PayloadNotFound` when the log has no payload
    /// - `SummaryError::PayloadDecodeError` when the payload is not JSON
    /// - any error from the log reader
    pub fn execute(&self, request: SummaryRequest) -> Result<SummaryResponse> {
        let extractor = PayloadExtractor::new(&request.start_marker, &request.end_marker)?;
        let aggregator = ViolationAggregator::new(request.sample_length)?;

        self.progress_reporter.report(&format!(
            "📖 Loading log file: {}",
            request.log_path.display()
        ));
        let log_text = self.log_reader.read_log(&request.log_path)?;

        let payload = extractor.extract(&log_text).ok_or_else(|| {
            SummaryError::PayloadNotFound {
                path: request.log_path.clone(),
            }
        })?;
        self.progress_reporter.report(&format!(
            "🔎 Found JSON payload at byte {} ({} bytes)",
            payload.offset,
            payload.text.len()
        ));

        let report = PayloadParser::parse(payload.text)?;
        let summary = aggregator.aggregate(&report);

        self.progress_reporter.report(&format!(
            "✅ Summarized {} component(s): {} failure(s), {} warning(s)",
            summary.component_count,
            summary.failures.total(),
            summary.warnings.total()
        ));

        Ok(SummaryResponse {
            summary,
            payload_offset: payload.offset,
            payload_len: payload.text.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};

    struct InMemoryLogReader(String);

    impl LogReader for InMemoryLogReader {
        fn read_log(&self, _log_path: &Path) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    struct FailingLogReader;

    impl LogReader for FailingLogReader {
        fn read_log(&self, log_path: &Path) -> Result<String> {
            Err(SummaryError::LogFileReadError {
                path: log_path.to_path_buf(),
                details: "permission denied".to_string(),
            }
            .into())
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        messages: RefCell<Vec<String>>,
    }

    impl ProgressReporter for RecordingReporter {
        fn report(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }

        fn report_error(&self, message: &str) {
            self.messages.borrow_mut().push(format!("Error: {}", message));
        }

        fn report_completion(&self, message: &str) {
            self.messages.borrow_mut().push(format!("Completed: {}", message));
        }
    }

    fn request() -> SummaryRequest {
        SummaryRequest::new(PathBuf::from("policy.log"))
    }

    #[test]
    fn test_execute_happy_path() {
        let log = "step-setup\n{\"success\": false, \"components\": [{\"name\": \"comp1\", \"violations\": [{\"msg\": \"bad thing happened\", \"metadata\": {\"code\": \"X1\"}}], \"warnings\": []}]}\nstep-next...\n";
        let use_case = SummarizeViolationsUseCase::new(
            InMemoryLogReader(log.to_string()),
            RecordingReporter::default(),
        );

        let response = use_case.execute(request()).unwrap();

        assert_eq!(response.payload_offset, "step-setup\n".len());
        assert_eq!(response.summary.component_count, 1);
        assert_eq!(response.summary.failures.get("X1").unwrap().count, 1);
        assert_eq!(response.summary.affected_components.len(), 1);

        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages[0].contains("policy.log"));
        assert!(messages.iter().any(|m| m.contains("1 failure(s)")));
    }

    #[test]
    fn test_execute_payload_not_found() {
        let use_case = SummarizeViolationsUseCase::new(
            InMemoryLogReader("nothing to see\nstep-1\n".to_string()),
            RecordingReporter::default(),
        );

        let err = use_case.execute(request()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SummaryError>(),
            Some(SummaryError::PayloadNotFound { .. })
        ));
        assert_eq!(err.to_string(), "No JSON output found in log file");
    }

    #[test]
    fn test_execute_decode_error() {
        let use_case = SummarizeViolationsUseCase::new(
            InMemoryLogReader("{\"success\": true, oops}\nstep-2\n".to_string()),
            RecordingReporter::default(),
        );

        let err = use_case.execute(request()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SummaryError>(),
            Some(SummaryError::PayloadDecodeError { .. })
        ));
    }

    #[test]
    fn test_execute_reader_error_propagates() {
        let use_case =
            SummarizeViolationsUseCase::new(FailingLogReader, RecordingReporter::default());

        let err = use_case.execute(request()).unwrap_err();
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_execute_rejects_invalid_request_before_reading() {
        let use_case = SummarizeViolationsUseCase::new(
            InMemoryLogReader(String::new()),
            RecordingReporter::default(),
        );
        let mut invalid = request();
        invalid.sample_length = 0;

        assert!(use_case.execute(invalid).is_err());
        assert!(use_case.progress_reporter.messages.borrow().is_empty());
    }

    #[test]
    fn test_execute_with_custom_sample_length() {
        let log = "{\"success\": true, \"components\": [{\"name\": \"c\", \"warnings\": [{\"msg\": \"abcdefgh\", \"metadata\": {\"code\": \"W\"}}]}]}";
        let use_case = SummarizeViolationsUseCase::new(
            InMemoryLogReader(log.to_string()),
            RecordingReporter::default(),
        );
        let mut custom = request();
        custom.sample_length = 3;

        let response = use_case.execute(custom).unwrap();
        assert_eq!(response.summary.warnings.get("W").unwrap().sample, "abc");
    }
}
