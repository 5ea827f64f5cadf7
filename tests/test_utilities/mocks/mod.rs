/// Mock implementations for testing
mod mock_log_reader;
mod mock_progress_reporter;

pub use mock_log_reader::MockLogReader;
pub use mock_progress_reporter::MockProgressReporter;
