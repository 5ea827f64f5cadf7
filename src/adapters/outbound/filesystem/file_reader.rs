use crate::ports::outbound::LogReader;
use crate::shared::error::SummaryError;
use crate::shared::security::{inspect_log_file, MAX_LOG_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading log files from disk
pub struct FileSystemReader {
    max_file_size: u64,
}

impl FileSystemReader {
    pub fn new() -> Self {
        Self {
            max_file_size: MAX_LOG_FILE_SIZE,
        }
    }

    /// Creates a reader with a custom size limit
    pub fn with_max_file_size(max_file_size: u64) -> Self {
        Self { max_file_size }
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LogReader for FileSystemReader {
    fn read_log(&self, log_path: &Path) -> Result<String> {
        inspect_log_file(log_path, self.max_file_size)?;

        let bytes = fs::read(log_path).map_err(|e| SummaryError::LogFileReadError {
            path: log_path.to_path_buf(),
            details: e.to_string(),
        })?;

        String::from_utf8(bytes).map_err(|e| {
            SummaryError::LogFileReadError {
                path: log_path.to_path_buf(),
                details: format!("Log file is not valid UTF-8: {}", e.utf8_error()),
            }
            .into()
        })
    }
}
