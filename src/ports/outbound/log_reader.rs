use crate::shared::Result;
use std::path::Path;

/// LogReader port for loading the policy tool's log
///
/// This port abstracts the file system so the summarization use case can
/// be exercised with in-memory logs.
pub trait LogReader {
    /// Reads the whole log into memory
    ///
    /// # Arguments
    /// * `log_path` - Path to the log file
    ///
    /// # Returns
    /// The full text content of the log
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The file is not valid UTF-8
    /// - The file fails the reader's safety checks (symlink, size)
    fn read_log(&self, log_path: &Path) -> Result<String>;
}
