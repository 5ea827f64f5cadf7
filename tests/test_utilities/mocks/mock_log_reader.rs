use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use violation_summary::prelude::*;

/// Mock LogReader returning fixed content and recording requested paths
#[derive(Clone)]
pub struct MockLogReader {
    content: Option<String>,
    pub requested_paths: Arc<Mutex<Vec<PathBuf>>>,
}

impl MockLogReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A reader that fails as if the file did not exist
    pub fn missing() -> Self {
        Self {
            content: None,
            requested_paths: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl LogReader for MockLogReader {
    fn read_log(&self, log_path: &Path) -> Result<String> {
        self.requested_paths
            .lock()
            .unwrap()
            .push(log_path.to_path_buf());

        match &self.content {
            Some(content) => Ok(content.clone()),
            None => Err(SummaryError::LogFileReadError {
                path: log_path.to_path_buf(),
                details: "No such file or directory".to_string(),
            }
            .into()),
        }
    }
}
