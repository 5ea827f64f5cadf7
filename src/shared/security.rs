use crate::shared::error::SummaryError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest log file accepted for summarization (100 MB)
pub const MAX_LOG_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Checks that `path` points at something safe to slurp into memory.
///
/// Symbolic links are followed, so the checks apply to the file they
/// point at. Directories and other special files are rejected. Files
/// larger than `max_size` are refused before any bytes are read.
///
/// Returns the file size in bytes on success.
///
/// # Errors
/// - `SummaryError::LogFileReadError` when the metadata cannot be read
///   (missing file, dangling link, permission denied)
/// - `SummaryError::SecurityError` for non-regular files and oversized files
pub fn inspect_log_file(path: &Path, max_size: u64) -> Result<u64> {
    let metadata = fs::metadata(path).map_err(|e| SummaryError::LogFileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if !metadata.is_file() {
        return Err(SummaryError::SecurityError {
            path: path.to_path_buf(),
            reason: "Log file is not a regular file".to_string(),
            hint: "Pass the path of a log file, not a directory or device".to_string(),
        }
        .into());
    }

    let size = metadata.len();
    if size > max_size {
        return Err(SummaryError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Log file is too large ({} bytes). Maximum allowed size is {} bytes",
                size, max_size
            ),
            hint: "Trim the log to the policy tool's output before summarizing".to_string(),
        }
        .into());
    }

    Ok(size)
}
