use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// `Failure` covers the two conditions a CI step is expected to handle
/// (no log file given, no payload in the log). Everything else that goes
/// wrong while reading, decoding or writing is an `ApplicationError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Summary printed
    Success = 0,
    /// Missing log file argument, or no JSON payload in the log
    Failure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, JSON decode, config, output write)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::Failure => write!(f, "Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for violation summarization.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to read log file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    LogFileReadError { path: PathBuf, details: String },

    /// Display text is kept to the single line CI scripts grep for.
    #[error("No JSON output found in log file")]
    PayloadNotFound { path: PathBuf },

    #[error("Failed to decode JSON payload\nDetails: {details}\n\n💡 Hint: The text between the start marker and the next end-marker line must be a single JSON document")]
    PayloadDecodeError { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to load config file: {path}\nDetails: {details}\n\n💡 Hint: Ensure the file exists and contains valid YAML")]
    ConfigError { path: PathBuf, details: String },

    /// Validation error for builder patterns and config values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl SummaryError {
    /// Exit code the process should terminate with when this error surfaces
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SummaryError::PayloadNotFound { .. } => ExitCode::Failure,
            _ => ExitCode::ApplicationError,
        }
    }
}
