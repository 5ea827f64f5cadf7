/// Shared utilities: error types, exit codes, result alias and file checks
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
