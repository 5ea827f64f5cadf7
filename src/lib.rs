//! violation-summary - Summarize policy violations from policy-tool logs
//!
//! A policy-conformance tool prints its verdict as a single JSON document
//! somewhere inside a larger CI log. This library locates that document,
//! decodes it, and groups violations and warnings by classification code.
//!
//! # Architecture
//!
//! - **Domain** (`summary`): report model, code tallies and the extract /
//!   parse / aggregate services
//! - **Application** (`application`): use case, request DTOs, formatter factory
//! - **Ports** (`ports`): interfaces for infrastructure
//! - **Adapters** (`adapters`): file system, console and output formatters
//! - **Shared** (`shared`): error types, exit codes and file checks
//!
//! # Example
//!
//! ```no_run
//! use violation_summary::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case =
//!     SummarizeViolationsUseCase::new(FileSystemReader::new(), StderrProgressReporter::new());
//!
//! let request = SummaryRequest::new(PathBuf::from("policy.log"));
//! let response = use_case.execute(request)?;
//!
//! let output = TextFormatter::new().format(&response.summary)?;
//! print!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod shared;
pub mod summary;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{QuietProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, TextFormatter,
    };
    pub use crate::application::dto::{OutputFormat, SummaryRequest, SummaryResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::use_cases::SummarizeViolationsUseCase;
    pub use crate::ports::outbound::{
        LogReader, OutputPresenter, ProgressReporter, SummaryFormatter,
    };
    pub use crate::shared::error::{ExitCode, SummaryError};
    pub use crate::shared::Result;
    pub use crate::summary::domain::{
        AffectedComponent, CodeStats, CodeTally, Report, ViolationSummary,
    };
    pub use crate::summary::services::{PayloadExtractor, PayloadParser, ViolationAggregator};
}
