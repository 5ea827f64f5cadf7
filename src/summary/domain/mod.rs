pub mod code_tally;
pub mod report;
pub mod violation_summary;

pub use code_tally::{CodeStats, CodeTally};
pub use report::{Component, Finding, Report, UNKNOWN_CODE};
pub use violation_summary::{AffectedComponent, ViolationSummary};
