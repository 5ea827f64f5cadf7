/// Console adapters for diagnostics on stderr
mod progress_reporter;

pub use progress_reporter::{QuietProgressReporter, StderrProgressReporter};
