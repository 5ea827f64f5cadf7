use crate::ports::outbound::ProgressReporter;

/// StderrProgressReporter adapter for reporting progress to stderr
///
/// Writing to stderr keeps the report on stdout clean for redirection.
pub struct StderrProgressReporter;

impl StderrProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StderrProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for StderrProgressReporter {
    fn report(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, message: &str) {
        eprintln!("{}", message);
    }
}

/// QuietProgressReporter adapter that discards progress messages
///
/// Warnings and errors are still written to stderr.
pub struct QuietProgressReporter;

impl QuietProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuietProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for QuietProgressReporter {
    fn report(&self, _message: &str) {}

    fn report_error(&self, message: &str) {
        eprintln!("{}", message);
    }

    fn report_completion(&self, _message: &str) {}
}
