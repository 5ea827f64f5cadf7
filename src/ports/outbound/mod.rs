/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the console and output formats.
pub mod formatter;
pub mod log_reader;
pub mod output_presenter;
pub mod progress_reporter;

pub use formatter::SummaryFormatter;
pub use log_reader::LogReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
