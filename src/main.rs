mod cli;

use cli::{Args, USAGE};
use std::path::{Path, PathBuf};
use std::process;
use violation_summary::adapters::outbound::console::{
    QuietProgressReporter, StderrProgressReporter,
};
use violation_summary::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use violation_summary::application::dto::SummaryRequest;
use violation_summary::application::factories::FormatterFactory;
use violation_summary::application::use_cases::SummarizeViolationsUseCase;
use violation_summary::config::{self, ConfigFile, Settings};
use violation_summary::ports::outbound::{OutputPresenter, ProgressReporter};
use violation_summary::shared::error::{ExitCode, SummaryError};
use violation_summary::shared::Result;

fn main() {
    // clap exits with code 2 on invalid arguments and 0 for --help/--version
    let args = Args::parse_args();

    let Some(log_file) = args.log_file.clone() else {
        println!("{}", USAGE);
        process::exit(ExitCode::Failure.as_i32());
    };

    let reporter: Box<dyn ProgressReporter> = if args.quiet {
        Box::new(QuietProgressReporter::new())
    } else {
        Box::new(StderrProgressReporter::new())
    };

    if let Err(e) = run(&args, log_file, reporter.as_ref()) {
        process::exit(report_failure(&e).as_i32());
    }
}

fn run(args: &Args, log_file: PathBuf, reporter: &dyn ProgressReporter) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        for key in config.unknown_field_names() {
            reporter.report_error(&format!(
                "⚠️  Warning: Unknown config field '{}' will be ignored.",
                key
            ));
        }
    }

    let settings = Settings::resolve(&args.overrides(), config.as_ref())?;

    let request = SummaryRequest::builder()
        .log_path(log_file)
        .sample_length(settings.sample_length)
        .start_marker(settings.start_marker)
        .end_marker(settings.end_marker)
        .build()?;

    let use_case = SummarizeViolationsUseCase::new(FileSystemReader::new(), reporter);
    let response = use_case.execute(request)?;

    reporter.report(FormatterFactory::progress_message(settings.format));
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&response.summary)?;

    match &args.output {
        Some(output_path) => {
            let writer = FileSystemWriter::new(output_path.clone());
            writer.present(&formatted_output)?;
            reporter.report_completion(&format!(
                "✅ Output complete: {}",
                writer.output_path().display()
            ));
        }
        None => StdoutPresenter::new().present(&formatted_output)?,
    }

    Ok(())
}

fn load_config(explicit_path: Option<&Path>) -> Result<Option<ConfigFile>> {
    match explicit_path {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => {
            let cwd = std::env::current_dir()?;
            config::discover_config(&cwd)
        }
    }
}

/// Prints the error and returns the exit code for it.
///
/// A missing payload is an expected outcome and gets the bare one-line
/// message on stdout; everything else is printed to stderr with its
/// cause chain.
fn report_failure(e: &anyhow::Error) -> ExitCode {
    if let Some(summary_error @ SummaryError::PayloadNotFound { .. }) =
        e.downcast_ref::<SummaryError>()
    {
        println!("{}", summary_error);
        return summary_error.exit_code();
    }

    eprintln!("\n❌ An error occurred:\n");
    eprintln!("{}", e);

    for cause in e.chain().skip(1) {
        eprintln!("\nCaused by: {}", cause);
    }

    eprintln!();
    ExitCode::ApplicationError
}
