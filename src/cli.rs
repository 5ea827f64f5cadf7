use clap::Parser;
use std::path::PathBuf;
use violation_summary::application::dto::OutputFormat;
use violation_summary::config::CliOverrides;

/// Usage line printed when no log file is given
pub const USAGE: &str = "Usage: summarize_violations <LOG_FILE>";

/// Summarize policy violations embedded in a policy-conformance tool's log
#[derive(Parser, Debug)]
#[command(name = "summarize_violations")]
#[command(version)]
#[command(
    about = "Summarize policy violations embedded in a policy-conformance tool's log",
    long_about = None
)]
pub struct Args {
    /// Path to the log file containing the policy tool's JSON output
    #[arg(value_name = "LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Output format: text, json or markdown [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file path (defaults to ./summarize-violations.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of message characters kept as each code's sample [default: 100]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub sample_length: Option<u64>,

    /// Suppress progress messages on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            format: self.format,
            sample_length: self
                .sample_length
                .map(|n| usize::try_from(n).unwrap_or(usize::MAX)),
        }
    }
}
