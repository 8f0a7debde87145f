//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - installs logging
//! - parses CLI arguments
//! - resolves biometrics (flags, then environment)
//! - runs the record pipeline and prints the report

use clap::Parser;
use tracing::debug;

use crate::cli::input::record_or_stdin;
use crate::cli::{Command, OutputFormat, RecordArgs};
use crate::config::BiometricDefaults;
use crate::domain::Biometrics;
use crate::error::AppError;

pub mod pipeline;

use pipeline::{summarize_day, summarize_training};

/// Entry point for the `tracker` binary.
pub fn run() -> Result<(), AppError> {
    crate::logging::init();
    let cli = crate::cli::Cli::parse();

    let output = match cli.command {
        Command::Day(args) => handle_record(args, RecordKind::Day)?,
        Command::Training(args) => handle_record(args, RecordKind::Training)?,
    };

    println!("{output}");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordKind {
    Day,
    Training,
}

fn handle_record(args: RecordArgs, kind: RecordKind) -> Result<String, AppError> {
    let biometrics = resolve_biometrics(&args)?;
    let record = record_or_stdin(args.record)?;
    render(&record, biometrics, kind, args.format)
}

fn resolve_biometrics(args: &RecordArgs) -> Result<Biometrics, AppError> {
    BiometricDefaults::from_env().resolve(args.weight, args.height)
}

/// Run the pipeline for one record and render it in `format`.
fn render(record: &str, biometrics: Biometrics, kind: RecordKind, format: OutputFormat) -> Result<String, AppError> {
    let rendered = match kind {
        RecordKind::Day => {
            let summary = summarize_day(record, biometrics).inspect_err(|e| log_rejection(record, e))?;
            match format {
                OutputFormat::Text => crate::report::format_day_report(&summary),
                OutputFormat::Json => crate::report::day_report_json(&summary).map_err(json_error)?,
            }
        }
        RecordKind::Training => {
            let summary = summarize_training(record, biometrics).inspect_err(|e| log_rejection(record, e))?;
            match format {
                // The training template already ends with a newline.
                OutputFormat::Text => crate::report::format_training_report(&summary)
                    .trim_end_matches('\n')
                    .to_string(),
                OutputFormat::Json => crate::report::training_report_json(&summary).map_err(json_error)?,
            }
        }
    };
    Ok(rendered)
}

fn json_error(err: serde_json::Error) -> AppError {
    AppError::new(4, format!("Failed to serialize report: {err}"))
}

fn log_rejection(record: &str, err: &crate::error::RecordError) {
    debug!(record, error = %err, "record rejected");
}
