//! Command-line parsing for the step tracker.
//!
//! Argument parsing and command dispatch stay separate from the formulas: this
//! module only describes flags.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod input;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "tracker", version, about = "Distance and calorie summaries from step-tracker records")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarise a daily-steps record: `<steps>,<duration>` (e.g. `6000,45m0s`).
    Day(RecordArgs),
    /// Summarise a training record: `<steps>,<activity>,<duration>` (e.g. `3456,Running,45m0s`).
    ///
    /// Activity must be exactly `Walking` or `Running`.
    Training(RecordArgs),
}

/// Options shared by both record kinds.
#[derive(Debug, Args, Clone)]
pub struct RecordArgs {
    /// The record line. Read from stdin when omitted.
    pub record: Option<String>,

    /// Body weight in kg (falls back to TRACKER_WEIGHT_KG).
    #[arg(short = 'w', long)]
    pub weight: Option<f64>,

    /// Body height in m (falls back to TRACKER_HEIGHT_M).
    #[arg(short = 'H', long)]
    pub height: Option<f64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-template text report.
    Text,
    /// Pretty-printed JSON.
    Json,
}
