//! `step-tracker` library crate.
//!
//! Turns step-tracker log lines into distance and calorie summaries.
//!
//! - `"<steps>,<duration>"` → daily-steps report ([`day_action_info`])
//! - `"<steps>,<activity>,<duration>"` → training report ([`training_info`])
//!
//! The binary (`tracker`) is a thin wrapper around this library so the
//! formulas are testable without spawning processes.

pub mod app;
pub mod calc;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;

pub use app::pipeline::{day_action_info, summarize_day, summarize_training, training_info};
pub use domain::{ActivityKind, Biometrics, ComputedMetrics, DaySummary, StepRecord, TrainingRecord, TrainingSummary};
pub use error::{AppError, RecordError, RecordResult};
