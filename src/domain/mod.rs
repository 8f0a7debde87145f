//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - decoded input records (`StepRecord`, `TrainingRecord`, `ActivityKind`)
//! - per-call inputs and outputs (`Biometrics`, `ComputedMetrics`)
//! - duration unit conversions shared by the calculators

pub mod types;

pub use types::*;
