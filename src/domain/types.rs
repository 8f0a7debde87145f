//! Shared domain types.
//!
//! Every value here lives for a single invocation: records are decoded from one
//! input line, metrics are derived from them, and both are dropped once the
//! report string has been produced.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::Serialize;

use crate::error::RecordError;
use crate::io::duration::format_duration;

const NANOS_PER_SECOND: f64 = 1_000_000_000.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const METERS_PER_KM: f64 = 1000.0;

/// Which field of a record a parse error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Steps,
    Duration,
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecordField::Steps => "steps",
            RecordField::Duration => "duration",
        };
        f.write_str(label)
    }
}

/// Recognised training activities.
///
/// The wire tokens are exact and case-sensitive: `Walking` and `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActivityKind {
    Walking,
    Running,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 2] = [ActivityKind::Walking, ActivityKind::Running];

    /// Token used in records and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::Walking => "Walking",
            ActivityKind::Running => "Running",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = RecordError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ActivityKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| RecordError::UnknownActivity(token.to_string()))
    }
}

/// A decoded `<steps>,<duration>` line.
///
/// `steps` is always positive. `duration` may be zero or negative here; the
/// calorie calculation rejects it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRecord {
    pub steps: u64,
    pub duration: TimeDelta,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.steps, format_duration(self.duration))
    }
}

/// A decoded `<steps>,<activity>,<duration>` line.
///
/// Both `steps` and `duration` are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrainingRecord {
    pub steps: u64,
    pub activity: ActivityKind,
    pub duration: TimeDelta,
}

impl fmt::Display for TrainingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{}",
            self.steps,
            self.activity,
            format_duration(self.duration)
        )
    }
}

/// Caller-supplied body measurements. Passed on every call, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Biometrics {
    /// Body weight in kilograms.
    pub weight: f64,
    /// Body height; the stride formula multiplies it directly.
    pub height: f64,
}

impl Biometrics {
    pub fn new(weight: f64, height: f64) -> Self {
        Self { weight, height }
    }
}

/// Quantities derived from one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComputedMetrics {
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories: f64,
}

/// Everything computed for one daily-steps line.
///
/// `metrics.distance_km` uses the fixed stride while `metrics.mean_speed_kmh`
/// (and therefore `metrics.calories`) uses the height-derived stride.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub record: StepRecord,
    pub metrics: ComputedMetrics,
}

/// Everything computed for one training line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingSummary {
    pub record: TrainingRecord,
    pub metrics: ComputedMetrics,
}

impl TrainingSummary {
    pub fn duration_hours(&self) -> f64 {
        duration_hours(self.record.duration)
    }
}

/// Total length of `duration` in (fractional) seconds. Negative spans stay negative.
pub fn duration_seconds(duration: TimeDelta) -> f64 {
    duration.num_seconds() as f64 + f64::from(duration.subsec_nanos()) / NANOS_PER_SECOND
}

pub fn duration_minutes(duration: TimeDelta) -> f64 {
    duration_seconds(duration) / SECONDS_PER_MINUTE
}

pub fn duration_hours(duration: TimeDelta) -> f64 {
    duration_minutes(duration) / MINUTES_PER_HOUR
}
