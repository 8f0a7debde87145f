//! Shared record pipeline used by the CLI and by library callers.
//!
//! decode -> distance -> speed -> calories -> summary (-> report string)
//!
//! Every call is independent: nothing is cached or shared between invocations.
//! Failures are returned as `RecordError`; logging them is left to the caller.

use tracing::debug;

use crate::calc::{fixed_stride_distance_km, height_stride_distance_km, mean_speed_kmh, spent_calories};
use crate::domain::{ActivityKind, Biometrics, ComputedMetrics, DaySummary, TrainingSummary};
use crate::error::RecordResult;
use crate::io::ingest::{parse_step_record, parse_training_record};
use crate::report::{format_day_report, format_training_report};

/// Compute the daily-steps summary for a `<steps>,<duration>` line.
///
/// Distance uses the fixed stride; calories use the walking formula, whose
/// speed comes from the height-derived stride.
pub fn summarize_day(data: &str, biometrics: Biometrics) -> RecordResult<DaySummary> {
    let record = parse_step_record(data)?;

    let distance_km = fixed_stride_distance_km(record.steps);
    let mean_speed =
        mean_speed_kmh(height_stride_distance_km(record.steps, biometrics.height), record.duration);
    let calories = spent_calories(ActivityKind::Walking, record.steps, biometrics, record.duration)?;

    let metrics = ComputedMetrics {
        distance_km,
        mean_speed_kmh: mean_speed,
        calories,
    };
    debug!(steps = record.steps, ?metrics, "computed daily-steps metrics");

    Ok(DaySummary { record, metrics })
}

/// Compute the training summary for a `<steps>,<activity>,<duration>` line.
pub fn summarize_training(data: &str, biometrics: Biometrics) -> RecordResult<TrainingSummary> {
    let record = parse_training_record(data)?;

    let distance_km = height_stride_distance_km(record.steps, biometrics.height);
    let mean_speed = mean_speed_kmh(distance_km, record.duration);
    let calories = spent_calories(record.activity, record.steps, biometrics, record.duration)?;

    let metrics = ComputedMetrics {
        distance_km,
        mean_speed_kmh: mean_speed,
        calories,
    };
    debug!(steps = record.steps, activity = %record.activity, ?metrics, "computed training metrics");

    Ok(TrainingSummary { record, metrics })
}

/// Daily-steps report text for `data`.
pub fn day_action_info(data: &str, weight: f64, height: f64) -> RecordResult<String> {
    let summary = summarize_day(data, Biometrics::new(weight, height))?;
    Ok(format_day_report(&summary))
}

/// Training report text for `data`.
pub fn training_info(data: &str, weight: f64, height: f64) -> RecordResult<String> {
    let summary = summarize_training(data, Biometrics::new(weight, height))?;
    Ok(format_training_report(&summary))
}
