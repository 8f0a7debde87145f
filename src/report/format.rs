//! Fixed-template text reports.
//!
//! The wording and units are fixed; there is no localisation. Formatters do no
//! validation and expect fully computed summaries.

use crate::domain::{DaySummary, TrainingSummary};

/// Render the daily-steps report (no trailing newline).
///
/// ```text
/// Steps: 6000.
/// Distance: 3.90 km.
/// Calories burned: 177.19 kcal.
/// ```
pub fn format_day_report(summary: &DaySummary) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.",
        summary.record.steps, summary.metrics.distance_km, summary.metrics.calories
    )
}

/// Render the training report (ends with a newline).
pub fn format_training_report(summary: &TrainingSummary) -> String {
    let mut out = String::new();
    out.push_str(&format!("Activity: {}\n", summary.record.activity));
    out.push_str(&format!("Duration: {:.2} h.\n", summary.duration_hours()));
    out.push_str(&format!("Distance: {:.2} km.\n", summary.metrics.distance_km));
    out.push_str(&format!("Speed: {:.2} km/h\n", summary.metrics.mean_speed_kmh));
    out.push_str(&format!("Calories burned: {:.2}\n", summary.metrics.calories));
    out
}
