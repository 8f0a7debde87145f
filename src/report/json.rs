//! JSON views of computed summaries.
//!
//! Durations are emitted twice: as the canonical record token and as hours.

use serde::Serialize;

use crate::domain::{ActivityKind, ComputedMetrics, DaySummary, TrainingSummary, duration_hours};
use crate::io::duration::format_duration;

#[derive(Debug, Clone, Serialize)]
pub struct DayReportView {
    pub steps: u64,
    pub duration: String,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: ComputedMetrics,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrainingReportView {
    pub activity: ActivityKind,
    pub steps: u64,
    pub duration: String,
    pub duration_hours: f64,
    #[serde(flatten)]
    pub metrics: ComputedMetrics,
}

impl From<&DaySummary> for DayReportView {
    fn from(summary: &DaySummary) -> Self {
        Self {
            steps: summary.record.steps,
            duration: format_duration(summary.record.duration),
            duration_hours: duration_hours(summary.record.duration),
            metrics: summary.metrics,
        }
    }
}

impl From<&TrainingSummary> for TrainingReportView {
    fn from(summary: &TrainingSummary) -> Self {
        Self {
            activity: summary.record.activity,
            steps: summary.record.steps,
            duration: format_duration(summary.record.duration),
            duration_hours: summary.duration_hours(),
            metrics: summary.metrics,
        }
    }
}

pub fn day_report_json(summary: &DaySummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&DayReportView::from(summary))
}

pub fn training_report_json(summary: &TrainingSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&TrainingReportView::from(summary))
}
