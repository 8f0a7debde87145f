//! Calories burned.
//!
//! Both activities share one base term:
//!
//! ```text
//! base = weight × mean_speed_kmh × duration_minutes / 60
//! ```
//!
//! Running burns `base`, walking burns `base × 0.5`. The mean speed is always
//! computed from the height-derived stride.

use chrono::TimeDelta;

use crate::calc::distance::height_stride_distance_km;
use crate::calc::speed::mean_speed_kmh;
use crate::domain::{ActivityKind, Biometrics, MINUTES_PER_HOUR, duration_minutes, duration_seconds};
use crate::error::{RecordError, RecordResult};

pub const WALKING_CALORIES_COEFFICIENT: f64 = 0.5;

/// Calories burned for `activity`.
///
/// Rejects zero steps and non-positive weight, height or duration instead of
/// clamping them.
pub fn spent_calories(
    activity: ActivityKind,
    steps: u64,
    biometrics: Biometrics,
    duration: TimeDelta,
) -> RecordResult<f64> {
    let Biometrics { weight, height } = biometrics;
    let all_positive =
        steps > 0 && weight > 0.0 && height > 0.0 && duration_seconds(duration) > 0.0;
    if !all_positive {
        return Err(RecordError::validation("parameters must not be zero or negative"));
    }

    let speed = mean_speed_kmh(height_stride_distance_km(steps, height), duration);
    let base = weight * speed * duration_minutes(duration) / MINUTES_PER_HOUR;

    Ok(match activity {
        ActivityKind::Running => base,
        ActivityKind::Walking => base * WALKING_CALORIES_COEFFICIENT,
    })
}

pub fn running_spent_calories(
    steps: u64,
    biometrics: Biometrics,
    duration: TimeDelta,
) -> RecordResult<f64> {
    spent_calories(ActivityKind::Running, steps, biometrics, duration)
}

pub fn walking_spent_calories(
    steps: u64,
    biometrics: Biometrics,
    duration: TimeDelta,
) -> RecordResult<f64> {
    spent_calories(ActivityKind::Walking, steps, biometrics, duration)
}
