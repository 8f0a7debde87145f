//! Mean speed.

use chrono::TimeDelta;

use crate::domain::{duration_hours, duration_seconds};

/// Mean speed in km/h, or `0.0` when the duration is not positive.
pub fn mean_speed_kmh(distance_km: f64, duration: TimeDelta) -> f64 {
    if duration_seconds(duration) <= 0.0 {
        return 0.0;
    }
    distance_km / duration_hours(duration)
}
