//! Distance from step counts.
//!
//! Two stride formulas exist and are deliberately kept apart:
//!
//! - **fixed**: every step covers `0.65` m (used for the daily-steps distance)
//! - **height-derived**: a step covers `height × 0.45` (used for training
//!   distance and for the speed that feeds every calorie formula)

use crate::domain::METERS_PER_KM;

/// Average step length in meters for the fixed stride formula.
pub const FIXED_STEP_LENGTH_M: f64 = 0.65;

/// Stride length as a fraction of body height.
pub const STRIDE_HEIGHT_COEFFICIENT: f64 = 0.45;

/// How long one step is assumed to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrideModel {
    Fixed,
    HeightDerived { height: f64 },
}

impl StrideModel {
    pub fn stride_length_m(self) -> f64 {
        match self {
            StrideModel::Fixed => FIXED_STEP_LENGTH_M,
            StrideModel::HeightDerived { height } => height * STRIDE_HEIGHT_COEFFICIENT,
        }
    }

    /// Distance in kilometers. Performs no validation.
    pub fn distance_km(self, steps: u64) -> f64 {
        steps as f64 * self.stride_length_m() / METERS_PER_KM
    }
}

pub fn fixed_stride_distance_km(steps: u64) -> f64 {
    StrideModel::Fixed.distance_km(steps)
}

pub fn height_stride_distance_km(steps: u64, height: f64) -> f64 {
    StrideModel::HeightDerived { height }.distance_km(steps)
}
