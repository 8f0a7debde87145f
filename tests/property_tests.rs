//! Property-based tests for records and formulas.
//!
//! - records survive a format -> parse round trip exactly
//! - zero steps means zero distance for both stride formulas
//! - non-positive durations give zero speed
//! - the calorie formula rejects rather than clamps bad inputs
//! - walking burns exactly half of running

use chrono::TimeDelta;
use proptest::prelude::*;
use step_tracker::calc::{
    StrideModel, fixed_stride_distance_km, height_stride_distance_km, mean_speed_kmh, running_spent_calories,
    spent_calories, walking_spent_calories,
};
use step_tracker::io::{format_duration, parse_duration, parse_step_record, parse_training_record};
use step_tracker::{ActivityKind, Biometrics, RecordError, StepRecord, TrainingRecord};

// ============================================================================
// Strategies
// ============================================================================

/// Positive durations up to roughly 11 days, at nanosecond resolution.
fn arb_positive_duration() -> impl Strategy<Value = TimeDelta> {
    (1i64..1_000_000_000_000_000).prop_map(TimeDelta::nanoseconds)
}

/// Durations of whole seconds, the common tracker case.
fn arb_whole_seconds() -> impl Strategy<Value = TimeDelta> {
    (1i64..200_000).prop_map(TimeDelta::seconds)
}

fn arb_activity() -> impl Strategy<Value = ActivityKind> {
    prop_oneof![Just(ActivityKind::Walking), Just(ActivityKind::Running)]
}

fn arb_biometrics() -> impl Strategy<Value = Biometrics> {
    (30.0f64..200.0, 0.5f64..250.0).prop_map(|(weight, height)| Biometrics::new(weight, height))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_duration_round_trip(d in arb_positive_duration()) {
        prop_assert_eq!(parse_duration(&format_duration(d)), Ok(d));
        prop_assert_eq!(parse_duration(&format_duration(-d)), Ok(-d));
    }

    #[test]
    fn prop_step_record_round_trip(steps in 1u64..10_000_000, d in arb_whole_seconds()) {
        let record = StepRecord { steps, duration: d };
        prop_assert_eq!(parse_step_record(&record.to_string()), Ok(record));
    }

    #[test]
    fn prop_training_record_round_trip(
        steps in 1u64..10_000_000,
        activity in arb_activity(),
        d in arb_positive_duration(),
    ) {
        let record = TrainingRecord { steps, activity, duration: d };
        prop_assert_eq!(parse_training_record(&record.to_string()), Ok(record));
    }

    #[test]
    fn prop_zero_steps_zero_distance(height in 0.01f64..300.0) {
        prop_assert_eq!(fixed_stride_distance_km(0), 0.0);
        prop_assert_eq!(height_stride_distance_km(0, height), 0.0);
        prop_assert_eq!(StrideModel::HeightDerived { height }.distance_km(0), 0.0);
    }

    #[test]
    fn prop_non_positive_duration_zero_speed(distance in 0.0f64..1000.0, secs in -100_000i64..=0) {
        prop_assert_eq!(mean_speed_kmh(distance, TimeDelta::seconds(secs)), 0.0);
    }

    #[test]
    fn prop_calories_reject_non_positive_inputs(
        activity in arb_activity(),
        bio in arb_biometrics(),
        bad in -100.0f64..=0.0,
        secs in -100_000i64..=0,
    ) {
        let ok_duration = TimeDelta::minutes(30);
        let rejected = |r: Result<f64, RecordError>| matches!(r, Err(RecordError::Validation(_)));

        prop_assert!(rejected(spent_calories(activity, 0, bio, ok_duration)));
        prop_assert!(rejected(spent_calories(activity, 1000, Biometrics::new(bad, bio.height), ok_duration)));
        prop_assert!(rejected(spent_calories(activity, 1000, Biometrics::new(bio.weight, bad), ok_duration)));
        prop_assert!(rejected(spent_calories(activity, 1000, bio, TimeDelta::seconds(secs))));
    }

    #[test]
    fn prop_walking_is_half_of_running(
        steps in 1u64..100_000,
        bio in arb_biometrics(),
        d in arb_whole_seconds(),
    ) {
        let run = running_spent_calories(steps, bio, d).unwrap();
        let walk = walking_spent_calories(steps, bio, d).unwrap();
        prop_assert!(run >= 0.0);
        prop_assert!((walk - run * 0.5).abs() <= 1e-9 * run.max(1.0));
    }
}
