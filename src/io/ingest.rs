//! Record decoding and validation.
//!
//! This module turns one comma-separated input line into a validated record.
//! No arithmetic happens here: calculators only ever see decoded values.
//!
//! Checks run in a fixed order and stop at the first failure:
//! field count, steps, duration, then (training records only) activity kind.

use chrono::TimeDelta;

use crate::domain::{ActivityKind, RecordField, StepRecord, TrainingRecord};
use crate::error::{RecordError, RecordResult};
use crate::io::duration::parse_duration;

const FIELD_SEPARATOR: char = ',';
const STEP_RECORD_SHAPE: &str = "<steps>,<duration>";
const TRAINING_RECORD_SHAPE: &str = "<steps>,<activity>,<duration>";

/// Decode a daily-steps line: `<steps>,<duration>`.
///
/// A zero or negative duration is accepted here; the calorie calculation
/// rejects it.
pub fn parse_step_record(data: &str) -> RecordResult<StepRecord> {
    let fields = split_fields(data, 2, STEP_RECORD_SHAPE)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration_field(fields[1])?;

    Ok(StepRecord { steps, duration })
}

/// Decode a training line: `<steps>,<activity>,<duration>`.
///
/// Unlike [`parse_step_record`], the duration must be strictly positive.
pub fn parse_training_record(data: &str) -> RecordResult<TrainingRecord> {
    let fields = split_fields(data, 3, TRAINING_RECORD_SHAPE)?;

    let steps = parse_steps(fields[0])?;
    let duration = parse_duration_field(fields[2])?;
    if duration <= TimeDelta::zero() {
        return Err(RecordError::validation("duration must be greater than zero"));
    }
    let activity: ActivityKind = fields[1].parse()?;

    Ok(TrainingRecord {
        steps,
        activity,
        duration,
    })
}

fn split_fields<'a>(
    data: &'a str,
    expected_len: usize,
    shape: &'static str,
) -> RecordResult<Vec<&'a str>> {
    let fields: Vec<&str> = data.split(FIELD_SEPARATOR).collect();
    if fields.len() != expected_len {
        return Err(RecordError::Format {
            expected: shape,
            found: fields.len(),
        });
    }
    Ok(fields)
}

fn parse_steps(raw: &str) -> RecordResult<u64> {
    let steps: i64 = raw
        .parse()
        .map_err(|e| RecordError::parse(RecordField::Steps, format!("`{raw}`: {e}")))?;
    if steps <= 0 {
        return Err(RecordError::validation("steps must be greater than zero"));
    }
    // Positive i64 always fits.
    Ok(steps.unsigned_abs())
}

fn parse_duration_field(raw: &str) -> RecordResult<TimeDelta> {
    parse_duration(raw).map_err(|e| RecordError::parse(RecordField::Duration, format!("`{raw}`: {e}")))
}
