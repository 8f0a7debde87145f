//! Compound-unit duration codec.
//!
//! Grammar (whitespace is not allowed anywhere):
//!
//! ```text
//! duration  := sign? ( "0" | component+ )
//! sign      := "+" | "-"
//! component := number unit
//! number    := digits ( "." digits? )? | "." digits
//! unit      := "h" | "m" | "s" | "ms" | "us" | "µs" | "μs" | "ns"
//! ```
//!
//! Values are accumulated as whole nanoseconds and must fit a signed 64-bit
//! count. Fractions below one nanosecond are truncated.

use chrono::TimeDelta;
use thiserror::Error;

const NANOS_PER_MICRO: u128 = 1_000;
const NANOS_PER_MILLI: u128 = 1_000_000;
const NANOS_PER_SECOND: u128 = 1_000_000_000;
const NANOS_PER_MINUTE: u128 = 60 * NANOS_PER_SECOND;
const NANOS_PER_HOUR: u128 = 60 * NANOS_PER_MINUTE;

/// Fraction digits beyond this many cannot change a nanosecond total.
const MAX_FRACTION_DIGITS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,
    #[error("expected a number at `{0}`")]
    MissingNumber(String),
    #[error("missing unit after `{0}`")]
    MissingUnit(String),
    #[error("unknown unit `{0}`")]
    UnknownUnit(String),
    #[error("duration out of range")]
    Overflow,
}

/// Parse a duration such as `45m`, `1h30m`, `90s` or `1.5h`.
pub fn parse_duration(input: &str) -> Result<TimeDelta, DurationError> {
    let (negative, body) = if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    };

    if body == "0" {
        return Ok(TimeDelta::zero());
    }
    if body.is_empty() {
        return Err(DurationError::Empty);
    }

    let mut scanner = Scanner { rest: body };
    let mut total: u128 = 0;
    while !scanner.rest.is_empty() {
        let nanos = scanner.component()?;
        total = total.checked_add(nanos).ok_or(DurationError::Overflow)?;
    }

    // i64::MIN has one more unit of magnitude than i64::MAX.
    let limit = if negative {
        i64::MAX as u128 + 1
    } else {
        i64::MAX as u128
    };
    if total > limit {
        return Err(DurationError::Overflow);
    }

    let signed = if negative {
        -(total as i128)
    } else {
        total as i128
    };
    let nanos = i64::try_from(signed).map_err(|_| DurationError::Overflow)?;
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Render a duration in the canonical form accepted by [`parse_duration`].
///
/// `45m0s`, `1h30m0s`, `1.5s`, `250ms`, `0s`.
pub fn format_duration(duration: TimeDelta) -> String {
    let nanos = i128::from(duration.num_seconds()) * NANOS_PER_SECOND as i128
        + i128::from(duration.subsec_nanos());
    let sign = if nanos < 0 { "-" } else { "" };
    let magnitude = nanos.unsigned_abs();

    if magnitude == 0 {
        return "0s".to_string();
    }
    if magnitude < NANOS_PER_MICRO {
        return format!("{sign}{magnitude}ns");
    }
    if magnitude < NANOS_PER_MILLI {
        return format!("{sign}{}µs", fixed_point(magnitude, 3));
    }
    if magnitude < NANOS_PER_SECOND {
        return format!("{sign}{}ms", fixed_point(magnitude, 6));
    }

    let hours = magnitude / NANOS_PER_HOUR;
    let minutes = (magnitude % NANOS_PER_HOUR) / NANOS_PER_MINUTE;
    let seconds = magnitude % NANOS_PER_MINUTE;

    let mut out = String::from(sign);
    if hours > 0 {
        out.push_str(&format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        out.push_str(&format!("{minutes}m"));
    }
    out.push_str(&fixed_point(seconds, 9));
    out.push('s');
    out
}

/// `value / 10^precision` printed without trailing fractional zeros.
fn fixed_point(value: u128, precision: u32) -> String {
    let scale = 10u128.pow(precision);
    let whole = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return whole.to_string();
    }
    let digits = format!("{fraction:0width$}", width = precision as usize);
    format!("{whole}.{}", digits.trim_end_matches('0'))
}

struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    /// One `<number><unit>` pair, in nanoseconds.
    fn component(&mut self) -> Result<u128, DurationError> {
        let at = self.rest;
        let whole = self.take_while(|c| c.is_ascii_digit());
        let fraction = if let Some(after_dot) = self.rest.strip_prefix('.') {
            self.rest = after_dot;
            Some(self.take_while(|c| c.is_ascii_digit()))
        } else {
            None
        };

        if whole.is_empty() && fraction.is_none_or(str::is_empty) {
            return Err(DurationError::MissingNumber(at.to_string()));
        }

        let unit = self.take_while(|c| c != '.' && !c.is_ascii_digit());
        if unit.is_empty() {
            let consumed = &at[..at.len() - self.rest.len()];
            return Err(DurationError::MissingUnit(consumed.to_string()));
        }
        let per_unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit(unit.to_string()))?;

        let mut nanos = digits_value(whole)?
            .checked_mul(per_unit)
            .ok_or(DurationError::Overflow)?;

        if let Some(fraction) = fraction {
            let fraction = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
            if !fraction.is_empty() {
                let scale = 10u128.pow(fraction.len() as u32);
                nanos = nanos
                    .checked_add(digits_value(fraction)? * per_unit / scale)
                    .ok_or(DurationError::Overflow)?;
            }
        }

        Ok(nanos)
    }

    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(self.rest.len(), |(idx, _)| idx);
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

fn digits_value(digits: &str) -> Result<u128, DurationError> {
    digits.bytes().try_fold(0u128, |acc, b| {
        acc.checked_mul(10)
            .and_then(|acc| acc.checked_add(u128::from(b - b'0')))
            .ok_or(DurationError::Overflow)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_units() {
        assert_eq!(parse_duration("45m"), Ok(TimeDelta::minutes(45)));
        assert_eq!(parse_duration("45m0s"), Ok(TimeDelta::minutes(45)));
        assert_eq!(parse_duration("1h30m"), Ok(TimeDelta::minutes(90)));
        assert_eq!(parse_duration("90s"), Ok(TimeDelta::seconds(90)));
        assert_eq!(parse_duration("1h1h"), Ok(TimeDelta::hours(2)));
    }

    #[test]
    fn parses_fractions_and_small_units() {
        assert_eq!(parse_duration("1.5h"), Ok(TimeDelta::minutes(90)));
        assert_eq!(parse_duration(".5s"), Ok(TimeDelta::milliseconds(500)));
        assert_eq!(parse_duration("1.s"), Ok(TimeDelta::seconds(1)));
        assert_eq!(parse_duration("250ms"), Ok(TimeDelta::milliseconds(250)));
        assert_eq!(parse_duration("3us"), Ok(TimeDelta::microseconds(3)));
        assert_eq!(parse_duration("3µs"), Ok(TimeDelta::microseconds(3)));
        assert_eq!(parse_duration("7ns"), Ok(TimeDelta::nanoseconds(7)));
    }

    #[test]
    fn parses_sign_and_bare_zero() {
        assert_eq!(parse_duration("0"), Ok(TimeDelta::zero()));
        assert_eq!(parse_duration("-0"), Ok(TimeDelta::zero()));
        assert_eq!(parse_duration("-45m"), Ok(TimeDelta::minutes(-45)));
        assert_eq!(parse_duration("+10s"), Ok(TimeDelta::seconds(10)));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_duration(""), Err(DurationError::Empty));
        assert_eq!(parse_duration("-"), Err(DurationError::Empty));
        assert_eq!(parse_duration("45"), Err(DurationError::MissingUnit("45".to_string())));
        assert_eq!(
            parse_duration("45m10"),
            Err(DurationError::MissingUnit("10".to_string()))
        );
        assert_eq!(parse_duration("h"), Err(DurationError::MissingNumber("h".to_string())));
        assert_eq!(parse_duration("."), Err(DurationError::MissingNumber(".".to_string())));
        assert_eq!(parse_duration("10d"), Err(DurationError::UnknownUnit("d".to_string())));
        assert_eq!(
            parse_duration("45m "),
            Err(DurationError::UnknownUnit("m ".to_string()))
        );
        assert_eq!(
            parse_duration("10mins"),
            Err(DurationError::UnknownUnit("mins".to_string()))
        );
    }

    #[test]
    fn rejects_values_beyond_i64_nanoseconds() {
        assert_eq!(parse_duration("9223372036854775807ns"), Ok(TimeDelta::nanoseconds(i64::MAX)));
        assert_eq!(parse_duration("9223372036854775808ns"), Err(DurationError::Overflow));
        assert_eq!(parse_duration("-9223372036854775808ns"), Ok(TimeDelta::nanoseconds(i64::MIN)));
        assert_eq!(parse_duration("3000000h"), Err(DurationError::Overflow));
        assert_eq!(
            parse_duration("99999999999999999999999999999999999999999h"),
            Err(DurationError::Overflow)
        );
    }

    #[test]
    fn formats_canonically() {
        assert_eq!(format_duration(TimeDelta::zero()), "0s");
        assert_eq!(format_duration(TimeDelta::minutes(45)), "45m0s");
        assert_eq!(format_duration(TimeDelta::minutes(90)), "1h30m0s");
        assert_eq!(format_duration(TimeDelta::hours(2)), "2h0m0s");
        assert_eq!(format_duration(TimeDelta::milliseconds(1500)), "1.5s");
        assert_eq!(format_duration(TimeDelta::milliseconds(250)), "250ms");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.5ms");
        assert_eq!(format_duration(TimeDelta::nanoseconds(1500)), "1.5µs");
        assert_eq!(format_duration(TimeDelta::nanoseconds(7)), "7ns");
        assert_eq!(format_duration(TimeDelta::seconds(-90)), "-1m30s");
    }

    #[test]
    fn formatted_output_parses_back() {
        for nanos in [1, 999, 1_000, 1_234_567, 999_999_999, 1_000_000_001, 5_400_000_000_000] {
            let d = TimeDelta::nanoseconds(nanos);
            assert_eq!(parse_duration(&format_duration(d)), Ok(d), "nanos={nanos}");
        }
    }
}
