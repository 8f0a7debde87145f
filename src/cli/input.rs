//! Reading a record line from stdin when none is given on the command line.

use std::io::{self, BufRead};

use crate::error::AppError;

/// Use `record` if present, otherwise read one line from `reader`.
///
/// The trailing line terminator is stripped; nothing else is trimmed, so
/// stray spaces still reach the parser and are reported there.
pub fn record_or_line<R: BufRead>(record: Option<String>, reader: &mut R) -> Result<String, AppError> {
    if let Some(record) = record {
        return Ok(record);
    }

    let mut line = String::new();
    let bytes = reader
        .read_line(&mut line)
        .map_err(|e| AppError::new(4, format!("Failed to read record from stdin: {e}")))?;
    if bytes == 0 {
        return Err(AppError::new(
            2,
            "No record received. Pass one as an argument, e.g. `tracker day 6000,45m0s`.",
        ));
    }

    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

/// [`record_or_line`] over the process stdin.
pub fn record_or_stdin(record: Option<String>) -> Result<String, AppError> {
    record_or_line(record, &mut io::stdin().lock())
}
