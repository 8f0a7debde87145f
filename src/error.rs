//! Error types.
//!
//! - `RecordError` is what the library returns: one variant per failure class,
//!   so callers can branch on the kind instead of matching on message text.
//! - `AppError` is what the `tracker` binary exits with (message + exit code).

use thiserror::Error;

use crate::domain::RecordField;

/// Result alias used by the parsing and calculation layers.
pub type RecordResult<T> = Result<T, RecordError>;

/// Why a record could not be turned into a report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// Wrong number of comma-separated fields.
    #[error("invalid record format: expected {expected}, got {found} field(s)")]
    Format {
        /// Human-readable shape of the expected record.
        expected: &'static str,
        found: usize,
    },

    /// A field is present but cannot be decoded as its primitive type.
    #[error("failed to parse {field}: {reason}")]
    Parse { field: RecordField, reason: String },

    /// A decoded value violates a domain constraint.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The activity token is not one of the recognised kinds.
    #[error("unknown activity kind: {0}")]
    UnknownActivity(String),
}

impl RecordError {
    pub(crate) fn parse(field: RecordField, reason: impl Into<String>) -> Self {
        RecordError::Parse {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        RecordError::Validation(message.into())
    }

    /// Process exit code used by the binary for this error class.
    pub fn exit_code(&self) -> u8 {
        match self {
            RecordError::Format { .. } | RecordError::Parse { .. } => 2,
            RecordError::Validation(_) | RecordError::UnknownActivity(_) => 3,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<RecordError> for AppError {
    fn from(err: RecordError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
