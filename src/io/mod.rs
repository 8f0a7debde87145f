//! Input decoding.
//!
//! - compound-unit durations (`duration`)
//! - comma-separated step and training records (`ingest`)

pub mod duration;
pub mod ingest;

pub use duration::*;
pub use ingest::*;
