//! Reporting: fixed-template text summaries and JSON views.

pub mod format;
pub mod json;

pub use format::*;
pub use json::*;
