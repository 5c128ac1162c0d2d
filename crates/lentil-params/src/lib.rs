//! Parameter file ingestion for Lentil pipelines
//!
//! This crate turns line-oriented parameter files (one `<key><separator><value>`
//! entry per line) into a typed, insertion-ordered mapping, with
//! caller-directed re-typing of selected keys.

pub mod coerce;
pub mod file;
pub mod params;

// Re-export main types
pub use file::{lines_of, read_params};
pub use params::Params;

use lentil_core::error::LentilError;

/// Result type for parameter ingestion operations
pub type ParamsResult<T> = Result<T, LentilError>;
