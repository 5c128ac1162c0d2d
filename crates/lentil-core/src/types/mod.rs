//! Core data types for parameter ingestion.
//!
//! This module provides the fundamental types used throughout Lentil:
//! - `Value` for typed parameter values
//! - `Coercion` tags and `CoercionMap` conversion plans

pub mod coercion;
pub mod value;

// Re-export all public types
pub use coercion::{Coercion, CoercionMap};
pub use value::Value;
