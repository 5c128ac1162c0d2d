//! Conversion tags and plans.
//!
//! A conversion plan names the parameter keys whose raw text should be
//! re-typed after reading, and which shape each one gets. Tags are a closed
//! set: anything else is rejected when the plan is built, never silently
//! passed through.

use crate::error::LentilError;
use indexmap::IndexMap;
use std::fmt;
use std::str::FromStr;

/// Target shape for a single parameter key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coercion {
    /// Split the raw text on `", "` into a list of strings
    List,

    /// Interpret the raw text as a boolean literal
    Boolean,

    /// Split on `", "` and parse every token as a float
    Float,

    /// Split on `", "` and parse every token as an integer
    Int,
}

/// A conversion plan: key name to target shape, in insertion order.
///
/// The plan is supplied once at call time and never mutated by the
/// ingestion subsystem.
pub type CoercionMap = IndexMap<String, Coercion>;

impl Coercion {
    /// The tag this coercion is written as in call-site configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Coercion::List => "list",
            Coercion::Boolean => "boolean",
            Coercion::Float => "float",
            Coercion::Int => "int",
        }
    }
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Coercion {
    type Err = LentilError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "list" => Ok(Coercion::List),
            "boolean" => Ok(Coercion::Boolean),
            "float" => Ok(Coercion::Float),
            "int" => Ok(Coercion::Int),
            _ => Err(LentilError::UnknownCoercion {
                tag: tag.to_string(),
            }),
        }
    }
}
