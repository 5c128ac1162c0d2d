//! The typed value stored at each parameter key.

use serde::Serialize;
use std::fmt;

/// A parameter value after ingestion.
///
/// Every key starts out as `Raw` text. The coercion engine rewrites the keys
/// named by a conversion plan into one of the typed variants; keys outside
/// the plan stay `Raw`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Unconverted text, exactly as read (trailing whitespace stripped)
    Raw(String),

    /// `", "`-separated tokens, kept as strings
    List(Vec<String>),

    /// A boolean literal
    Bool(bool),

    /// `", "`-separated floating point numbers
    Floats(Vec<f64>),

    /// `", "`-separated integers
    Ints(Vec<i64>),
}

impl Value {
    /// Name of the variant, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Raw(_) => "raw text",
            Value::List(_) => "list",
            Value::Bool(_) => "boolean",
            Value::Floats(_) => "float list",
            Value::Ints(_) => "int list",
        }
    }

    /// Get the raw text, if this value was never coerced
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Value::Raw(text) => Some(text),
            _ => None,
        }
    }

    /// Get the string list, if this value was coerced with `Coercion::List`
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the boolean, if this value was coerced with `Coercion::Boolean`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    /// Get the float list, if this value was coerced with `Coercion::Float`
    pub fn as_floats(&self) -> Option<&[f64]> {
        match self {
            Value::Floats(items) => Some(items),
            _ => None,
        }
    }

    /// Get the int list, if this value was coerced with `Coercion::Int`
    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            Value::Ints(items) => Some(items),
            _ => None,
        }
    }
}

/// Renders the value back to its file text form: sequences re-join with
/// `", "` and booleans use the conventional `True`/`False` tokens, so a
/// rendered value re-parses to itself.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Raw(text) => f.write_str(text),
            Value::List(items) => f.write_str(&items.join(", ")),
            Value::Bool(flag) => f.write_str(if *flag { "True" } else { "False" }),
            Value::Floats(items) => {
                let tokens: Vec<String> = items.iter().map(f64::to_string).collect();
                f.write_str(&tokens.join(", "))
            },
            Value::Ints(items) => {
                let tokens: Vec<String> = items.iter().map(i64::to_string).collect();
                f.write_str(&tokens.join(", "))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_match_variant() {
        let value = Value::Raw("train".to_string());
        assert_eq!(value.as_raw(), Some("train"));
        assert_eq!(value.as_bool(), None);

        let value = Value::Bool(true);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_raw(), None);

        let value = Value::Floats(vec![0.5, 1.0]);
        assert_eq!(value.as_floats(), Some(&[0.5, 1.0][..]));
        assert_eq!(value.as_ints(), None);
    }

    #[test]
    fn test_display_file_form() {
        assert_eq!(Value::Raw("train".to_string()).to_string(), "train");
        assert_eq!(
            Value::List(vec!["a".to_string(), "b".to_string()]).to_string(),
            "a, b"
        );
        assert_eq!(Value::Bool(true).to_string(), "True");
        assert_eq!(Value::Bool(false).to_string(), "False");
        assert_eq!(Value::Floats(vec![0.5, 1.5]).to_string(), "0.5, 1.5");
        assert_eq!(Value::Ints(vec![1, 2, 3]).to_string(), "1, 2, 3");
    }

    #[test]
    fn test_serialize_untagged() {
        let json = serde_json::to_string(&Value::Ints(vec![1, 2])).unwrap();
        assert_eq!(json, "[1,2]");

        let json = serde_json::to_string(&Value::Raw("train".to_string())).unwrap();
        assert_eq!(json, "\"train\"");

        let json = serde_json::to_string(&Value::Bool(false)).unwrap();
        assert_eq!(json, "false");
    }
}
