//! The type coercion engine.
//!
//! Rewrites the raw text stored at each key named by a conversion plan into
//! its declared typed shape. Keys outside the plan pass through untouched.

use crate::params::Params;
use crate::ParamsResult;
use lentil_core::error::LentilError;
use lentil_core::{Coercion, CoercionMap, Value};

/// Separator between elements inside a raw list/float/int value
const ELEMENT_SEPARATOR: &str = ", ";

/// Apply a conversion plan to a mapping, rewriting each named key in place.
///
/// Keys are rewritten independently, in plan order; if a later key fails,
/// keys coerced earlier in the same call keep their typed values. A key
/// whose value already has the target shape is left untouched, so applying
/// the same plan twice is a no-op.
pub fn apply(params: &mut Params, plan: &CoercionMap) -> ParamsResult<()> {
    for (key, coercion) in plan {
        let value = params
            .get_mut(key)
            .ok_or_else(|| LentilError::UnknownKey { key: key.clone() })?;

        let raw = match (&*value, coercion) {
            (Value::Raw(text), _) => text.clone(),
            // Already in the target shape: no-op
            (Value::List(_), Coercion::List)
            | (Value::Bool(_), Coercion::Boolean)
            | (Value::Floats(_), Coercion::Float)
            | (Value::Ints(_), Coercion::Int) => continue,
            (other, _) => {
                return Err(LentilError::AlreadyTyped {
                    key: key.clone(),
                    found: other.kind(),
                })
            },
        };

        *value = convert(key, &raw, *coercion)?;
    }

    Ok(())
}

/// Convert one raw value into the requested shape
fn convert(key: &str, raw: &str, coercion: Coercion) -> ParamsResult<Value> {
    match coercion {
        Coercion::List => Ok(Value::List(
            raw.split(ELEMENT_SEPARATOR).map(str::to_string).collect(),
        )),
        Coercion::Boolean => parse_bool(key, raw).map(Value::Bool),
        Coercion::Float => raw
            .split(ELEMENT_SEPARATOR)
            .map(|token| parse_number::<f64>(key, token, "float"))
            .collect::<ParamsResult<Vec<f64>>>()
            .map(Value::Floats),
        Coercion::Int => raw
            .split(ELEMENT_SEPARATOR)
            .map(|token| parse_number::<i64>(key, token, "int"))
            .collect::<ParamsResult<Vec<i64>>>()
            .map(Value::Ints),
    }
}

/// Strict literal matching over a closed token set, case-insensitive.
/// The conventional file tokens are `True`/`False`; nothing else is a
/// boolean, and nothing is ever evaluated.
fn parse_bool(key: &str, raw: &str) -> ParamsResult<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(LentilError::ParseValue {
            key: key.to_string(),
            token: raw.to_string(),
            target: "boolean",
        }),
    }
}

fn parse_number<T: std::str::FromStr>(
    key: &str,
    token: &str,
    target: &'static str,
) -> ParamsResult<T> {
    token.parse().map_err(|_| LentilError::ParseValue {
        key: key.to_string(),
        token: token.to_string(),
        target,
    })
}
