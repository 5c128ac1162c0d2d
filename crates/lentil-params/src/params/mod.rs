//! The insertion-ordered parameter mapping.

use indexmap::IndexMap;
use lentil_core::Value;
use serde::Serialize;

/// The structured result of ingesting a parameter file.
///
/// Keys keep the position of their first insertion; re-inserting an existing
/// key overwrites its value in place. A mapping is created fresh by each read
/// call and handed to the caller, which owns it outright afterwards.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: IndexMap<String, Value>,
}

impl Params {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }

    /// Insert a value, overwriting any earlier value stored at `key`
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.values.insert(key, value)
    }

    /// Look up a key.
    ///
    /// Returns `None` when the key is absent. "Not configured" is a normal,
    /// expected outcome for optional parameters, never an error.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Mutable lookup, used by the coercion engine to rewrite values in place
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.values.get_mut(key)
    }

    /// Whether a key is defined
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the mapping holds no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Encode the mapping back into `<key><separator><value>` lines.
    ///
    /// Entries come out in insertion order, one line each, using every
    /// value's file text form. Re-parsing a rendering of a raw-string
    /// mapping yields the original mapping.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for (key, value) in &self.values {
            out.push_str(key);
            out.push_str(separator);
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out
    }
}
