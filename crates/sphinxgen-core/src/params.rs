//! The flat parameter bag consumed by config renderers.
//!
//! Every configuration artifact (source block, index block, daemon config)
//! is rendered from a [`Params`] bag: a flat mapping from parameter name to
//! a scalar or list [`Value`]. Context builders assemble a bag per call and
//! hand it to a renderer; bags are never cached or reused between calls.
//!
//! # Merge discipline
//!
//! [`Params::merged`] is a shallow, last-write-wins merge that returns a
//! new bag and never mutates the receiver. Base defaults are treated as
//! copy-on-read templates: every synthesis call starts from the same
//! defaults regardless of what earlier calls overrode.
//!
//! ```rust
//! use sphinxgen_core::params::Params;
//!
//! let mut defaults = Params::new();
//! defaults.set("sphinx_port", 3312);
//!
//! let mut overrides = Params::new();
//! overrides.set("sphinx_port", 9312);
//!
//! let merged = defaults.merged(&overrides);
//! assert_eq!(merged.get_int("sphinx_port"), Some(9312));
//! assert_eq!(defaults.get_int("sphinx_port"), Some(3312));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A table paired with its content-type discriminator.
///
/// Used by the multi-model union source: each participating model's rows
/// carry the model's own discriminator so result consumers can recover the
/// originating model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSource {
    /// Database table name.
    pub table: String,
    /// Content-type discriminator value for rows from this table.
    pub content_type: u32,
}

impl TableSource {
    /// Create a new table/discriminator pair.
    pub fn new(table: impl Into<String>, content_type: u32) -> Self {
        Self {
            table: table.into(),
            content_type,
        }
    }
}

/// A single parameter value.
///
/// Parameters are either scalars (strings, integers) or lists (column
/// names, SQL select expressions, union table pairs).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// String scalar.
    Str(String),
    /// Integer scalar.
    Int(i64),
    /// List of strings (field names, category column lists).
    List(Vec<String>),
    /// List of union table/discriminator pairs.
    Tables(Vec<TableSource>),
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u16> for Value {
    fn from(i: u16) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<Vec<String>> for Value {
    fn from(list: Vec<String>) -> Self {
        Value::List(list)
    }
}

impl From<Vec<TableSource>> for Value {
    fn from(tables: Vec<TableSource>) -> Self {
        Value::Tables(tables)
    }
}

/// A flat parameter bag.
///
/// Backed by a `BTreeMap` so iteration order (and therefore rendered
/// output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Params {
    entries: BTreeMap<String, Value>,
}

impl Params {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a parameter by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a string parameter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.entries.get(key) {
            Some(Value::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Look up an integer parameter.
    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.entries.get(key) {
            Some(Value::Int(i)) => Some(*i),
            _ => None,
        }
    }

    /// Look up a list parameter.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        match self.entries.get(key) {
            Some(Value::List(list)) => Some(list),
            _ => None,
        }
    }

    /// Look up a union table-list parameter.
    pub fn get_tables(&self, key: &str) -> Option<&[TableSource]> {
        match self.entries.get(key) {
            Some(Value::Tables(tables)) => Some(tables),
            _ => None,
        }
    }

    /// Append an entry to a list parameter, creating the list if absent.
    pub fn push_list_item(&mut self, key: &str, item: impl Into<String>) {
        match self.entries.get_mut(key) {
            Some(Value::List(list)) => list.push(item.into()),
            _ => {
                self.entries
                    .insert(key.to_string(), Value::List(vec![item.into()]));
            }
        }
    }

    /// Whether a list parameter contains the given entry.
    pub fn list_contains(&self, key: &str, item: &str) -> bool {
        self.get_list(key)
            .map(|list| list.iter().any(|entry| entry == item))
            .unwrap_or(false)
    }

    /// Shallow merge: entries from `overrides` win over entries in `self`.
    ///
    /// Returns a new bag; neither input is mutated.
    #[must_use]
    pub fn merged(&self, overrides: &Params) -> Params {
        let mut entries = self.entries.clone();
        for (key, value) in &overrides.entries {
            entries.insert(key.clone(), value.clone());
        }
        Params { entries }
    }

    /// Number of parameters in the bag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
