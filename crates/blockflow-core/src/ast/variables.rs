//! Variable bindings
//!
//! Variables are supplied by the caller as raw text and only coerced when a
//! conditional block asks for them.

use crate::error::{CoreError, Result};
use crate::types::{CoercionMode, Value};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Named raw-text variable bindings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Variables(HashMap<String, String>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, replacing any previous binding of the same name
    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.0.insert(name.into(), raw.into());
    }

    /// Builder-style [`Variables::insert`]
    pub fn with(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    /// The raw text bound to `name`
    pub fn get_raw(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Look up `name` and coerce its raw text with `mode`
    pub fn resolve(&self, name: &str, mode: CoercionMode) -> Result<Value> {
        let raw = self
            .get_raw(name)
            .ok_or_else(|| CoreError::VariableNotFound(name.to_string()))?;
        let value = mode.coerce(raw);
        log::trace!("Resolved variable '{}' as {}", name, value.type_name());
        Ok(value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for Variables {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Variables {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
