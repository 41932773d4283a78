//! Header property values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator between the values of a multi-valued property.
pub const MULTI_VALUE_SEPARATOR: char = '|';

/// The value of a header property: one string or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    /// A single value
    Scalar(String),
    /// Several values, in assignment order
    List(Vec<String>),
}

impl PropertyValue {
    /// Build a value from raw text, splitting on the multi-value separator.
    pub fn from_raw(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.contains(MULTI_VALUE_SEPARATOR) {
            PropertyValue::List(split_values(raw))
        } else {
            PropertyValue::Scalar(raw.to_string())
        }
    }

    /// Merge a later assignment into this value.
    ///
    /// A scalar followed by anything becomes a list; a list is extended.
    /// The incoming value keeps its own entries, so a `|`-joined value
    /// always contributes one entry per item.
    pub fn coalesce(self, incoming: PropertyValue) -> PropertyValue {
        let mut values = self.into_vec();
        values.extend(incoming.into_vec());
        PropertyValue::List(values)
    }

    /// Check if this is a single value.
    pub fn is_scalar(&self) -> bool {
        matches!(self, PropertyValue::Scalar(_))
    }

    /// Get the single value, if this is a scalar.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            PropertyValue::Scalar(s) => Some(s),
            PropertyValue::List(_) => None,
        }
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        match self {
            PropertyValue::Scalar(_) => 1,
            PropertyValue::List(values) => values.len(),
        }
    }

    /// Check if a list value holds nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values as a slice-like iterator.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            PropertyValue::Scalar(s) => std::slice::from_ref(s),
            PropertyValue::List(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// Convert into an owned list, wrapping a scalar.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            PropertyValue::Scalar(s) => vec![s],
            PropertyValue::List(values) => values,
        }
    }
}

fn split_values(raw: &str) -> Vec<String> {
    raw.split(MULTI_VALUE_SEPARATOR)
        .map(|v| v.trim().to_string())
        .collect()
}

/// Coalescing key → value map of header properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMap {
    entries: BTreeMap<String, PropertyValue>,
}

impl PropertyMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a value, coalescing with any earlier assignment to the same key.
    pub fn assign(&mut self, key: impl Into<String>, value: PropertyValue) {
        let key = key.into();
        let merged = match self.entries.remove(&key) {
            Some(existing) => existing.coalesce(value),
            None => value,
        };
        self.entries.insert(key, merged);
    }

    /// Get a property by key.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.entries.get(key)
    }

    /// Check if a key has been assigned.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no property has been assigned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over properties in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropertyValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
