//! Element Attributes
//!
//! Insertion-ordered attribute collection: get, set, remove, has.
//! Iteration order is insertion order, which keeps attribute-keyed rule
//! execution deterministic.

use std::collections::HashMap;

use serde::Serialize;

use crate::AttrValue;

/// Attribute collection for one element.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct AttrMap {
    entries: Vec<(String, AttrValue)>,
    #[serde(skip)]
    by_name: HashMap<String, usize>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attributes, including explicit nulls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an attribute value by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.by_name.get(name).map(|&i| &self.entries[i].1)
    }

    /// Get a string attribute value by name.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// Get a numeric attribute value, coercing string digits.
    pub fn get_num(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(AttrValue::as_num)
    }

    /// Whether the attribute exists at all (a `Null` value counts).
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Truthiness of an attribute; absent attributes are falsy.
    pub fn truthy(&self, name: &str) -> bool {
        self.get(name).is_some_and(AttrValue::is_truthy)
    }

    /// Set an attribute, replacing any existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if let Some(&index) = self.by_name.get(&name) {
            self.entries[index].1 = value;
        } else {
            self.by_name.insert(name.clone(), self.entries.len());
            self.entries.push((name, value));
        }
    }

    /// Builder-style `set`, for literal element construction.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Remove an attribute by name.
    pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
        let index = self.by_name.remove(name)?;
        // Later entries shift down by one.
        for idx in self.by_name.values_mut() {
            if *idx > index {
                *idx -= 1;
            }
        }
        Some(self.entries.remove(index).1)
    }

    /// Iterate attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}
