// Copyright 2026 the Graticule Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Feature attribute values.
//!
//! Rendered features carry named attributes (`"class": "river"`,
//! `"population": 12000.0`). Source and composite functions are keyed on one
//! such attribute. [`AttributeValue`] is the dynamic type those attributes
//! arrive as, and [`FeatureAttributes`] is the name → value mapping a
//! renderer extracts from its feature record before evaluating.
//!
//! Attribute values belong to a [`KeyFamily`]. Stop keys within one
//! collection must share a family, since keys have to be mutually comparable;
//! `Null` belongs to no family and can never match a stop.

use alloc::collections::BTreeMap;
use alloc::string::String;

/// The dynamic type of a feature attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// An attribute that is present but has no value.
    Null,
    /// A boolean attribute.
    Bool(bool),
    /// A numeric attribute. Integers arrive as whole-valued floats.
    Number(f64),
    /// A string attribute.
    String(String),
}

/// The comparison family an [`AttributeValue`] belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyFamily {
    /// Boolean keys, compared by equality.
    Bool,
    /// Numeric keys, ordered and comparable.
    Number,
    /// String keys, compared by equality.
    String,
}

impl AttributeValue {
    /// Returns the family this value belongs to, or `None` for `Null`.
    #[must_use]
    pub fn family(&self) -> Option<KeyFamily> {
        match self {
            Self::Null => None,
            Self::Bool(_) => Some(KeyFamily::Bool),
            Self::Number(_) => Some(KeyFamily::Number),
            Self::String(_) => Some(KeyFamily::String),
        }
    }

    /// Returns the numeric value, if this is a number.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the boolean value, if this is a bool.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string value, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether this is the null value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for AttributeValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for AttributeValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(String::from(value))
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// The attributes of one rendered feature, keyed by attribute name.
///
/// The renderer fills this from its feature record and passes it to
/// [`StyleValue::evaluate`](crate::value::StyleValue::evaluate); the style
/// value looks up the one attribute it is keyed on.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeatureAttributes {
    entries: BTreeMap<String, AttributeValue>,
}

impl FeatureAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, replacing any previous value under `name`.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Removes an attribute, returning its previous value if present.
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.entries.remove(name)
    }

    /// Looks up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.get(name)
    }

    /// The number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<N: Into<String>, V: Into<AttributeValue>> FromIterator<(N, V)> for FeatureAttributes {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.insert(name, value);
        }
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families() {
        assert_eq!(AttributeValue::from(true).family(), Some(KeyFamily::Bool));
        assert_eq!(AttributeValue::from(3.5).family(), Some(KeyFamily::Number));
        assert_eq!(
            AttributeValue::from("river").family(),
            Some(KeyFamily::String)
        );
        assert_eq!(AttributeValue::Null.family(), None);
    }

    #[test]
    fn integer_conversions_are_numbers() {
        assert_eq!(AttributeValue::from(7_i32).as_number(), Some(7.0));
        assert_eq!(AttributeValue::from(7_u32).as_number(), Some(7.0));
    }

    #[test]
    fn accessors_reject_other_families() {
        let s = AttributeValue::from("river");
        assert_eq!(s.as_number(), None);
        assert_eq!(s.as_bool(), None);
        assert_eq!(s.as_str(), Some("river"));
    }

    #[test]
    fn insert_and_get() {
        let mut attrs = FeatureAttributes::new();
        attrs.insert("class", "river");
        attrs.insert("width", 4.0);
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("class"), Some(&AttributeValue::from("river")));
        assert_eq!(attrs.get("width"), Some(&AttributeValue::Number(4.0)));
        assert_eq!(attrs.get("missing"), None);
    }

    #[test]
    fn insert_replaces() {
        let mut attrs = FeatureAttributes::new();
        attrs.insert("class", "river");
        attrs.insert("class", "road");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs.get("class"), Some(&AttributeValue::from("road")));
    }

    #[test]
    fn from_iterator() {
        let attrs: FeatureAttributes = [("class", "river"), ("name", "Rhine")]
            .into_iter()
            .collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs.get("name"), Some(&AttributeValue::from("Rhine")));
    }
}
