//! Ordered map type for parsed options.
//!
//! [`OptionMap`] wraps an [`IndexMap`] so that option names come back in the
//! order they were first assigned. With alias propagation enabled, every alias
//! of an option is inserted together, short names first.
//!
//! ## Examples
//!
//! ```rust
//! use get_options::{OptionMap, Value};
//!
//! let mut map = OptionMap::new();
//! map.insert("v".to_string(), Value::Flag);
//! map.insert("verbose".to_string(), Value::Flag);
//!
//! assert_eq!(map.len(), 2);
//! assert!(map.get("verbose").unwrap().is_flag());
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// An insertion-ordered map of option names to their values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionMap(IndexMap<String, Value>);

impl OptionMap {
    /// Creates an empty `OptionMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::OptionMap;
    ///
    /// let map = OptionMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        OptionMap(IndexMap::new())
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{OptionMap, Value};
    ///
    /// let mut map = OptionMap::new();
    /// assert!(map.insert("name".to_string(), Value::from("a")).is_none());
    /// assert!(map.insert("name".to_string(), Value::from("b")).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the key holds a value other than [`Value::Absent`].
    ///
    /// An option whose only parameter never arrived is recorded as `Absent`;
    /// duplicate handling does not treat such an entry as an earlier occurrence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use get_options::{OptionMap, Value};
    ///
    /// let mut map = OptionMap::new();
    /// map.insert("foo".to_string(), Value::Absent);
    /// assert!(map.contains_key("foo"));
    /// assert!(!map.is_set("foo"));
    /// ```
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(|value| !value.is_absent())
    }

    /// Returns `true` if the map contains the key, even if its value is absent.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl Serialize for OptionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in self.0.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl From<OptionMap> for HashMap<String, Value> {
    fn from(map: OptionMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for OptionMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a OptionMap {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for OptionMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        OptionMap(IndexMap::from_iter(iter))
    }
}
