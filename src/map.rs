//! Ordered property map for calendar components.
//!
//! This module provides [`PropertyMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for property names. Render order is part of the output contract:
//! properties are written in the order they were first inserted, and overwriting a
//! name keeps its original position.
//!
//! ## Examples
//!
//! ```rust
//! use icalgen::PropertyMap;
//!
//! let mut map = PropertyMap::new();
//! map.insert("SUMMARY".to_string(), "Standup".to_string());
//! map.insert("LOCATION".to_string(), "Room 4".to_string());
//! map.insert("SUMMARY".to_string(), "Retro".to_string());
//!
//! let keys: Vec<_> = map.keys().cloned().collect();
//! assert_eq!(keys, vec!["SUMMARY", "LOCATION"]);
//! assert_eq!(map.get("SUMMARY"), Some("Retro"));
//! ```

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

/// An ordered map of property names to encoded property values.
///
/// Keys are stored exactly as given; case normalization is the job of
/// [`Component::set_property`](crate::Component::set_property).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertyMap(IndexMap<String, String>);

impl PropertyMap {
    /// Creates an empty `PropertyMap`.
    #[must_use]
    pub fn new() -> Self {
        PropertyMap(IndexMap::new())
    }

    /// Creates an empty `PropertyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PropertyMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a name-value pair into the map.
    ///
    /// If the map already contained this name, the old value is returned and the
    /// name keeps its position.
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.0.insert(key, value)
    }

    /// Returns the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use icalgen::PropertyMap;
    ///
    /// let mut map: PropertyMap = [("A", "1"), ("B", "2"), ("C", "3")]
    ///     .into_iter()
    ///     .map(|(k, v)| (k.to_string(), v.to_string()))
    ///     .collect();
    /// assert_eq!(map.remove("B"), Some("2".to_string()));
    /// assert_eq!(map.remove("B"), None);
    ///
    /// let keys: Vec<_> = map.keys().cloned().collect();
    /// assert_eq!(keys, vec!["A", "C"]);
    /// ```
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.shift_remove(key)
    }

    /// Keeps only the entries for which `keep` returns `true`, preserving order.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&str, &str) -> bool,
    {
        self.0.retain(|k, v| keep(k, v));
    }

    /// Returns the number of properties in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, String> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, String> {
        self.0.values()
    }

    /// Returns an iterator over the name-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.0.iter()
    }
}

impl Default for PropertyMap {
    fn default() -> Self {
        Self::new()
    }
}

impl From<HashMap<String, String>> for PropertyMap {
    fn from(map: HashMap<String, String>) -> Self {
        PropertyMap(map.into_iter().collect())
    }
}

impl From<PropertyMap> for HashMap<String, String> {
    fn from(map: PropertyMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PropertyMap {
    type Item = (&'a String, &'a String);
    type IntoIter = indexmap::map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        PropertyMap(IndexMap::from_iter(iter))
    }
}
