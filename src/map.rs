//! Ordered map types.
//!
//! - [`ObjectMap`]: string keys, the plain-data object
//! - [`KeyedMap`]: keys of any [`Value`] kind, the rich map that needs a
//!   `map:*` annotation to survive plain-data encoding
//!
//! Both wrap [`IndexMap`] so iteration follows insertion order. Key-type
//! inference samples the *first* key of a [`KeyedMap`], so that order matters.
//!
//! ## Examples
//!
//! ```rust
//! use serde_annotated::{KeyedMap, ObjectMap, Value};
//!
//! let mut object = ObjectMap::new();
//! object.insert("name".to_string(), Value::from("Alice"));
//! assert_eq!(object.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! let mut map = KeyedMap::new();
//! map.insert(Value::from(5), Value::from("five"));
//! map.insert(Value::from(10), Value::from("ten"));
//! assert_eq!(map.first_key(), Some(&Value::from(5)));
//! ```

use crate::Value;
use indexmap::IndexMap;

/// An ordered map of string keys to values.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{ObjectMap, Value};
///
/// let mut map = ObjectMap::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMap(IndexMap<String, Value>);

impl ObjectMap {
    /// Creates an empty `ObjectMap`.
    #[must_use]
    pub fn new() -> Self {
        ObjectMap(IndexMap::new())
    }

    /// Creates an empty `ObjectMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ObjectMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and
    /// the key keeps its original position.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
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

impl IntoIterator for ObjectMap {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(String, Value)> for ObjectMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        ObjectMap(IndexMap::from_iter(iter))
    }
}

/// An ordered map whose keys may be any [`Value`].
///
/// Keys are compared with same-value-zero equality (see [`Value`]), so
/// `Value::from(1)` and `Value::from(1.0)` address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyedMap(IndexMap<Value, Value>);

impl KeyedMap {
    /// Creates an empty `KeyedMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyedMap(IndexMap::new())
    }

    /// Creates an empty `KeyedMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyedMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for an equal key.
    pub fn insert(&mut self, key: Value, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &Value) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns the first key in iteration order, the sample used for key-type
    /// inference.
    #[must_use]
    pub fn first_key(&self) -> Option<&Value> {
        self.0.first().map(|(k, _)| k)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Value, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Value, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Value, Value> {
        self.0.iter()
    }
}

impl IntoIterator for KeyedMap {
    type Item = (Value, Value);
    type IntoIter = indexmap::map::IntoIter<Value, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<(Value, Value)> for KeyedMap {
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self {
        KeyedMap(IndexMap::from_iter(iter))
    }
}
