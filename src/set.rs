//! Insertion-ordered set of values.

use crate::Value;
use indexmap::IndexSet;

/// An ordered collection of unique [`Value`]s.
///
/// Duplicates are detected with same-value-zero equality and dropped on insert;
/// the first occurrence keeps its position.
///
/// # Examples
///
/// ```rust
/// use serde_annotated::{Value, ValueSet};
///
/// let set: ValueSet = [1, 2, 2, 3].into_iter().map(Value::from).collect();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.to_vec(), vec![Value::from(1), Value::from(2), Value::from(3)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValueSet(IndexSet<Value>);

impl ValueSet {
    /// Creates an empty `ValueSet`.
    #[must_use]
    pub fn new() -> Self {
        ValueSet(IndexSet::new())
    }

    /// Creates an empty `ValueSet` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        ValueSet(IndexSet::with_capacity(capacity))
    }

    /// Adds a value, returning `false` if an equal value was already present.
    pub fn insert(&mut self, value: Value) -> bool {
        self.0.insert(value)
    }

    /// Returns `true` if the set contains an equal value.
    #[must_use]
    pub fn contains(&self, value: &Value) -> bool {
        self.0.contains(value)
    }

    /// Returns the number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the elements, in insertion order.
    pub fn iter(&self) -> indexmap::set::Iter<'_, Value> {
        self.0.iter()
    }

    /// Copies the elements into a vector, in insertion order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.iter().cloned().collect()
    }
}

impl IntoIterator for ValueSet {
    type Item = Value;
    type IntoIter = indexmap::set::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<Value> for ValueSet {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        ValueSet(IndexSet::from_iter(iter))
    }
}
