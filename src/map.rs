//! Insertion-ordered map type for interpolation contexts.
//!
//! [`Map`] wraps [`IndexMap`] so that object fields keep their insertion
//! order. Order matters here: when an object-valued placeholder is rendered
//! as compact JSON, the key order of the output must match the order the
//! context was built in.
//!
//! ## Examples
//!
//! ```rust
//! use ::interpolate::{Map, Value};
//!
//! let mut ctx = Map::new();
//! ctx.insert("name".to_string(), Value::from("Alice"));
//! ctx.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(ctx.len(), 2);
//! assert_eq!(ctx.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::Value;

/// An ordered map of string keys to [`Value`]s.
///
/// Doubles as the interpolation context and as the payload of
/// [`Value::Object`]. Iteration follows insertion order.
///
/// # Examples
///
/// ```rust
/// use ::interpolate::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Map(IndexMap<String, Value>);

impl Map {
    /// Creates an empty `Map`.
    #[must_use]
    pub fn new() -> Self {
        Map(IndexMap::new())
    }

    /// Creates an empty `Map` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Map(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value for the key if
    /// one existed.
    pub fn insert(&mut self, key: String, value: Value) -> Option<Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Resolves a dotted path by successive key lookups.
    ///
    /// Each segment must land on an object to descend further, and the final
    /// value must be defined and non-null. Anything else resolves to `None`:
    /// a missing key, a scalar in an intermediate position, or a null at any
    /// depth.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ::interpolate::{context, Value};
    ///
    /// let ctx = context! {
    ///     "person": { "name": "Alice", "pet": null }
    /// };
    ///
    /// assert_eq!(ctx.lookup("person.name"), Some(&Value::from("Alice")));
    /// assert_eq!(ctx.lookup("person.pet"), None);
    /// assert_eq!(ctx.lookup("person.name.first"), None);
    /// assert_eq!(ctx.lookup("missing"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
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

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }
}

impl From<HashMap<String, Value>> for Map {
    fn from(map: HashMap<String, Value>) -> Self {
        Map(map.into_iter().collect())
    }
}

impl From<Map> for HashMap<String, Value> {
    fn from(map: Map) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Map {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for Map {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        Map(IndexMap::from_iter(iter))
    }
}
