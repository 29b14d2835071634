//! Array-backed associative array with linear-scan lookup.
//!
//! [`AssociativeArray`] stores key/value [`Entry`] pairs in insertion order
//! inside a growable vector. Lookups compare keys by value equality and scan
//! every live entry, so `get`/`set`/`remove` are O(n). That is a known
//! limitation: the board only ever holds a handful of pictograms per category,
//! and scanning a short contiguous vector beats hashing at that size.
//!
//! Removal is a swap-remove: the last entry moves into the vacated slot. It is
//! O(1) once the key is found, but callers must not rely on entry order after
//! any removal.

use std::borrow::Borrow;
use std::fmt;

use crate::error::{ContainerError, ContainerResult};

/// Capacity of a freshly created array.
pub const DEFAULT_CAPACITY: usize = 16;

/// A single key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// Ordered key/value store with unique keys.
///
/// The logical capacity starts at [`DEFAULT_CAPACITY`] and doubles whenever an
/// insertion finds it exhausted. It never shrinks.
#[derive(Debug, Clone)]
pub struct AssociativeArray<K, V> {
    entries: Vec<Entry<K, V>>,
    capacity: usize,
}

impl<K, V> AssociativeArray<K, V> {
    /// Create an empty array with the default capacity.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(DEFAULT_CAPACITY),
            capacity: DEFAULT_CAPACITY,
        }
    }

    /// Number of live entries (the `size` of the array).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the array holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries the array can hold before it next grows.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate over `(key, value)` pairs in internal order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    /// Snapshot of the keys in internal order.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.entries.iter().map(|e| e.key.clone()).collect()
    }

    /// Snapshot of the values in internal order.
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    /// Set the value for `key`, overwriting in place if the key is present.
    ///
    /// Accepts either a key or an `Option` of one; `None` is rejected with
    /// [`ContainerError::NullKey`]. New keys are appended after all existing
    /// entries, doubling the capacity first if it is exhausted.
    pub fn set(&mut self, key: impl Into<Option<K>>, value: V) -> ContainerResult<()>
    where
        K: PartialEq,
    {
        let key = key.into().ok_or(ContainerError::NullKey)?;
        self.insert(key, value);
        Ok(())
    }

    /// Set the value for a concrete key. Same placement rules as `set`.
    pub(crate) fn insert(&mut self, key: K, value: V)
    where
        K: PartialEq,
    {
        match self.find(&key) {
            Some(index) => self.entries[index].value = value,
            None => {
                if self.entries.len() >= self.capacity {
                    self.expand();
                }
                self.entries.push(Entry { key, value });
            }
        }
    }

    /// Get the value associated with `key`.
    pub fn get<Q>(&self, key: &Q) -> ContainerResult<&V>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        match self.find(key) {
            Some(index) => Ok(&self.entries[index].value),
            None => Err(not_found(key)),
        }
    }

    /// Get a mutable reference to the value associated with `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> ContainerResult<&mut V>
    where
        K: Borrow<Q>,
        Q: PartialEq + fmt::Debug + ?Sized,
    {
        match self.find(key) {
            Some(index) => Ok(&mut self.entries[index].value),
            None => Err(not_found(key)),
        }
    }

    /// Whether a subsequent `get(key)` would succeed. Never fails.
    pub fn has_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Remove `key`, returning its value. Absent keys are a no-op.
    ///
    /// The last entry is moved into the removed slot, so the relative order of
    /// the remaining entries is not preserved.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let index = self.find(key)?;
        Some(self.entries.swap_remove(index).value)
    }

    /// Index of the entry holding `key`, scanning live entries front to back.
    fn find<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.entries.iter().position(|e| e.key.borrow() == key)
    }

    fn expand(&mut self) {
        let target = self.capacity * 2;
        self.entries.reserve_exact(target - self.entries.len());
        self.capacity = target;
    }
}

fn not_found<Q: fmt::Debug + ?Sized>(key: &Q) -> ContainerError {
    ContainerError::KeyNotFound {
        key: format!("{key:?}"),
    }
}

impl<K, V> Default for AssociativeArray<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for AssociativeArray<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut array = Self::new();
        for (key, value) in iter {
            array.insert(key, value);
        }
        array
    }
}

/// Renders `{k0:v0, k1:v1}` in internal order.
impl<K: fmt::Display, V: fmt::Display> fmt::Display for AssociativeArray<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entry}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(pairs: &[(&str, &str)]) -> AssociativeArray<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn missing_key_is_absent_and_get_fails() {
        let arr = strings(&[("a", "1")]);
        assert!(!arr.has_key("b"));
        let err = arr.get("b").unwrap_err();
        assert!(matches!(err, ContainerError::KeyNotFound { .. }));
        assert!(format!("{err}").contains("\"b\""));
    }

    #[test]
    fn set_then_get() {
        let mut arr: AssociativeArray<String, i32> = AssociativeArray::new();
        arr.set("food".to_string(), 3).unwrap();
        assert_eq!(*arr.get("food").unwrap(), 3);
        assert!(arr.has_key("food"));
        assert_eq!(arr.len(), 1);
    }

    #[test]
    fn overwrite_keeps_size_and_position() {
        let mut arr = strings(&[("a", "1"), ("b", "2"), ("c", "3")]);
        arr.set("b".to_string(), "two".to_string()).unwrap();
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.get("b").unwrap(), "two");
        assert_eq!(arr.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn null_key_is_rejected() {
        let mut arr: AssociativeArray<String, i32> = AssociativeArray::new();
        let err = arr.set(None, 1).unwrap_err();
        assert!(matches!(err, ContainerError::NullKey));
        assert!(arr.is_empty());
    }

    #[test]
    fn insert_appends_and_overwrites_like_set() {
        let mut arr: AssociativeArray<String, i32> = AssociativeArray::new();
        arr.insert("a".to_string(), 1);
        arr.insert("b".to_string(), 2);
        arr.insert("a".to_string(), 10);
        assert_eq!(arr.keys(), vec!["a", "b"]);
        assert_eq!(arr.values(), vec![10, 2]);
    }

    #[test]
    fn optional_key_is_accepted() {
        let mut arr: AssociativeArray<String, i32> = AssociativeArray::new();
        arr.set(Some("x".to_string()), 1).unwrap();
        assert_eq!(*arr.get("x").unwrap(), 1);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut arr = strings(&[("a", "1"), ("b", "2")]);
        assert_eq!(arr.remove("zzz"), None);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.keys(), vec!["a", "b"]);
    }

    #[test]
    fn remove_swaps_last_entry_into_slot() {
        let mut arr = strings(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]);
        assert_eq!(arr.remove("b").as_deref(), Some("2"));
        assert_eq!(arr.len(), 3);
        assert!(!arr.has_key("b"));
        assert_eq!(arr.keys(), vec!["a", "d", "c"]);
        assert_eq!(arr.values(), vec!["1", "4", "3"]);
    }

    #[test]
    fn remove_last_entry() {
        let mut arr = strings(&[("a", "1"), ("b", "2")]);
        arr.remove("b");
        assert_eq!(arr.keys(), vec!["a"]);
        arr.remove("a");
        assert!(arr.is_empty());
        assert!(arr.keys().is_empty());
    }

    #[test]
    fn grows_past_default_capacity() {
        let mut arr: AssociativeArray<i32, i32> = AssociativeArray::new();
        assert_eq!(arr.capacity(), DEFAULT_CAPACITY);
        for i in 0..100 {
            arr.set(i, i * 10).unwrap();
        }
        assert_eq!(arr.len(), 100);
        assert_eq!(arr.capacity(), 128);
        for i in 0..100 {
            assert_eq!(*arr.get(&i).unwrap(), i * 10);
        }
        assert_eq!(arr.keys(), (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn capacity_doubles_only_when_exhausted() {
        let mut arr: AssociativeArray<usize, ()> = AssociativeArray::new();
        for i in 0..DEFAULT_CAPACITY {
            arr.set(i, ()).unwrap();
        }
        assert_eq!(arr.capacity(), DEFAULT_CAPACITY);
        arr.set(DEFAULT_CAPACITY, ()).unwrap();
        assert_eq!(arr.capacity(), DEFAULT_CAPACITY * 2);

        // Overwrites never grow.
        arr.set(0, ()).unwrap();
        assert_eq!(arr.capacity(), DEFAULT_CAPACITY * 2);
    }

    #[test]
    fn clone_is_independent() {
        let original = strings(&[("a", "1"), ("b", "2")]);
        let mut copy = original.clone();
        copy.set("a".to_string(), "changed".to_string()).unwrap();
        copy.remove("b");
        copy.set("c".to_string(), "3".to_string()).unwrap();

        assert_eq!(original.get("a").unwrap(), "1");
        assert!(original.has_key("b"));
        assert!(!original.has_key("c"));
        assert_eq!(copy.keys(), vec!["a", "c"]);
    }

    #[test]
    fn clone_keeps_growing_correctly() {
        let mut arr: AssociativeArray<i32, i32> = AssociativeArray::new();
        for i in 0..20 {
            arr.set(i, i).unwrap();
        }
        let mut copy = arr.clone();
        for i in 20..40 {
            copy.set(i, i).unwrap();
        }
        assert_eq!(copy.len(), 40);
        assert_eq!(copy.capacity(), 64);
        assert_eq!(arr.len(), 20);
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arr: AssociativeArray<String, i32> = AssociativeArray::new();
        arr.set("n".to_string(), 1).unwrap();
        *arr.get_mut("n").unwrap() += 41;
        assert_eq!(*arr.get("n").unwrap(), 42);
        assert!(arr.get_mut("missing").is_err());
    }

    #[test]
    fn display_lists_entries_in_order() {
        let arr = strings(&[("img/a.png", "apple"), ("img/b.png", "banana")]);
        assert_eq!(arr.to_string(), "{img/a.png:apple, img/b.png:banana}");
        let empty: AssociativeArray<String, String> = AssociativeArray::default();
        assert_eq!(empty.to_string(), "{}");
    }
}
