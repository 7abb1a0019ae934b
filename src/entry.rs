use std::fmt;
use std::hash::{Hash, Hasher};

use crate::DefaultOrder;

/// A key value pair stored in the map.
///
/// The key is fixed once the entry is created, only the value can change. Equality and hash
/// always use the natural order of key and value, regardless of the order the owning map was
/// created with.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Create a new entry
    #[inline]
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replace the value in place, returns the previous one.
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    #[inline]
    pub fn as_pair(&self) -> (&K, &V) {
        (&self.key, &self.value)
    }

    #[inline]
    pub fn as_pair_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Mutable handle to an entry stored in a map.
///
/// Only the value can be changed through it, the entry itself can't be replaced, so the key
/// stays where the map's order put it.
#[derive(Debug)]
pub struct EntryMut<'a, K, V> {
    entry: &'a mut Entry<K, V>,
}

impl<'a, K, V> EntryMut<'a, K, V> {
    #[inline]
    pub(crate) fn new(entry: &'a mut Entry<K, V>) -> Self {
        Self { entry }
    }

    #[inline]
    pub fn key(&self) -> &K {
        &self.entry.key
    }

    #[inline]
    pub fn value(&self) -> &V {
        &self.entry.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.entry.value
    }

    /// Convert into a mutable reference to the value, bound to the map's borrow
    #[inline]
    pub fn into_value_mut(self) -> &'a mut V {
        &mut self.entry.value
    }

    /// Replace the value in place, returns the previous one.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::new();
    /// map.put(1, "one");
    ///
    /// let mut entry = map.get_entry_mut(&1).unwrap();
    /// assert_eq!(entry.set_value("uno"), "one");
    /// assert_eq!(map.get(&1), Some(&"uno"));
    /// ```
    #[inline]
    pub fn set_value(&mut self, value: V) -> V {
        self.entry.set_value(value)
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.value == other.value
    }
}

impl<K: Eq, V: Eq> Eq for Entry<K, V> {}

impl<K: Hash, V: Hash> Hash for Entry<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let index = DefaultOrder.index_of(&self.key) ^ DefaultOrder.index_of(&self.value);
        state.write_u64(index);
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}={})", self.key, self.value)
    }
}
