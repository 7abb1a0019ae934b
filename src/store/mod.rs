use std::cmp::Ordering;

use crate::{Entry, SearchIndex};

mod vec_backed;
pub use vec_backed::*;

/// EntryStore is the storage for the map, responsible for holding entries
/// in sorted order and providing positional access plus the search primitive.
///
/// The store never compares keys by itself, ordering is always supplied by the
/// caller through `search_by`, so the store is free to be order agnostic.
pub trait EntryStore: Default {
    /// Key type
    type K;
    /// Value type
    type V;

    /// Create a store able to hold `cap` entries without reallocating
    fn with_capacity(cap: usize) -> Self;

    /// Number of entries in the store
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a reference to the entry at `idx`
    /// Returns None if idx is out of range
    fn get(&self, idx: usize) -> Option<&Entry<Self::K, Self::V>>;

    /// Get a mut reference to the entry at `idx`
    /// Returns None if idx is out of range
    fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<Self::K, Self::V>>;

    /// Append to the end, caller guarantees the entry sorts after every stored entry
    fn push(&mut self, entry: Entry<Self::K, Self::V>);

    /// Insert at `idx`, shifting later entries right
    /// Panics if idx > len
    fn insert_at(&mut self, idx: usize, entry: Entry<Self::K, Self::V>);

    /// Remove at `idx`, shifting later entries left
    /// Panics if idx >= len
    fn remove_at(&mut self, idx: usize) -> Entry<Self::K, Self::V>;

    /// Search with a comparator which tells how a stored entry compares to the target
    fn search_by<F>(&self, cmp: F) -> SearchIndex
    where
        F: FnMut(&Entry<Self::K, Self::V>) -> Ordering;

    fn peek_first(&self) -> Option<&Entry<Self::K, Self::V>> {
        self.get(0)
    }

    fn peek_last(&self) -> Option<&Entry<Self::K, Self::V>> {
        self.len().checked_sub(1).and_then(|idx| self.get(idx))
    }

    /// Remove all entries
    fn clear(&mut self);

    /// All entries in order
    fn as_slice(&self) -> &[Entry<Self::K, Self::V>];

    /// All entries in order, mutable. Replacing a whole entry can break the
    /// order, callers must only touch values.
    fn as_mut_slice(&mut self) -> &mut [Entry<Self::K, Self::V>];

    /// Consume the store, returns entries in order
    fn into_vec(self) -> Vec<Entry<Self::K, Self::V>>;

    #[cfg(test)]
    fn debug(&self)
    where
        Self::K: std::fmt::Debug,
        Self::V: std::fmt::Debug;
}
