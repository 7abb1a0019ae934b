use std::cmp::Ordering;
use std::marker::PhantomData;

use crate::{BinarySearch, Entry, EntryStore, KeySearcher, SearchIndex};

/// `Vec` backed store. Entries live in one contiguous allocation, located by `S`.
#[derive(Debug)]
pub struct EntryStoreVec<K, V, S: KeySearcher = BinarySearch> {
    entries: Vec<Entry<K, V>>,
    _searcher: PhantomData<S>,
}

impl<K: Clone, V: Clone, S: KeySearcher> Clone for EntryStoreVec<K, V, S> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            _searcher: PhantomData,
        }
    }
}

impl<K, V, S: KeySearcher> Default for EntryStoreVec<K, V, S> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            _searcher: PhantomData,
        }
    }
}

impl<K, V, S: KeySearcher> EntryStoreVec<K, V, S> {
    /// Create a new `EntryStoreVec`
    pub fn new() -> Self {
        Self::default()
    }

    /// Current allocated capacity
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Print entries, used in test only
    #[cfg(test)]
    pub fn print(&self)
    where
        K: std::fmt::Debug,
        V: std::fmt::Debug,
    {
        println!("store len: {} cap: {}", self.entries.len(), self.entries.capacity());
        for (idx, entry) in self.entries.iter().enumerate() {
            println!("  {idx}: {:?} => {:?}", entry.key(), entry.value());
        }
    }
}

impl<K, V, S: KeySearcher> EntryStore for EntryStoreVec<K, V, S> {
    type K = K;
    type V = V;

    fn with_capacity(cap: usize) -> Self {
        Self {
            entries: Vec::with_capacity(cap),
            _searcher: PhantomData,
        }
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline(always)]
    fn get(&self, idx: usize) -> Option<&Entry<K, V>> {
        self.entries.get(idx)
    }

    #[inline(always)]
    fn get_mut(&mut self, idx: usize) -> Option<&mut Entry<K, V>> {
        self.entries.get_mut(idx)
    }

    fn push(&mut self, entry: Entry<K, V>) {
        self.entries.push(entry);
    }

    fn insert_at(&mut self, idx: usize, entry: Entry<K, V>) {
        self.entries.insert(idx, entry);
    }

    fn remove_at(&mut self, idx: usize) -> Entry<K, V> {
        self.entries.remove(idx)
    }

    #[inline]
    fn search_by<F>(&self, cmp: F) -> SearchIndex
    where
        F: FnMut(&Entry<K, V>) -> Ordering,
    {
        S::search(&self.entries, cmp)
    }

    #[inline]
    fn peek_first(&self) -> Option<&Entry<K, V>> {
        self.entries.first()
    }

    #[inline]
    fn peek_last(&self) -> Option<&Entry<K, V>> {
        self.entries.last()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn as_slice(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    fn as_mut_slice(&mut self) -> &mut [Entry<K, V>] {
        &mut self.entries
    }

    fn into_vec(self) -> Vec<Entry<K, V>> {
        self.entries
    }

    #[cfg(test)]
    fn debug(&self)
    where
        K: std::fmt::Debug,
        V: std::fmt::Debug,
    {
        self.print()
    }
}

/// ensure EntryStoreVec is send for send k v
fn _ensure_send<K: Send, V: Send>() {
    fn _assert_send<T: Send>() {}
    _assert_send::<EntryStoreVec<K, V>>();
}
