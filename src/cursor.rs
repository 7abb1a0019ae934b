use crate::{EntryStore, Order, SearchIndex, SortedMap};

/// `Cursor` points to an entry in the map. Not like Iterator, it can move to next or prev, and it
/// doesn't borrow the map, so the map can be modified between moves.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<K> {
    /// The key this cursor points to. It is possible the `k` doesn't exist in the map.
    k: K,
    /// The offset this cursor points to. This is a hint, if the underlying map is modified,
    /// then the offset may be invalid. In that case, the cursor will do a search first.
    offset_hint: usize,
}

impl<K: Clone> Cursor<K> {
    /// Create a new cursor
    #[inline(always)]
    pub(crate) fn new(k: K, offset: usize) -> Self {
        Self {
            k,
            offset_hint: offset,
        }
    }

    /// Get the key of the cursor.
    #[inline(always)]
    pub fn key(&self) -> &K {
        &self.k
    }

    /// Create a `Cursor` pointing to the first entry in the map.
    pub fn first<V, O, S>(map: &SortedMap<K, V, O, S>) -> Option<(Self, &V)>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        let entry = map.first_entry()?;
        Some((Self::new(entry.key().clone(), 0), entry.value()))
    }

    /// Create a `Cursor` pointing to the last entry in the map.
    pub fn last<V, O, S>(map: &SortedMap<K, V, O, S>) -> Option<(Self, &V)>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        let entry = map.last_entry()?;
        Some((Self::new(entry.key().clone(), map.len() - 1), entry.value()))
    }

    /// Get the `Cursor` points to the prev entry. If the key for `self` is deleted, then
    /// this returns the cursor for the entry just under the deleted key.
    pub fn prev<V, O, S>(&self, map: &SortedMap<K, V, O, S>) -> Option<Self>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        self.prev_with_value(map).map(|x| x.0)
    }

    /// Get the `Cursor` points to the prev entry, also with a reference to the value.
    /// This is faster than first `prev`, then `value`.
    pub fn prev_with_value<'b, V, O, S>(
        &self,
        map: &'b SortedMap<K, V, O, S>,
    ) -> Option<(Self, &'b V)>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        let offset = self.locate(map).lower()?;
        let entry = map.entries().get(offset)?;
        Some((Self::new(entry.key().clone(), offset), entry.value()))
    }

    /// Get the `Cursor` points to the next entry. If the key for `self` is deleted, then
    /// this returns the cursor for the entry just larger than the deleted key.
    pub fn next<V, O, S>(&self, map: &SortedMap<K, V, O, S>) -> Option<Self>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        self.next_with_value(map).map(|x| x.0)
    }

    /// Get the `Cursor` points to the next entry, also with a reference to the value.
    pub fn next_with_value<'b, V, O, S>(
        &self,
        map: &'b SortedMap<K, V, O, S>,
    ) -> Option<(Self, &'b V)>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        let offset = self.locate(map).higher();
        let entry = map.entries().get(offset)?;
        Some((Self::new(entry.key().clone(), offset), entry.value()))
    }

    /// whether current cursor is still valid
    pub fn exists<V, O, S>(&self, map: &SortedMap<K, V, O, S>) -> bool
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        self.locate(map).is_found()
    }

    /// get the value attached to cursor, if the underlying key is deleted, this returns None
    pub fn value<'b, V, O, S>(&self, map: &'b SortedMap<K, V, O, S>) -> Option<&'b V>
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        let offset = self.locate(map).found()?;
        map.entries().get(offset).map(|e| e.value())
    }

    #[inline]
    fn locate<V, O, S>(&self, map: &SortedMap<K, V, O, S>) -> SearchIndex
    where
        O: Order<K>,
        S: EntryStore<K = K, V = V>,
    {
        if let Some(entry) = map.entries().get(self.offset_hint) {
            if map.order().are_equal(entry.key(), &self.k) {
                return SearchIndex::Found(self.offset_hint);
            }
        }

        // hint outdated, need to do a search by key
        map.search(&self.k)
    }
}
