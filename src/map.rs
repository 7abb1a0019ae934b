use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::{
    iterator::{IntoIter, Iter, IterMut, Keys, Values},
    Cursor, DefaultOrder, Entry, EntryComparator, EntryMut, EntryStore, EntryStoreVec, Order,
    Probe, SearchIndex,
};

/// Sorted map backed by a single contiguous sequence of entries, located by binary search.
///
/// Compared to a tree, lookups and ordered navigation touch one allocation only, while inserts
/// and removes pay for shifting the entries after the touched position.
///
/// # Example
/// ```rust
/// use sorted_entry_map::SortedMap;
///
/// let mut map = SortedMap::new();
///
/// // insert new value
/// assert!(map.put(3, "c").is_none());
/// map.put(1, "a");
/// map.put(5, "e");
///
/// // update by put again
/// assert_eq!(map.put(3, "C"), Some("c"));
///
/// // navigate
/// assert_eq!(map.higher_entry(&3).unwrap().key(), &5);
/// assert_eq!(map.floor_entry(&2).unwrap().key(), &1);
///
/// // remove the value
/// assert_eq!(map.remove(&3), Some("C"));
/// assert_eq!(map.len(), 2);
/// ```
pub struct SortedMap<K, V, O = DefaultOrder, S = EntryStoreVec<K, V>> {
    comparator: EntryComparator<O>,
    store: S,
    st: Statistic,
    _kv: PhantomData<(K, V)>,
}

impl<K: Ord, V> SortedMap<K, V> {
    /// Create a new map ordered by `K`'s natural order
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let map = SortedMap::<i32, i32>::new();
    ///
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_order(DefaultOrder)
    }

    /// Create a new map with room for `cap` entries
    pub fn with_capacity(cap: usize) -> Self {
        Self::with_order_and_capacity(DefaultOrder, cap)
    }
}

impl<K, V, O: Order<K>> SortedMap<K, V, O> {
    /// Create a new map ordered by `order`
    pub fn with_order(order: O) -> Self {
        Self::with_shared_order_in(Arc::new(order))
    }

    pub fn with_order_and_capacity(order: O, cap: usize) -> Self {
        Self::from_parts(Arc::new(order), EntryStoreVec::with_capacity(cap))
    }

    /// Create a new map using an order which is already shared with other maps
    pub fn with_shared_order(order: Arc<O>) -> Self {
        Self::with_shared_order_in(order)
    }
}

impl<K, V, O, S> SortedMap<K, V, O, S>
where
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    /// Create a new map with a custom store type
    ///
    /// # Examples
    /// ```rust
    /// use std::sync::Arc;
    /// use sorted_entry_map::{DefaultOrder, EntryStoreVec, LinearSearch, SortedMap};
    ///
    /// let mut map: SortedMap<u8, u8, DefaultOrder, EntryStoreVec<u8, u8, LinearSearch>> =
    ///     SortedMap::with_shared_order_in(Arc::new(DefaultOrder));
    /// map.put(2, 20);
    /// map.put(1, 10);
    ///
    /// assert_eq!(map.first_entry().unwrap().key(), &1);
    /// ```
    pub fn with_shared_order_in(order: Arc<O>) -> Self {
        Self::from_parts(order, S::default())
    }

    fn from_parts(order: Arc<O>, store: S) -> Self {
        debug_assert!(store.is_empty());
        Self {
            comparator: EntryComparator::new(order),
            store,
            st: Statistic::default(),
            _kv: PhantomData,
        }
    }

    /// The order this map was created with
    #[inline]
    pub fn order(&self) -> &O {
        self.comparator.order()
    }

    /// The order handle, shared with every clone of this map
    #[inline]
    pub fn shared_order(&self) -> &Arc<O> {
        self.comparator.shared_order()
    }

    /// Returns entry count in the map
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Same as `len`
    #[inline]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the map contains no entry
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove all entries, the order is kept
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Counters of the mutations this map went through
    pub fn statistic(&self) -> &Statistic {
        &self.st
    }

    /// All entries, in order
    #[inline]
    pub fn entries(&self) -> &[Entry<K, V>] {
        self.store.as_slice()
    }

    /// Locate `key`.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::{SearchIndex, SortedMap};
    ///
    /// let map = [(1, ()), (3, ()), (5, ())].into_iter().collect::<SortedMap<_, _>>();
    ///
    /// assert_eq!(map.search(&3), SearchIndex::Found(1));
    /// assert_eq!(map.search(&4), SearchIndex::Absent(2));
    /// assert_eq!(map.search(&4).encoded(), -3);
    /// ```
    #[inline]
    pub fn search(&self, key: &K) -> SearchIndex {
        self.search_probe(Probe::Key(key))
    }

    /// Locate the position of `entry`'s key, the value is ignored
    #[inline]
    pub fn search_entry(&self, entry: &Entry<K, V>) -> SearchIndex {
        self.search_probe(Probe::Entry(entry))
    }

    fn search_probe(&self, probe: Probe<'_, K, V>) -> SearchIndex {
        let comparator = &self.comparator;
        self.store
            .search_by(|entry| comparator.compare(Probe::Entry(entry), probe))
    }

    /// Insert a key-value pair into the map. If the key exists, the value is replaced in place
    /// and the previous one is returned.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::<i32, i32>::new();
    /// assert_eq!(map.put(5, 50), None);
    /// assert_eq!(map.put(1, 10), None);
    /// assert_eq!(map.put(5, 55), Some(50));
    ///
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![1, 5]);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let result = match self.search(&key) {
            SearchIndex::Found(idx) => {
                self.st.updated += 1;
                Some(self.entry_at_mut(idx).set_value(value))
            }
            SearchIndex::Absent(idx) => {
                debug_assert!(self.fits_at(idx, &key), "order is inconsistent");

                let len = self.store.len();
                if idx == len {
                    self.st.appended += 1;
                    self.store.push(Entry::new(key, value));
                } else {
                    self.st.inserted += 1;
                    self.st.shifted += (len - idx) as u64;
                    self.store.insert_at(idx, Entry::new(key, value));
                }
                None
            }
        };

        #[cfg(test)]
        self.validate();

        result
    }

    /// Same as `put`
    #[inline]
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.put(key, value)
    }

    /// Returns the entry for `key`
    pub fn get_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key).found()?;
        self.store.get(idx)
    }

    /// Returns a handle to the entry for `key`, its value can be changed in place.
    pub fn get_entry_mut(&mut self, key: &K) -> Option<EntryMut<'_, K, V>> {
        let idx = self.search(key).found()?;
        self.store.get_mut(idx).map(EntryMut::new)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::<i32, i32>::new();
    /// map.put(1, 2);
    ///
    /// assert_eq!(map.get(&1).unwrap(), &2);
    /// assert!(map.get(&2).is_none());
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_entry(key).map(Entry::value)
    }

    /// Returns a mut reference to the value corresponding to the key.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::<i32, i32>::new();
    /// map.put(1, 2);
    /// *map.get_mut(&1).unwrap() += 1;
    /// assert_eq!(map.get(&1).unwrap(), &3);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.get_entry_mut(key).map(EntryMut::into_value_mut)
    }

    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.search(key).is_found()
    }

    /// Returns true if any entry holds a value equal to `value`. This is a linear scan.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.store.as_slice().iter().any(|e| e.value() == value)
    }

    /// Removes `key` from the map, returning its entry if the key was previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        let idx = self.search(key).found()?;
        let entry = self.remove_at(idx);

        #[cfg(test)]
        self.validate();

        Some(entry)
    }

    /// Removes a key from the map, returning the value at the key if the key was previously in the map.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::<i32, i32>::new();
    /// map.put(1, 2);
    ///
    /// assert!(map.remove(&1).is_some());
    /// assert!(map.remove(&2).is_none());
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|e| e.into_pair().1)
    }

    /// Returns the entry with the smallest key
    #[inline]
    pub fn first_entry(&self) -> Option<&Entry<K, V>> {
        self.store.peek_first()
    }

    /// Returns the entry with the largest key
    #[inline]
    pub fn last_entry(&self) -> Option<&Entry<K, V>> {
        self.store.peek_last()
    }

    /// Returns the entry with the smallest key strictly greater than `key`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let map = [(1, 'a'), (3, 'c'), (5, 'e')].into_iter().collect::<SortedMap<_, _>>();
    ///
    /// assert_eq!(map.higher_entry(&3).unwrap().key(), &5);
    /// assert_eq!(map.higher_entry(&2).unwrap().key(), &3);
    /// assert!(map.higher_entry(&5).is_none());
    /// ```
    pub fn higher_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.store.get(self.search(key).higher())
    }

    /// Returns the entry with the largest key strictly less than `key`
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let map = [(1, 'a'), (3, 'c'), (5, 'e')].into_iter().collect::<SortedMap<_, _>>();
    ///
    /// assert_eq!(map.lower_entry(&3).unwrap().key(), &1);
    /// assert_eq!(map.lower_entry(&4).unwrap().key(), &3);
    /// assert!(map.lower_entry(&0).is_none());
    /// ```
    pub fn lower_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key).lower()?;
        self.store.get(idx)
    }

    /// Returns the entry with the smallest key greater than or equal to `key`
    pub fn ceiling_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        self.store.get(self.search(key).ceiling())
    }

    /// Returns the entry with the largest key less than or equal to `key`
    pub fn floor_entry(&self, key: &K) -> Option<&Entry<K, V>> {
        let idx = self.search(key).floor()?;
        self.store.get(idx)
    }

    /// Removes and returns the entry with the smallest key
    pub fn pop_first(&mut self) -> Option<Entry<K, V>> {
        if self.is_empty() {
            return None;
        }
        Some(self.remove_at(0))
    }

    /// Removes and returns the entry with the largest key
    pub fn pop_last(&mut self) -> Option<Entry<K, V>> {
        let idx = self.len().checked_sub(1)?;
        Some(self.remove_at(idx))
    }

    /// Returns an iterator over the map, in key order.
    ///
    /// # Examples
    /// ```rust
    /// use sorted_entry_map::SortedMap;
    ///
    /// let mut map = SortedMap::<i32, i32>::new();
    /// map.put(2, 3);
    /// map.put(1, 2);
    ///
    /// let kvs = map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
    /// assert_eq!(kvs, vec![(1, 2), (2, 3)]);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.store.as_slice())
    }

    /// Returns an iterator with mutable values, in key order
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self.store.as_mut_slice())
    }

    #[inline]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    #[inline]
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Create a `Cursor` pointing to the first entry
    pub fn cursor_first(&self) -> Option<Cursor<K>>
    where
        K: Clone,
    {
        Cursor::first(self).map(|c| c.0)
    }

    /// Create a `Cursor` for `key`, with the value if the key exists.
    ///
    /// The cursor is created even when `key` is absent, moving it then goes to the
    /// neighbours of where `key` would be.
    pub fn get_cursor(&self, key: &K) -> (Cursor<K>, Option<&V>)
    where
        K: Clone,
    {
        match self.search(key) {
            SearchIndex::Found(idx) => {
                let entry = self.entry_at(idx);
                (Cursor::new(key.clone(), idx), Some(entry.value()))
            }
            SearchIndex::Absent(idx) => (Cursor::new(key.clone(), idx), None),
        }
    }

    #[inline]
    fn entry_at(&self, idx: usize) -> &Entry<K, V> {
        &self.store.as_slice()[idx]
    }

    #[inline]
    fn entry_at_mut(&mut self, idx: usize) -> &mut Entry<K, V> {
        &mut self.store.as_mut_slice()[idx]
    }

    fn remove_at(&mut self, idx: usize) -> Entry<K, V> {
        self.st.removed += 1;
        self.st.shifted += (self.store.len() - idx - 1) as u64;
        self.store.remove_at(idx)
    }

    /// Whether `key` sorts strictly between the neighbours of insertion point `idx`
    fn fits_at(&self, idx: usize, key: &K) -> bool {
        let order = self.order();
        let after_prev = idx
            .checked_sub(1)
            .and_then(|prev| self.store.get(prev))
            .is_none_or(|prev| order.compare(prev.key(), key).is_lt());
        let before_next = self
            .store
            .get(idx)
            .is_none_or(|next| order.compare(key, next.key()).is_lt());
        after_prev && before_next
    }

    #[cfg(test)]
    pub(crate) fn validate(&self) {
        for pair in self.store.as_slice().windows(2) {
            assert!(
                self.comparator
                    .compare(Probe::Entry(&pair[0]), Probe::Entry(&pair[1]))
                    .is_lt(),
                "entries out of order"
            );
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

impl<K, V, O, S> Clone for SortedMap<K, V, O, S>
where
    S: Clone,
{
    /// Copy the entries, the order is shared with the clone
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
            store: self.store.clone(),
            st: self.st.clone(),
            _kv: PhantomData,
        }
    }
}

impl<K, V, O, S> Default for SortedMap<K, V, O, S>
where
    O: Order<K> + Default,
    S: EntryStore<K = K, V = V>,
{
    fn default() -> Self {
        Self::with_shared_order_in(Arc::new(O::default()))
    }
}

impl<K, V, O, S> fmt::Debug for SortedMap<K, V, O, S>
where
    K: fmt::Debug,
    V: fmt::Debug,
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, O, S> PartialEq for SortedMap<K, V, O, S>
where
    K: PartialEq,
    V: PartialEq,
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    fn eq(&self, other: &Self) -> bool {
        self.entries() == other.entries()
    }
}

impl<K, V, O, S> Eq for SortedMap<K, V, O, S>
where
    K: Eq,
    V: Eq,
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
}

impl<K, V, O, S> Extend<(K, V)> for SortedMap<K, V, O, S>
where
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<K, V, O, S> FromIterator<(K, V)> for SortedMap<K, V, O, S>
where
    O: Order<K> + Default,
    S: EntryStore<K = K, V = V>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, O, S> IntoIterator for SortedMap<K, V, O, S>
where
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.store.into_vec())
    }
}

impl<'a, K, V, O, S> IntoIterator for &'a SortedMap<K, V, O, S>
where
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V, O, S> IntoIterator for &'a mut SortedMap<K, V, O, S>
where
    O: Order<K>,
    S: EntryStore<K = K, V = V>,
{
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// Statistic data used to guide the perf tuning
#[derive(Default, Debug, Clone)]
pub struct Statistic {
    /// new keys placed at the end, no shifting needed
    pub appended: u64,
    /// new keys placed before existing entries
    pub inserted: u64,
    /// values replaced for existing keys
    pub updated: u64,
    pub removed: u64,

    /// total entries moved by inserts and removes
    pub shifted: u64,
}

/// ensure SortedMap is send for send k v
fn _ensure_send<K: Send, V: Send>() {
    fn _assert_send<T: Send>() {}
    _assert_send::<SortedMap<K, V>>();
}
