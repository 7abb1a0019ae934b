use std::cmp::Ordering;
use std::hash::{DefaultHasher, Hash, Hasher};

/// Total order over keys, fixed for the whole lifetime of a map.
///
/// Implementations must be consistent: `compare` must not change its answer
/// for the same pair of keys once the map holds them, otherwise the sorted
/// invariant of the store is silently broken.
pub trait Order<K: ?Sized> {
    /// Compare two keys
    fn compare(&self, left: &K, right: &K) -> Ordering;

    /// Returns true if both keys are equal under this order
    #[inline]
    fn are_equal(&self, left: &K, right: &K) -> bool {
        self.compare(left, right) == Ordering::Equal
    }
}

/// The natural order, backed by `Ord`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultOrder;

impl DefaultOrder {
    /// Hash style index of `value`. Stable across runs of the same build, the
    /// std hasher algorithm may change between Rust releases.
    pub fn index_of<T: Hash + ?Sized>(&self, value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

impl<K: Ord + ?Sized> Order<K> for DefaultOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }

    #[inline]
    fn are_equal(&self, left: &K, right: &K) -> bool {
        left == right
    }
}

/// Inverts another order.
///
/// # Examples
/// ```rust
/// use sorted_entry_map::{DefaultOrder, ReverseOrder, SortedMap};
///
/// let mut map = SortedMap::with_order(ReverseOrder(DefaultOrder));
/// map.put(1, "a");
/// map.put(3, "c");
/// map.put(2, "b");
///
/// assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct ReverseOrder<O>(pub O);

impl<K: ?Sized, O: Order<K>> Order<K> for ReverseOrder<O> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(right, left)
    }

    #[inline]
    fn are_equal(&self, left: &K, right: &K) -> bool {
        self.0.are_equal(left, right)
    }
}

/// Order defined by a comparison closure.
///
/// # Examples
/// ```rust
/// use sorted_entry_map::{FnOrder, SortedMap};
///
/// // case insensitive keys
/// let order = FnOrder(|a: &String, b: &String| a.to_lowercase().cmp(&b.to_lowercase()));
/// let mut map = SortedMap::with_order(order);
/// map.put("Apple".to_string(), 1);
///
/// assert_eq!(map.put("APPLE".to_string(), 2), Some(1));
/// assert_eq!(map.len(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F>(pub F);

impl<K: ?Sized, F> Order<K> for FnOrder<F>
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        (self.0)(left, right)
    }
}

impl<F> std::fmt::Debug for FnOrder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}
