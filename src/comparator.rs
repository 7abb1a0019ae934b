use std::cmp::Ordering;
use std::sync::Arc;

use crate::{Entry, Order};

/// Search target, either a bare key or a whole entry.
#[derive(Debug)]
pub enum Probe<'a, K, V> {
    Key(&'a K),
    Entry(&'a Entry<K, V>),
}

impl<'a, K, V> Probe<'a, K, V> {
    /// Reduce the probe to its key
    #[inline]
    pub fn key(&self) -> &'a K {
        match *self {
            Probe::Key(k) => k,
            Probe::Entry(entry) => entry.key(),
        }
    }
}

impl<K, V> Clone for Probe<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Probe<'_, K, V> {}

/// Compares entries and keys in any combination, by reducing both sides to keys and asking the
/// map's order. Holds the order shared with every clone of the map.
#[derive(Debug)]
pub struct EntryComparator<O> {
    order: Arc<O>,
}

impl<O> Clone for EntryComparator<O> {
    fn clone(&self) -> Self {
        Self {
            order: Arc::clone(&self.order),
        }
    }
}

impl<O> EntryComparator<O> {
    pub fn new(order: Arc<O>) -> Self {
        Self { order }
    }

    #[inline]
    pub fn order(&self) -> &O {
        &self.order
    }

    #[inline]
    pub fn shared_order(&self) -> &Arc<O> {
        &self.order
    }

    #[inline]
    pub fn compare<K, V>(&self, left: Probe<'_, K, V>, right: Probe<'_, K, V>) -> Ordering
    where
        O: Order<K>,
    {
        self.order.compare(left.key(), right.key())
    }
}
