//! Property-based tests for SortedMap.
//!
//! These tests check the sorted map against its ordering invariants and
//! against `BTreeMap` as a model, using proptest.

use std::collections::BTreeMap;

use proptest::prelude::*;
use sorted_entry_map::{DefaultOrder, ReverseOrder, SearchIndex, SortedMap};

#[derive(Debug, Clone)]
enum Op {
    Put(i16, i32),
    Remove(i16),
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<i16>().prop_map(|k| k % 64), any::<i32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => any::<i16>().prop_map(|k| Op::Remove(k % 64)),
    ]
}

fn apply(map: &mut SortedMap<i16, i32>, model: &mut BTreeMap<i16, i32>, op: &Op) {
    match *op {
        Op::Put(k, v) => {
            assert_eq!(map.put(k, v), model.insert(k, v));
        }
        Op::Remove(k) => {
            assert_eq!(map.remove_entry(&k).map(|e| e.into_pair()), model.remove_entry(&k));
        }
    }
}

fn strictly_increasing(map: &SortedMap<i16, i32>) -> bool {
    map.keys().zip(map.keys().skip(1)).all(|(a, b)| a < b)
}

// =============================================================================
// Order and Uniqueness
// =============================================================================

proptest! {
    /// Law: keys are strictly increasing after every mutation.
    #[test]
    fn prop_order_invariant(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let mut map = SortedMap::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&mut map, &mut model, op);
            prop_assert!(strictly_increasing(&map));
        }
    }

    /// Law: the map holds exactly the model's entries, so at most one entry per key.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(arbitrary_op(), 0..200)) {
        let mut map = SortedMap::new();
        let mut model = BTreeMap::new();
        for op in &ops {
            apply(&mut map, &mut model, op);
        }
        prop_assert_eq!(map.len(), model.len());
        prop_assert_eq!(
            map.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(),
            model.into_iter().collect::<Vec<_>>()
        );
    }
}

// =============================================================================
// Put Laws
// =============================================================================

proptest! {
    /// Law: the second put on a key returns the first value and wins.
    #[test]
    fn prop_put_overwrite(
        entries in prop::collection::vec((any::<i16>(), any::<i32>()), 0..50),
        key: i16,
        v1: i32,
        v2: i32
    ) {
        let mut map: SortedMap<i16, i32> = entries.into_iter().collect();
        map.put(key, v1);
        let len = map.len();

        prop_assert_eq!(map.put(key, v2), Some(v1));
        prop_assert_eq!(map.len(), len);
        prop_assert_eq!(map.get_entry(&key).map(|e| *e.value()), Some(v2));
    }

    /// Law: every key put and not removed reads back its value.
    #[test]
    fn prop_round_trip(entries in prop::collection::btree_map(any::<i16>(), any::<i32>(), 0..100)) {
        let map: SortedMap<i16, i32> = entries.clone().into_iter().collect();
        for (k, v) in &entries {
            prop_assert_eq!(map.get_entry(k).map(|e| e.value()), Some(v));
        }
    }
}

// =============================================================================
// Search and Navigation
// =============================================================================

proptest! {
    /// Law: search returns the position when found, the insertion point otherwise.
    #[test]
    fn prop_search_encoding(
        entries in prop::collection::btree_map(any::<i16>(), any::<i32>(), 0..100),
        key: i16
    ) {
        let map: SortedMap<i16, i32> = entries.into_iter().collect();
        let keys = map.keys().copied().collect::<Vec<_>>();
        let result = map.search(&key);

        match keys.binary_search(&key) {
            Ok(idx) => {
                prop_assert_eq!(result, SearchIndex::Found(idx));
                prop_assert_eq!(result.encoded(), idx as isize);
            }
            Err(idx) => {
                prop_assert_eq!(result, SearchIndex::Absent(idx));
                prop_assert_eq!(result.encoded(), -(idx as isize + 1));
            }
        }
        prop_assert_eq!(SearchIndex::from_encoded(result.encoded()), result);
    }

    /// Law: navigation agrees with range queries on BTreeMap.
    #[test]
    fn prop_navigation(
        entries in prop::collection::btree_map(-100i16..100, any::<i32>(), 0..60),
        key in -110i16..110
    ) {
        let map: SortedMap<i16, i32> = entries.clone().into_iter().collect();
        let k = |e: Option<&sorted_entry_map::Entry<i16, i32>>| e.map(|e| *e.key());

        prop_assert_eq!(k(map.ceiling_entry(&key)), entries.range(key..).next().map(|kv| *kv.0));
        prop_assert_eq!(k(map.floor_entry(&key)), entries.range(..=key).next_back().map(|kv| *kv.0));
        prop_assert_eq!(k(map.lower_entry(&key)), entries.range(..key).next_back().map(|kv| *kv.0));
        prop_assert_eq!(
            k(map.higher_entry(&key)),
            entries.range((std::ops::Bound::Excluded(key), std::ops::Bound::Unbounded)).next().map(|kv| *kv.0)
        );
        prop_assert_eq!(k(map.first_entry()), entries.keys().next().copied());
        prop_assert_eq!(k(map.last_entry()), entries.keys().next_back().copied());
    }

    /// Law: with a reversed order, iteration is descending and higher means smaller.
    #[test]
    fn prop_reverse_order(
        entries in prop::collection::btree_map(-100i16..100, any::<i32>(), 1..60),
        key in -110i16..110
    ) {
        let mut map = SortedMap::with_order(ReverseOrder(DefaultOrder));
        map.extend(entries.clone());

        prop_assert_eq!(
            map.keys().copied().collect::<Vec<_>>(),
            entries.keys().rev().copied().collect::<Vec<_>>()
        );
        prop_assert_eq!(
            map.higher_entry(&key).map(|e| *e.key()),
            entries.range(..key).next_back().map(|kv| *kv.0)
        );
    }
}

// =============================================================================
// Clone Independence
// =============================================================================

proptest! {
    /// Law: structural changes on a clone don't show up in the original, and vice versa.
    #[test]
    fn prop_clone_independence(
        entries in prop::collection::btree_map(any::<i16>(), any::<i32>(), 0..60),
        ops in prop::collection::vec(arbitrary_op(), 0..60)
    ) {
        let mut original: SortedMap<i16, i32> = entries.into_iter().collect();
        let snapshot = original.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();

        let mut cloned = original.clone();
        let mut model: BTreeMap<i16, i32> = snapshot.iter().copied().collect();
        for op in &ops {
            apply(&mut cloned, &mut model, op);
        }
        prop_assert_eq!(original.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), snapshot.clone());

        let cloned_view = cloned.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>();
        original.clear();
        prop_assert_eq!(cloned.iter().map(|(k, v)| (*k, *v)).collect::<Vec<_>>(), cloned_view);
    }
}
