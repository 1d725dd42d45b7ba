//! Property-based testing for the hash map variants
//!
//! Model-based testing with proptest: arbitrary operation sequences run
//! against `std::collections::HashMap` as the reference model, with the
//! structural invariants (load factor bound, size accounting) checked along
//! the way.

use proptest::prelude::*;
use std::collections::HashMap;

use bucketchain::{BucketError, ChainedHashMap, LinearProbeHashMap};

// =============================================================================
// OPERATION GENERATORS
// =============================================================================

/// One step of a map workload
#[derive(Debug, Clone)]
enum MapOp {
    Insert(u16, i32),
    Remove(u16),
    Get(u16),
    GetOrDefault(u16),
    Clear,
}

fn map_ops_strategy() -> impl Strategy<Value = Vec<MapOp>> {
    prop::collection::vec(
        prop_oneof![
            5 => (any::<u16>(), any::<i32>()).prop_map(|(k, v)| MapOp::Insert(k, v)),
            2 => any::<u16>().prop_map(MapOp::Remove),
            2 => any::<u16>().prop_map(MapOp::Get),
            1 => any::<u16>().prop_map(MapOp::GetOrDefault),
            1 => Just(MapOp::Clear),
        ],
        0..400,
    )
}

// =============================================================================
// CHAINED MAP PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_chained_matches_std_model(ops in map_ops_strategy()) {
        let mut map = ChainedHashMap::with_capacity(4).unwrap();
        let mut model: HashMap<u16, i32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
                MapOp::Get(k) => {
                    let expected = model.get(&k).ok_or(BucketError::KeyNotFound);
                    prop_assert_eq!(map.get(&k), expected);
                    prop_assert_eq!(map.contains_key(&k), model.contains_key(&k));
                }
                MapOp::GetOrDefault(k) => {
                    prop_assert_eq!(
                        *map.get_or_default(k),
                        *model.entry(k).or_default()
                    );
                }
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.is_empty(), model.is_empty());
            prop_assert!(map.load_factor() <= map.max_load_factor());
        }
    }

    #[test]
    fn prop_chained_round_trip(
        entries in prop::collection::hash_map(any::<u32>(), any::<i64>(), 0..500)
    ) {
        let mut map = ChainedHashMap::with_capacity(4).unwrap();
        for (&k, &v) in &entries {
            map.insert(k, v);
        }

        prop_assert_eq!(map.len(), entries.len());
        for (&k, &v) in &entries {
            prop_assert_eq!(map.get(&k), Ok(&v));
            prop_assert!(map.contains_key(&k));
        }
    }

    #[test]
    fn prop_chained_iter_agrees_with_snapshots(
        entries in prop::collection::hash_map(any::<u16>(), any::<i32>(), 0..200)
    ) {
        let mut map = ChainedHashMap::new();
        for (&k, &v) in &entries {
            map.insert(k, v);
        }

        let mut iterated: Vec<(u16, i32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        iterated.sort_unstable();

        let mut keys = map.keys();
        keys.sort_unstable();
        let mut from_model: Vec<u16> = entries.keys().copied().collect();
        from_model.sort_unstable();
        prop_assert_eq!(keys, from_model);

        let mut expected: Vec<(u16, i32)> = entries.iter().map(|(&k, &v)| (k, v)).collect();
        expected.sort_unstable();
        prop_assert_eq!(iterated, expected);
    }

    #[test]
    fn prop_chained_bucket_count_never_shrinks(ops in map_ops_strategy()) {
        let mut map = ChainedHashMap::with_capacity(4).unwrap();
        let mut high_water = map.bucket_count();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => { map.insert(k, v); }
                MapOp::Remove(k) => { map.remove(&k); }
                MapOp::Get(k) => { let _ = map.get(&k); }
                MapOp::GetOrDefault(k) => { let _ = map.get_or_default(k); }
                MapOp::Clear => map.clear(),
            }
            prop_assert!(map.bucket_count() >= high_water);
            high_water = map.bucket_count();
        }
    }
}

// =============================================================================
// LINEAR PROBE MAP PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_probe_matches_std_model(ops in map_ops_strategy()) {
        let mut map = LinearProbeHashMap::with_capacity(4).unwrap();
        let mut model: HashMap<u16, i32> = HashMap::new();

        for op in ops {
            match op {
                MapOp::Insert(k, v) => {
                    prop_assert_eq!(map.insert(k, v), model.insert(k, v));
                }
                MapOp::Remove(k) => {
                    prop_assert_eq!(map.remove(&k), model.remove(&k));
                }
                MapOp::Get(k) | MapOp::GetOrDefault(k) => {
                    let expected = model.get(&k).ok_or(BucketError::KeyNotFound);
                    prop_assert_eq!(map.get(&k), expected);
                }
                MapOp::Clear => {
                    map.clear();
                    model.clear();
                }
            }
            prop_assert_eq!(map.len(), model.len());
            prop_assert!(map.load_factor() <= map.max_load_factor());
        }
    }

    #[test]
    fn prop_probe_round_trip(
        entries in prop::collection::hash_map(any::<u32>(), any::<i64>(), 0..500)
    ) {
        let mut map = LinearProbeHashMap::with_capacity(4).unwrap();
        for (&k, &v) in &entries {
            map.insert(k, v);
        }

        prop_assert_eq!(map.len(), entries.len());
        for (&k, &v) in &entries {
            prop_assert_eq!(map.get(&k), Ok(&v));
        }
    }

    #[test]
    fn prop_probe_heavy_churn_stays_consistent(
        keys in prop::collection::vec(any::<u8>(), 0..300)
    ) {
        // Repeated insert/remove over a tiny key space maximizes tombstone
        // pressure; the table must stay answerable throughout.
        let mut map = LinearProbeHashMap::with_capacity(4).unwrap();
        let mut model: HashMap<u8, usize> = HashMap::new();

        for (i, &k) in keys.iter().enumerate() {
            if model.contains_key(&k) {
                prop_assert_eq!(map.remove(&k), model.remove(&k));
            } else {
                prop_assert_eq!(map.insert(k, i), model.insert(k, i));
            }
            prop_assert_eq!(map.len(), model.len());
        }

        for (&k, &v) in &model {
            prop_assert_eq!(map.get(&k), Ok(&v));
        }
    }
}
