//! Shared hashing and sizing helpers for the hash map implementations
//!
//! Both map variants derive bucket indices the same way: a full 64-bit hash
//! from the map's `BuildHasher`, reduced modulo the current bucket count.
//! Growth policy helpers live here as well so the two variants stay in
//! agreement about when a table is considered overloaded.

use std::hash::{BuildHasher, Hash, Hasher};

/// Default number of buckets for a freshly created map
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/// Default maximum load factor for the separate-chaining map
pub const DEFAULT_CHAIN_LOAD_FACTOR: f64 = 0.75;

/// Default maximum load factor for the linear-probing map
///
/// Lower than the chaining default: clustering degrades probe sequences well
/// before chains of equivalent length become a problem.
pub const DEFAULT_PROBE_LOAD_FACTOR: f64 = 0.7;

/// Compute the full 64-bit hash of a key under the given hasher builder
#[inline]
pub fn hash_one<S, Q>(build_hasher: &S, key: &Q) -> u64
where
    S: BuildHasher,
    Q: Hash + ?Sized,
{
    let mut hasher = build_hasher.build_hasher();
    key.hash(&mut hasher);
    hasher.finish()
}

/// Reduce a full hash to a bucket index for the given bucket count
///
/// `bucket_count` must be non-zero; both maps guarantee this from
/// construction onward.
#[inline]
pub fn bucket_index(hash: u64, bucket_count: usize) -> usize {
    (hash % bucket_count as u64) as usize
}

/// Whether a table holding `occupancy` entries across `bucket_count` buckets
/// exceeds `max_load_factor`
#[inline]
pub fn exceeds_load_factor(occupancy: usize, bucket_count: usize, max_load_factor: f64) -> bool {
    occupancy as f64 / bucket_count as f64 > max_load_factor
}

/// Smallest doubling of `bucket_count` that keeps `occupancy` entries at or
/// under `max_load_factor`
pub fn grown_bucket_count(occupancy: usize, bucket_count: usize, max_load_factor: f64) -> usize {
    let mut new_count = bucket_count.max(1) * 2;
    while exceeds_load_factor(occupancy, new_count, max_load_factor) {
        new_count *= 2;
    }
    new_count
}
