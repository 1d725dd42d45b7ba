//! ChainedHashMap - separate-chaining hash table with load-factor controlled growth
//!
//! The baseline associative container of this crate:
//! - Generic over key, value, and hasher (`ahash::RandomState` by default)
//! - One `Vec` of entries per bucket, no pointer chasing
//! - Doubling growth whenever an insert would push the load factor past its
//!   configured maximum
//! - Fallible `get` with [`BucketError::KeyNotFound`], infallible everything else
//!
//! # Examples
//!
//! ```rust
//! use bucketchain::ChainedHashMap;
//!
//! let mut map = ChainedHashMap::new();
//! map.insert("hello".to_string(), 42);
//! assert_eq!(map.get("hello"), Ok(&42));
//! ```

use crate::error::{BucketError, Result};
use crate::hash_map::hash_functions::{
    bucket_index, exceeds_load_factor, grown_bucket_count, hash_one, DEFAULT_BUCKET_COUNT,
    DEFAULT_CHAIN_LOAD_FACTOR,
};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Configuration for [`ChainedHashMap`]
#[derive(Debug, Clone)]
pub struct ChainedHashMapConfig {
    /// Number of buckets allocated at construction (must be non-zero)
    pub initial_bucket_count: usize,
    /// Load factor threshold that triggers doubling, exclusive (0.0, 1.0)
    pub max_load_factor: f64,
}

impl Default for ChainedHashMapConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_BUCKET_COUNT,
            max_load_factor: DEFAULT_CHAIN_LOAD_FACTOR,
        }
    }
}

impl ChainedHashMapConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_bucket_count == 0 {
            return Err(BucketError::invalid_config(
                "initial_bucket_count must be non-zero",
            ));
        }
        if !self.max_load_factor.is_finite()
            || self.max_load_factor <= 0.0
            || self.max_load_factor >= 1.0
        {
            return Err(BucketError::invalid_config(format!(
                "max_load_factor {} outside (0.0, 1.0)",
                self.max_load_factor
            )));
        }
        Ok(())
    }
}

/// Entry in a bucket chain
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Separate-chaining hash table
///
/// Keys are unique table-wide; inserting an existing key replaces its value
/// in place. The load factor `len / bucket_count` never exceeds the
/// configured maximum once an insert completes, and the bucket count only
/// ever grows (by doubling). Within a bucket, entries sit in push order;
/// that order carries no meaning beyond keeping duplicate detection a single
/// linear scan.
///
/// # Examples
///
/// ```rust
/// use bucketchain::ChainedHashMap;
///
/// let mut map = ChainedHashMap::new();
/// assert_eq!(map.insert("a", 1), None);
/// assert_eq!(map.insert("a", 2), Some(1));
/// assert_eq!(map.len(), 1);
/// ```
pub struct ChainedHashMap<K, V, S = ahash::RandomState> {
    /// Bucket array; each bucket owns its chain
    buckets: Vec<Vec<Entry<K, V>>>,
    /// Number of stored entries across all buckets
    len: usize,
    /// Growth threshold
    max_load_factor: f64,
    /// Hash function builder
    hash_builder: S,
}

impl<K, V> ChainedHashMap<K, V, ahash::RandomState> {
    /// Creates an empty map with default configuration and hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Creates an empty map with the given initial bucket count
    pub fn with_capacity(initial_bucket_count: usize) -> Result<Self> {
        Self::with_config(ChainedHashMapConfig {
            initial_bucket_count,
            ..Default::default()
        })
    }

    /// Creates an empty map from a full configuration
    pub fn with_config(config: ChainedHashMapConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, ahash::RandomState::new())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    S: BuildHasher,
{
    /// Creates an empty map with a custom hasher and default configuration
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(ChainedHashMapConfig::default(), hash_builder)
            .expect("default configuration is valid")
    }

    /// Creates an empty map from a configuration and a custom hasher
    pub fn with_config_and_hasher(config: ChainedHashMapConfig, hash_builder: S) -> Result<Self> {
        config.validate()?;
        let mut buckets = Vec::with_capacity(config.initial_bucket_count);
        buckets.resize_with(config.initial_bucket_count, Vec::new);
        Ok(Self {
            buckets,
            len: 0,
            max_load_factor: config.max_load_factor,
            hash_builder,
        })
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Current load factor, `len / bucket_count`
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Configured growth threshold
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    fn bucket_of<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        bucket_index(hash_one(&self.hash_builder, key), self.buckets.len())
    }
}

impl<K, V, S> ChainedHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Doubles the bucket array until `occupancy` entries fit under the load
    /// factor, then redistributes every entry under the new bucket count.
    fn grow_for(&mut self, occupancy: usize) {
        let new_count = grown_bucket_count(occupancy, self.buckets.len(), self.max_load_factor);
        log::debug!(
            "ChainedHashMap rehash: {} -> {} buckets ({} entries)",
            self.buckets.len(),
            new_count,
            self.len
        );

        let mut new_buckets: Vec<Vec<Entry<K, V>>> = Vec::with_capacity(new_count);
        new_buckets.resize_with(new_count, Vec::new);
        let old_buckets = mem::replace(&mut self.buckets, new_buckets);

        for entry in old_buckets.into_iter().flatten() {
            let idx = bucket_index(hash_one(&self.hash_builder, &entry.key), new_count);
            self.buckets[idx].push(entry);
        }
    }

    /// Runs the growth check for one incoming entry
    fn reserve_one(&mut self) {
        if exceeds_load_factor(self.len + 1, self.buckets.len(), self.max_load_factor) {
            self.grow_for(self.len + 1);
        }
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present
    ///
    /// A fresh key runs the growth check first, so the load factor bound
    /// holds the moment this returns. Replacing the value of an existing key
    /// never grows the table.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_of(&key);
        if let Some(entry) = self.buckets[idx].iter_mut().find(|e| e.key == key) {
            return Some(mem::replace(&mut entry.value, value));
        }

        self.reserve_one();
        let idx = self.bucket_of(&key);
        self.buckets[idx].push(Entry { key, value });
        self.len += 1;
        None
    }

    /// Gets a reference to the value for a key
    ///
    /// The only fallible lookup: an absent key yields
    /// [`BucketError::KeyNotFound`] and leaves the map untouched.
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter()
            .find(|e| e.key.borrow() == key)
            .map(|e| &e.value)
            .ok_or(BucketError::KeyNotFound)
    }

    /// Gets a mutable reference to the value for a key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_of(key);
        self.buckets[idx]
            .iter_mut()
            .find(|e| e.key.borrow() == key)
            .map(|e| &mut e.value)
            .ok_or(BucketError::KeyNotFound)
    }

    /// Whether the map contains the key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_ok()
    }

    /// Removes a key, returning its value if it was present
    ///
    /// An absent key is a valid negative result, not an error. Removal never
    /// shrinks the bucket array.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_of(key);
        let pos = self.buckets[idx].iter().position(|e| e.key.borrow() == key)?;
        self.len -= 1;
        Some(self.buckets[idx].swap_remove(pos).value)
    }

    /// Gets the value for a key, inserting one built by `default` first when
    /// the key is absent
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let idx = self.bucket_of(&key);
        if let Some(pos) = self.buckets[idx].iter().position(|e| e.key == key) {
            return &mut self.buckets[idx][pos].value;
        }

        self.reserve_one();
        let idx = self.bucket_of(&key);
        self.buckets[idx].push(Entry {
            key,
            value: default(),
        });
        self.len += 1;
        let pos = self.buckets[idx].len() - 1;
        &mut self.buckets[idx][pos].value
    }

    /// Gets the value for a key, inserting `V::default()` first when absent
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.get_or_insert_with(key, V::default)
    }

    /// Removes all entries, keeping the current bucket count
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over key-value pairs, bucket-major then chain
    /// order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            outer: self.buckets.iter(),
            inner: Default::default(),
            remaining: self.len,
        }
    }

    /// Snapshot of all keys at call time
    ///
    /// The returned vector is detached from the map: later inserts and
    /// removals do not affect it.
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Snapshot of all values at call time
    pub fn values(&self) -> Vec<V>
    where
        V: Clone,
    {
        self.iter().map(|(_, v)| v.clone()).collect()
    }
}

impl<K, V, S> Default for ChainedHashMap<K, V, S>
where
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> fmt::Debug for ChainedHashMap<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over key-value pairs of a [`ChainedHashMap`]
pub struct Iter<'a, K, V> {
    outer: std::slice::Iter<'a, Vec<Entry<K, V>>>,
    inner: std::slice::Iter<'a, Entry<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.inner.next() {
                self.remaining -= 1;
                return Some((&entry.key, &entry.value));
            }
            self.inner = self.outer.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
