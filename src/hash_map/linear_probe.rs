//! LinearProbeHashMap - open-addressing hash table with tombstone deletion
//!
//! Structurally distinct from [`ChainedHashMap`](crate::ChainedHashMap):
//! every entry lives directly in the slot array, collisions resolve by
//! stepping to the next slot (wrapping around), and removal leaves a
//! tombstone so later lookups keep probing through the vacated position.
//! Rehashing rebuilds the slot array from live entries only, which is also
//! how tombstones get reclaimed.

use crate::error::{BucketError, Result};
use crate::hash_map::hash_functions::{
    bucket_index, exceeds_load_factor, grown_bucket_count, hash_one, DEFAULT_BUCKET_COUNT,
    DEFAULT_PROBE_LOAD_FACTOR,
};
use std::borrow::Borrow;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::mem;

/// Configuration for [`LinearProbeHashMap`]
#[derive(Debug, Clone)]
pub struct LinearProbeHashMapConfig {
    /// Number of slots allocated at construction (must be non-zero)
    pub initial_bucket_count: usize,
    /// Occupancy threshold that triggers rehashing, exclusive (0.0, 1.0)
    pub max_load_factor: f64,
}

impl Default for LinearProbeHashMapConfig {
    fn default() -> Self {
        Self {
            initial_bucket_count: DEFAULT_BUCKET_COUNT,
            max_load_factor: DEFAULT_PROBE_LOAD_FACTOR,
        }
    }
}

impl LinearProbeHashMapConfig {
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

/// One slot of the probe array
enum Slot<K, V> {
    /// Never occupied since the last rehash; terminates probe sequences
    Vacant,
    /// Live entry
    Occupied { key: K, value: V },
    /// Removed entry; probe sequences continue through it
    Tombstone,
}

impl<K, V> Slot<K, V> {
    fn is_live(&self) -> bool {
        matches!(self, Slot::Occupied { .. })
    }
}

/// Outcome of walking a key's probe sequence
enum Probe {
    /// Key found at this slot
    Found(usize),
    /// Key absent; a fresh entry belongs at this slot (first tombstone on
    /// the path, or the vacant slot that ended it)
    Absent(usize),
}

/// Open-addressing hash table with linear probing
///
/// Same operation surface as the chaining variant, different mechanics: a
/// lookup starts at `hash % slot_count` and walks forward until it hits the
/// key or a vacant slot. Tombstones keep those walks intact after removals;
/// occupancy (live entries plus tombstones) is what the growth check
/// watches, so a table cycling through insert/remove pairs still rehashes
/// rather than silting up.
///
/// # Examples
///
/// ```rust
/// use bucketchain::LinearProbeHashMap;
///
/// let mut map = LinearProbeHashMap::new();
/// map.insert("slot", 9);
/// assert_eq!(map.get("slot"), Ok(&9));
/// assert_eq!(map.remove("slot"), Some(9));
/// ```
pub struct LinearProbeHashMap<K, V, S = ahash::RandomState> {
    slots: Vec<Slot<K, V>>,
    /// Live entries
    len: usize,
    /// Slots holding a tombstone
    tombstones: usize,
    max_load_factor: f64,
    hash_builder: S,
}

impl<K, V> LinearProbeHashMap<K, V, ahash::RandomState> {
    /// Creates an empty map with default configuration and hasher
    pub fn new() -> Self {
        Self::with_hasher(ahash::RandomState::new())
    }

    /// Creates an empty map with the given initial slot count
    pub fn with_capacity(initial_bucket_count: usize) -> Result<Self> {
        Self::with_config(LinearProbeHashMapConfig {
            initial_bucket_count,
            ..Default::default()
        })
    }

    /// Creates an empty map from a full configuration
    pub fn with_config(config: LinearProbeHashMapConfig) -> Result<Self> {
        Self::with_config_and_hasher(config, ahash::RandomState::new())
    }
}

impl<K, V, S> LinearProbeHashMap<K, V, S>
where
    S: BuildHasher,
{
    /// Creates an empty map with a custom hasher and default configuration
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_config_and_hasher(LinearProbeHashMapConfig::default(), hash_builder)
            .expect("default configuration is valid")
    }

    /// Creates an empty map from a configuration and a custom hasher
    pub fn with_config_and_hasher(
        config: LinearProbeHashMapConfig,
        hash_builder: S,
    ) -> Result<Self> {
        config.validate()?;
        let mut slots = Vec::with_capacity(config.initial_bucket_count);
        slots.resize_with(config.initial_bucket_count, || Slot::Vacant);
        Ok(Self {
            slots,
            len: 0,
            tombstones: 0,
            max_load_factor: config.max_load_factor,
            hash_builder,
        })
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the map holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of slots
    pub fn bucket_count(&self) -> usize {
        self.slots.len()
    }

    /// Current load factor, live entries over slot count
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Configured occupancy threshold
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Slots currently holding a tombstone
    pub fn tombstone_count(&self) -> usize {
        self.tombstones
    }
}

impl<K, V, S> LinearProbeHashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn probe<Q>(&self, key: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let slot_count = self.slots.len();
        let mut idx = bucket_index(hash_one(&self.hash_builder, key), slot_count);
        let mut first_tombstone = None;

        for _ in 0..slot_count {
            match &self.slots[idx] {
                Slot::Vacant => {
                    return Probe::Absent(first_tombstone.unwrap_or(idx));
                }
                Slot::Occupied { key: existing, .. } if existing.borrow() == key => {
                    return Probe::Found(idx);
                }
                Slot::Occupied { .. } => {}
                Slot::Tombstone => {
                    first_tombstone.get_or_insert(idx);
                }
            }
            idx = (idx + 1) % slot_count;
        }

        // Full cycle without a vacant slot; the growth check keeps occupancy
        // strictly below capacity, so a tombstone must have been seen.
        Probe::Absent(first_tombstone.expect("occupancy below capacity leaves a reusable slot"))
    }

    /// Rebuilds the slot array with `new_count` slots from live entries,
    /// discarding tombstones
    fn rebuild(&mut self, new_count: usize) {
        log::debug!(
            "LinearProbeHashMap rehash: {} -> {} slots ({} live, {} tombstones)",
            self.slots.len(),
            new_count,
            self.len,
            self.tombstones
        );

        let mut new_slots: Vec<Slot<K, V>> = Vec::with_capacity(new_count);
        new_slots.resize_with(new_count, || Slot::Vacant);
        let old_slots = mem::replace(&mut self.slots, new_slots);
        self.tombstones = 0;

        for slot in old_slots {
            if let Slot::Occupied { key, value } = slot {
                // No tombstones exist mid-rebuild: the first vacant slot on
                // the probe path is the entry's position.
                let mut idx = bucket_index(hash_one(&self.hash_builder, &key), new_count);
                while self.slots[idx].is_live() {
                    idx = (idx + 1) % new_count;
                }
                self.slots[idx] = Slot::Occupied { key, value };
            }
        }
    }

    /// Runs the occupancy check for one incoming entry
    ///
    /// Occupancy counts tombstones: they lengthen probe paths exactly like
    /// live entries do. Doubles only when live entries alone demand it,
    /// otherwise rebuilds at the current size to shed tombstones.
    fn reserve_one(&mut self) {
        let occupancy = self.len + self.tombstones + 1;
        if !exceeds_load_factor(occupancy, self.slots.len(), self.max_load_factor) {
            return;
        }
        let new_count = if exceeds_load_factor(self.len + 1, self.slots.len(), self.max_load_factor)
        {
            grown_bucket_count(self.len + 1, self.slots.len(), self.max_load_factor)
        } else {
            self.slots.len()
        };
        self.rebuild(new_count);
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Probe::Found(idx) = self.probe(&key) {
            if let Slot::Occupied { value: existing, .. } = &mut self.slots[idx] {
                return Some(mem::replace(existing, value));
            }
            unreachable!("probe returned Found for a non-occupied slot");
        }

        self.reserve_one();
        let idx = match self.probe(&key) {
            Probe::Absent(idx) => idx,
            Probe::Found(_) => unreachable!("key appeared during growth"),
        };
        if matches!(self.slots[idx], Slot::Tombstone) {
            self.tombstones -= 1;
        }
        self.slots[idx] = Slot::Occupied { key, value };
        self.len += 1;
        None
    }

    /// Gets a reference to the value for a key, or
    /// [`BucketError::KeyNotFound`]
    pub fn get<Q>(&self, key: &Q) -> Result<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key) {
            Probe::Found(idx) => match &self.slots[idx] {
                Slot::Occupied { value, .. } => Ok(value),
                _ => unreachable!("probe returned Found for a non-occupied slot"),
            },
            Probe::Absent(_) => Err(BucketError::KeyNotFound),
        }
    }

    /// Gets a mutable reference to the value for a key
    pub fn get_mut<Q>(&mut self, key: &Q) -> Result<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key) {
            Probe::Found(idx) => match &mut self.slots[idx] {
                Slot::Occupied { value, .. } => Ok(value),
                _ => unreachable!("probe returned Found for a non-occupied slot"),
            },
            Probe::Absent(_) => Err(BucketError::KeyNotFound),
        }
    }

    /// Whether the map contains the key
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        matches!(self.probe(key), Probe::Found(_))
    }

    /// Removes a key, returning its value if it was present
    ///
    /// The slot becomes a tombstone so other keys' probe sequences stay
    /// unbroken.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.probe(key) {
            Probe::Found(idx) => {
                let slot = mem::replace(&mut self.slots[idx], Slot::Tombstone);
                self.len -= 1;
                self.tombstones += 1;
                match slot {
                    Slot::Occupied { value, .. } => Some(value),
                    _ => unreachable!("probe returned Found for a non-occupied slot"),
                }
            }
            Probe::Absent(_) => None,
        }
    }

    /// Removes all entries and tombstones, keeping the current slot count
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Vacant;
        }
        self.len = 0;
        self.tombstones = 0;
    }

    /// Returns an iterator over key-value pairs in slot order
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Snapshot of all keys at call time
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

impl<K, V, S> Default for LinearProbeHashMap<K, V, S>
where
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, S> fmt::Debug for LinearProbeHashMap<K, V, S>
where
    K: fmt::Debug + Hash + Eq,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Iterator over key-value pairs of a [`LinearProbeHashMap`]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied { key, value } = slot {
                self.remaining -= 1;
                return Some((key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}
