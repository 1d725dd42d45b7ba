//! # Bucketchain: Hash Tables with Load-Factor Controlled Growth
//!
//! This crate provides generic associative containers built around explicit
//! collision-resolution strategies, with predictable growth behavior.
//!
//! ## Key Features
//!
//! - **Separate Chaining**: `ChainedHashMap` keeps colliding entries in
//!   per-bucket chains; amortized O(1) insert/lookup/delete
//! - **Open Addressing**: `LinearProbeHashMap` stores entries inline with
//!   linear probing and tombstone-based deletion
//! - **Load-Factor Control**: both tables double their bucket arrays the
//!   moment an insert would cross the configured threshold, never earlier
//! - **Pluggable Hashing**: any `BuildHasher`; AHash by default
//! - **Frequency Analysis**: small algorithms layered on the maps for
//!   counting and multiset comparison workloads
//!
//! ## Quick Start
//!
//! ```rust
//! use bucketchain::{ChainedHashMap, LinearProbeHashMap};
//!
//! // Separate chaining
//! let mut map = ChainedHashMap::new();
//! map.insert("answer", 42);
//! assert_eq!(map.get("answer"), Ok(&42));
//! assert!(map.load_factor() <= map.max_load_factor());
//!
//! // Open addressing
//! let mut probed = LinearProbeHashMap::new();
//! probed.insert("answer", 42);
//! assert_eq!(probed.remove("answer"), Some(42));
//!
//! // Frequency counting on top of the chained map
//! let counts = bucketchain::algorithms::count_frequencies(&[1, 1, 2]);
//! assert_eq!(counts.get(&1), Ok(&2));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod algorithms;
pub mod error;
pub mod hash_map;

// Re-export core types
pub use error::{BucketError, Result};
pub use hash_map::{
    ChainedHashMap, ChainedHashMapConfig, LinearProbeHashMap, LinearProbeHashMapConfig,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing bucketchain v{}", VERSION);
}
