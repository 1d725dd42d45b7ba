//! Hash table implementations
//!
//! This module provides two structurally distinct associative containers:
//! - `ChainedHashMap`: separate chaining, one growable chain per bucket
//! - `LinearProbeHashMap`: open addressing with linear probing and
//!   tombstone-based deletion
//!
//! Both share the same hashing scheme (AHash by default, pluggable via
//! `BuildHasher`), the same doubling growth policy, and the same operation
//! surface; they differ in how colliding keys coexist.

mod chained;
mod hash_functions;
mod linear_probe;

pub use chained::{ChainedHashMap, ChainedHashMapConfig, Iter as ChainedIter};
pub use linear_probe::{Iter as LinearProbeIter, LinearProbeHashMap, LinearProbeHashMapConfig};

pub use hash_functions::{
    bucket_index, exceeds_load_factor, grown_bucket_count, hash_one, DEFAULT_BUCKET_COUNT,
    DEFAULT_CHAIN_LOAD_FACTOR, DEFAULT_PROBE_LOAD_FACTOR,
};
