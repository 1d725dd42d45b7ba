//! Algorithms layered on top of the hash containers
//!
//! Application-level helpers that exercise the maps the way downstream code
//! does; currently frequency analysis over slices and strings.

pub mod frequency;

pub use frequency::{are_anagrams, count_frequencies, first_non_repeating_char};
