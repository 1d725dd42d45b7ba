//! Frequency-analysis helpers built on the chained hash map
//!
//! Small text/collection utilities that put [`ChainedHashMap`] through its
//! typical workload: counting occurrences and answering membership-style
//! questions off the counts.

use crate::hash_map::ChainedHashMap;
use std::hash::Hash;

/// Counts how often each item occurs in `items`
///
/// # Examples
///
/// ```rust
/// use bucketchain::algorithms::count_frequencies;
///
/// let counts = count_frequencies(&[1, 2, 2, 3, 2]);
/// assert_eq!(counts.get(&2), Ok(&3));
/// assert_eq!(counts.len(), 3);
/// ```
pub fn count_frequencies<T>(items: &[T]) -> ChainedHashMap<T, usize>
where
    T: Hash + Eq + Clone,
{
    let mut counts = ChainedHashMap::new();
    for item in items {
        *counts.get_or_default(item.clone()) += 1;
    }
    counts
}

/// Finds the first character of `text` that occurs exactly once
///
/// Two passes: count every character, then rescan in text order for the
/// first with count one.
pub fn first_non_repeating_char(text: &str) -> Option<char> {
    let mut counts: ChainedHashMap<char, usize> = ChainedHashMap::new();
    for ch in text.chars() {
        *counts.get_or_default(ch) += 1;
    }
    text.chars().find(|ch| counts.get(ch) == Ok(&1))
}

/// Whether `a` and `b` contain exactly the same characters with the same
/// multiplicities
pub fn are_anagrams(a: &str, b: &str) -> bool {
    if a.chars().count() != b.chars().count() {
        return false;
    }

    let mut counts: ChainedHashMap<char, usize> = ChainedHashMap::new();
    for ch in a.chars() {
        *counts.get_or_default(ch) += 1;
    }
    for ch in b.chars() {
        match counts.get_mut(&ch) {
            Ok(count) => {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&ch);
                }
            }
            Err(_) => return false,
        }
    }
    counts.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_frequencies() {
        let counts = count_frequencies(&["a", "b", "a", "c", "a", "b"]);
        assert_eq!(counts.get(&"a"), Ok(&3));
        assert_eq!(counts.get(&"b"), Ok(&2));
        assert_eq!(counts.get(&"c"), Ok(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_count_frequencies_empty() {
        let counts = count_frequencies::<i32>(&[]);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_first_non_repeating_char() {
        assert_eq!(first_non_repeating_char("swiss"), Some('w'));
        assert_eq!(first_non_repeating_char("aabbcc"), None);
        assert_eq!(first_non_repeating_char(""), None);
        assert_eq!(first_non_repeating_char("x"), Some('x'));
    }

    #[test]
    fn test_are_anagrams() {
        assert!(are_anagrams("listen", "silent"));
        assert!(are_anagrams("", ""));
        assert!(!are_anagrams("rat", "car"));
        assert!(!are_anagrams("aab", "abb"));
        assert!(!are_anagrams("short", "longer"));
    }

    #[test]
    fn test_are_anagrams_multibyte() {
        assert!(are_anagrams("héllo", "olléh"));
        assert!(!are_anagrams("héllo", "hello"));
    }
}
