//! Order-preserving deduplication.
//!
//! All three variants keep the *first* occurrence of each distinct value or
//! key and drop every later one, so output order is always the order of
//! first appearance in the input. The hash-based variant trades the
//! quadratic membership scan for a `HashSet` but must produce the exact
//! same output as the equality-only variant for any key type implementing
//! both bounds.

use crate::core::Sequence;
use std::collections::HashSet;
use std::hash::Hash;

/// Returns the distinct values of the container, each exactly once, in
/// first-occurrence order.
///
/// Equality is the element type's `PartialEq`, so only that bound is
/// required; the membership check is a linear scan of the output, making
/// this O(n²). For hashable keys prefer [`dedup_by_hash_key`] with an
/// identity extractor on large inputs.
///
/// Idempotent: deduplicating an already-deduplicated container returns it
/// unchanged.
///
/// # Examples
///
/// ```
/// use slicekit::dedup_by_value;
///
/// let data = vec![1, 2, 2, 3, 4, 5];
/// assert_eq!(dedup_by_value(&data), vec![1, 2, 3, 4, 5]);
///
/// let data = vec!["h", "e", "l", "l", "o"];
/// assert_eq!(dedup_by_value(&data), vec!["h", "e", "l", "o"]);
/// ```
pub fn dedup_by_value<S>(seq: &S) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone + PartialEq,
{
    let mut result: Vec<S::Item> = Vec::new();
    for i in 0..seq.len() {
        let item = seq.get(i);
        if !result.contains(item) {
            result.push(item.clone());
        }
    }
    result
}

/// Returns the elements whose derived keys are distinct, keeping the first
/// element encountered for each key, in first-occurrence order.
///
/// The key type only needs `PartialEq`; uniqueness is checked with a
/// linear scan over the keys kept so far (O(n²)).
///
/// # Examples
///
/// ```
/// use slicekit::dedup_by_key;
///
/// let data = vec![(1, "a"), (2, "b"), (1, "c")];
/// assert_eq!(dedup_by_key(&data, |p| p.0), vec![(1, "a"), (2, "b")]);
/// ```
pub fn dedup_by_key<S, K, F>(seq: &S, key: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: PartialEq,
    F: Fn(&S::Item) -> K,
{
    let mut result: Vec<S::Item> = Vec::new();
    let mut seen: Vec<K> = Vec::new();

    for i in 0..seq.len() {
        let item = seq.get(i);
        let k = key(item);
        if !seen.contains(&k) {
            seen.push(k);
            result.push(item.clone());
        }
    }
    result
}

/// Same contract as [`dedup_by_key`], but uses a hash set for membership,
/// bringing the cost down to O(n).
///
/// # Examples
///
/// ```
/// use slicekit::dedup_by_hash_key;
///
/// let data = vec!["apple", "avocado", "banana", "cherry"];
/// let firsts = dedup_by_hash_key(&data, |s| s.as_bytes()[0]);
///
/// assert_eq!(firsts, vec!["apple", "banana", "cherry"]);
/// ```
pub fn dedup_by_hash_key<S, K, F>(seq: &S, key: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Hash + Eq,
    F: Fn(&S::Item) -> K,
{
    let mut seen = HashSet::new();
    let mut result = Vec::new();

    for i in 0..seq.len() {
        let item = seq.get(i);
        if seen.insert(key(item)) {
            result.push(item.clone());
        }
    }
    result
}
