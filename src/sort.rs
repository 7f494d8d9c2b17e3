//! Stable keyed sorts and reference-order sorting.
//!
//! Stability is part of the contract here, not an implementation detail:
//! callers layer multi-key sorts by applying these functions repeatedly and
//! rely on equal keys preserving input order. Everything is built on
//! `slice::sort_by`, which the standard library guarantees to be stable.

use crate::core::Sequence;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

/// Returns a new `Vec` with the elements reordered so their derived keys
/// are in ascending (or descending) order.
///
/// Elements with equal keys keep their relative input order in both
/// directions.
///
/// # Examples
///
/// ```
/// use slicekit::sorted_by_key;
///
/// let data = vec![("b", 2), ("a", 1), ("c", 3)];
///
/// let by_name = sorted_by_key(&data, |p| p.0, true);
/// assert_eq!(by_name, vec![("a", 1), ("b", 2), ("c", 3)]);
///
/// let by_rank_desc = sorted_by_key(&data, |p| p.1, false);
/// assert_eq!(by_rank_desc, vec![("c", 3), ("b", 2), ("a", 1)]);
/// ```
pub fn sorted_by_key<S, K, F>(seq: &S, key: F, ascending: bool) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Ord,
    F: Fn(&S::Item) -> K,
{
    let mut result: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();
    sort_by_key_mut(&mut result, key, ascending);
    result
}

/// In-place variant of [`sorted_by_key`] for mutable slices.
///
/// # Examples
///
/// ```
/// use slicekit::sort_by_key_mut;
///
/// let mut data = vec![3, 1, 2];
/// sort_by_key_mut(&mut data, |&n| n, true);
///
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn sort_by_key_mut<T, K, F>(data: &mut [T], key: F, ascending: bool)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    // Reversing the comparison (not the slice) keeps the sort stable in
    // the descending direction too.
    data.sort_by(|a, b| {
        let ord = key(a).cmp(&key(b));
        if ascending { ord } else { ord.reverse() }
    });
}

/// Like [`sorted_by_key`], but the extractor may yield no key for some
/// elements.
///
/// Elements without a key sink to the end regardless of direction, and
/// keep their relative input order among themselves.
///
/// # Examples
///
/// ```
/// use slicekit::sorted_by_optional_key;
///
/// let data = vec![Some(3), None, Some(1), None, Some(2)];
/// let sorted = sorted_by_optional_key(&data, |v| *v, true);
///
/// assert_eq!(sorted, vec![Some(1), Some(2), Some(3), None, None]);
/// ```
pub fn sorted_by_optional_key<S, K, F>(seq: &S, key: F, ascending: bool) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Ord,
    F: Fn(&S::Item) -> Option<K>,
{
    let mut result: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();
    result.sort_by(|a, b| match (key(a), key(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(ka), Some(kb)) => {
            let ord = ka.cmp(&kb);
            if ascending { ord } else { ord.reverse() }
        }
    });
    result
}

/// Reorders the container so its elements' keys follow the order in which
/// those keys appear in `reference`.
///
/// A position map is built from `reference` first (the first occurrence of
/// a duplicated key wins). Elements whose key does not appear in
/// `reference` sort after all matched elements and keep their relative
/// input order among themselves.
///
/// # Examples
///
/// ```
/// use slicekit::sorted_like;
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Step { id: u32 }
///
/// let steps = vec![Step { id: 1 }, Step { id: 2 }, Step { id: 3 }];
/// let ordered = sorted_like(&steps, &[3, 1, 2], |s| s.id);
///
/// assert_eq!(ordered, vec![Step { id: 3 }, Step { id: 1 }, Step { id: 2 }]);
/// ```
pub fn sorted_like<S, K, F>(seq: &S, reference: &[K], key: F) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    K: Hash + Eq,
    F: Fn(&S::Item) -> K,
{
    let mut positions: HashMap<&K, usize> = HashMap::with_capacity(reference.len());
    for (offset, k) in reference.iter().enumerate() {
        positions.entry(k).or_insert(offset);
    }

    let mut result: Vec<S::Item> = (0..seq.len()).map(|i| seq.get(i).clone()).collect();
    result.sort_by(|a, b| {
        match (positions.get(&key(a)), positions.get(&key(b))) {
            // Two unmatched elements tie; the stable sort keeps their
            // input order.
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(pa), Some(pb)) => pa.cmp(pb),
        }
    });
    result
}
