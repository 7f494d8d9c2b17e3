//! Chunking and partitioning.
//!
//! Both operations are single-pass and account for every input element
//! exactly once: chunk boundaries are `[0, size)`, `[size, 2*size)`, and so
//! on until the container is exhausted, and partitioning routes each element
//! into exactly one of the two outputs.

use crate::core::Sequence;

/// Splits the container into contiguous groups of `size` elements; the last
/// group holds the remainder when the length is not evenly divisible.
///
/// Returns `None` when `size == 0` or the container is empty. These are
/// degenerate inputs ("no grouping possible"), not errors. Concatenating
/// the returned groups in order reproduces the input exactly.
///
/// # Examples
///
/// ```
/// use slicekit::chunk;
///
/// let data = vec![0, 2, 4, 7];
/// assert_eq!(chunk(&data, 2), Some(vec![vec![0, 2], vec![4, 7]]));
///
/// let data = vec![0, 2, 4, 7, 6];
/// assert_eq!(chunk(&data, 2), Some(vec![vec![0, 2], vec![4, 7], vec![6]]));
///
/// assert_eq!(chunk(&data, 0), None);
/// assert_eq!(chunk(&Vec::<i32>::new(), 2), None);
/// ```
pub fn chunk<S>(seq: &S, size: usize) -> Option<Vec<Vec<S::Item>>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    let len = seq.len();
    if size == 0 || len == 0 {
        return None;
    }

    let mut groups = Vec::with_capacity(len.div_ceil(size));
    let mut start = 0;
    while start < len {
        let end = (start + size).min(len);
        groups.push((start..end).map(|i| seq.get(i).clone()).collect());
        start = end;
    }
    Some(groups)
}

/// Invokes `action` once per chunk, in order, using the same boundaries as
/// [`chunk`] but without materializing the full result.
///
/// A single scratch buffer is reused across invocations, so the slice
/// passed to `action` is only valid for the duration of that call. When
/// `size == 0` or the container is empty, `action` is never invoked.
///
/// # Examples
///
/// ```
/// use slicekit::for_each_chunk;
///
/// let data = vec![0, 2, 4, 7, 6];
/// let mut seen = Vec::new();
///
/// for_each_chunk(&data, 2, |group| seen.push(group.to_vec()));
///
/// assert_eq!(seen, vec![vec![0, 2], vec![4, 7], vec![6]]);
/// ```
pub fn for_each_chunk<S, F>(seq: &S, size: usize, mut action: F)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&[S::Item]),
{
    let len = seq.len();
    if size == 0 || len == 0 {
        return;
    }

    let mut scratch = Vec::with_capacity(size.min(len));
    let mut start = 0;
    while start < len {
        let end = (start + size).min(len);
        scratch.clear();
        scratch.extend((start..end).map(|i| seq.get(i).clone()));
        action(&scratch);
        start = end;
    }
}

/// Splits the container into two groups by a predicate: elements for which
/// `predicate` returns `true` land in the first output, the rest in the
/// second.
///
/// Both outputs preserve the input's relative order, every element is
/// routed exactly once, and the predicate runs exactly once per element,
/// left to right. This operation always succeeds.
///
/// # Examples
///
/// ```
/// use slicekit::partition;
///
/// let data = vec![1, 2, 3, 4, 5, 6];
/// let (even, odd) = partition(&data, |n| n % 2 == 0);
///
/// assert_eq!(even, vec![2, 4, 6]);
/// assert_eq!(odd, vec![1, 3, 5]);
/// ```
pub fn partition<S, F>(seq: &S, mut predicate: F) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    F: FnMut(&S::Item) -> bool,
{
    let mut matching = Vec::new();
    let mut non_matching = Vec::new();

    for i in 0..seq.len() {
        let item = seq.get(i);
        if predicate(item) {
            matching.push(item.clone());
        } else {
            non_matching.push(item.clone());
        }
    }

    (matching, non_matching)
}
