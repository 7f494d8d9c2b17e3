//! Bounds-safe positional access.
//!
//! Every accessor here signals an invalid position with `None` instead of
//! panicking, so callers can chain lookups without pre-validating indices.
//! The one mutating helper, [`try_swap`], reports invalid input through its
//! return value and leaves the slice untouched.

use crate::core::Sequence;
use std::ops::Range;

/// Returns the element at `index`, or `None` if the position is out of
/// range.
///
/// # Examples
///
/// ```
/// use slicekit::element_at;
///
/// let data = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(element_at(&data, 1), Some(&2));
/// assert_eq!(element_at(&data, 10), None);
/// ```
pub fn element_at<S: Sequence + ?Sized>(seq: &S, index: usize) -> Option<&S::Item> {
    if index < seq.len() {
        Some(seq.get(index))
    } else {
        None
    }
}

/// Returns the elements at positions `[range.start, range.end)` as a new
/// `Vec`, or `None` if the requested span does not fit entirely within the
/// container.
///
/// The whole span must be realizable: a range whose end overruns the
/// container yields `None`, never a truncated best-effort slice. An empty
/// in-bounds range yields `Some(vec![])`.
///
/// # Examples
///
/// ```
/// use slicekit::slice_in_range;
///
/// let data = vec!['a', 'b', 'c', 'd', 'e'];
///
/// assert_eq!(slice_in_range(&data, 2..4), Some(vec!['c', 'd']));
/// assert_eq!(slice_in_range(&data, 6..11), None);
/// assert_eq!(slice_in_range(&data, 3..9), None);
/// ```
pub fn slice_in_range<S>(seq: &S, range: Range<usize>) -> Option<Vec<S::Item>>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
{
    if range.start > range.end || range.end > seq.len() {
        return None;
    }

    Some(range.map(|i| seq.get(i).clone()).collect())
}

/// Returns the element at a signed offset: non-negative offsets count from
/// the front, negative offsets from the back (`-1` is the last element).
///
/// Returns `None` when the offset falls outside the container in either
/// direction.
///
/// # Examples
///
/// ```
/// use slicekit::element_at_offset;
///
/// let data = vec![1, 2, 3, 4, 5];
///
/// assert_eq!(element_at_offset(&data, 1), Some(&2));
/// assert_eq!(element_at_offset(&data, -2), Some(&4));
/// assert_eq!(element_at_offset(&data, -6), None);
/// ```
pub fn element_at_offset<S: Sequence + ?Sized>(seq: &S, offset: isize) -> Option<&S::Item> {
    let len = seq.len();
    let index = if offset >= 0 {
        offset as usize
    } else {
        len.checked_sub(offset.unsigned_abs())?
    };

    if index < len {
        Some(seq.get(index))
    } else {
        None
    }
}

/// Swaps the elements at positions `i` and `j` if both are in bounds.
///
/// Returns `true` when both positions are valid (including `i == j`, which
/// swaps nothing), `false` when either is out of range. An out-of-range
/// call never mutates the slice.
///
/// # Examples
///
/// ```
/// use slicekit::try_swap;
///
/// let mut data = vec![1, 2, 3, 4, 5];
///
/// assert!(try_swap(&mut data, 3, 0));
/// assert_eq!(data, vec![4, 2, 3, 1, 5]);
///
/// assert!(!try_swap(&mut data, 1, 10));
/// assert_eq!(data, vec![4, 2, 3, 1, 5]);
/// ```
pub fn try_swap<T>(data: &mut [T], i: usize, j: usize) -> bool {
    if i >= data.len() || j >= data.len() {
        return false;
    }
    if i != j {
        data.swap(i, j);
    }
    true
}
