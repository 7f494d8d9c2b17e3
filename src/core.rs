//! Core trait for slicekit.
//!
//! This module defines [`Sequence`]: the minimal indexed-container
//! abstraction every operation in this crate is generic over.

use std::collections::VecDeque;

/// A trait for positional read access into an ordered container.
///
/// Positions run from `0` to `len() - 1`. Implementing this trait is all it
/// takes to use a custom container (a columnar buffer, an offset-indexed
/// arena) with every operation in this crate, without copying the underlying
/// data into a `Vec` first.
///
/// `get` is allowed to panic on an out-of-range position; the operations in
/// this crate only call it with positions they have validated against
/// `len()`.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use slicekit::core::Sequence;
///
/// struct Repeated {
///     value: i32,
///     times: usize,
/// }
///
/// impl Sequence for Repeated {
///     type Item = i32;
///
///     fn get(&self, _index: usize) -> &i32 {
///         &self.value
///     }
///
///     fn len(&self) -> usize {
///         self.times
///     }
/// }
/// ```
pub trait Sequence {
    /// The element type stored in the container.
    type Item;

    /// Returns a reference to the element at the given position.
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns the number of elements in the container.
    fn len(&self) -> usize;

    /// Returns `true` if the container is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Blanket implementation for slices.
impl<T> Sequence for [T] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so every operation stays within its
// documented complexity.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Fixed-size arrays get the slice behavior without an explicit deref.
impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        N
    }
}
