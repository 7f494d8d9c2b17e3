//! # Slicekit
//!
//! `slicekit` is a small library of order-preserving utilities for indexed
//! collections: bounds-safe access, fixed-size chunking, predicate
//! partitioning, first-occurrence deduplication, and stable keyed sorts.
//!
//! Every operation is a pure, single-call transformation: no shared state,
//! no I/O, no panics on user input. Invalid positions, unrealizable
//! ranges, and degenerate chunk sizes are signaled with `None` so callers
//! can chain lookups without pre-validating anything.
//!
//! ## Key Features
//!
//! - **Absence over panics**: out-of-range access and degenerate input
//!   return `None`; nothing in the public API faults on bad positions.
//! - **Order you can rely on**: dedup keeps first occurrences in input
//!   order, sorts are stable in both directions, and chunking accounts for
//!   every element exactly once.
//! - **Generic containers**: the [`Sequence`] trait (length + positional
//!   access) lets the same operations run over `Vec`s, slices, arrays,
//!   `VecDeque`s, or any custom indexed container without copying it
//!   first.
//! - **Reference-order sorting**: [`sorted_like`] reorders one collection
//!   to match the key order of another, with a defined policy for keys
//!   missing from the reference.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use slicekit::{chunk, dedup_by_value, element_at};
//!
//! let data = vec![0, 2, 4, 7, 6];
//!
//! assert_eq!(element_at(&data, 2), Some(&4));
//! assert_eq!(element_at(&data, 9), None);
//!
//! assert_eq!(chunk(&data, 2), Some(vec![vec![0, 2], vec![4, 7], vec![6]]));
//!
//! assert_eq!(dedup_by_value(&vec![1, 2, 2, 3, 4, 5]), vec![1, 2, 3, 4, 5]);
//! ```
//!
//! ### Custom Containers
//!
//! To run these operations over a custom data structure without building an
//! intermediate `Vec`, implement the [`Sequence`] trait.
//!
//! ```rust
//! use slicekit::{dedup_by_value, Sequence};
//!
//! struct Readings {
//!     samples: Vec<u16>,
//! }
//!
//! impl Sequence for Readings {
//!     type Item = u16;
//!
//!     fn get(&self, index: usize) -> &u16 {
//!         &self.samples[index]
//!     }
//!
//!     fn len(&self) -> usize {
//!         self.samples.len()
//!     }
//! }
//!
//! let readings = Readings { samples: vec![3, 3, 9, 3] };
//! assert_eq!(dedup_by_value(&readings), vec![3, 9]);
//! ```
//!
//! ## Performance Characteristics
//!
//! - Access, chunking, and partitioning are O(n) (O(1) for single-element
//!   access).
//! - Sorts are O(n log n), stable, built on `slice::sort_by`.
//! - Dedup is O(n²) for the equality-only variants (matching the scan the
//!   contract is defined by) and O(n) for [`dedup_by_hash_key`].
//!
//! All outputs are plain owned values; no operation hands back pointers
//! into internal structures or holds resources across calls.

pub mod access;
pub mod chunk;
pub mod core;
pub mod dedup;
pub mod sort;
pub mod text;

pub use access::{element_at, element_at_offset, slice_in_range, try_swap};
pub use chunk::{chunk, for_each_chunk, partition};
pub use core::Sequence;
pub use dedup::{dedup_by_hash_key, dedup_by_key, dedup_by_value};
pub use sort::{sort_by_key_mut, sorted_by_key, sorted_by_optional_key, sorted_like};
pub use text::{char_at, slice_chars, slicing};

pub mod prelude {
    pub use crate::access::{element_at, element_at_offset, slice_in_range, try_swap};
    pub use crate::chunk::{chunk, for_each_chunk, partition};
    pub use crate::core::Sequence;
    pub use crate::dedup::{dedup_by_hash_key, dedup_by_key, dedup_by_value};
    pub use crate::sort::{sort_by_key_mut, sorted_by_key, sorted_by_optional_key, sorted_like};
    pub use crate::text::{char_at, slice_chars, slicing};
}
