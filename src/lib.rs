//! A fixed-universe set of small integers backed by a bit vector.
//!
//! This crate provides [`FixedBitSet`], a set whose members are drawn from
//! `0..universe_size`, where the universe is chosen once at construction. One
//! bit of a preallocated word buffer represents each possible member, so the
//! hot operations never allocate.
//!
//! # Features
//!
//! - **O(1)** membership test, insertion and removal
//! - **Word-parallel** union, intersection, complement, copy and emptiness
//!   checks, linear in the number of storage words rather than members
//! - **Ascending iteration** in O(words + members)
//! - **Generic** over the element type (`u8` to `usize`) and the storage word
//!   (`u8` to `u128`)
//! - **`no_std` support** with `alloc`
//!
//! # Examples
//!
//! ```
//! use fixed_bitset::FixedBitSet;
//!
//! // Automaton states 0..10
//! let mut a = FixedBitSet::<u32, u32>::new(10)?;
//! let mut b = FixedBitSet::<u32, u32>::new(10)?;
//! a.extend([1, 2, 3]);
//! b.extend([3, 4, 5]);
//!
//! let mut both = a.clone();
//! both.intersect_with(&b);
//! assert_eq!(both.iter().collect::<Vec<_>>(), [3]);
//!
//! a.union_with(&b);
//! assert_eq!(a.iter().collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
//! # Ok::<(), fixed_bitset::AllocError>(())
//! ```
//!
//! # Preconditions
//!
//! Passing an element outside the universe, or combining sets over different
//! universes, is a caller bug rather than a recoverable error. These
//! contracts are asserted in debug builds, and in release builds when the
//! `checked` feature is enabled. Allocation failure, on the other hand, is
//! reported as an [`AllocError`].
//!
//! # Feature flags
//!
//! - `std` (default): implements [`std::error::Error`] for [`AllocError`]
//! - `checked`: keeps precondition assertions in optimized builds

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

// Module declarations
pub mod bits;
mod bitset;
mod iter;
mod macros;
mod set_ops;
mod traits;
pub mod word;

// Re-exports
pub use bitset::{FixedBitSet, FixedBitSet32, FixedBitSet64};
pub use iter::Members;
pub use traits::AllocError;
pub use word::{Element, Word};
