//! Leapjoin Join - Multi-way equi-join of sorted relations.
//!
//! This crate provides:
//!
//! - `cursor`: The `SortedCursor` capability trait and its two backends,
//!   `SliceCursor` (dense sorted sequence) and `IndexCursor` (ordered index)
//! - `leapfrog`: The leapfrog triejoin over any set of cursors
//! - `hash`: The hash-join baseline used to cross-validate results
//!
//! # Example
//!
//! ```rust
//! use leapjoin_join::{LeapfrogJoin, SliceCursor};
//!
//! let a = [0, 1, 2, 3];
//! let b = [1, 2, 3, 4];
//! let c = [2, 3, 4, 5];
//!
//! let join = LeapfrogJoin::new(vec![
//!     SliceCursor::new(&a),
//!     SliceCursor::new(&b),
//!     SliceCursor::new(&c),
//! ]);
//! assert_eq!(join.collect::<Vec<_>>(), vec![2, 3]);
//! ```

#![no_std]

extern crate alloc;

pub mod cursor;
pub mod hash;
pub mod leapfrog;

pub use cursor::{IndexCursor, SliceCursor, SortedCursor};
pub use hash::{hash_join, hash_join_count};
pub use leapfrog::{leapfrog_count, leapfrog_count_unsorted, LeapfrogJoin};
