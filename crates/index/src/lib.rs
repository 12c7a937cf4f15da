//! Leapjoin Index - Ordered index structures for leapjoin relations.
//!
//! - `KeyIndex`: a relation held in a balanced ordered set, with native
//!   lower-bound lookup
//!
//! # Example
//!
//! ```rust
//! use leapjoin_core::SortedTable;
//! use leapjoin_index::KeyIndex;
//!
//! let table = SortedTable::new(vec![10, 20, 30]).unwrap();
//! let index = KeyIndex::from_table(&table);
//!
//! assert!(index.contains(20));
//! assert_eq!(index.lower_bound(15).next(), Some(&20));
//! ```

#![no_std]

extern crate alloc;

mod ordered;

pub use ordered::KeyIndex;
