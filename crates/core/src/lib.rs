//! Leapjoin Core - Key and relation types shared by the leapjoin crates.
//!
//! This crate provides the foundational types for the join engine:
//!
//! - `Key`: The integer join attribute
//! - `SortedTable`: A dense relation, a strictly increasing sequence of keys
//! - `Error`: Error types for relation construction and configuration
//!
//! # Example
//!
//! ```rust
//! use leapjoin_core::SortedTable;
//!
//! let table = SortedTable::new(vec![1, 4, 9]).unwrap();
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.keys(), &[1, 4, 9]);
//!
//! // Unsorted input is rejected
//! assert!(SortedTable::new(vec![3, 2]).is_err());
//! ```

#![no_std]

extern crate alloc;

mod error;
mod table;

pub use error::{Error, Result};
pub use table::{Key, SortedTable};
