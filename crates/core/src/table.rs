//! Dense sorted relations.

use crate::error::{Error, Result};
use alloc::vec::Vec;
use core::ops::Deref;

/// The join attribute. Every relation is a set of keys.
pub type Key = i64;

/// A dense relation: a strictly increasing sequence of unique keys.
///
/// The invariant is checked once at construction, so joins can rely on it
/// without re-validating.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedTable {
    keys: Vec<Key>,
}

impl SortedTable {
    /// Creates a table from keys that are already strictly increasing.
    pub fn new(keys: Vec<Key>) -> Result<Self> {
        check_strictly_increasing(&keys)?;
        Ok(Self { keys })
    }

    /// Creates a table from keys in any order.
    ///
    /// The keys are sorted in place; duplicates are still rejected.
    pub fn from_unsorted(mut keys: Vec<Key>) -> Result<Self> {
        keys.sort_unstable();
        Self::new(keys)
    }

    /// Returns the keys in ascending order.
    #[inline]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Returns the number of keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the table holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the smallest key, if any.
    pub fn first(&self) -> Option<Key> {
        self.keys.first().copied()
    }

    /// Returns the largest key, if any.
    pub fn last(&self) -> Option<Key> {
        self.keys.last().copied()
    }

    /// Consumes the table and returns its keys.
    pub fn into_keys(self) -> Vec<Key> {
        self.keys
    }
}

impl Deref for SortedTable {
    type Target = [Key];

    fn deref(&self) -> &[Key] {
        &self.keys
    }
}

impl AsRef<[Key]> for SortedTable {
    fn as_ref(&self) -> &[Key] {
        &self.keys
    }
}

impl TryFrom<Vec<Key>> for SortedTable {
    type Error = Error;

    fn try_from(keys: Vec<Key>) -> Result<Self> {
        Self::new(keys)
    }
}

fn check_strictly_increasing(keys: &[Key]) -> Result<()> {
    for (i, pair) in keys.windows(2).enumerate() {
        if pair[0] >= pair[1] {
            return Err(Error::not_sorted(i + 1, pair[0], pair[1]));
        }
    }
    Ok(())
}
