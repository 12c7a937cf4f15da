//! Ordered key index.
//!
//! A relation loaded into a balanced ordered set. Unlike a dense table, it
//! answers lower-bound queries without scanning the keys in between.

use alloc::collections::btree_set::{self, BTreeSet};
use leapjoin_core::{Error, Key, Result, SortedTable};

/// An ordered index over the keys of one relation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyIndex {
    keys: BTreeSet<Key>,
}

impl KeyIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self {
            keys: BTreeSet::new(),
        }
    }

    /// Builds an index holding every key of a dense table.
    pub fn from_table(table: &SortedTable) -> Self {
        Self {
            keys: table.iter().copied().collect(),
        }
    }

    /// Builds an index from keys in any order, rejecting duplicates.
    pub fn try_from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = Key>,
    {
        let mut index = Self::new();
        for key in keys {
            index.insert(key)?;
        }
        Ok(index)
    }

    /// Inserts a key. Fails if the key is already present.
    pub fn insert(&mut self, key: Key) -> Result<()> {
        if !self.keys.insert(key) {
            return Err(Error::duplicate_key(key));
        }
        Ok(())
    }

    /// Checks if the index contains the given key.
    pub fn contains(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    /// Returns the number of keys in the index.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if the index is empty.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the smallest key.
    pub fn min(&self) -> Option<Key> {
        self.keys.first().copied()
    }

    /// Returns the largest key.
    pub fn max(&self) -> Option<Key> {
        self.keys.last().copied()
    }

    /// Iterates over all keys in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Iterates over the keys `>= target` in ascending order.
    ///
    /// The first item is the lower bound of `target`.
    pub fn lower_bound(&self, target: Key) -> btree_set::Range<'_, Key> {
        self.keys.range(target..)
    }
}

impl<'a> IntoIterator for &'a KeyIndex {
    type Item = &'a Key;
    type IntoIter = btree_set::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<&SortedTable> for KeyIndex {
    fn from(table: &SortedTable) -> Self {
        Self::from_table(table)
    }
}
