//! Leapfrog triejoin.
//!
//! Intersects N sorted relations by keeping their cursors in a ring ordered
//! by current key. The cursor after `pos` always holds the smallest key and
//! the cursor at `pos` the largest. Each step either seeks the smallest
//! cursor up to the largest key, or, when the two are already equal, reports
//! the key (every cursor in between must hold it too) and steps past it.

use crate::cursor::{SliceCursor, SortedCursor};
use alloc::vec::Vec;
use core::iter::FusedIterator;
use leapjoin_core::Key;

/// Leapfrog join over a set of sorted cursors.
///
/// Yields every key present in all relations, in ascending order. The join
/// owns its cursors until it is dropped; each cursor only ever moves forward.
pub struct LeapfrogJoin<C> {
    cursors: Vec<C>,
    /// Slot holding the largest current key.
    pos: usize,
    done: bool,
}

impl<C: SortedCursor> LeapfrogJoin<C> {
    /// Creates a join over `cursors`, each positioned on its first key.
    ///
    /// # Panics
    ///
    /// Panics if fewer than two cursors are given.
    pub fn new(mut cursors: Vec<C>) -> Self {
        assert!(
            cursors.len() >= 2,
            "leapfrog join needs at least 2 relations, got {}",
            cursors.len()
        );

        let done = cursors.iter().any(|c| c.exhausted());
        if !done {
            cursors.sort_by_key(|c| c.current());
        }
        let pos = cursors.len() - 1;

        Self { cursors, pos, done }
    }

    /// Returns the number of relations being joined.
    pub fn arity(&self) -> usize {
        self.cursors.len()
    }

    /// Returns true once some cursor is exhausted and no more keys follow.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Consumes the join and returns its cursors, in ring order.
    pub fn into_cursors(self) -> Vec<C> {
        self.cursors
    }

    fn finish(&mut self) {
        self.done = true;
        tracing::trace!(relations = self.cursors.len(), "leapfrog join exhausted");
    }
}

impl<C: SortedCursor> Iterator for LeapfrogJoin<C> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.done {
            return None;
        }

        let n = self.cursors.len();
        loop {
            let val = self.cursors[self.pos].current();
            self.pos = (self.pos + 1) % n;
            let cursor = &mut self.cursors[self.pos];

            if cursor.current() == val {
                // Smallest equals largest: all relations hold `val`.
                cursor.advance();
                if cursor.exhausted() {
                    self.finish();
                }
                return Some(val);
            }

            cursor.seek(val);
            if cursor.exhausted() {
                self.finish();
                return None;
            }
        }
    }
}

impl<C: SortedCursor> FusedIterator for LeapfrogJoin<C> {}

/// Counts the keys common to all relations behind `cursors`.
pub fn leapfrog_count<C: SortedCursor>(cursors: Vec<C>) -> usize {
    let relations = cursors.len();
    let hits = LeapfrogJoin::new(cursors).count();
    tracing::debug!(relations, hits, "leapfrog join complete");
    hits
}

/// Sorts each dense relation in place, then counts the keys common to all.
///
/// Each table must hold unique keys; only their order may be arbitrary.
pub fn leapfrog_count_unsorted<T: AsMut<[Key]>>(tables: &mut [T]) -> usize {
    for table in tables.iter_mut() {
        table.as_mut().sort_unstable();
    }
    let cursors = tables
        .iter_mut()
        .map(|table| SliceCursor::new(table.as_mut()))
        .collect();
    leapfrog_count(cursors)
}
