//! Sorted cursors.
//!
//! A cursor is a forward-only view over one relation. The leapfrog join only
//! talks to relations through the `SortedCursor` trait, so the same algorithm
//! runs over a dense slice or an ordered index.

use alloc::boxed::Box;
use alloc::collections::btree_set;
use leapjoin_core::Key;
use leapjoin_index::KeyIndex;

/// Forward-only cursor over a strictly increasing sequence of keys.
///
/// A cursor starts on the first key of its relation, or exhausted if the
/// relation is empty. `current` and `advance` must not be called once the
/// cursor is exhausted; implementations panic if they are.
pub trait SortedCursor {
    /// Returns the key at the current position.
    fn current(&self) -> Key;

    /// Returns true once the cursor has moved past the last key.
    fn exhausted(&self) -> bool;

    /// Moves to the next key.
    fn advance(&mut self);

    /// Moves forward to the first key `>= target`, or to exhaustion.
    ///
    /// A target at or below the current key leaves the cursor in place.
    fn seek(&mut self, target: Key);
}

impl<C: SortedCursor + ?Sized> SortedCursor for Box<C> {
    #[inline]
    fn current(&self) -> Key {
        (**self).current()
    }

    #[inline]
    fn exhausted(&self) -> bool {
        (**self).exhausted()
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }

    #[inline]
    fn seek(&mut self, target: Key) {
        (**self).seek(target)
    }
}

impl<C: SortedCursor + ?Sized> SortedCursor for &mut C {
    #[inline]
    fn current(&self) -> Key {
        (**self).current()
    }

    #[inline]
    fn exhausted(&self) -> bool {
        (**self).exhausted()
    }

    #[inline]
    fn advance(&mut self) {
        (**self).advance()
    }

    #[inline]
    fn seek(&mut self, target: Key) {
        (**self).seek(target)
    }
}

/// Cursor over a dense sorted slice.
///
/// `seek` is a forward linear scan. Generated tables have small, evenly
/// spread gaps, so the target is usually a few slots away.
#[derive(Clone, Debug)]
pub struct SliceCursor<'a> {
    keys: &'a [Key],
    pos: usize,
}

impl<'a> SliceCursor<'a> {
    /// Creates a cursor on the first key of `keys`.
    ///
    /// `keys` must be strictly increasing; `SortedTable` guarantees this.
    pub fn new(keys: &'a [Key]) -> Self {
        debug_assert!(
            keys.windows(2).all(|w| w[0] < w[1]),
            "slice cursor over unsorted keys"
        );
        Self { keys, pos: 0 }
    }

    /// Returns the offset of the current key within the slice.
    ///
    /// Equals the slice length once exhausted.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl SortedCursor for SliceCursor<'_> {
    #[inline]
    fn current(&self) -> Key {
        assert!(!self.exhausted(), "current() on an exhausted cursor");
        self.keys[self.pos]
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.pos >= self.keys.len()
    }

    #[inline]
    fn advance(&mut self) {
        assert!(!self.exhausted(), "advance() on an exhausted cursor");
        self.pos += 1;
    }

    #[inline]
    fn seek(&mut self, target: Key) {
        while self.pos < self.keys.len() && self.keys[self.pos] < target {
            self.pos += 1;
        }
    }
}

/// Cursor over an ordered index.
///
/// `seek` restarts iteration from the index's own lower bound instead of
/// walking the keys in between.
#[derive(Clone, Debug)]
pub struct IndexCursor<'a> {
    index: &'a KeyIndex,
    rest: btree_set::Range<'a, Key>,
    current: Option<Key>,
}

impl<'a> IndexCursor<'a> {
    /// Creates a cursor on the smallest key of `index`.
    pub fn new(index: &'a KeyIndex) -> Self {
        let mut rest = index.lower_bound(Key::MIN);
        let current = rest.next().copied();
        Self {
            index,
            rest,
            current,
        }
    }
}

impl SortedCursor for IndexCursor<'_> {
    #[inline]
    fn current(&self) -> Key {
        match self.current {
            Some(key) => key,
            None => panic!("current() on an exhausted cursor"),
        }
    }

    #[inline]
    fn exhausted(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    fn advance(&mut self) {
        assert!(!self.exhausted(), "advance() on an exhausted cursor");
        self.current = self.rest.next().copied();
    }

    fn seek(&mut self, target: Key) {
        match self.current {
            Some(key) if key < target => {
                self.rest = self.index.lower_bound(target);
                self.current = self.rest.next().copied();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use leapjoin_core::SortedTable;

    const KEYS: [Key; 5] = [1, 3, 5, 7, 9];

    fn index() -> KeyIndex {
        KeyIndex::from_table(&SortedTable::new(KEYS.to_vec()).unwrap())
    }

    fn drain<C: SortedCursor>(mut cursor: C) -> Vec<Key> {
        let mut out = Vec::new();
        while !cursor.exhausted() {
            out.push(cursor.current());
            cursor.advance();
        }
        out
    }

    #[test]
    fn test_slice_cursor_walk() {
        assert_eq!(drain(SliceCursor::new(&KEYS)), KEYS.to_vec());
    }

    #[test]
    fn test_index_cursor_walk() {
        let index = index();
        assert_eq!(drain(IndexCursor::new(&index)), KEYS.to_vec());
    }

    #[test]
    fn test_empty_cursors_start_exhausted() {
        assert!(SliceCursor::new(&[]).exhausted());
        let empty = KeyIndex::new();
        assert!(IndexCursor::new(&empty).exhausted());
    }

    #[test]
    fn test_slice_seek() {
        let mut cursor = SliceCursor::new(&KEYS);
        cursor.seek(4);
        assert_eq!(cursor.current(), 5);
        assert_eq!(cursor.position(), 2);
        cursor.seek(7);
        assert_eq!(cursor.current(), 7);
        cursor.seek(10);
        assert!(cursor.exhausted());
        assert_eq!(cursor.position(), KEYS.len());
    }

    #[test]
    fn test_index_seek() {
        let index = index();
        let mut cursor = IndexCursor::new(&index);
        cursor.seek(4);
        assert_eq!(cursor.current(), 5);
        cursor.seek(7);
        assert_eq!(cursor.current(), 7);
        cursor.advance();
        assert_eq!(cursor.current(), 9);
        cursor.seek(10);
        assert!(cursor.exhausted());
    }

    #[test]
    fn test_seek_never_moves_backward() {
        let index = index();
        let mut slice = SliceCursor::new(&KEYS);
        let mut indexed = IndexCursor::new(&index);
        slice.seek(6);
        indexed.seek(6);

        for target in [6, 5, 0, Key::MIN] {
            slice.seek(target);
            indexed.seek(target);
            assert_eq!(slice.current(), 7);
            assert_eq!(indexed.current(), 7);
        }
    }

    #[test]
    fn test_seek_on_exhausted_is_noop() {
        let index = index();
        let mut slice = SliceCursor::new(&KEYS);
        let mut indexed = IndexCursor::new(&index);
        slice.seek(100);
        indexed.seek(100);
        slice.seek(200);
        indexed.seek(200);
        assert!(slice.exhausted());
        assert!(indexed.exhausted());
    }

    #[test]
    fn test_boxed_cursors_mix_backends() {
        let index = index();
        let cursors: Vec<Box<dyn SortedCursor + '_>> = vec![
            Box::new(SliceCursor::new(&KEYS)),
            Box::new(IndexCursor::new(&index)),
        ];
        for mut cursor in cursors {
            cursor.seek(8);
            assert_eq!(cursor.current(), 9);
        }
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_slice_current_when_exhausted_panics() {
        let cursor = SliceCursor::new(&[]);
        cursor.current();
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_slice_advance_when_exhausted_panics() {
        let mut cursor = SliceCursor::new(&[1]);
        cursor.advance();
        cursor.advance();
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_index_current_when_exhausted_panics() {
        let empty = KeyIndex::new();
        IndexCursor::new(&empty).current();
    }

    #[test]
    #[should_panic(expected = "exhausted cursor")]
    fn test_index_advance_when_exhausted_panics() {
        let empty = KeyIndex::new();
        IndexCursor::new(&empty).advance();
    }
}
