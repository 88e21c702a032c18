//! Slice-backed sequences: the canonical random-access source.

use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};
use crate::sequence_mut::SequenceMut;

/// A read cursor over a borrowed slice.
///
/// The cursor keeps the full slice and an offset rather than a shrinking
/// subslice, which lets it step backward over items it has already
/// passed. All positional operations are O(1).
#[derive(Debug)]
pub struct SliceSeq<'a, T> {
    items: &'a [T],
    pos: usize,
}

// Cloning copies the borrow and the offset; the items themselves need
// not be cloneable.
impl<T> Clone for SliceSeq<'_, T> {
    fn clone(&self) -> Self {
        SliceSeq {
            items: self.items,
            pos: self.pos,
        }
    }
}

impl<'a, T> SliceSeq<'a, T> {
    /// Creates a cursor positioned on the first item of `items`.
    #[inline]
    pub fn new(items: &'a [T]) -> Self {
        SliceSeq { items, pos: 0 }
    }

    /// Returns the remaining items as a subslice.
    #[inline]
    pub fn as_slice(&self) -> &'a [T] {
        &self.items[self.pos..]
    }
}

impl<'a, T> Sequence for SliceSeq<'a, T> {
    type Item = &'a T;

    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn has_more(&self) -> bool {
        self.pos < self.items.len()
    }

    #[inline]
    fn current(&self) -> &'a T {
        debug_assert!(self.has_more(), "current on exhausted slice cursor");
        &self.items[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.has_more(), "advance on exhausted slice cursor");
        self.pos += 1;
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len() - self.pos
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(n <= self.len(), "advance_by past the end of the slice");
        self.pos += n;
    }

    #[inline]
    fn to_end(&self) -> Self {
        SliceSeq {
            items: self.items,
            pos: self.items.len(),
        }
    }
}

impl<'a, T> BidirectionalSequence for SliceSeq<'a, T> {
    #[inline]
    fn retreat(&mut self) {
        debug_assert!(self.pos > 0, "retreat before the start of the slice");
        self.pos -= 1;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        debug_assert!(n <= self.pos, "retreat_by before the start of the slice");
        self.pos -= n;
    }
}

impl<'a, T> RandomAccessSequence for SliceSeq<'a, T> {
    #[inline]
    fn item_at(&self, index: usize) -> &'a T {
        &self.items[self.pos + index]
    }
}

/// A write cursor over a mutably borrowed slice.
///
/// The write counterpart of [`SliceSeq`], used with terminals such as
/// [`fill`](crate::fill). Holds the slice exclusively for the cursor's
/// lifetime.
#[derive(Debug)]
pub struct SliceSeqMut<'a, T> {
    items: &'a mut [T],
    pos: usize,
}

impl<'a, T> SliceSeqMut<'a, T> {
    /// Creates a write cursor positioned on the first element of `items`.
    #[inline]
    pub fn new(items: &'a mut [T]) -> Self {
        SliceSeqMut { items, pos: 0 }
    }
}

impl<'a, T> SequenceMut for SliceSeqMut<'a, T> {
    type Elem = T;

    #[inline]
    fn has_more(&self) -> bool {
        self.pos < self.items.len()
    }

    #[inline]
    fn current_mut(&mut self) -> &mut T {
        debug_assert!(self.has_more(), "current_mut on exhausted slice cursor");
        &mut self.items[self.pos]
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.has_more(), "advance on exhausted slice cursor");
        self.pos += 1;
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(
            n <= self.items.len() - self.pos,
            "advance_by past the end of the slice"
        );
        self.pos += n;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slice_cursor_walk() {
        let data = [3, 1, 4];
        let mut s = SliceSeq::new(&data);
        assert!(s.has_more());
        assert_eq!(*s.current(), 3);
        s.advance();
        assert_eq!(*s.current(), 1);
        s.advance();
        assert_eq!(*s.current(), 4);
        s.advance();
        assert!(!s.has_more());
        assert!(s.is_empty());
    }

    #[test]
    fn test_slice_positional_ops() {
        let data = [10, 20, 30, 40, 50];
        let mut s = SliceSeq::new(&data);
        assert_eq!(s.len(), 5);
        s.advance_by(3);
        assert_eq!(s.len(), 2);
        assert_eq!(*s.current(), 40);
        assert_eq!(*s.item_at(0), 40);
        assert_eq!(*s.item_at(1), 50);
        s.retreat_by(2);
        assert_eq!(*s.current(), 20);
        assert_eq!(s.as_slice(), &[20, 30, 40, 50]);
    }

    #[test]
    fn test_slice_to_end_and_back() {
        let data = [1, 2, 3];
        let s = SliceSeq::new(&data);
        let mut end = s.to_end();
        assert!(end.is_empty());
        assert_eq!(end.len(), 0);
        end.retreat();
        assert_eq!(*end.current(), 3);
        // The original cursor is unaffected.
        assert_eq!(*s.current(), 1);
    }

    #[test]
    fn test_clone_forks_position() {
        let data = [7, 8, 9];
        let mut a = SliceSeq::new(&data);
        a.advance();
        let mut b = a.clone();
        b.advance();
        assert_eq!(*a.current(), 8);
        assert_eq!(*b.current(), 9);
    }

    #[test]
    fn test_clone_without_cloneable_items() {
        struct Opaque(u32);

        let data = [Opaque(7), Opaque(8)];
        let mut s = SliceSeq::new(&data);
        s.advance();
        let fork = s.clone();
        assert_eq!(s.current().0, 8);
        assert_eq!(fork.current().0, 8);
        assert_eq!(s.to_end().len(), 0);
    }

    #[test]
    fn test_slice_mut_cursor() {
        let mut data = [1, 2, 3, 4];
        let mut s = SliceSeqMut::new(&mut data);
        s.advance();
        *s.current_mut() = 20;
        s.advance_by(2);
        *s.current_mut() = 40;
        s.advance();
        assert!(!s.has_more());
        assert_eq!(data, [1, 20, 3, 40]);
    }
}
