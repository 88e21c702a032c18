//! The `enumerate` adaptor: pairing items with their traversal index.

use crate::pipe::Stage;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A sequence pairing each item of an inner sequence with a zero-based
/// index.
///
/// The index counts positions visited by this cursor, moving with it in
/// both directions. Because the index component is strictly increasing,
/// an enumerated sequence is always flagged sorted, whatever the inner
/// sequence's own ordering. The inner capability tier is kept unchanged.
#[derive(Debug, Clone)]
pub struct Enumerate<S> {
    index: usize,
    inner: S,
}

impl<S: Sequence> Sequence for Enumerate<S> {
    type Item = (usize, S::Item);

    const SORTED: bool = true;
    const RANDOM_ACCESS: bool = S::RANDOM_ACCESS;

    #[inline]
    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    #[inline]
    fn current(&self) -> (usize, S::Item) {
        (self.index, self.inner.current())
    }

    #[inline]
    fn advance(&mut self) {
        self.index += 1;
        self.inner.advance();
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.index += n;
        self.inner.advance_by(n);
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for Enumerate<S> {
    #[inline]
    fn retreat(&mut self) {
        debug_assert!(self.index > 0, "retreat before the start of the sequence");
        self.index -= 1;
        self.inner.retreat();
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        debug_assert!(n <= self.index, "retreat_by before the start of the sequence");
        self.index -= n;
        self.inner.retreat_by(n);
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for Enumerate<S> {
    #[inline]
    fn item_at(&self, index: usize) -> (usize, S::Item) {
        (self.index + index, self.inner.item_at(index))
    }
}

/// The [`Stage`] produced by [`enumerate`].
#[derive(Debug, Clone)]
pub struct EnumerateStage;

impl<S: Sequence> Stage<S> for EnumerateStage {
    type Output = Enumerate<S>;

    #[inline]
    fn apply(self, seq: S) -> Enumerate<S> {
        Enumerate {
            index: 0,
            inner: seq,
        }
    }
}

/// Creates a pipeline stage numbering items from zero.
///
/// ```
/// use sidra_seq::{enumerate, seq, Sequence};
///
/// let v = ["x", "y"];
/// let indexed: Vec<(usize, &&str)> = (seq(&v) | enumerate()).items().collect();
/// assert_eq!(indexed, vec![(0, &"x"), (1, &"y")]);
/// ```
#[inline]
pub fn enumerate() -> EnumerateStage {
    EnumerateStage
}
