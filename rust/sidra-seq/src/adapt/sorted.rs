//! The `assert_sorted` adaptor: caller-asserted ordering.

use crate::pipe::Stage;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A transparent wrapper flagging its inner sequence as sorted.
///
/// Every traversal operation delegates to the inner sequence unchanged;
/// only the sorted capability flag differs. The assertion is the
/// caller's responsibility and is not verified, so a wrapper over an
/// unsorted sequence misleads order-sensitive consumers. The usual use
/// is re-flagging a [`map`](crate::map) whose projection is known to be
/// monotonic.
#[derive(Debug, Clone)]
pub struct AssertSorted<S> {
    inner: S,
}

impl<S: Sequence> AssertSorted<S> {
    /// Wraps `inner`, asserting that it produces items in non-decreasing
    /// order.
    #[inline]
    pub fn new(inner: S) -> Self {
        AssertSorted { inner }
    }

    /// Returns the wrapped sequence.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Sequence> Sequence for AssertSorted<S> {
    type Item = S::Item;

    const SORTED: bool = true;
    const RANDOM_ACCESS: bool = S::RANDOM_ACCESS;

    #[inline]
    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    #[inline]
    fn current(&self) -> S::Item {
        self.inner.current()
    }

    #[inline]
    fn advance(&mut self) {
        self.inner.advance();
    }

    #[inline]
    fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.inner.advance_by(n);
    }

    #[inline]
    fn to_end(&self) -> Self {
        AssertSorted {
            inner: self.inner.to_end(),
        }
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for AssertSorted<S> {
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.inner.retreat_by(n);
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for AssertSorted<S> {
    #[inline]
    fn item_at(&self, index: usize) -> S::Item {
        self.inner.item_at(index)
    }
}

/// The [`Stage`] produced by [`assert_sorted`].
#[derive(Debug, Clone)]
pub struct AssertSortedStage;

impl<S: Sequence> Stage<S> for AssertSortedStage {
    type Output = AssertSorted<S>;

    #[inline]
    fn apply(self, seq: S) -> AssertSorted<S> {
        AssertSorted::new(seq)
    }
}

/// Creates a pipeline stage asserting that the incoming sequence is
/// sorted.
///
/// ```
/// use sidra_seq::{assert_sorted, map, seq, Sequence};
///
/// let v = vec![1u32, 2, 3];
/// let s = seq(&v) | map(|x: &u32| x * 10) | assert_sorted();
/// assert!(s.is_sorted());
/// ```
#[inline]
pub fn assert_sorted() -> AssertSortedStage {
    AssertSortedStage
}
