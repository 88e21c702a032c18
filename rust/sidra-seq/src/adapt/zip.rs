//! The `zip` adaptor: positional pairing of two sequences.

use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A sequence pairing the items of two inner sequences position by
/// position.
///
/// The pairing is exhausted as soon as either input is, so its length is
/// the shorter of the two input lengths. Capabilities combine
/// conservatively: the pair sequence is random-access or sorted only
/// when both inputs are. Sortedness of pairs is an approximation; it is
/// not re-verified lexicographically.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Pairs `a` and `b` positionally.
///
/// Unlike the unary adaptors, `zip` takes both sequences up front rather
/// than acting as a pipeline stage, mirroring its binary shape:
///
/// ```
/// use sidra_seq::{seq, zip, Sequence};
///
/// let names = ["a", "b", "c"];
/// let nums = [1, 2];
/// let pairs: Vec<(&&str, &i32)> = zip(seq(&names), seq(&nums)).items().collect();
/// assert_eq!(pairs, vec![(&"a", &1), (&"b", &2)]);
/// ```
#[inline]
pub fn zip<A: Sequence, B: Sequence>(a: A, b: B) -> Zip<A, B> {
    Zip { a, b }
}

impl<A: Sequence, B: Sequence> Sequence for Zip<A, B> {
    type Item = (A::Item, B::Item);

    const SORTED: bool = A::SORTED && B::SORTED;
    const RANDOM_ACCESS: bool = A::RANDOM_ACCESS && B::RANDOM_ACCESS;

    #[inline]
    fn has_more(&self) -> bool {
        self.a.has_more() && self.b.has_more()
    }

    #[inline]
    fn current(&self) -> (A::Item, B::Item) {
        (self.a.current(), self.b.current())
    }

    #[inline]
    fn advance(&mut self) {
        self.a.advance();
        self.b.advance();
    }

    #[inline]
    fn len(&self) -> usize {
        self.a.len().min(self.b.len())
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.a.advance_by(n);
        self.b.advance_by(n);
    }
}

impl<A: BidirectionalSequence, B: BidirectionalSequence> BidirectionalSequence for Zip<A, B> {
    #[inline]
    fn retreat(&mut self) {
        self.a.retreat();
        self.b.retreat();
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.a.retreat_by(n);
        self.b.retreat_by(n);
    }
}

impl<A: RandomAccessSequence, B: RandomAccessSequence> RandomAccessSequence for Zip<A, B> {
    #[inline]
    fn item_at(&self, index: usize) -> (A::Item, B::Item) {
        (self.a.item_at(index), self.b.item_at(index))
    }
}
