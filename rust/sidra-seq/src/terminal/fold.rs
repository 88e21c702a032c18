//! The `reduce` terminal: left fold.

use crate::pipe::Stage;
use crate::sequence::Sequence;

/// The [`Stage`] produced by [`reduce`].
#[derive(Debug, Clone)]
pub struct ReduceStage<Op, A> {
    op: Op,
    init: A,
}

impl<S, Op, A> Stage<S> for ReduceStage<Op, A>
where
    S: Sequence,
    Op: Fn(A, S::Item) -> A,
{
    type Output = A;

    fn apply(self, mut seq: S) -> A {
        let mut acc = self.init;
        while seq.has_more() {
            acc = (self.op)(acc, seq.current());
            seq.advance();
        }
        acc
    }
}

/// Creates a terminal stage folding the sequence left to right into an
/// accumulator seeded with `init`.
///
/// An empty sequence folds to `init` unchanged.
///
/// ```
/// use sidra_seq::{iota_to, reduce};
///
/// let sum = iota_to(5u32) | reduce(|acc, x| acc + x, 0u32);
/// assert_eq!(sum, 10);
/// ```
#[inline]
pub fn reduce<Op, A>(op: Op, init: A) -> ReduceStage<Op, A> {
    ReduceStage { op, init }
}
