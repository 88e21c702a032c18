//! The `map` adaptor: lazy per-item projection.

use crate::pipe::Stage;
use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// A sequence applying a projection to each item of an inner sequence.
///
/// Keeps the inner sequence's capability tier: the projection is applied
/// on access, so stepping and positional operations delegate unchanged.
/// The result is never flagged sorted, because an arbitrary projection
/// does not preserve order; wrap the result with
/// [`assert_sorted`](crate::assert_sorted) when the projection is known
/// to be monotonic.
#[derive(Debug, Clone)]
pub struct Map<S, P> {
    inner: S,
    proj: P,
}

impl<S, P> Map<S, P> {
    /// Wraps `inner`, producing `proj(item)` for each of its items.
    #[inline]
    pub fn new(inner: S, proj: P) -> Self {
        Map { inner, proj }
    }
}

impl<S, P, T> Sequence for Map<S, P>
where
    S: Sequence,
    P: Fn(S::Item) -> T + Clone,
{
    type Item = T;

    const RANDOM_ACCESS: bool = S::RANDOM_ACCESS;

    #[inline]
    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    #[inline]
    fn current(&self) -> T {
        (self.proj)(self.inner.current())
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
        Map {
            inner: self.inner.to_end(),
            proj: self.proj.clone(),
        }
    }
}

impl<S, P, T> BidirectionalSequence for Map<S, P>
where
    S: BidirectionalSequence,
    P: Fn(S::Item) -> T + Clone,
{
    #[inline]
    fn retreat(&mut self) {
        self.inner.retreat();
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.inner.retreat_by(n);
    }
}

impl<S, P, T> RandomAccessSequence for Map<S, P>
where
    S: RandomAccessSequence,
    P: Fn(S::Item) -> T + Clone,
{
    #[inline]
    fn item_at(&self, index: usize) -> T {
        (self.proj)(self.inner.item_at(index))
    }
}

/// The [`Stage`] produced by [`map`].
#[derive(Debug, Clone)]
pub struct MapStage<P> {
    proj: P,
}

impl<S, P, T> Stage<S> for MapStage<P>
where
    S: Sequence,
    P: Fn(S::Item) -> T + Clone,
{
    type Output = Map<S, P>;

    #[inline]
    fn apply(self, seq: S) -> Map<S, P> {
        Map::new(seq, self.proj)
    }
}

/// Creates a pipeline stage projecting each item through `proj`.
///
/// ```
/// use sidra_seq::{seq, map, Sequence};
///
/// let v = vec![1u32, 2, 3];
/// let doubled: Vec<u32> = (seq(&v) | map(|x: &u32| x * 2)).items().collect();
/// assert_eq!(doubled, vec![2, 4, 6]);
/// ```
#[inline]
pub fn map<P>(proj: P) -> MapStage<P> {
    MapStage { proj }
}
