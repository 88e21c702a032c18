//! The `filter` adaptor: lazy predicate selection.

use crate::pipe::Stage;
use crate::sequence::{BidirectionalSequence, Sequence};

/// A monomorphic identity projection, used by [`filter`] so that the
/// plain form and the projected form share one sequence type.
pub type IdentityFn<T> = fn(T) -> T;

/// A sequence yielding only the items of an inner sequence whose
/// projected value satisfies a predicate.
///
/// The cursor invariant is that a non-exhausted `Filter` always sits on
/// a matching item: construction eagerly advances to the first match,
/// and every step re-establishes the invariant by skipping non-matching
/// items. An input with no matching items is therefore observably
/// exhausted the moment it is constructed.
///
/// Filtering caps the capability tier at bidirectional: backward
/// stepping re-applies the predicate while walking, but positional
/// access is lost because the index of the n-th match cannot be computed
/// without scanning. The sorted flag of the input is preserved, since
/// selecting a subsequence cannot break ordering.
#[derive(Debug, Clone)]
pub struct Filter<S, P, F> {
    inner: S,
    pred: P,
    proj: F,
}

impl<S, P, F, K> Filter<S, P, F>
where
    S: Sequence,
    F: Fn(S::Item) -> K + Clone,
    P: Fn(K) -> bool + Clone,
{
    /// Wraps `inner`, advancing it to the first item whose projection
    /// satisfies `pred`.
    pub fn new(mut inner: S, pred: P, proj: F) -> Self {
        while inner.has_more() && !pred(proj(inner.current())) {
            inner.advance();
        }
        Filter { inner, pred, proj }
    }

    #[inline]
    fn admits(&self, item: S::Item) -> bool {
        (self.pred)((self.proj)(item))
    }
}

impl<S, P, F, K> Sequence for Filter<S, P, F>
where
    S: Sequence,
    F: Fn(S::Item) -> K + Clone,
    P: Fn(K) -> bool + Clone,
{
    type Item = S::Item;

    const SORTED: bool = S::SORTED;

    #[inline]
    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    #[inline]
    fn current(&self) -> S::Item {
        self.inner.current()
    }

    fn advance(&mut self) {
        self.inner.advance();
        while self.inner.has_more() && !self.admits(self.inner.current()) {
            self.inner.advance();
        }
    }

    fn to_end(&self) -> Self {
        Filter {
            inner: self.inner.to_end(),
            pred: self.pred.clone(),
            proj: self.proj.clone(),
        }
    }
}

impl<S, P, F, K> BidirectionalSequence for Filter<S, P, F>
where
    S: BidirectionalSequence,
    F: Fn(S::Item) -> K + Clone,
    P: Fn(K) -> bool + Clone,
{
    fn retreat(&mut self) {
        loop {
            self.inner.retreat();
            if self.admits(self.inner.current()) {
                break;
            }
        }
    }
}

/// The [`Stage`] produced by [`filter`].
#[derive(Debug, Clone)]
pub struct FilterStage<P> {
    pred: P,
}

impl<S, P> Stage<S> for FilterStage<P>
where
    S: Sequence,
    P: Fn(S::Item) -> bool + Clone,
{
    type Output = Filter<S, P, IdentityFn<S::Item>>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Filter::new(seq, self.pred, std::convert::identity as IdentityFn<S::Item>)
    }
}

/// Creates a pipeline stage keeping only the items that satisfy `pred`.
///
/// ```
/// use sidra_seq::{filter, seq, Sequence};
///
/// let v = vec![1u32, 2, 3, 4];
/// let even: Vec<&u32> = (seq(&v) | filter(|x: &u32| x % 2 == 0)).items().collect();
/// assert_eq!(even, vec![&2, &4]);
/// ```
#[inline]
pub fn filter<P>(pred: P) -> FilterStage<P> {
    FilterStage { pred }
}

/// The [`Stage`] produced by [`filter_by`].
#[derive(Debug, Clone)]
pub struct FilterByStage<P, F> {
    pred: P,
    proj: F,
}

impl<S, P, F, K> Stage<S> for FilterByStage<P, F>
where
    S: Sequence,
    F: Fn(S::Item) -> K + Clone,
    P: Fn(K) -> bool + Clone,
{
    type Output = Filter<S, P, F>;

    #[inline]
    fn apply(self, seq: S) -> Self::Output {
        Filter::new(seq, self.pred, self.proj)
    }
}

/// Creates a pipeline stage keeping the items whose projection through
/// `proj` satisfies `pred`.
///
/// The projection participates only in the predicate decision; the
/// yielded items are the original, unprojected ones.
#[inline]
pub fn filter_by<P, F>(pred: P, proj: F) -> FilterByStage<P, F> {
    FilterByStage { pred, proj }
}
