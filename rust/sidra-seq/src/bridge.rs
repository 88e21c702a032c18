//! Bridges between the sequence protocol and standard iterators.
//!
//! [`Items`] drives a [`Sequence`] as an [`Iterator`], which is how
//! pipelines hand their results to `collect` and other std machinery.
//! [`IterSeq`] adapts a cloneable iterator into a sequential-tier
//! [`Sequence`], buffering one item of lookahead so that `current` can
//! produce the same item repeatedly.

use std::iter::FusedIterator;

use crate::sequence::{RandomAccessSequence, Sequence};

/// An iterator over the remaining items of a sequence.
///
/// Created by [`Sequence::items`].
#[derive(Debug, Clone)]
pub struct Items<S> {
    seq: S,
}

impl<S: Sequence> Items<S> {
    #[inline]
    pub(crate) fn new(seq: S) -> Self {
        Items { seq }
    }

    /// Returns the underlying sequence cursor at its current position.
    #[inline]
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Items<S> {
    type Item = S::Item;

    #[inline]
    fn next(&mut self) -> Option<S::Item> {
        if !self.seq.has_more() {
            return None;
        }
        let item = self.seq.current();
        self.seq.advance();
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if S::RANDOM_ACCESS {
            let n = self.seq.len();
            (n, Some(n))
        } else {
            (0, None)
        }
    }
}

impl<S: Sequence> FusedIterator for Items<S> {}

impl<S: RandomAccessSequence> ExactSizeIterator for Items<S> {}

/// A sequence backed by a cloneable iterator, with one item of buffered
/// lookahead.
///
/// Sequential tier only: an iterator offers no backward stepping and no
/// positional access, so everything beyond the forward primitives runs
/// on the derived fallbacks. Cloning the sequence clones the iterator,
/// which is what makes the derived `len` and `to_end` possible.
pub struct IterSeq<I: Iterator> {
    head: Option<I::Item>,
    rest: I,
}

impl<I> Clone for IterSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        IterSeq {
            head: self.head.clone(),
            rest: self.rest.clone(),
        }
    }
}

impl<I> IterSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    /// Wraps `iter`, pulling its first item into the lookahead buffer.
    pub fn new(mut iter: I) -> Self {
        IterSeq {
            head: iter.next(),
            rest: iter,
        }
    }
}

impl<I> Sequence for IterSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn has_more(&self) -> bool {
        self.head.is_some()
    }

    #[inline]
    fn current(&self) -> I::Item {
        self.head.clone().expect("current on exhausted iterator sequence")
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.has_more(), "advance on exhausted iterator sequence");
        self.head = self.rest.next();
    }
}

/// Adapts a cloneable iterator (or anything convertible into one) into a
/// sequence.
///
/// ```
/// use sidra_seq::{from_iter, reduce, Pipe};
///
/// let total = from_iter((1u32..=4).map(|x| x * x))
///     .pipe(reduce(|a, x| a + x, 0u32));
/// assert_eq!(total, 30);
/// ```
pub fn from_iter<I>(iter: I) -> IterSeq<I::IntoIter>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    <I::IntoIter as Iterator>::Item: Clone,
{
    IterSeq::new(iter.into_iter())
}
