//! Pipeline composition: applying adaptors and terminals to sequences
//! with left-to-right syntax.
//!
//! A [`Stage`] is anything that can be applied to a sequence: lazy
//! adaptors produce another sequence, terminals produce a final value.
//! Stages are applied either with the universal [`Pipe::pipe`] method or
//! with the `|` operator, so a traversal reads in evaluation order:
//!
//! ```
//! use sidra_seq::{seq, map, reduce};
//!
//! let v = vec![1u32, 2, 3];
//! let doubled_sum = seq(&v) | map(|x: &u32| x * 2) | reduce(|a, x| a + x, 0u32);
//! assert_eq!(doubled_sum, 12);
//! ```
//!
//! Rust's coherence rules require the left-hand type of a `BitOr` impl to
//! be local, so the operator cannot be provided for all `Sequence` types
//! at once; each sequence type in this crate carries its own impl, and
//! sequence types defined elsewhere compose through [`Pipe::pipe`].

use std::ops::BitOr;

use num_traits::PrimInt;

use crate::adapt::{AssertSorted, Enumerate, Filter, Map, Zip};
use crate::bridge::IterSeq;
use crate::sequence::Sequence;
use crate::source::{Iota, SliceSeq};

/// A transformation applicable to a sequence.
///
/// Adaptor stages return a lazily transformed sequence from
/// [`apply`](Stage::apply); terminal stages drive the traversal and
/// return its result. Stage values themselves are inert descriptions:
/// constructing one does no traversal work.
pub trait Stage<S: Sequence> {
    /// The result of applying this stage.
    type Output;

    /// Applies this stage to `seq`.
    fn apply(self, seq: S) -> Self::Output;
}

/// Universal pipeline entry point, available on every [`Sequence`].
///
/// `seq.pipe(stage)` is identical to `seq | stage` and works for
/// sequence types defined outside this crate, which cannot carry a
/// `BitOr` impl of their own.
pub trait Pipe: Sequence {
    /// Applies `stage` to this sequence.
    #[inline]
    fn pipe<R>(self, stage: R) -> R::Output
    where
        R: Stage<Self>,
    {
        stage.apply(self)
    }
}

impl<S: Sequence> Pipe for S {}

impl<'a, T, R> BitOr<R> for SliceSeq<'a, T>
where
    R: Stage<SliceSeq<'a, T>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<T, R> BitOr<R> for Iota<T>
where
    T: PrimInt,
    R: Stage<Iota<T>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<I, R> BitOr<R> for IterSeq<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
    R: Stage<IterSeq<I>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<S, P, T, R> BitOr<R> for Map<S, P>
where
    S: Sequence,
    P: Fn(S::Item) -> T + Clone,
    R: Stage<Map<S, P>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<S, P, F, K, R> BitOr<R> for Filter<S, P, F>
where
    S: Sequence,
    F: Fn(S::Item) -> K + Clone,
    P: Fn(K) -> bool + Clone,
    R: Stage<Filter<S, P, F>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<A, B, R> BitOr<R> for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
    R: Stage<Zip<A, B>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<S, R> BitOr<R> for Enumerate<S>
where
    S: Sequence,
    R: Stage<Enumerate<S>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}

impl<S, R> BitOr<R> for AssertSorted<S>
where
    S: Sequence,
    R: Stage<AssertSorted<S>>,
{
    type Output = R::Output;

    #[inline]
    fn bitor(self, stage: R) -> R::Output {
        stage.apply(self)
    }
}
