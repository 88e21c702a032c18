//! Effectful terminals: `sink`, `drain`, `apply`, `unzip` and `copy`.

use std::iter;

use crate::pipe::Stage;
use crate::sequence::Sequence;

/// The [`Stage`] produced by [`sink`].
#[derive(Debug)]
pub struct SinkStage<'t, C: ?Sized> {
    target: &'t mut C,
}

impl<S, C> Stage<S> for SinkStage<'_, C>
where
    S: Sequence,
    C: Extend<S::Item> + ?Sized,
{
    type Output = ();

    fn apply(self, seq: S) {
        self.target.extend(seq.items());
    }
}

/// Creates a terminal stage appending every item to `target`.
///
/// Any [`Extend`] collection works as a target, so the same pipeline can
/// feed a `Vec`, a set, or a `String` of characters:
///
/// ```
/// use sidra_seq::{map, seq, sink};
///
/// let v = vec![1u32, 2, 3];
/// let mut out = Vec::new();
/// seq(&v) | map(|x: &u32| x + 10) | sink(&mut out);
/// assert_eq!(out, vec![11, 12, 13]);
/// ```
#[inline]
pub fn sink<C: ?Sized>(target: &mut C) -> SinkStage<'_, C> {
    SinkStage { target }
}

/// The [`Stage`] produced by [`drain`].
#[derive(Debug, Clone)]
pub struct DrainStage;

impl<S: Sequence> Stage<S> for DrainStage {
    type Output = ();

    fn apply(self, mut seq: S) {
        while seq.has_more() {
            let _ = seq.current();
            seq.advance();
        }
    }
}

/// Creates a terminal stage traversing the sequence for its side
/// effects.
///
/// Every item is produced and discarded, so projections and predicates
/// along the pipeline still run for each position.
#[inline]
pub fn drain() -> DrainStage {
    DrainStage
}

/// The [`Stage`] produced by [`apply`].
#[derive(Debug, Clone)]
pub struct ApplyStage<F> {
    func: F,
}

impl<S, F> Stage<S> for ApplyStage<F>
where
    S: Sequence,
    F: FnMut(S::Item),
{
    type Output = ();

    fn apply(self, mut seq: S) {
        let mut func = self.func;
        while seq.has_more() {
            func(seq.current());
            seq.advance();
        }
    }
}

/// Creates a terminal stage invoking `func` on every item in order.
#[inline]
pub fn apply<F>(func: F) -> ApplyStage<F> {
    ApplyStage { func }
}

/// The [`Stage`] produced by [`unzip`].
#[derive(Debug)]
pub struct UnzipStage<'x, 'y, C1: ?Sized, C2: ?Sized> {
    first: &'x mut C1,
    second: &'y mut C2,
}

impl<S, A, B, C1, C2> Stage<S> for UnzipStage<'_, '_, C1, C2>
where
    S: Sequence<Item = (A, B)>,
    C1: Extend<A> + ?Sized,
    C2: Extend<B> + ?Sized,
{
    type Output = ();

    fn apply(self, mut seq: S) {
        while seq.has_more() {
            let (a, b) = seq.current();
            self.first.extend(iter::once(a));
            self.second.extend(iter::once(b));
            seq.advance();
        }
    }
}

/// Creates a terminal stage splitting a pair sequence into two
/// collections, first components into `first` and second components
/// into `second`.
///
/// ```
/// use sidra_seq::{iota_to, map, unzip};
///
/// let mut lo = Vec::new();
/// let mut hi = Vec::new();
/// iota_to(3u32) | map(|x| (x, x + 100)) | unzip(&mut lo, &mut hi);
/// assert_eq!(lo, vec![0, 1, 2]);
/// assert_eq!(hi, vec![100, 101, 102]);
/// ```
#[inline]
pub fn unzip<'x, 'y, C1: ?Sized, C2: ?Sized>(
    first: &'x mut C1,
    second: &'y mut C2,
) -> UnzipStage<'x, 'y, C1, C2> {
    UnzipStage { first, second }
}

/// Appends the items of `src` to `dst`.
///
/// The free-function spelling of [`sink`] for the common case where the
/// source is already a sequence value rather than the tail of a `|`
/// chain.
pub fn copy<S, C>(src: S, dst: &mut C)
where
    S: Sequence,
    C: Extend<S::Item> + ?Sized,
{
    dst.extend(src.items());
}
