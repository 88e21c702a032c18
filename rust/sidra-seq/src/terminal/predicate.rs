//! Short-circuiting quantifier terminals: `all`, `any` and `none`.

use crate::pipe::Stage;
use crate::sequence::Sequence;

/// The [`Stage`] produced by [`all`].
#[derive(Debug, Clone)]
pub struct AllStage<P> {
    pred: P,
}

impl<S, P> Stage<S> for AllStage<P>
where
    S: Sequence,
    P: Fn(S::Item) -> bool,
{
    type Output = bool;

    fn apply(self, mut seq: S) -> bool {
        while seq.has_more() {
            if !(self.pred)(seq.current()) {
                return false;
            }
            seq.advance();
        }
        true
    }
}

/// Creates a terminal stage testing whether every item satisfies `pred`.
///
/// Stops at the first failing item; an empty sequence satisfies `all`.
#[inline]
pub fn all<P>(pred: P) -> AllStage<P> {
    AllStage { pred }
}

/// The [`Stage`] produced by [`any`].
#[derive(Debug, Clone)]
pub struct AnyStage<P> {
    pred: P,
}

impl<S, P> Stage<S> for AnyStage<P>
where
    S: Sequence,
    P: Fn(S::Item) -> bool,
{
    type Output = bool;

    fn apply(self, mut seq: S) -> bool {
        while seq.has_more() {
            if (self.pred)(seq.current()) {
                return true;
            }
            seq.advance();
        }
        false
    }
}

/// Creates a terminal stage testing whether some item satisfies `pred`.
///
/// Stops at the first satisfying item, which makes it safe to run
/// against practically unbounded sequences; an empty sequence satisfies
/// no predicate.
///
/// ```
/// use sidra_seq::{any, iota_from};
///
/// assert!(iota_from(0u64) | any(|x| x > 1_000));
/// ```
#[inline]
pub fn any<P>(pred: P) -> AnyStage<P> {
    AnyStage { pred }
}

/// The [`Stage`] produced by [`none`].
#[derive(Debug, Clone)]
pub struct NoneStage<P> {
    pred: P,
}

impl<S, P> Stage<S> for NoneStage<P>
where
    S: Sequence,
    P: Fn(S::Item) -> bool,
{
    type Output = bool;

    fn apply(self, mut seq: S) -> bool {
        while seq.has_more() {
            if (self.pred)(seq.current()) {
                return false;
            }
            seq.advance();
        }
        true
    }
}

/// Creates a terminal stage testing that no item satisfies `pred`.
///
/// The complement of [`any`], with the same short-circuit behavior.
#[inline]
pub fn none<P>(pred: P) -> NoneStage<P> {
    NoneStage { pred }
}
