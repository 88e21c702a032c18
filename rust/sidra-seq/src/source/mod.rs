//! Root sequence sources: slice cursors, integer progressions and the
//! collection entry point.
//!
//! The usual way into a pipeline is [`seq`], which borrows any
//! [`AsSequence`] collection and returns its natural cursor:
//!
//! ```
//! use sidra_seq::{seq, Sequence};
//!
//! let v = vec![10, 20, 30];
//! assert_eq!(seq(&v).len(), 3);
//! ```

pub mod iota;
pub mod slice;

pub use iota::{Iota, iota, iota_from, iota_to};
pub use slice::{SliceSeq, SliceSeqMut};

use crate::sequence::Sequence;

/// A collection that can produce a borrowing sequence over its items.
///
/// Implemented for slices, arrays and `Vec`. The produced sequence
/// borrows the collection, so the collection outlives every cursor and
/// pipeline built from it.
pub trait AsSequence {
    /// The sequence type produced for a borrow of lifetime `'a`.
    type Seq<'a>: Sequence
    where
        Self: 'a;

    /// Returns a cursor positioned on this collection's first item.
    fn as_seq(&self) -> Self::Seq<'_>;
}

impl<T> AsSequence for [T] {
    type Seq<'a>
        = SliceSeq<'a, T>
    where
        Self: 'a;

    #[inline]
    fn as_seq(&self) -> SliceSeq<'_, T> {
        SliceSeq::new(self)
    }
}

impl<T, const N: usize> AsSequence for [T; N] {
    type Seq<'a>
        = SliceSeq<'a, T>
    where
        Self: 'a;

    #[inline]
    fn as_seq(&self) -> SliceSeq<'_, T> {
        SliceSeq::new(self.as_slice())
    }
}

impl<T> AsSequence for Vec<T> {
    type Seq<'a>
        = SliceSeq<'a, T>
    where
        Self: 'a;

    #[inline]
    fn as_seq(&self) -> SliceSeq<'_, T> {
        SliceSeq::new(self.as_slice())
    }
}

/// Borrows `collection` as a sequence positioned on its first item.
///
/// This is the conventional pipeline entry point; it is equivalent to
/// calling [`AsSequence::as_seq`].
#[inline]
pub fn seq<C>(collection: &C) -> C::Seq<'_>
where
    C: AsSequence + ?Sized,
{
    collection.as_seq()
}
