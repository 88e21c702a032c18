//! Write-capable traversal: in-place access to the items of a mutable
//! source.
//!
//! [`SequenceMut`] is the write counterpart of
//! [`Sequence`](crate::Sequence). It shares the same forward traversal
//! shape (`has_more` / `advance`) but exposes the current item as a
//! mutable borrow instead of producing it by value, and it is not
//! cloneable: a write cursor holds exclusive access to its source, so
//! there is never more than one of them per region.

/// A forward traversal cursor granting in-place mutable access.
///
/// The traversal contract matches [`Sequence`](crate::Sequence):
/// [`current_mut`](SequenceMut::current_mut) and
/// [`advance`](SequenceMut::advance) may be called only while
/// [`has_more`](SequenceMut::has_more) returns `true`, checked with
/// `debug_assert!` in implementations.
pub trait SequenceMut {
    /// The element type being written through this cursor.
    type Elem;

    /// Returns `true` while at least one element remains.
    fn has_more(&self) -> bool;

    /// Borrows the element at the current position mutably.
    fn current_mut(&mut self) -> &mut Self::Elem;

    /// Moves the cursor forward by one element.
    fn advance(&mut self);

    /// Returns `true` when no elements remain.
    #[inline]
    fn is_empty(&self) -> bool {
        !self.has_more()
    }

    /// Moves the cursor forward by `n` elements.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }
}
