//! Core traversal protocol: the capability-tiered cursor traits.
//!
//! A sequence is a lightweight cursor over some source of items. The basic
//! [`Sequence`] trait covers forward, single-direction traversal; the
//! [`BidirectionalSequence`] and [`RandomAccessSequence`] extensions add
//! backward stepping and positional access for sources that can support
//! them cheaply. Sortedness is an orthogonal, compile-time property
//! carried by [`Sequence::SORTED`].
//!
//! Every operation beyond the three primitives (`has_more`, `current`,
//! `advance`) has a default body derived from those primitives, so a new
//! sequence type becomes fully usable by implementing just the primitives.
//! Types with better structural knowledge override the derived operations
//! with cheaper equivalents.

use crate::bridge::Items;

/// A forward traversal cursor over a sequence of items.
///
/// A `Sequence` is a small value object: cloning it forks the traversal
/// position, and the clones advance independently. Sequences borrow or
/// share their underlying source rather than owning buffered items, which
/// keeps cloning cheap.
///
/// # Traversal contract
///
/// Callers may invoke [`current`](Sequence::current) and
/// [`advance`](Sequence::advance) only while
/// [`has_more`](Sequence::has_more) returns `true`. Driving a cursor past
/// exhaustion is a contract violation: implementations check for it with
/// `debug_assert!` and make no behavioral promises in release builds
/// beyond memory safety.
///
/// # Derived operations
///
/// [`len`](Sequence::len), [`advance_by`](Sequence::advance_by) and
/// [`to_end`](Sequence::to_end) have default implementations that work by
/// cloning and stepping the cursor, costing one pass over the remaining
/// items. Random-access sequences are expected to override all three with
/// O(1) versions; the defaults consult [`RANDOM_ACCESS`](Sequence::RANDOM_ACCESS)
/// so that derived code paths never traverse twice.
pub trait Sequence: Clone {
    /// The type of the items this sequence produces.
    ///
    /// Items are produced by value. Sequences over borrowed storage
    /// typically use a reference type here (e.g. `&'a T` for a slice),
    /// while generative sequences produce owned values.
    type Item;

    /// Indicates that items are produced in non-decreasing order.
    ///
    /// This is a static promise used by order-sensitive consumers.
    /// Adaptors propagate it according to their own semantics (e.g.
    /// filtering preserves it, mapping discards it).
    const SORTED: bool = false;

    /// Indicates that this sequence supports O(1) positional operations.
    ///
    /// When `true`, the sequence implements [`RandomAccessSequence`] and
    /// overrides [`len`](Sequence::len), [`advance_by`](Sequence::advance_by)
    /// and [`to_end`](Sequence::to_end) with constant-time versions.
    const RANDOM_ACCESS: bool = false;

    /// Returns `true` while at least one item remains.
    fn has_more(&self) -> bool;

    /// Produces the item at the current position without advancing.
    ///
    /// Repeated calls at the same position are allowed and produce the
    /// item again. Must not be called once the sequence is exhausted.
    fn current(&self) -> Self::Item;

    /// Moves the cursor forward by one item.
    ///
    /// Must not be called once the sequence is exhausted.
    fn advance(&mut self);

    /// Returns `true` when no items remain.
    #[inline]
    fn is_empty(&self) -> bool {
        !self.has_more()
    }

    /// Returns the number of remaining items.
    ///
    /// The default implementation counts by traversing a clone of the
    /// cursor and costs one full pass. Random-access sequences override
    /// this with an O(1) computation.
    fn len(&self) -> usize {
        let mut probe = self.clone();
        let mut count = 0;
        while probe.has_more() {
            probe.advance();
            count += 1;
        }
        count
    }

    /// Moves the cursor forward by `n` items.
    ///
    /// Advancing past exhaustion is a contract violation, checked the
    /// same way as [`advance`](Sequence::advance). `n == 0` is a no-op.
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Returns a cursor positioned after the last item.
    ///
    /// The result compares as exhausted (`has_more() == false`) and, for
    /// bidirectional sequences, can be stepped backward to visit items in
    /// reverse. Costs one pass over the remaining items unless the
    /// sequence is random-access, in which case it is O(1).
    fn to_end(&self) -> Self {
        let mut probe = self.clone();
        if Self::RANDOM_ACCESS {
            probe.advance_by(probe.len());
        } else {
            while probe.has_more() {
                probe.advance();
            }
        }
        probe
    }

    /// Runtime accessor for [`SORTED`](Sequence::SORTED).
    #[inline]
    fn is_sorted(&self) -> bool {
        Self::SORTED
    }

    /// Runtime accessor for [`RANDOM_ACCESS`](Sequence::RANDOM_ACCESS).
    #[inline]
    fn is_random_access(&self) -> bool {
        Self::RANDOM_ACCESS
    }

    /// Converts this sequence into a standard [`Iterator`] over its
    /// remaining items.
    #[inline]
    fn items(self) -> Items<Self> {
        Items::new(self)
    }
}

/// A sequence whose cursor can also step backward.
///
/// Backward stepping mirrors the forward contract: retreating before the
/// first item is a contract violation. A cursor obtained from
/// [`Sequence::to_end`] sits one past the last item, so a single
/// [`retreat`](BidirectionalSequence::retreat) from there lands on the
/// last item.
pub trait BidirectionalSequence: Sequence {
    /// Moves the cursor backward by one item.
    fn retreat(&mut self);

    /// Moves the cursor backward by `n` items.
    ///
    /// The default implementation steps one item at a time; random-access
    /// sequences override it with an O(1) jump.
    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }
}

/// A sequence with O(1) positional access to its remaining items.
///
/// Implementors must also override [`Sequence::len`],
/// [`Sequence::advance_by`], [`Sequence::to_end`] and
/// [`BidirectionalSequence::retreat_by`] with constant-time versions and
/// set [`Sequence::RANDOM_ACCESS`] to `true`; the capability constant is
/// what derived code paths branch on.
pub trait RandomAccessSequence: BidirectionalSequence {
    /// Produces the item `index` positions ahead of the cursor, without
    /// moving the cursor.
    ///
    /// `item_at(0)` is equivalent to [`current`](Sequence::current).
    /// Indexing at or past exhaustion is a contract violation.
    fn item_at(&self, index: usize) -> Self::Item;
}
