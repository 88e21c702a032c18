//! Instrumented sequences for traversal-cost assertions.

use std::cell::Cell;
use std::rc::Rc;

use sidra_seq::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// Counters recording how a sequence's primitives were exercised.
///
/// Shared by reference between a [`CountingSeq`] and all cursors cloned
/// from it, so derived operations that work on internal clones still
/// show up in the totals.
#[derive(Debug, Default)]
pub struct TraversalStats {
    reads: Cell<u64>,
    advances: Cell<u64>,
    retreats: Cell<u64>,
    seeks: Cell<u64>,
}

impl TraversalStats {
    /// Item productions: `current` and `item_at` calls.
    pub fn reads(&self) -> u64 {
        self.reads.get()
    }

    /// Single forward steps.
    pub fn advances(&self) -> u64 {
        self.advances.get()
    }

    /// Single backward steps.
    pub fn retreats(&self) -> u64 {
        self.retreats.get()
    }

    /// Bulk positioning calls (`advance_by` / `retreat_by`), counted per
    /// call rather than per position moved.
    pub fn seeks(&self) -> u64 {
        self.seeks.get()
    }

    fn bump(cell: &Cell<u64>) {
        cell.set(cell.get() + 1);
    }
}

/// A transparent sequence wrapper that counts primitive operations.
///
/// Capability flags and traversal behavior mirror the wrapped sequence.
/// The forward and backward stepping primitives and item productions are
/// counted; `has_more` and `len` are treated as free structural queries
/// and are not (`len` forwards to the wrapped sequence). `to_end` is
/// left to the trait default, so its internal stepping is counted and a
/// test can distinguish a single-pass derivation from a double
/// traversal.
#[derive(Debug)]
pub struct CountingSeq<S> {
    inner: S,
    stats: Rc<TraversalStats>,
}

impl<S: Clone> Clone for CountingSeq<S> {
    fn clone(&self) -> Self {
        CountingSeq {
            inner: self.inner.clone(),
            stats: Rc::clone(&self.stats),
        }
    }
}

impl<S: Sequence> CountingSeq<S> {
    /// Wraps `inner` with fresh counters.
    pub fn new(inner: S) -> Self {
        CountingSeq {
            inner,
            stats: Rc::new(TraversalStats::default()),
        }
    }

    /// Returns a handle to the shared counters.
    pub fn stats(&self) -> Rc<TraversalStats> {
        Rc::clone(&self.stats)
    }
}

impl<S: Sequence> Sequence for CountingSeq<S> {
    type Item = S::Item;

    const SORTED: bool = S::SORTED;
    const RANDOM_ACCESS: bool = S::RANDOM_ACCESS;

    fn has_more(&self) -> bool {
        self.inner.has_more()
    }

    fn current(&self) -> S::Item {
        TraversalStats::bump(&self.stats.reads);
        self.inner.current()
    }

    fn advance(&mut self) {
        TraversalStats::bump(&self.stats.advances);
        self.inner.advance();
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn advance_by(&mut self, n: usize) {
        TraversalStats::bump(&self.stats.seeks);
        self.inner.advance_by(n);
    }
}

impl<S: BidirectionalSequence> BidirectionalSequence for CountingSeq<S> {
    fn retreat(&mut self) {
        TraversalStats::bump(&self.stats.retreats);
        self.inner.retreat();
    }

    fn retreat_by(&mut self, n: usize) {
        TraversalStats::bump(&self.stats.seeks);
        self.inner.retreat_by(n);
    }
}

impl<S: RandomAccessSequence> RandomAccessSequence for CountingSeq<S> {
    fn item_at(&self, index: usize) -> S::Item {
        TraversalStats::bump(&self.stats.reads);
        self.inner.item_at(index)
    }
}

/// An unbounded sequence repeating one value forever.
///
/// Useful for proving that a consumer short-circuits: anything that
/// traverses to exhaustion will never return.
#[derive(Debug, Clone)]
pub struct Endless<T> {
    value: T,
}

/// Creates a sequence producing `value` forever.
pub fn endless<T: Clone>(value: T) -> Endless<T> {
    Endless { value }
}

impl<T: Clone> Sequence for Endless<T> {
    type Item = T;

    fn has_more(&self) -> bool {
        true
    }

    fn current(&self) -> T {
        self.value.clone()
    }

    fn advance(&mut self) {}
}
