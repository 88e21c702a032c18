//! Arithmetic progressions as sequences.

use num_traits::PrimInt;

use crate::sequence::{BidirectionalSequence, RandomAccessSequence, Sequence};

/// An arithmetic progression `start, start + step, start + 2 * step, ...`
/// bounded by a normalized end value.
///
/// The stored end bound is rounded away from `start` to the next multiple
/// of `step`, so exhaustion is an exact equality test and
/// [`len`](Sequence::len) is an exact division. The progression never
/// produces a value at or beyond the requested end, even when the
/// distance is not a whole number of steps.
#[derive(Debug, Clone)]
pub struct Iota<T> {
    value: T,
    end: T,
    step: T,
}

impl<T: PrimInt> Iota<T> {
    fn step_distance(&self, n: usize) -> T {
        let n: T = T::from(n).expect("step count must fit the progression type");
        self.step * n
    }
}

/// Creates the progression of values from `start` toward `end` in
/// increments of `step`.
///
/// `step` may be negative for descending progressions over signed types.
/// `end` must lie in the direction of `step` from `start`, and the
/// normalized end bound must be representable in `T` (an `end` within
/// one partial step of the type's extremum is rejected by the debug
/// overflow checks).
///
/// # Panics
///
/// Panics if `step` is zero.
pub fn iota<T: PrimInt>(start: T, end: T, step: T) -> Iota<T> {
    if step.is_zero() {
        panic!("iota step must be nonzero");
    }
    debug_assert!(
        if step > T::zero() { end >= start } else { end <= start },
        "iota end is unreachable from start with this step"
    );
    Iota {
        value: start,
        end: normalized_end(start, end, step),
        step,
    }
}

/// Creates the progression `0, 1, ..., end - 1`.
pub fn iota_to<T: PrimInt>(end: T) -> Iota<T> {
    iota(T::zero(), end, T::one())
}

/// Creates the unit-step progression starting at `start` and running to
/// the type's maximum value, which makes it unbounded for practical
/// purposes.
pub fn iota_from<T: PrimInt>(start: T) -> Iota<T> {
    iota(start, T::max_value(), T::one())
}

/// Rounds `end` away from `start` until `end - start` is an exact
/// multiple of `step`.
fn normalized_end<T: PrimInt>(start: T, end: T, step: T) -> T {
    let rem = (end - start) % step;
    if rem.is_zero() { end } else { end + (step - rem) }
}

impl<T: PrimInt> Sequence for Iota<T> {
    type Item = T;

    const SORTED: bool = true;
    const RANDOM_ACCESS: bool = true;

    #[inline]
    fn has_more(&self) -> bool {
        self.value != self.end
    }

    #[inline]
    fn current(&self) -> T {
        debug_assert!(self.has_more(), "current on exhausted progression");
        self.value
    }

    #[inline]
    fn advance(&mut self) {
        debug_assert!(self.has_more(), "advance on exhausted progression");
        self.value = self.value + self.step;
    }

    #[inline]
    fn len(&self) -> usize {
        ((self.end - self.value) / self.step)
            .to_usize()
            .expect("progression length must fit usize")
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        debug_assert!(n <= self.len(), "advance_by past the end of the progression");
        self.value = self.value + self.step_distance(n);
    }

    #[inline]
    fn to_end(&self) -> Self {
        Iota {
            value: self.end,
            end: self.end,
            step: self.step,
        }
    }
}

impl<T: PrimInt> BidirectionalSequence for Iota<T> {
    #[inline]
    fn retreat(&mut self) {
        self.value = self.value - self.step;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.value = self.value - self.step_distance(n);
    }
}

impl<T: PrimInt> RandomAccessSequence for Iota<T> {
    #[inline]
    fn item_at(&self, index: usize) -> T {
        debug_assert!(index < self.len(), "item_at past the end of the progression");
        self.value + self.step_distance(index)
    }
}
