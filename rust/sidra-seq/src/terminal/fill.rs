//! The `fill` terminal: overwriting through a write cursor.

use crate::sequence_mut::SequenceMut;

/// Overwrites every remaining element of `seq` with clones of `value`.
///
/// Elements already passed by the cursor are untouched, so advancing a
/// write cursor before filling overwrites only a suffix:
///
/// ```
/// use sidra_seq::{fill, SequenceMut, SliceSeqMut};
///
/// let mut data = [1, 2, 3, 4];
/// let mut tail = SliceSeqMut::new(&mut data);
/// tail.advance_by(2);
/// fill(tail, 0);
/// assert_eq!(data, [1, 2, 0, 0]);
/// ```
pub fn fill<S, T>(mut seq: S, value: T)
where
    S: SequenceMut<Elem = T>,
    T: Clone,
{
    while seq.has_more() {
        *seq.current_mut() = value.clone();
        seq.advance();
    }
}
