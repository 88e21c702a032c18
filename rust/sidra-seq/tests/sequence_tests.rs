use sidra_testkit::CountingSeq;

use sidra_seq::{BidirectionalSequence, RandomAccessSequence, Sequence, from_iter, seq};

/// A deliberately minimal sequence implementing only the three forward
/// primitives, so every other operation runs on the trait defaults.
#[derive(Debug, Clone)]
struct Countdown {
    remaining: u32,
}

impl Countdown {
    fn new(from: u32) -> Self {
        Countdown { remaining: from }
    }
}

impl Sequence for Countdown {
    type Item = u32;

    fn has_more(&self) -> bool {
        self.remaining > 0
    }

    fn current(&self) -> u32 {
        self.remaining
    }

    fn advance(&mut self) {
        self.remaining -= 1;
    }
}

#[test]
fn test_primitives_only_walk() {
    let items: Vec<u32> = Countdown::new(4).items().collect();
    assert_eq!(items, vec![4, 3, 2, 1]);
}

#[test]
fn test_derived_len_leaves_cursor_in_place() {
    let s = Countdown::new(5);
    assert_eq!(s.len(), 5);
    assert_eq!(s.current(), 5);
    assert_eq!(s.len(), 5);
}

#[test]
fn test_derived_advance_by_steps() {
    let mut s = Countdown::new(10);
    s.advance_by(7);
    assert_eq!(s.current(), 3);
    s.advance_by(0);
    assert_eq!(s.current(), 3);
}

#[test]
fn test_derived_to_end_is_exhausted() {
    let s = Countdown::new(6);
    let end = s.to_end();
    assert!(end.is_empty());
    assert_eq!(end.len(), 0);
    assert_eq!(s.current(), 6);
}

#[test]
fn test_derived_to_end_walks_once_on_sequential() {
    let s = CountingSeq::new(Countdown::new(128));
    let stats = s.stats();
    let end = s.to_end();
    assert!(end.is_empty());
    assert_eq!(stats.advances(), 128);
    assert_eq!(stats.reads(), 0);
    assert_eq!(stats.seeks(), 0);
}

#[test]
fn test_to_end_jumps_on_random_access() {
    let data: Vec<u32> = (0..128).collect();
    let s = CountingSeq::new(seq(&data));
    let stats = s.stats();
    let end = s.to_end();
    assert!(end.is_empty());
    assert_eq!(stats.advances(), 0);
    assert_eq!(stats.reads(), 0);
    assert_eq!(stats.seeks(), 1);
}

#[test]
fn test_capability_accessors() {
    let data = [1, 2, 3];
    let s = seq(&data);
    assert!(s.is_random_access());
    assert!(!s.is_sorted());

    let c = Countdown::new(3);
    assert!(!c.is_random_access());
    assert!(!c.is_sorted());
}

#[test]
fn test_seq_entry_points() {
    let from_vec = vec![1, 2, 3];
    assert_eq!(seq(&from_vec).len(), 3);

    let from_array = [1, 2];
    assert_eq!(seq(&from_array).len(), 2);

    let from_slice: &[i32] = &[1, 2, 3, 4];
    assert_eq!(seq(from_slice).len(), 4);
}

#[test]
fn test_items_size_hint_exact_for_random_access() {
    let data = [5, 6, 7];
    let it = seq(&data).items();
    assert_eq!(it.size_hint(), (3, Some(3)));
    assert_eq!(it.len(), 3);
}

#[test]
fn test_items_size_hint_open_for_sequential() {
    let it = Countdown::new(3).items();
    assert_eq!(it.size_hint(), (0, None));
}

#[test]
fn test_items_into_inner_keeps_position() {
    let data = [1, 2, 3, 4];
    let mut it = seq(&data).items();
    it.next();
    it.next();
    let s = it.into_inner();
    assert_eq!(*s.current(), 3);
}

#[test]
fn test_iter_seq_repeats_current() {
    let s = from_iter(vec![7u32, 8, 9]);
    assert_eq!(s.current(), 7);
    assert_eq!(s.current(), 7);
    let items: Vec<u32> = s.items().collect();
    assert_eq!(items, vec![7, 8, 9]);
}

#[test]
fn test_iter_seq_clone_forks_position() {
    let mut a = from_iter("abc".chars());
    a.advance();
    let mut b = a.clone();
    b.advance();
    assert_eq!(a.current(), 'b');
    assert_eq!(b.current(), 'c');
}

#[test]
fn test_iter_seq_derived_len() {
    let s = from_iter(0u32..100);
    assert_eq!(s.len(), 100);
    assert_eq!(s.current(), 0);
}

#[test]
fn test_retreat_revisits_items() {
    let data = [10, 20, 30];
    let mut s = seq(&data);
    s.advance_by(2);
    assert_eq!(*s.current(), 30);
    s.retreat();
    assert_eq!(*s.current(), 20);
    s.retreat_by(1);
    assert_eq!(*s.current(), 10);
}

#[test]
fn test_item_at_is_relative_to_cursor() {
    let data = [1, 2, 3, 4, 5];
    let mut s = seq(&data);
    s.advance();
    assert_eq!(*s.item_at(0), 2);
    assert_eq!(*s.item_at(3), 5);
    assert_eq!(*s.current(), 2);
}
