use itertools::assert_equal;
use sidra_testkit::data_gen;

use sidra_seq::{
    BidirectionalSequence, RandomAccessSequence, Sequence, assert_sorted, enumerate, filter,
    filter_by, iota, iota_to, map, seq, zip,
};

#[test]
fn test_map_projects_items() {
    let data = [1u32, 2, 3];
    let mapped = seq(&data) | map(|x: &u32| x * 10);
    assert_equal(mapped.items(), vec![10, 20, 30]);
}

#[test]
fn test_map_keeps_random_access() {
    let data = [1u32, 2, 3, 4];
    let mut mapped = seq(&data) | map(|x: &u32| x + 1);
    assert!(mapped.is_random_access());
    assert_eq!(mapped.len(), 4);
    assert_eq!(mapped.item_at(2), 4);
    mapped.advance_by(3);
    assert_eq!(mapped.current(), 5);
    mapped.retreat_by(2);
    assert_eq!(mapped.current(), 3);
}

#[test]
fn test_map_to_end_then_retreat() {
    let data = [2u32, 4, 6];
    let mut end = (seq(&data) | map(|x: &u32| x * x)).to_end();
    assert!(end.is_empty());
    end.retreat();
    assert_eq!(end.current(), 36);
}

#[test]
fn test_map_drops_sorted_and_assert_restores_it() {
    let source = iota_to(10u32);
    assert!(source.is_sorted());
    let mapped = source | map(|x| x * 2);
    assert!(!mapped.is_sorted());
    let asserted = mapped | assert_sorted();
    assert!(asserted.is_sorted());
    assert_equal(asserted.items().take(3), vec![0, 2, 4]);
}

#[test]
fn test_map_composition_order() {
    let data = [1i32, 2, 3];
    let composed = seq(&data) | map(|x: &i32| x + 1) | map(|x: i32| x * 100);
    assert_equal(composed.items(), vec![200, 300, 400]);
}

#[test]
fn test_map_functor_law() {
    let f = |x: &u32| x.wrapping_mul(3);
    let g = |x: u32| x ^ 0x55;
    let mut rng = data_gen::rng(0xfac7);
    for _ in 0..50 {
        let len = data_gen::seq_len(&mut rng, 200);
        let data = data_gen::u32_values(&mut rng, len, 1 << 20);
        let staged = seq(&data) | map(f) | map(g);
        let fused = seq(&data) | map(move |x: &u32| g(f(x)));
        assert_equal(staged.items(), fused.items());
    }
}

#[test]
fn test_filter_matches_std_filter() {
    let mut rng = data_gen::rng(0x5e9);
    for _ in 0..50 {
        let len = data_gen::seq_len(&mut rng, 200);
        let data = data_gen::u32_values(&mut rng, len, 100);
        let ours = seq(&data) | filter(|x: &u32| x % 3 == 0);
        assert_equal(ours.items(), data.iter().filter(|x| *x % 3 == 0));
    }
}

#[test]
fn test_filter_preserves_sorted_flag() {
    let filtered = iota(0u32, 100, 7) | filter(|x: u32| x % 2 == 1);
    assert!(filtered.is_sorted());
    assert!(!filtered.is_random_access());
}

#[test]
fn test_filter_by_projects_for_the_predicate_only() {
    let rows = [(1u32, 30u32), (2, 75), (3, 62), (4, 12)];
    let passing = seq(&rows) | filter_by(|score: u32| score >= 60, |row: &(u32, u32)| row.1);
    assert_equal(passing.items(), vec![&(2, 75), &(3, 62)]);
}

#[test]
fn test_zip_pairs_and_truncates() {
    let a = [1u32, 2, 3, 4];
    let b = ["one", "two", "three"];
    let z = zip(seq(&a), seq(&b));
    assert_eq!(z.len(), 3);
    assert_equal(
        z.items(),
        vec![(&1, &"one"), (&2, &"two"), (&3, &"three")],
    );
}

#[test]
fn test_zip_is_exhausted_when_either_side_is() {
    let a: [u32; 0] = [];
    let b = [1u32, 2];
    assert!(zip(seq(&a), seq(&b)).is_empty());
    assert!(zip(seq(&b), seq(&a)).is_empty());
}

#[test]
fn test_zip_capability_combination() {
    let a = [1u32, 2, 3];
    let b = [4u32, 5, 6];
    let both_ra = zip(seq(&a), seq(&b));
    assert!(both_ra.is_random_access());
    assert!(!both_ra.is_sorted());
    assert_eq!(both_ra.item_at(1), (&2, &5));

    let sorted_pair = zip(iota_to(5u32), iota_to(8u32));
    assert!(sorted_pair.is_sorted());
    assert!(sorted_pair.is_random_access());

    let mixed = zip(iota_to(5u32), seq(&a) | map(|x: &u32| *x));
    assert!(!mixed.is_sorted());
}

#[test]
fn test_zip_to_end_retreats_to_last_pair() {
    let a = [1u32, 2, 3];
    let b = [10u32, 20];
    let mut end = zip(seq(&a), seq(&b)).to_end();
    assert!(end.is_empty());
    end.retreat();
    assert_eq!(end.current(), (&2, &20));
}

#[test]
fn test_zip_len_matches_shorter_side() {
    let mut rng = data_gen::rng(0xc0ffee);
    for _ in 0..50 {
        let len_a = data_gen::seq_len(&mut rng, 64);
        let a = data_gen::u32_values(&mut rng, len_a, 1000);
        let len_b = data_gen::seq_len(&mut rng, 64);
        let b = data_gen::u32_values(&mut rng, len_b, 1000);
        let z = zip(seq(&a), seq(&b));
        assert_eq!(z.len(), a.len().min(b.len()));
        assert_equal(z.items(), a.iter().zip(b.iter()));
    }
}

#[test]
fn test_enumerate_numbers_from_zero() {
    let data = ["a", "b", "c"];
    let e = seq(&data) | enumerate();
    assert_eq!(e.len(), 3);
    assert_equal(e.items(), vec![(0, &"a"), (1, &"b"), (2, &"c")]);
}

#[test]
fn test_enumerate_is_always_sorted() {
    let unsorted = [5u32, 1, 9];
    let e = seq(&unsorted) | enumerate();
    assert!(e.is_sorted());
    assert!(e.is_random_access());
}

#[test]
fn test_enumerate_index_tracks_cursor_both_ways() {
    let data = [10u32, 11, 12, 13];
    let mut e = seq(&data) | enumerate();
    e.advance_by(3);
    assert_eq!(e.current(), (3, &13));
    e.retreat_by(2);
    assert_eq!(e.current(), (1, &11));
    assert_eq!(e.item_at(2), (3, &13));
}

#[test]
fn test_enumerate_after_filter_renumbers() {
    let data = [1u32, 2, 3, 4, 5, 6];
    let e = seq(&data) | filter(|x: &u32| *x % 2 == 0) | enumerate();
    assert_equal(e.items(), vec![(0, &2), (1, &4), (2, &6)]);
}

#[test]
fn test_assert_sorted_is_transparent() {
    let data = [3u32, 5, 8];
    let mut s = seq(&data) | assert_sorted();
    assert_eq!(s.len(), 3);
    assert_eq!(*s.item_at(1), 5);
    s.advance();
    assert_eq!(*s.current(), 5);
    s.retreat();
    assert_eq!(*s.current(), 3);
}

#[test]
fn test_adaptors_are_cheap_to_clone_mid_traversal() {
    let data = [1u32, 2, 3, 4];
    let mut m = seq(&data) | map(|x: &u32| x * 2);
    m.advance();
    let mut fork = m.clone();
    fork.advance();
    assert_eq!(m.current(), 4);
    assert_eq!(fork.current(), 6);
}
