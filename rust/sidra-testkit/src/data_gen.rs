//! Seeded random input generation for sequence tests.
//!
//! All generators take an explicit [`fastrand::Rng`] so a failing test
//! reproduces from its seed.

/// Creates a generator with a fixed seed.
pub fn rng(seed: u64) -> fastrand::Rng {
    fastrand::Rng::with_seed(seed)
}

/// Generates `count` values uniformly drawn from `0..bound`.
pub fn u32_values(rng: &mut fastrand::Rng, count: usize, bound: u32) -> Vec<u32> {
    (0..count).map(|_| rng.u32(0..bound)).collect()
}

/// Generates `count` values drawn from `0..bound`, sorted ascending.
pub fn sorted_u32_values(rng: &mut fastrand::Rng, count: usize, bound: u32) -> Vec<u32> {
    let mut values = u32_values(rng, count, bound);
    values.sort_unstable();
    values
}

/// Generates a length in `0..=max_len`, biased toward small sizes often
/// enough to exercise empty and single-item sequences.
pub fn seq_len(rng: &mut fastrand::Rng, max_len: usize) -> usize {
    match rng.u32(0..8) {
        0 => 0,
        1 => 1,
        _ => rng.usize(0..=max_len),
    }
}
