use std::time::Instant;

use sidra_seq::{filter, iota_to, map, reduce, seq, zip};

fn main() {
    let count = 64 * 1024 * 1024 + std::env::args().count();
    let data: Vec<u64> = {
        let mut rng = fastrand::Rng::with_seed(0x51d7a);
        (0..count).map(|_| rng.u64(0..1 << 40)).collect()
    };

    let t0 = Instant::now();
    let pipelined = sum_pipeline(&data);
    println!("pipeline loop: {:?} ({pipelined})", t0.elapsed());

    let t0 = Instant::now();
    let manual = sum_manual(&data);
    println!("manual loop:   {:?} ({manual})", t0.elapsed());
    assert_eq!(pipelined, manual);

    let t0 = Instant::now();
    let generated = sum_iota(count as u64);
    println!("iota pipeline: {:?} ({generated})", t0.elapsed());
}

#[inline(never)]
#[unsafe(no_mangle)]
fn sum_pipeline(data: &[u64]) -> u64 {
    seq(data)
        | map(|x: &u64| x >> 3)
        | filter(|x: u64| x & 1 == 0)
        | reduce(|acc: u64, x: u64| acc.wrapping_add(x), 0u64)
}

#[inline(never)]
#[unsafe(no_mangle)]
fn sum_manual(data: &[u64]) -> u64 {
    let mut acc = 0u64;
    for x in data {
        let x = x >> 3;
        if x & 1 == 0 {
            acc = acc.wrapping_add(x);
        }
    }
    acc
}

#[inline(never)]
#[unsafe(no_mangle)]
fn sum_iota(count: u64) -> u64 {
    zip(iota_to(count), iota_to(count))
        | map(|(a, b): (u64, u64)| a.wrapping_mul(b))
        | reduce(|acc: u64, x: u64| acc.wrapping_add(x), 0u64)
}
