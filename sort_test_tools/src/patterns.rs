//! Input generators shared by the tests, the benchmarks and the timing CLI.
//!
//! All random generators run on a `StdRng` seeded once per process, so a
//! failing run can be replayed by setting `OVERRIDE_SEED` to the seed the
//! assertion message printed.

use std::env;

use once_cell::sync::OnceCell;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Random values drawn from the full `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Random values from a narrow band, yields plenty of duplicates.
pub fn random_uniform(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(0..=100)).collect()
}

/// Zipfian distribution, a handful of values dominate the sequence.
pub fn random_zipf(len: usize) -> Vec<i32> {
    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len.max(1), 1.0).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Already in non-decreasing order.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Sorted in reverse.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// One value repeated across the whole sequence.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![7; len]
}

/// Ascending first half, descending second half.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mid = (len / 2) as i32;
    let mut v: Vec<i32> = (0..mid).collect();
    v.extend((mid..len as i32).rev());
    v
}

/// The process-wide pattern seed, honoring `OVERRIDE_SEED`.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed.parse().expect("OVERRIDE_SEED must be a u64"),
        Err(_) => thread_rng().gen(),
    })
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
