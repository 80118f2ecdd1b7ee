//! Times every sort strategy on one random array and prints the results.
//!
//! Usage: `sort-timing [LEN] [--json]`. LEN defaults to 2000. Values come
//! from a narrow band so duplicates are common, the distribution every
//! strategy has to cope with in the tests as well.

use std::env;
use std::time::Instant;

use serde::Serialize;
use sort_bench_rs::{stable, unstable};
use sort_test_tools::patterns;

const RUNS: usize = 7;

// The quadratic baseline is skipped above this length.
const BUBBLE_LEN_LIMIT: usize = 20_000;

#[derive(Serialize)]
struct Measurement {
    name: String,
    len: usize,
    runs: usize,
    median_ns: u128,
}

fn measure(name: &str, input: &[i32], mut sort: impl FnMut(&mut [i32])) -> Measurement {
    let mut times = Vec::with_capacity(RUNS);

    for _ in 0..RUNS {
        let mut data = input.to_vec();

        let start = Instant::now();
        sort(&mut data);
        times.push(start.elapsed().as_nanos());

        assert!(
            data.windows(2).all(|w| w[0] <= w[1]),
            "{name} failed to sort"
        );
    }

    times.sort_unstable();

    Measurement {
        name: name.into(),
        len: input.len(),
        runs: RUNS,
        median_ns: times[RUNS / 2],
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let json = args.iter().any(|arg| arg == "--json");
    let len: usize = args
        .iter()
        .skip(1)
        .find(|arg| !arg.starts_with("--"))
        .map(|arg| {
            arg.parse()
                .expect("LEN must be an unsigned integer: sort-timing [LEN] [--json]")
        })
        .unwrap_or(2_000);

    // Pin to one core so the numbers are comparable across runs.
    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core);
    }

    let input = patterns::random_uniform(len);

    let mut results = Vec::new();

    if len <= BUBBLE_LEN_LIMIT {
        results.push(measure("rust_bubble_stable", &input, |d| {
            stable::rust_bubble_sort::sort(d)
        }));
    }

    results.push(measure("rust_triosort_unstable", &input, |d| {
        unstable::rust_triosort::sort(d)
    }));
    results.push(measure("rust_std_stable", &input, |d| {
        stable::rust_std::sort(d)
    }));
    results.push(measure("rust_std_unstable", &input, |d| {
        unstable::rust_std::sort(d)
    }));

    #[cfg(feature = "c_quicksort")]
    results.push(measure("c_quicksort_unstable", &input, |d| {
        unstable::c_quicksort::sort(d)
    }));

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).expect("measurements serialize")
        );
    } else {
        for m in &results {
            println!(
                "{}: {:.3} ms (len {}, median of {} runs)",
                m.name,
                m.median_ns as f64 / 1e6,
                m.len,
                m.runs
            );
        }
    }
}
