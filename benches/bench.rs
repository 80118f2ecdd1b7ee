use criterion::measurement::WallTime;
use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkGroup, BenchmarkId, Criterion,
    Throughput,
};
use sort_bench_rs::{stable, unstable};
use sort_test_tools::patterns;

const SIZES: &[usize] = &[20, 2_000, 1 << 16];

// Quadratic, keep it away from the large inputs.
const BUBBLE_SIZE_LIMIT: usize = 2_000;

fn bench_one(
    group: &mut BenchmarkGroup<WallTime>,
    name: &str,
    size: usize,
    input: &[i32],
    sort: impl Fn(&mut [i32]),
) {
    group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
        b.iter_batched_ref(
            || input.to_vec(),
            |data| sort(black_box(data.as_mut_slice())),
            BatchSize::LargeInput,
        )
    });
}

fn bench_pattern(c: &mut Criterion, pattern_name: &str, pattern: fn(usize) -> Vec<i32>) {
    let mut group = c.benchmark_group(pattern_name);

    for &size in SIZES {
        let input = pattern(size);
        group.throughput(Throughput::Elements(size as u64));

        bench_one(&mut group, "rust_std_stable", size, &input, |d| {
            stable::rust_std::sort(d)
        });
        bench_one(&mut group, "rust_std_unstable", size, &input, |d| {
            unstable::rust_std::sort(d)
        });
        bench_one(&mut group, "rust_triosort_unstable", size, &input, |d| {
            unstable::rust_triosort::sort(d)
        });

        #[cfg(feature = "c_quicksort")]
        bench_one(&mut group, "c_quicksort_unstable", size, &input, |d| {
            unstable::c_quicksort::sort(d)
        });

        if size <= BUBBLE_SIZE_LIMIT {
            bench_one(&mut group, "rust_bubble_stable", size, &input, |d| {
                stable::rust_bubble_sort::sort(d)
            });
        }
    }

    group.finish();
}

fn bench_sorts(c: &mut Criterion) {
    // Pin to one core so the numbers are comparable across runs.
    if let Some(core) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core);
    }

    let groups: &[(&str, fn(usize) -> Vec<i32>)] = &[
        ("random", patterns::random),
        ("random_uniform", patterns::random_uniform),
        ("random_zipf", patterns::random_zipf),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("pipe_organ", patterns::pipe_organ),
    ];

    for &(pattern_name, pattern) in groups {
        bench_pattern(c, pattern_name, pattern);
    }
}

criterion_group!(benches, bench_sorts);
criterion_main!(benches);
