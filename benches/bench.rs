use std::env;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use list_test_tools::patterns;
use list_timsort_rs::{IndexableList, TimSort};
use regex::Regex;
use tracing_subscriber::EnvFilter;

// Positional access walks the list, keep the sizes moderate.
const BENCH_SIZES: [usize; 5] = [16, 100, 1_000, 5_000, 20_000];

fn enable_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn pin_thread() {
    // Pin to one core, this reduces run-to-run noise.
    if let Some(core_id) = core_affinity::get_core_ids().and_then(|ids| ids.into_iter().next()) {
        core_affinity::set_for_current(core_id);
    }
}

fn bench_filter() -> Option<Regex> {
    env::var("BENCH_REGEX")
        .ok()
        .map(|pattern| Regex::new(&pattern).expect("BENCH_REGEX is not a valid regex"))
}

fn bench_patterns(c: &mut Criterion) {
    enable_tracing();
    pin_thread();
    let filter = bench_filter();

    let pattern_providers: [(&str, fn(usize) -> Vec<i32>); 5] = [
        ("random", patterns::random),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("saw_mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
    ];

    for (pattern_name, pattern_provider) in pattern_providers {
        let mut group = c.benchmark_group(pattern_name);

        for test_size in BENCH_SIZES {
            let bench_name = format!("{}-{}", pattern_name, test_size);
            if let Some(filter) = &filter {
                if !filter.is_match(&bench_name) {
                    continue;
                }
            }

            let input = pattern_provider(test_size);

            group.bench_with_input(
                BenchmarkId::new("rust_list_timsort_stable", test_size),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.iter().copied().collect::<IndexableList<i32>>(),
                        |mut list| {
                            let sorted = TimSort::new(&mut list).sort();
                            black_box((sorted, list))
                        },
                        BatchSize::LargeInput,
                    )
                },
            );

            group.bench_with_input(
                BenchmarkId::new("rust_std_stable", test_size),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |mut v| {
                            v.sort();
                            black_box(v)
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }

        group.finish();
    }
}

criterion_group!(benches, bench_patterns);
criterion_main!(benches);
