use std::env;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use regex::Regex;

use strategy_sort_rs::patterns;
use strategy_sort_rs::{BubbleSort, InsertionSort, SortStrategy};

const BENCH_SIZES: [usize; 5] = [8, 20, 100, 1_000, 4_000];

type PatternFn = fn(usize) -> Vec<i32>;

fn pattern_providers() -> [(&'static str, PatternFn); 7] {
    [
        ("random", patterns::random),
        ("random_d20", |len| patterns::random_uniform(len, 0..20)),
        ("random_z1", |len| patterns::random_zipf(len, 1.0)),
        ("ascending", patterns::ascending),
        ("descending", patterns::descending),
        ("mostly_ascending", patterns::mostly_ascending),
        ("saw_mixed", |len| {
            patterns::saw_mixed(len, ((len as f64).log2().round()) as usize)
        }),
    ]
}

fn bench_strategy<S>(c: &mut Criterion, filter: Option<&Regex>, name: &str)
where
    S: SortStrategy + Default,
{
    for (pattern_name, pattern_provider) in pattern_providers() {
        for test_size in BENCH_SIZES {
            let bench_name = format!("{name}-{pattern_name}-{test_size}");
            if filter.is_some_and(|re| !re.is_match(&bench_name)) {
                continue;
            }

            let input = pattern_provider(test_size);
            let mut strategy = S::default();
            c.bench_function(&bench_name, |b| {
                b.iter_batched_ref(
                    || input.clone(),
                    |v| {
                        strategy.sort(black_box(v.as_mut_slice()));
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    // Patterns derive from one seed, so all strategies see the same inputs.
    println!("Seed: {}", patterns::random_init_seed());

    let filter = env::var("BENCH_REGEX").ok().map(|pattern| {
        Regex::new(&pattern).unwrap_or_else(|err| panic!("invalid BENCH_REGEX: {err}"))
    });

    bench_strategy::<BubbleSort>(c, filter.as_ref(), "bubble");
    bench_strategy::<InsertionSort>(c, filter.as_ref(), "insertion");
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
