//! Input patterns for tests and benchmarks.
//!
//! All random patterns derive from one process wide seed, printed to stderr on first use and
//! included in the failure messages of the sort test suite. Set `OVERRIDE_SEED` to reproduce a
//! run.

use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use rand::rngs::StdRng;
use zipf::ZipfDistribution;

static SEED: Lazy<u64> = Lazy::new(|| {
    let seed = match env::var("OVERRIDE_SEED") {
        Ok(value) => value.parse::<u64>().unwrap_or_else(|_| {
            eprintln!("Ignoring OVERRIDE_SEED={value:?}, not a u64");
            thread_rng().gen()
        }),
        Err(_) => thread_rng().gen(),
    };
    eprintln!("Seed: {seed}");
    seed
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng(len: usize) -> StdRng {
    // Mixing in the length keeps different sizes from sharing a prefix.
    StdRng::seed_from_u64(random_init_seed() ^ (len as u64).rotate_left(32))
}

/// Uniformly distributed over the whole `i32` range.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

/// Uniformly distributed over `range`. Small ranges produce many duplicates.
pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    let mut rng = new_rng(len);
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Zipf distributed values in `1..=len`, a few values dominate.
///
/// # Panics
///
/// If `exponent` is not positive.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng(len);
    let dist = ZipfDistribution::new(len, exponent)
        .unwrap_or_else(|()| panic!("invalid zipf exponent {exponent}"));

    (0..len)
        .map(|_| i32::try_from(dist.sample(&mut rng)).unwrap_or(i32::MAX))
        .collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

/// Sorted except for ~10% of the elements placed at random positions.
pub fn mostly_ascending(len: usize) -> Vec<i32> {
    let mut v = ascending(len);
    if len < 2 {
        return v;
    }

    let mut rng = new_rng(len);
    for _ in 0..(len / 10).max(1) {
        let a = rng.gen_range(0..len);
        let b = rng.gen_range(0..len);
        v.swap(a, b);
    }
    v
}

/// Alternating ascending and descending runs of `len / saw_count` elements each.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    if len == 0 {
        return Vec::new();
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    let mut v = random(len);
    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if i % 2 == 0 {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }
    v
}
