use std::env;
use std::ops::Range;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

/// Seed shared by every pattern of one process. Set `OVERRIDE_SEED` to reproduce a failure.
static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .map(|seed| seed.parse().expect("OVERRIDE_SEED must be a u64"))
        .unwrap_or_else(|| thread_rng().gen())
});

pub fn random_init_seed() -> u64 {
    *SEED
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform(len: usize, range: Range<i32>) -> Vec<i32> {
    // :.:.:.::
    let mut rng = new_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    //  ^      ^
    //  |      |
    // sorted  |
    //     unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[0..sorted_len].sort();
    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::
    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.
    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    for chunk in v.chunks_mut(chunk_len) {
        if rng.gen::<bool>() {
            chunk.sort();
        } else {
            chunk.sort_by(|a, b| b.cmp(a));
        }
    }
    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.
    let mut v = random(len);
    let first_half = &mut v[0..(len / 2)];
    first_half.sort();
    let second_half = &mut v[(len / 2)..len];
    second_half.sort_by(|a, b| b.cmp(a));
    v
}

/// `(key, tag)` pairs where `tag` is the original position, keys drawn from `0..key_range`.
pub fn tagged(len: usize, key_range: i32) -> Vec<(i32, usize)> {
    random_uniform(len, 0..key_range.max(1))
        .into_iter()
        .enumerate()
        .map(|(tag, key)| (key, tag))
        .collect()
}
