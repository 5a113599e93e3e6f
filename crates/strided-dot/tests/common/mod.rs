//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded uniform data in `[-scale, scale)`
pub fn random_f32(len: usize, seed: u64, scale: f32) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Reference result: f64 accumulation in logical order, scalar last, one narrowing
pub fn reference_sdsdot(scalar: f32, x: &[f32], y: &[f32]) -> f32 {
    let dot = x
        .iter()
        .zip(y.iter())
        .fold(0.0f64, |acc, (&a, &b)| acc + a as f64 * b as f64);
    (dot + scalar as f64) as f32
}

/// Spread `logical` into storage with the given stride, BLAS-style
///
/// Unused slots hold NaN so that any stray read poisons the result.
pub fn scatter(logical: &[f32], stride: isize) -> Vec<f32> {
    let n = logical.len();
    if n == 0 {
        return Vec::new();
    }
    let step = stride.unsigned_abs().max(1);
    let mut storage = vec![f32::NAN; (n - 1) * step + 1];
    for (i, &v) in logical.iter().enumerate() {
        let slot = if stride < 0 { (n - 1 - i) * step } else { i * step };
        storage[slot] = v;
    }
    storage
}
