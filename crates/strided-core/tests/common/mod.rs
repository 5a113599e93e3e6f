//! Shared utilities for integration tests

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Lengths around the unroll block size and a few larger round numbers
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // Below one block
        4,   // Block - 1
        5,   // One block
        6,   // Block + 1
        9,   // Two blocks - 1
        10,  // Two blocks
        11,  // Two blocks + 1
        31,  // Prime
        64,  // Power of 2
        100, // Round number
        127, // Mersenne prime
        240, // Multiple of the block
    ]
}

/// Seeded uniform data in `[-scale, scale)`
pub fn random_f32(len: usize, seed: u64, scale: f32) -> Vec<f32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-scale..scale)).collect()
}

/// Reference dot product: f64 accumulation in logical order
pub fn reference_dot(x: &[f32], y: &[f32]) -> f64 {
    x.iter()
        .zip(y.iter())
        .fold(0.0f64, |acc, (&a, &b)| acc + a as f64 * b as f64)
}

/// Spread `logical` into storage with the given stride, BLAS-style
///
/// Unused slots are filled with NaN so that any stray read poisons the result.
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
