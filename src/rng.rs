//! Injectable randomness seam.
//!
//! All synthesis draws go through [`RandomSource`] so tests can pin the
//! output with a seeded or scripted source while production uses the
//! thread-local OS-seeded generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws used by insight synthesis.
pub trait RandomSource: Send {
    /// Uniform float in `[lo, hi)`.
    fn uniform(&mut self, lo: f64, hi: f64) -> f64;

    /// Uniform integer in `[lo, hi]` (both bounds inclusive).
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Uniform index into a slice of length `len`. `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by `rand::thread_rng`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        rand::thread_rng().gen_range(lo..hi)
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        rand::thread_rng().gen_range(lo..=hi)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Deterministic source for tests — same seed, same insight.
#[derive(Debug)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }

    fn pick_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
