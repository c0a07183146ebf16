//! Random number source injected into the simulation.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// A source of uniform samples in `[0, 1)`.
///
/// Every random decision in the effect (glyph choice, alpha, spawn roll,
/// positions) goes through this trait so tests can script the outcomes.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// A sample in `[lo, hi)`.
    fn between(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_unit() * (hi - lo)
    }

    /// A uniformly chosen index below `len`. `len` must be non-zero.
    fn index(&mut self, len: usize) -> usize {
        let i = (self.next_unit() * len as f64) as usize;
        i.min(len.saturating_sub(1))
    }
}

/// Pseudo-random source backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct SeededRandom<R = StdRng> {
    rng: R,
}

impl SeededRandom<StdRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: RngCore> SeededRandom<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RngCore> RandomSource for SeededRandom<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}
