use std::collections::VecDeque;

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of uniform draws used to pick the first player.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..len`. `len` is always at least one.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Production source backed by a standard PRNG seeded from the OS.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source, handy for reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Scripted source replaying a fixed sequence of indices (wrapped into range).
///
/// Once exhausted it keeps answering 0.
#[derive(Debug, Default)]
pub struct SequenceRandom {
    values: VecDeque<usize>,
}

impl SequenceRandom {
    /// Replay `values`, each reduced modulo the roster size.
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % len
    }
}
