//! Candidate selection used by demotion.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Chooses one of `len` equally eligible candidates.
///
/// Implementations return an index in `0..len`; `len` is never zero when
/// called from the store.
pub trait Picker {
    fn pick(&mut self, len: usize) -> usize;
}

impl<F> Picker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Uniform random selection backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible selection sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPicker {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}
