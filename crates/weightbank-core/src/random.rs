//! Randomness contract for weight initialization.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::constants::INIT_WEIGHT_DIVISOR;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for StdRng {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Entropy-seeded default source.
pub fn default_source() -> StdRng {
    StdRng::from_entropy()
}

/// Deterministic source for reproducible runs.
pub fn seeded_source(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Difference of two independent unit draws, scaled into (-0.2, 0.2).
pub fn random_weight<S: RandomSource + ?Sized>(source: &mut S) -> f64 {
    let a = source.next_unit();
    let b = source.next_unit();
    (a - b) / INIT_WEIGHT_DIVISOR
}
