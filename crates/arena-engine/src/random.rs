//! Seeded pseudo-random number generator
//!
//! Deterministic PRNG for reproducible tournaments.
//! Wraps ChaCha8 and derives an independent stream for every pairing,
//! repetition and side, so no match ever consumes another match's draws.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PAIR_MIX: u64 = 0x9e3779b97f4a7c15;
const REPETITION_MIX: u64 = 0x517cc1b727220a95;
const SIDE_MIX: u64 = 0x2545f4914f6cdd1d;

/// Seeded random number generator
///
/// Deterministic: same seed = same sequence, same derivation path = same stream.
#[derive(Clone, Debug)]
pub struct ArenaRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl ArenaRng {
    /// Create a new RNG from a 64-bit seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Stream for one repetition of one scheduled pairing
    ///
    /// Does not advance `self`: the same indices always give the same stream.
    pub fn for_match(&self, pair_index: u32, repetition: u32) -> Self {
        let seed = splitmix(self.seed ^ (pair_index as u64 + 1).wrapping_mul(PAIR_MIX));
        Self::new(splitmix(seed ^ (repetition as u64 + 1).wrapping_mul(REPETITION_MIX)))
    }

    /// Stream for one side (0 or 1) of a match
    pub fn for_side(&self, side: u8) -> Self {
        Self::new(splitmix(self.seed ^ (side as u64 + 1).wrapping_mul(SIDE_MIX)))
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    /// `true` with the given probability
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.inner.gen_range(0..max)
    }
}

/// splitmix64 finalizer, spreads nearby seeds apart
fn splitmix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9e3779b97f4a7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
    z ^ (z >> 31)
}
