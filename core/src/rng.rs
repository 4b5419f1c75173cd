//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through the single WalkRng instance owned by
//! the engine. A run is either explicitly seeded (deterministic replay)
//! or entropy-seeded at construction — never re-seeded mid-run.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// The engine's pseudo-random source for motion generation.
pub struct WalkRng {
    inner: Pcg64Mcg,
}

impl WalkRng {
    /// Create a generator. `Some(seed)` gives a reproducible stream;
    /// `None` draws the seed from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let inner = match seed {
            Some(s) => Pcg64Mcg::seed_from_u64(s),
            None => Pcg64Mcg::from_entropy(),
        };
        Self { inner }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.next_u64() % n
    }

    /// Draw a per-axis step offset: one of {-1, 0, 1}, each with
    /// probability 1/3.
    pub fn step_offset(&mut self) -> i32 {
        self.next_u64_below(3) as i32 - 1
    }

    /// Fair boolean.
    pub fn coin(&mut self) -> bool {
        self.next_u64_below(2) == 1
    }
}
