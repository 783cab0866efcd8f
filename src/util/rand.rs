// RustPixel
// copyright zipxing@hotmail.com 2022～2025

use rand::Rng;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro256StarStar,
};
use std::time::{SystemTime, UNIX_EPOCH};

/// RCG
pub struct Rand {
    rng: Xoshiro256StarStar,
}

impl Default for Rand {
    fn default() -> Self {
        Rand::new()
    }
}

/// Xoshiro256** wrapper, seeded with 0 until srand or srand_now is called
impl Rand {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    pub fn srand(&mut self, seed: u64) {
        self.rng = Xoshiro256StarStar::seed_from_u64(seed);
    }

    pub fn srand_now(&mut self) {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        self.srand(seed);
    }

    pub fn rand64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    pub fn rand(&mut self) -> u32 {
        self.rng.next_u64() as u32
    }

    /// uniform in [0, n), n must be > 0
    pub fn gen_below(&mut self, n: usize) -> usize {
        self.rng.random_range(0..n)
    }
}
