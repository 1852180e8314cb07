//! Source of treap priorities.
//!
//! Uses the xoshiro256** PRNG. Seeded maps draw the same priorities, and so
//! build the same tree shapes, for the same sequence of inserts.

use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

#[derive(Clone, Debug)]
pub(crate) struct PrioritySource {
    rng: Xoshiro256StarStar,
}

impl PrioritySource {
    /// Seeds from the operating system.
    pub(crate) fn from_os() -> Self {
        let mut seed = [0u8; 32];
        OsRng.fill_bytes(&mut seed);
        Self {
            rng: Xoshiro256StarStar::from_seed(seed),
        }
    }

    pub(crate) fn seeded(seed: u64) -> Self {
        Self {
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub(crate) fn next(&mut self) -> u32 {
        self.rng.next_u32()
    }
}
