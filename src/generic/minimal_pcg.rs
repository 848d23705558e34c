//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation
//! from <https://www.pcg-random.org/>, wrapped to satisfy [RngCore].
//!
//! PCG(32) was chosen as the source of (pseudo)random numbers as it is simple,
//! fast, and has some nice supporting documentation. Each
//! [context](crate::context) stores one; a different source is a matter of
//! instantiating [GenericContext](crate::context::GenericContext) otherwise.

use rand::SeedableRng;
use rand_core::{RngCore, impls};

/// State and increment
#[derive(Default)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// The reference stream constant.
        const INCREMENT: u64 = 1442695040888963407;
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn seed_determines_stream() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(7_u64.to_le_bytes());

        for _ in 0..32 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn seeds_diverge() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(8_u64.to_le_bytes());

        let left_draws: Vec<u32> = (0..8).map(|_| left.next_u32()).collect();
        let right_draws: Vec<u32> = (0..8).map(|_| right.next_u32()).collect();

        assert_ne!(left_draws, right_draws);
    }
}
