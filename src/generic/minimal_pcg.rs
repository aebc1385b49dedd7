//! A simple pseudorandom number generator.
//!
//! A translation of the *really* minimal C PCG32 implementation from
//! <https://www.pcg-random.org/>, implemented against the [RngCore]/
//! [SeedableRng] traits. Chosen for the same reason `otter_sat` chose it: it
//! is simple, fast, and has nice supporting documentation.
//!
//! [Bag](crate::bag::Bag) stores one of these as its source of randomness
//! for weighted sampling; it is fixed here rather than left generic over any
//! `Rng`, since the rest of the crate never needs more than one source.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
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

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        /// Entirely unmotivated.
        const INCREMENT: u64 = 3215534235932367344;
        Self {
            state: (u64::from_le_bytes(seed)).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

impl MinimalPCG32 {
    /// A `[0,1)` draw used by [Bag](crate::bag::Bag)'s weighted sampling.
    pub fn unit_f64(&mut self) -> f64 {
        (self.next_u32() as f64) / (u32::MAX as f64 + 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_seed() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        assert_eq!(two_seed.next_u64(), 748672126);
        assert_eq!(two_seed.next_u64(), 733451027);
        assert_eq!(two_seed.next_u64(), 448);
        assert_eq!(two_seed.next_u64(), 1074309680);
        assert_eq!(two_seed.next_u64(), 2005882);
    }

    #[test]
    fn unit_f64_is_in_range() {
        let mut rng = MinimalPCG32::from_seed(73u64.to_le_bytes());
        for _ in 0..100 {
            let v = rng.unit_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
