//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the SplitMix64 generator given as `splitmix64.c` at <https://prng.di.unimi.it/>.
//!
//! SplitMix64 was chosen as the default source of (pseudo)random numbers as it is small, fast, and impossible to misuse --- the whole state is one u64 and any seed is fine.
//!
//! Each [Dpll](crate::solver::Dpll) solver stores a source of rng, parameterised to anything which satisfies [RngCore] and [Default].
//! Though, to keep the rest of the library straightforward, the rng is fixed to [SplitMix64] in the [context](crate::context::Context).

use rand::SeedableRng;
use rand_core::{RngCore, impls};

/// State, the whole of it.
#[derive(Clone, Debug, Default)]
pub struct SplitMix64 {
    state: u64,
}

impl RngCore for SplitMix64 {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);

        let mut mixed = self.state;
        mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D049BB133111EB);
        mixed ^ (mixed >> 31)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for SplitMix64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed),
        }
    }
}

#[cfg(test)]
mod splitmix_tests {
    use super::*;

    #[test]
    fn two_seed() {
        let mut two_seed = SplitMix64::from_seed(2u64.to_le_bytes());

        assert_eq!(two_seed.next_u64(), 0x975835de1c9756ce);
        assert_eq!(two_seed.next_u64(), 0xbfc846100bfc1e42);
        assert_eq!(two_seed.next_u64(), 0x987bbcbfdd7e532f);
        assert_eq!(two_seed.next_u64(), 0xc3f2827affe7f664);
        assert_eq!(two_seed.next_u64(), 0x4fc446b53f17fb29);
    }

    #[test]
    fn seventy_three_seed() {
        let mut seventy_three_seed = SplitMix64::from_seed(73u64.to_le_bytes());

        assert_eq!(seventy_three_seed.next_u64(), 0xd08f003850439a4b);
        assert_eq!(seventy_three_seed.next_u64(), 0x8293ca9a1d895ac9);
        assert_eq!(seventy_three_seed.next_u64(), 0x644cec5cbe5f86d8);
        assert_eq!(seventy_three_seed.next_u64(), 0xad7b921889ecd613);
        assert_eq!(seventy_three_seed.next_u64(), 0x7de987b1993f68bb);
    }

    #[test]
    fn high_bits_for_u32() {
        let mut generator = SplitMix64::from_seed(2u64.to_le_bytes());
        assert_eq!(generator.next_u32(), 2539140574);
        assert_eq!(generator.next_u32(), 3217573392);
    }
}
