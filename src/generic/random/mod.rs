//! Sources of randomness.

mod splitmix;

pub use splitmix::SplitMix64;
