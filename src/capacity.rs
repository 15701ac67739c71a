//!
//! edge/node capacity sampler
//!
use rand::prelude::*;

///
/// upper bound (inclusive) of a sampled capacity
///
pub const MAX_CAPACITY: u64 = 1 << 24;

///
/// draw a uniformly distributed capacity in `[0, MAX_CAPACITY]`
///
pub fn capacity<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(0..=MAX_CAPACITY)
}
