//!
//! random vertex relabeling utility
//!
use rand::prelude::*;

///
/// Shuffled sequence of `1..=n`, used as a lookup table mapping a 0-based
/// internal vertex index to its 1-based output id.
///
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (1..=n).collect();
    perm.shuffle(rng);
    perm
}
