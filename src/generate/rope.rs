//!
//! Rope generator
//!
//! Both partitions are cut into `t = n_left / degree` consecutive segments
//! (width `degree` on the left, `d1 = n_right / t` on the right). Adjacent
//! segments are cross-linked: at each step the current left segment feeds
//! the next right segment and vice versa, with the edge-construction
//! strategy alternating by step parity:
//!
//! * even step: round-robin pairing, one edge per right vertex
//! * odd step: a random sample of distinct left vertices per right vertex
//!
//! The last step links current to current only.
//!
use crate::capacity::capacity;
use crate::generate::GenerateError;
use crate::instance::Instance;
use rand::prelude::*;

///
/// Generate a segmented bipartite instance with average degree `degree`.
///
/// Working sizes are rounded down to exact multiples of the segment count,
/// so the returned instance can be slightly smaller than requested.
/// Returns `DegenerateSize` when a partition cannot be segmented at all.
///
pub fn generate<R: Rng>(
    n_left: usize,
    n_right: usize,
    degree: usize,
    rng: &mut R,
) -> Result<Instance, GenerateError> {
    let t = n_left / degree;
    if t == 0 {
        return Err(GenerateError::DegenerateSize {
            n_left,
            n_right,
            degree,
        });
    }
    let d1 = n_right / t;
    if d1 == 0 {
        return Err(GenerateError::DegenerateSize {
            n_left,
            n_right,
            degree,
        });
    }
    let n_left = degree * t;
    let n_right = d1 * t;

    let mut instance = Instance::new(n_left, n_right);
    for step in 0..t {
        // current and next segment ranges, inclusive
        let (v1, v2) = (step * degree, (step + 1) * degree - 1);
        let (v3, v4) = ((step + 1) * degree, (step + 2) * degree - 1);
        let (u1, u2) = (step * d1, (step + 1) * d1 - 1);
        let (u3, u4) = ((step + 1) * d1, (step + 2) * d1 - 1);
        if step + 1 < t {
            if step % 2 == 0 {
                add_edges_round_robin(&mut instance, v1, v2, u3, u4, rng);
                add_edges_round_robin(&mut instance, v3, v4, u1, u2, rng);
            } else {
                add_edges_random(&mut instance, v1, v2, u3, u4, rng);
                add_edges_random(&mut instance, v3, v4, u1, u2, rng);
            }
        } else if step % 2 == 0 {
            add_edges_round_robin(&mut instance, v1, v2, u1, u2, rng);
        } else {
            add_edges_random(&mut instance, v1, v2, u1, u2, rng);
        }
    }
    Ok(instance)
}

///
/// "max" strategy: give each right vertex in `[u1, u2]` one edge, cycling
/// a cursor through the left range `[v1, v2]`.
///
fn add_edges_round_robin<R: Rng>(
    instance: &mut Instance,
    v1: usize,
    v2: usize,
    u1: usize,
    u2: usize,
    rng: &mut R,
) {
    let mut j = v1;
    for i in u1..=u2 {
        instance.push_edge(j, i, capacity(rng));
        j += 1;
        if j > v2 {
            j = v1;
        }
    }
}

///
/// "random" strategy: for each right vertex in `[u1, u2]`, sample
/// `v2 - v1` distinct left vertices from `[v1, v2]` and add one edge per
/// sampled vertex.
///
fn add_edges_random<R: Rng>(
    instance: &mut Instance,
    v1: usize,
    v2: usize,
    u1: usize,
    u2: usize,
    rng: &mut R,
) {
    let width = v2 - v1 + 1;
    for i in u1..=u2 {
        for k in rand::seq::index::sample(rng, width, width - 1).iter() {
            instance.push_edge(v1 + k, i, capacity(rng));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_xoshiro::Xoshiro256PlusPlus;
    use test_case::test_case;

    #[test_case(3, 8, 4 ; "left side smaller than degree")]
    #[test_case(0, 8, 4 ; "empty left side")]
    #[test_case(8, 1, 4 ; "right side smaller than segment count")]
    fn rope_degenerate_sizes(n_left: usize, n_right: usize, degree: usize) {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let result = generate(n_left, n_right, degree, &mut rng);
        assert_eq!(
            result.err(),
            Some(GenerateError::DegenerateSize {
                n_left,
                n_right,
                degree
            })
        );
    }

    #[test]
    fn rope_two_segments() {
        // t=2, d1=4: step 0 (even) cross-links with two round-robin blocks
        // of 4 edges, step 1 (odd, last) adds a random current-to-current
        // block of 4 * 3 edges.
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let g = generate(8, 8, 4, &mut rng).unwrap();
        assert_eq!(g.n_left, 8);
        assert_eq!(g.n_right, 8);
        assert_eq!(g.n_edges(), 4 + 4 + 4 * 3);

        // step 0 cross-links: left [0,3] -> right [4,7] and left [4,7] -> right [0,3]
        let cross_a = g
            .edges
            .iter()
            .filter(|e| e.left <= 3 && e.right >= 4)
            .count();
        let cross_b = g
            .edges
            .iter()
            .filter(|e| e.left >= 4 && e.right <= 3)
            .count();
        assert_eq!(cross_a, 4);
        assert_eq!(cross_b, 4);
        // step 1 terminal block: left [4,7] -> right [4,7], 3 distinct
        // left vertices per right vertex
        for i in 4..8 {
            let mut lefts: Vec<usize> = g
                .edges
                .iter()
                .filter(|e| e.right == i && e.left >= 4)
                .map(|e| e.left)
                .collect();
            lefts.sort();
            lefts.dedup();
            assert_eq!(lefts.len(), 3);
        }
    }

    #[test]
    fn rope_rounds_sizes_down() {
        // t = 10/4 = 2, d1 = 9/2 = 4, working sizes 8 and 8
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let g = generate(10, 9, 4, &mut rng).unwrap();
        assert_eq!(g.n_left, 8);
        assert_eq!(g.n_right, 8);
    }

    #[test]
    fn rope_aggregates_exact() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let g = generate(12, 20, 3, &mut rng).unwrap();
        let mut sum_left = vec![0u64; g.n_left];
        let mut sum_right = vec![0u64; g.n_right];
        for e in g.edges.iter() {
            assert!(e.left < g.n_left);
            assert!(e.right < g.n_right);
            sum_left[e.left] += e.capacity;
            sum_right[e.right] += e.capacity;
        }
        assert_eq!(g.left_capacity, sum_left);
        assert_eq!(g.right_capacity, sum_right);
    }
}
