//!
//! HiLo generator
//!
//! Banded topology: right vertex `i` connects to up to `degree` left
//! vertices starting at `i % n_left` and walking down, truncating at left
//! index 0. Right vertices whose start index is near 0 intentionally
//! receive fewer than `degree` edges.
//!
use crate::capacity::capacity;
use crate::instance::Instance;
use rand::prelude::*;

///
/// Generate a banded bipartite instance.
///
/// ## Parameters
///
/// * n_left, n_right: partition sizes (n_left >= 1)
/// * degree: maximum number of incoming edges per right vertex
///
pub fn generate<R: Rng>(n_left: usize, n_right: usize, degree: usize, rng: &mut R) -> Instance {
    assert!(n_left >= 1);
    let mut instance = Instance::new(n_left, n_right);
    for i in 0..n_right {
        let mut j = i % n_left;
        for _ in 0..degree {
            instance.push_edge(j, i, capacity(rng));
            if j == 0 {
                break;
            }
            j -= 1;
        }
    }
    instance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capacity::MAX_CAPACITY;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn right_degrees(instance: &Instance) -> Vec<usize> {
        let mut degrees = vec![0; instance.n_right];
        for e in instance.edges.iter() {
            degrees[e.right] += 1;
        }
        degrees
    }

    #[test]
    fn hilo_truncates_at_left_zero() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(0);
        let g = generate(4, 6, 2, &mut rng);
        // i % 4 == 0 (i=0 and i=4) starts at left 0 and gets a single edge
        assert_eq!(right_degrees(&g), vec![1, 2, 2, 2, 1, 2]);
        assert_eq!(g.n_edges(), 10);
    }

    #[test]
    fn hilo_edges_in_range_and_aggregates_exact() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let (n_left, n_right) = (13, 29);
        let g = generate(n_left, n_right, 3, &mut rng);
        let mut sum_left = vec![0u64; n_left];
        let mut sum_right = vec![0u64; n_right];
        for e in g.edges.iter() {
            assert!(e.left < n_left);
            assert!(e.right < n_right);
            assert!(e.capacity <= MAX_CAPACITY);
            sum_left[e.left] += e.capacity;
            sum_right[e.right] += e.capacity;
        }
        assert_eq!(g.left_capacity, sum_left);
        assert_eq!(g.right_capacity, sum_right);
    }

    #[test]
    fn hilo_single_left_vertex() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let g = generate(1, 5, 4, &mut rng);
        // every right vertex truncates immediately
        assert_eq!(g.n_edges(), 5);
        assert!(g.edges.iter().all(|e| e.left == 0));
    }
}
