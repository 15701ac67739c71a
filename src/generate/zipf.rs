//!
//! ZipF generator
//!
//! Degree-skewed topology: both endpoints of an edge are drawn from a
//! harmonic distribution (index `i` with weight `1/i`), so low indices end
//! up with power-law-like high degrees. Pairs are sampled by inverse-CDF
//! binary search and rejected until distinct.
//!
use crate::capacity::capacity;
use crate::generate::GenerateError;
use crate::instance::Instance;
use fnv::FnvHashSet as HashSet;
use rand::prelude::*;

///
/// rejection-sampling attempts per edge before giving up
///
const MAX_ATTEMPTS: usize = 1000;

///
/// Generate a degree-skewed bipartite instance with `degree * (n_left +
/// n_right) / 2` distinct edges.
///
/// After accumulating the per-vertex aggregate capacities, a second pass
/// replaces each aggregate with a uniform value in `[0, aggregate]`, so
/// the source/sink arcs are deliberately tighter than the incident sums.
///
/// Returns `SampleSpaceExhausted` when the requested edge count exceeds
/// the `n_left * n_right` distinct pairs, or when the bounded rejection
/// loop fails to find a fresh pair.
///
pub fn generate<R: Rng>(
    n_left: usize,
    n_right: usize,
    degree: usize,
    rng: &mut R,
) -> Result<Instance, GenerateError> {
    let total_edges = degree * (n_left + n_right) / 2;
    if total_edges > n_left * n_right {
        return Err(GenerateError::SampleSpaceExhausted {
            requested: total_edges,
            distinct: n_left * n_right,
        });
    }
    let cdf_left = harmonic_cdf(n_left);
    let cdf_right = harmonic_cdf(n_right);

    let mut seen: HashSet<(usize, usize)> = HashSet::default();
    let mut pairs: Vec<(usize, usize)> = Vec::with_capacity(total_edges);
    while pairs.len() < total_edges {
        let mut fresh = None;
        for _ in 0..MAX_ATTEMPTS {
            let v = sample_index(&cdf_left, rng);
            let u = sample_index(&cdf_right, rng);
            if seen.insert((v, u)) {
                fresh = Some((v, u));
                break;
            }
        }
        match fresh {
            Some(pair) => pairs.push(pair),
            None => {
                return Err(GenerateError::SampleSpaceExhausted {
                    requested: total_edges,
                    distinct: n_left * n_right,
                })
            }
        }
    }

    let mut instance = Instance::new(n_left, n_right);
    for (v, u) in pairs {
        instance.push_edge(v - 1, u - 1, capacity(rng));
    }
    // decorrelate source/sink arcs from the incident edge sums
    for cap in instance.left_capacity.iter_mut() {
        *cap = rng.gen_range(0..=*cap);
    }
    for cap in instance.right_capacity.iter_mut() {
        *cap = rng.gen_range(0..=*cap);
    }
    Ok(instance)
}

///
/// Cumulative harmonic weights: `cdf[i] = 1/1 + 1/2 + ... + 1/i`.
///
fn harmonic_cdf(n: usize) -> Vec<f64> {
    let mut cdf = vec![0.0; n + 1];
    for i in 1..=n {
        cdf[i] = cdf[i - 1] + 1.0 / i as f64;
    }
    cdf
}

///
/// Draw a 1-based index with probability proportional to `1/i` by binary
/// search over the cumulative table.
///
fn sample_index<R: Rng>(cdf: &[f64], rng: &mut R) -> usize {
    let n = cdf.len() - 1;
    let x = rng.gen::<f64>() * cdf[n];
    // invariant: cdf[lo] < x <= cdf[hi] (lo is excluded, hi is a candidate)
    let (mut lo, mut hi) = (0, n);
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if x > cdf[mid] {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    hi
}
