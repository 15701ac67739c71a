//!
//! topology generators
//!
//! * `hilo`: banded generator, each right vertex connects to a decreasing
//!   run of left indices
//! * `rope`: segmented generator alternating round-robin and random blocks
//! * `zipf`: degree-skewed sampler with harmonic (1/i) vertex weights
//!
pub mod hilo;
pub mod rope;
pub mod zipf;

///
/// A generator refused to produce an instance for the given parameters.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateError {
    ///
    /// Rope: a partition is too small to be split into `degree`-wide
    /// segments, so no instance is produced for this combination.
    ///
    DegenerateSize {
        n_left: usize,
        n_right: usize,
        degree: usize,
    },
    ///
    /// ZipF: the requested number of distinct edges cannot be sampled
    /// from the `n_left * n_right` representable pairs.
    ///
    SampleSpaceExhausted { requested: usize, distinct: usize },
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GenerateError::DegenerateSize {
                n_left,
                n_right,
                degree,
            } => write!(
                f,
                "degenerate size: n_left={} n_right={} degree={}",
                n_left, n_right, degree
            ),
            GenerateError::SampleSpaceExhausted {
                requested,
                distinct,
            } => write!(
                f,
                "sample space exhausted: requested {} distinct edges out of {} pairs",
                requested, distinct
            ),
        }
    }
}

impl std::error::Error for GenerateError {}
