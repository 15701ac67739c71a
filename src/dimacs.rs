//!
//! DIMACS max-flow output of an [`Instance`]
//!
//! Format, one statement per line:
//!
//! ```text
//! c <n_left> left nodes, <n_right> right nodes
//! p max <n_left+n_right+2> <edges + n_left + n_right>
//! n <n_left+n_right+1> s
//! n <n_left+n_right+2> t
//! <left_id> <right_id> <capacity>    (one per edge)
//! <s_id> <left_id> <capacity>        (one per left vertex)
//! <right_id> <t_id> <capacity>       (one per right vertex)
//! ```
//!
//! Vertex ids are 1-based, right ids offset by `n_left`. Both partitions
//! are relabeled with independent random permutations and the edge list is
//! shuffled before writing.
//!
use crate::instance::Instance;
use crate::permute::random_permutation;
use rand::prelude::*;

impl Instance {
    ///
    /// Write the instance in DIMACS max-flow format to `writer`, applying
    /// a random relabeling of both partitions.
    ///
    pub fn to_dimacs_writer<W: std::io::Write, R: Rng>(
        &self,
        rng: &mut R,
        mut writer: W,
    ) -> std::io::Result<()> {
        let perm_left = random_permutation(self.n_left, rng);
        let perm_right = random_permutation(self.n_right, rng);
        let mut order: Vec<usize> = (0..self.n_edges()).collect();
        order.shuffle(rng);

        writeln!(
            writer,
            "c {} left nodes, {} right nodes",
            self.n_left, self.n_right
        )?;
        writeln!(
            writer,
            "p max {} {}",
            self.n_nodes(),
            self.n_edges() + self.n_left + self.n_right
        )?;
        writeln!(writer, "n {} s", self.source())?;
        writeln!(writer, "n {} t", self.sink())?;

        for &i in order.iter() {
            let e = &self.edges[i];
            writeln!(
                writer,
                "{} {} {}",
                perm_left[e.left],
                self.n_left + perm_right[e.right],
                e.capacity
            )?;
        }
        for i in 0..self.n_left {
            writeln!(
                writer,
                "{} {} {}",
                self.source(),
                perm_left[i],
                self.left_capacity[i]
            )?;
        }
        for i in 0..self.n_right {
            writeln!(
                writer,
                "{} {} {}",
                self.n_left + perm_right[i],
                self.sink(),
                self.right_capacity[i]
            )?;
        }
        Ok(())
    }
    ///
    /// create a DIMACS file with `to_dimacs_writer`
    ///
    pub fn to_dimacs_file<P: AsRef<std::path::Path>, R: Rng>(
        &self,
        rng: &mut R,
        path: P,
    ) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        self.to_dimacs_writer(rng, &mut writer)
    }
}
