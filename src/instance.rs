//!
//! `Instance`: a generated bipartite flow network
//!
//! * two vertex partitions of size `n_left` and `n_right`
//! * weighted edges between the partitions
//! * per-vertex aggregate capacities for the source/sink arcs
//!

///
/// A directed edge between the partitions.
///
/// `left` is an index in `[0, n_left)` and `right` in `[0, n_right)`.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub left: usize,
    pub right: usize,
    pub capacity: u64,
}

///
/// A bipartite flow network instance.
///
/// Built fully in memory by one generator call and consumed once by the
/// DIMACS serializer. `left_capacity[i]` is the capacity of the
/// source→left(i) arc, `right_capacity[j]` of the right(j)→sink arc.
///
#[derive(Clone, Debug)]
pub struct Instance {
    pub n_left: usize,
    pub n_right: usize,
    pub edges: Vec<Edge>,
    pub left_capacity: Vec<u64>,
    pub right_capacity: Vec<u64>,
}

impl Instance {
    ///
    /// Create an empty instance with zeroed aggregate capacities
    ///
    pub fn new(n_left: usize, n_right: usize) -> Self {
        Instance {
            n_left,
            n_right,
            edges: Vec::new(),
            left_capacity: vec![0; n_left],
            right_capacity: vec![0; n_right],
        }
    }
    ///
    /// Add an edge and accumulate its capacity into both aggregate arrays
    ///
    pub fn push_edge(&mut self, left: usize, right: usize, capacity: u64) {
        assert!(left < self.n_left);
        assert!(right < self.n_right);
        self.edges.push(Edge {
            left,
            right,
            capacity,
        });
        self.left_capacity[left] += capacity;
        self.right_capacity[right] += capacity;
    }
    pub fn n_edges(&self) -> usize {
        self.edges.len()
    }
    ///
    /// Total number of vertices including source and sink
    ///
    pub fn n_nodes(&self) -> usize {
        self.n_left + self.n_right + 2
    }
    ///
    /// 1-based output id of the source vertex
    ///
    pub fn source(&self) -> usize {
        self.n_left + self.n_right + 1
    }
    ///
    /// 1-based output id of the sink vertex
    ///
    pub fn sink(&self) -> usize {
        self.n_left + self.n_right + 2
    }
}

impl std::fmt::Display for Instance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "n_left={} n_right={} n_edges={}",
            self.n_left,
            self.n_right,
            self.n_edges()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instance_push_edge_accumulates() {
        let mut g = Instance::new(3, 2);
        g.push_edge(0, 0, 10);
        g.push_edge(0, 1, 5);
        g.push_edge(2, 1, 7);
        assert_eq!(g.n_edges(), 3);
        assert_eq!(g.left_capacity, vec![15, 0, 7]);
        assert_eq!(g.right_capacity, vec![10, 12]);
        assert_eq!(g.n_nodes(), 7);
        assert_eq!(g.source(), 6);
        assert_eq!(g.sink(), 7);
        println!("{}", g);
        assert_eq!(g.to_string(), "n_left=3 n_right=2 n_edges=3");
    }
}
