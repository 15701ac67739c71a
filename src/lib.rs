//!
//! bipgen: bipartite max-flow benchmark instance generator
//!
//! Generates synthetic bipartite flow networks in DIMACS max-flow input
//! format with three topology generators (`hilo`, `rope`, `zipf`).
//!
pub mod capacity;
pub mod dimacs;
pub mod generate;
pub mod instance;
pub mod permute;
