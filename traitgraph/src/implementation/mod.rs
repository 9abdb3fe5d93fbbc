/// A set of nodes based on bitvectors.
pub mod node_set;
/// A graph implementation based on the `petgraph` crate.
pub mod petgraph_impl;
