//! Graph traits together with a petgraph-based implementation and the algorithms needed to query them.
//!
//! The graph is accessed through the traits in [interface](interface).
//! Nodes and edges are identified by strongly typed indices from [index](index),
//! and sets of nodes are represented by [NodeSet](implementation::node_set::NodeSet).
#![warn(missing_docs)]

/// Graph algorithms, like traversals, reachability queries and strongly connected components.
pub mod algo;
/// Implementations of the graph traits and of supporting data structures.
pub mod implementation;
/// Strongly typed node and edge indices.
pub mod index;
/// The graph traits.
pub mod interface;
