//! Traits for directed multigraphs with dense indices.
//!
//! Reading a graph, adding to a graph and walking along the edges of a graph are separate traits,
//! and [StaticGraph] and [DynamicGraph] bundle them for use as bounds.
//! A pair of nodes may be joined by any amount of parallel edges, each with its own edge index.

use crate::implementation::node_set::NodeSet;
use crate::index::{GraphIndex, GraphIndices};
use std::iter::Map;

/// The types associated with a graph.
pub trait GraphBase {
    /// Data stored at each node.
    type NodeData;
    /// Data stored at each edge.
    type EdgeData;
    /// Identifies a node.
    type NodeIndex: GraphIndex;
    /// Identifies an edge. Parallel edges have different edge indices.
    type EdgeIndex: GraphIndex;
}

/// Read access to the nodes and edges of a graph.
///
/// A graph with `n` nodes and `m` edges uses exactly the node indices `0..n` and the edge indices `0..m`.
pub trait ImmutableGraphContainer: GraphBase {
    /// Iterates over all node indices in ascending order.
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex>;

    /// Iterates over all edge indices in ascending order.
    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex>;

    /// Returns true if `node_id` is a node of this graph.
    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool;

    /// Returns true if `edge_id` is an edge of this graph.
    fn contains_edge_index(&self, edge_id: Self::EdgeIndex) -> bool;

    /// The number of nodes.
    fn node_count(&self) -> usize;

    /// The number of edges, counting parallel edges separately.
    fn edge_count(&self) -> usize;

    /// Panics if the node does not exist.
    fn node_data(&self, node_id: Self::NodeIndex) -> &Self::NodeData;

    /// Panics if the edge does not exist.
    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData;

    /// Returns the tail and head of the given edge.
    /// Panics if the edge does not exist.
    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex>;
}

/// Write access to a graph. Nodes and edges can only be added, so existing indices stay valid.
pub trait MutableGraphContainer: ImmutableGraphContainer {
    /// Adds a node and returns its index, which is the previous node count.
    fn add_node(&mut self, node_data: Self::NodeData) -> Self::NodeIndex;

    /// Adds an edge from `from` to `to` and returns its index, which is the previous edge count.
    /// If the endpoints are already joined by an edge, the new edge is parallel to it.
    fn add_edge(
        &mut self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
        edge_data: Self::EdgeData,
    ) -> Self::EdgeIndex;
}

/// The heads of the edges yielded by a neighbor iterator.
pub type NeighborNodes<Neighbors, NodeIndex, EdgeIndex> =
    Map<Neighbors, fn(Neighbor<NodeIndex, EdgeIndex>) -> NodeIndex>;

/// Iteration over the edges incident to a node.
/// The lifetime `'a` is the borrow of the graph that the iterators hold.
pub trait NavigableGraph<'a>: ImmutableGraphContainer + Sized {
    /// Yields one [Neighbor] per outgoing edge.
    type OutNeighbors: Iterator<Item = Neighbor<Self::NodeIndex, Self::EdgeIndex>>;
    /// Yields one [Neighbor] per incoming edge, where the neighbor node is the tail of the edge.
    type InNeighbors: Iterator<Item = Neighbor<Self::NodeIndex, Self::EdgeIndex>>;
    /// Yields the edges joining a fixed pair of nodes.
    type EdgesBetween: Iterator<Item = Self::EdgeIndex>;

    /// The outgoing edges of `node_id` together with their heads.
    fn out_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::OutNeighbors;

    /// The incoming edges of `node_id` together with their tails.
    fn in_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::InNeighbors;

    /// All parallel edges with tail `from_node_id` and head `to_node_id`.
    fn edges_between(
        &'a self,
        from_node_id: Self::NodeIndex,
        to_node_id: Self::NodeIndex,
    ) -> Self::EdgesBetween;

    /// The heads of the outgoing edges of `node_id`, once per edge.
    /// Empty if the node is a sink.
    fn successors(
        &'a self,
        node_id: Self::NodeIndex,
    ) -> NeighborNodes<Self::OutNeighbors, Self::NodeIndex, Self::EdgeIndex> {
        self.out_neighbors(node_id).map(neighbor_node as fn(_) -> _)
    }

    /// The tails of all edges whose head is one of `nodes`.
    ///
    /// A node of `nodes` is only contained if it has an edge into `nodes` itself.
    fn predecessors_into<Nodes: IntoIterator<Item = Self::NodeIndex>>(
        &'a self,
        nodes: Nodes,
    ) -> NodeSet<Self::NodeIndex> {
        let mut predecessors = NodeSet::new_empty(self.node_count());
        for node in nodes {
            for neighbor in self.in_neighbors(node) {
                predecessors.insert(neighbor.node_id);
            }
        }
        predecessors
    }

    /// The number of outgoing edges of `node_id`.
    fn out_degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.out_neighbors(node_id).count()
    }

    /// The number of incoming edges of `node_id`.
    fn in_degree(&'a self, node_id: Self::NodeIndex) -> usize {
        self.in_neighbors(node_id).count()
    }
}

fn neighbor_node<NodeIndex, EdgeIndex>(neighbor: Neighbor<NodeIndex, EdgeIndex>) -> NodeIndex {
    neighbor.node_id
}

/// Bound for graphs that are only read.
pub trait StaticGraph: ImmutableGraphContainer + for<'a> NavigableGraph<'a> {}
impl<T: ImmutableGraphContainer + for<'a> NavigableGraph<'a>> StaticGraph for T {}

/// Bound for graphs that are built up.
pub trait DynamicGraph: StaticGraph + MutableGraphContainer {}
impl<T: StaticGraph + MutableGraphContainer> DynamicGraph for T {}

/// The endpoints of an edge.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Edge<NodeIndex> {
    /// The tail.
    pub from_node: NodeIndex,
    /// The head.
    pub to_node: NodeIndex,
}

/// An edge incident to some node, together with the node at its other end.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub struct Neighbor<NodeIndex, EdgeIndex> {
    /// The incident edge.
    pub edge_id: EdgeIndex,
    /// The node at the other end of `edge_id`.
    pub node_id: NodeIndex,
}

#[cfg(test)]
mod tests {
    use crate::implementation::petgraph_impl;
    use crate::interface::{MutableGraphContainer, NavigableGraph};

    #[test]
    fn test_successors_with_parallel_edges() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n2, ());
        graph.add_edge(n2, n0, ());

        let mut successors: Vec<_> = graph.successors(n0).collect();
        successors.sort();
        assert_eq!(successors, vec![n1, n1, n2]);
        assert_eq!(graph.successors(n1).count(), 0);
        assert_eq!(graph.edges_between(n0, n1).count(), 2);
        assert_eq!(graph.edges_between(n1, n0).count(), 0);
    }

    #[test]
    fn test_predecessors_into() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let n3 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n3, n2, ());
        graph.add_edge(n2, n2, ());

        let predecessors = graph.predecessors_into(vec![n1, n2]);
        assert_eq!(predecessors.iter().collect::<Vec<_>>(), vec![n0, n1, n2, n3]);

        let predecessors = graph.predecessors_into(vec![n1]);
        assert_eq!(predecessors.iter().collect::<Vec<_>>(), vec![n0]);

        let predecessors = graph.predecessors_into(vec![n0, n3]);
        assert!(predecessors.is_empty());
    }
}
