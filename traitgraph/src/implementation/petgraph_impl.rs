use crate::index::{EdgeIndex, GraphIndex, GraphIndices, NodeIndex};
use crate::interface::{
    DynamicGraph, Edge, GraphBase, ImmutableGraphContainer, MutableGraphContainer, NavigableGraph,
    Neighbor,
};
use petgraph::graph::{DiGraph, EdgeReference, Edges, EdgesConnecting};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use std::iter::Map;

pub use petgraph;

/// A directed multigraph stored by petgraph, with `usize` indices.
///
/// Nodes and edges are never removed, so petgraph's indices stay dense.
pub type PetGraph<NodeData, EdgeData> = DiGraph<NodeData, EdgeData, usize>;

/// Creates a new empty graph.
///
/// The concrete type is hidden, such that only the methods of the graph traits are accessible.
pub fn new<NodeData: 'static + Clone, EdgeData: 'static + Clone>(
) -> impl DynamicGraph<NodeData = NodeData, EdgeData = EdgeData> + Default + Clone {
    PetGraph::<NodeData, EdgeData>::default()
}

fn pet_node(node: NodeIndex<usize>) -> petgraph::graph::NodeIndex<usize> {
    petgraph::graph::NodeIndex::new(node.as_usize())
}

fn pet_edge(edge: EdgeIndex<usize>) -> petgraph::graph::EdgeIndex<usize> {
    petgraph::graph::EdgeIndex::new(edge.as_usize())
}

fn outgoing_neighbor<EdgeData>(
    edge: EdgeReference<'_, EdgeData, usize>,
) -> Neighbor<NodeIndex<usize>, EdgeIndex<usize>> {
    Neighbor {
        edge_id: edge.id().index().into(),
        node_id: edge.target().index().into(),
    }
}

fn incoming_neighbor<EdgeData>(
    edge: EdgeReference<'_, EdgeData, usize>,
) -> Neighbor<NodeIndex<usize>, EdgeIndex<usize>> {
    Neighbor {
        edge_id: edge.id().index().into(),
        node_id: edge.source().index().into(),
    }
}

fn connecting_edge<EdgeData>(edge: EdgeReference<'_, EdgeData, usize>) -> EdgeIndex<usize> {
    edge.id().index().into()
}

impl<NodeData, EdgeData> GraphBase for PetGraph<NodeData, EdgeData> {
    type NodeData = NodeData;
    type EdgeData = EdgeData;
    type NodeIndex = NodeIndex<usize>;
    type EdgeIndex = EdgeIndex<usize>;
}

// Petgraph has inherent methods of the same names, so they are called fully qualified.
impl<NodeData, EdgeData> ImmutableGraphContainer for PetGraph<NodeData, EdgeData> {
    fn node_indices(&self) -> GraphIndices<Self::NodeIndex> {
        GraphIndices::from((0, DiGraph::node_count(self)))
    }

    fn edge_indices(&self) -> GraphIndices<Self::EdgeIndex> {
        GraphIndices::from((0, DiGraph::edge_count(self)))
    }

    fn contains_node_index(&self, node_id: Self::NodeIndex) -> bool {
        node_id.as_usize() < DiGraph::node_count(self)
    }

    fn contains_edge_index(&self, edge_id: Self::EdgeIndex) -> bool {
        edge_id.as_usize() < DiGraph::edge_count(self)
    }

    fn node_count(&self) -> usize {
        DiGraph::node_count(self)
    }

    fn edge_count(&self) -> usize {
        DiGraph::edge_count(self)
    }

    fn node_data(&self, node_id: Self::NodeIndex) -> &Self::NodeData {
        &self[pet_node(node_id)]
    }

    fn edge_data(&self, edge_id: Self::EdgeIndex) -> &Self::EdgeData {
        &self[pet_edge(edge_id)]
    }

    fn edge_endpoints(&self, edge_id: Self::EdgeIndex) -> Edge<Self::NodeIndex> {
        let (from_node, to_node) = DiGraph::edge_endpoints(self, pet_edge(edge_id))
            .unwrap_or_else(|| panic!("Edge {:?} does not exist", edge_id));
        Edge {
            from_node: from_node.index().into(),
            to_node: to_node.index().into(),
        }
    }
}

impl<NodeData, EdgeData> MutableGraphContainer for PetGraph<NodeData, EdgeData> {
    fn add_node(&mut self, node_data: NodeData) -> Self::NodeIndex {
        DiGraph::add_node(self, node_data).index().into()
    }

    fn add_edge(
        &mut self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
        edge_data: EdgeData,
    ) -> Self::EdgeIndex {
        DiGraph::add_edge(self, pet_node(from), pet_node(to), edge_data)
            .index()
            .into()
    }
}

type NeighborIterator<'a, EdgeData> = Map<
    Edges<'a, EdgeData, Directed, usize>,
    fn(EdgeReference<'a, EdgeData, usize>) -> Neighbor<NodeIndex<usize>, EdgeIndex<usize>>,
>;

type ConnectingEdgeIterator<'a, EdgeData> = Map<
    EdgesConnecting<'a, EdgeData, Directed, usize>,
    fn(EdgeReference<'a, EdgeData, usize>) -> EdgeIndex<usize>,
>;

impl<'a, NodeData, EdgeData: 'a> NavigableGraph<'a> for PetGraph<NodeData, EdgeData> {
    type OutNeighbors = NeighborIterator<'a, EdgeData>;
    type InNeighbors = NeighborIterator<'a, EdgeData>;
    type EdgesBetween = ConnectingEdgeIterator<'a, EdgeData>;

    fn out_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::OutNeighbors {
        self.edges_directed(pet_node(node_id), Direction::Outgoing)
            .map(outgoing_neighbor as fn(_) -> _)
    }

    fn in_neighbors(&'a self, node_id: Self::NodeIndex) -> Self::InNeighbors {
        self.edges_directed(pet_node(node_id), Direction::Incoming)
            .map(incoming_neighbor as fn(_) -> _)
    }

    fn edges_between(
        &'a self,
        from_node_id: Self::NodeIndex,
        to_node_id: Self::NodeIndex,
    ) -> Self::EdgesBetween {
        self.edges_connecting(pet_node(from_node_id), pet_node(to_node_id))
            .map(connecting_edge as fn(_) -> _)
    }
}
