use crate::algo::traversal::{forward_postorder, Bfs, TraversalDirection};
use crate::implementation::node_set::NodeSet;
use crate::index::GraphIndex;
use crate::interface::{DynamicGraph, StaticGraph};

/// Computes the strongly connected components of the given graph with Kosaraju's algorithm.
///
/// The returned vector maps each node to the root node of its component.
/// Two nodes are in the same component if and only if they are mapped to the same root.
pub fn decompose_strongly_connected_components<Graph: StaticGraph>(
    graph: &Graph,
) -> Vec<Graph::NodeIndex> {
    let mut result: Vec<_> = graph.node_indices().collect();
    let mut bfs = Bfs::new_without_start(graph, TraversalDirection::Backward);

    for root in forward_postorder(graph).into_iter().rev() {
        if bfs.continue_from(root) {
            for node in &mut bfs {
                result[node.as_usize()] = root;
            }
        }
    }

    result
}

/// Returns the amount of strongly connected components given the output of [decompose_strongly_connected_components].
pub fn count_strongly_connected_components<NodeIndex: GraphIndex>(roots: &[NodeIndex]) -> usize {
    roots
        .iter()
        .enumerate()
        .filter(|(node, root)| *node == root.as_usize())
        .count()
}

/// Returns the strongly connected component that contains the given node.
pub fn strongly_connected_component_of<Graph: StaticGraph>(
    graph: &Graph,
    node: Graph::NodeIndex,
) -> NodeSet<Graph::NodeIndex> {
    let forward = Bfs::new(graph, TraversalDirection::Forward, node).into_visited();
    let backward = Bfs::new(graph, TraversalDirection::Backward, node).into_visited();

    let mut component = NodeSet::new_empty(graph.node_count());
    for node in forward.iter().filter(|&node| backward.contains(node)) {
        component.insert(node);
    }
    component
}

/// Returns true if the graph is strongly connected.
/// The empty graph is considered strongly connected.
pub fn is_strongly_connected<Graph: StaticGraph>(graph: &Graph) -> bool {
    let roots = decompose_strongly_connected_components(graph);
    roots.windows(2).all(|pair| pair[0] == pair[1])
}

/// Returns the subgraph induced by the given nodes.
///
/// Nodes and edges keep their relative order, so the subgraph indices are assigned in ascending order of the original indices.
/// Node and edge data is cloned.
pub fn extract_subgraph<
    Graph: StaticGraph,
    ResultGraph: DynamicGraph<NodeData = Graph::NodeData, EdgeData = Graph::EdgeData> + Default,
>(
    graph: &Graph,
    nodes: &NodeSet<Graph::NodeIndex>,
) -> ResultGraph
where
    Graph::NodeData: Clone,
    Graph::EdgeData: Clone,
{
    let mut subgraph = ResultGraph::default();
    let mut node_map = vec![None; graph.node_count()];

    for node in nodes.iter() {
        node_map[node.as_usize()] = Some(subgraph.add_node(graph.node_data(node).clone()));
    }

    for edge in graph.edge_indices() {
        let endpoints = graph.edge_endpoints(edge);
        if let (Some(from_node), Some(to_node)) = (
            node_map[endpoints.from_node.as_usize()],
            node_map[endpoints.to_node.as_usize()],
        ) {
            subgraph.add_edge(from_node, to_node, graph.edge_data(edge).clone());
        }
    }

    subgraph
}
