use crate::interface::DynamicGraph;
use rand::Rng;

/// Adds a directed cycle with the given amount of nodes to the graph.
/// Returns the first node of the cycle, or `None` if `node_amount` is zero.
/// A cycle with a single node is a self-loop.
pub fn create_cycle<Graph: DynamicGraph>(
    graph: &mut Graph,
    node_amount: usize,
) -> Option<Graph::NodeIndex>
where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return None;
    }

    let first = graph.add_node(Default::default());
    let mut last = first;
    for _ in 1..node_amount {
        let node = graph.add_node(Default::default());
        graph.add_edge(last, node, Default::default());
        last = node;
    }
    graph.add_edge(last, first, Default::default());
    Some(first)
}

/// Adds `node_amount` nodes and `edge_amount` edges with uniformly random endpoints to the graph.
/// Self-loops and parallel edges may be created.
/// The random edges only connect the added nodes.
pub fn create_random_graph<Graph: DynamicGraph, Random: Rng>(
    graph: &mut Graph,
    node_amount: usize,
    edge_amount: usize,
    random: &mut Random,
) where
    Graph::NodeData: Default,
    Graph::EdgeData: Default,
{
    if node_amount == 0 {
        return;
    }

    let nodes: Vec<_> = (0..node_amount)
        .map(|_| graph.add_node(Default::default()))
        .collect();
    for _ in 0..edge_amount {
        let from_node = nodes[random.gen_range(0..node_amount)];
        let to_node = nodes[random.gen_range(0..node_amount)];
        graph.add_edge(from_node, to_node, Default::default());
    }
}
