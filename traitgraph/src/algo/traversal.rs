use crate::implementation::node_set::NodeSet;
use crate::interface::StaticGraph;
use std::collections::VecDeque;

/// The direction in which a [Bfs] follows the edges of a graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TraversalDirection {
    /// From the tail of an edge to its head.
    Forward,
    /// From the head of an edge to its tail.
    Backward,
}

/// A breadth first search that yields each node once, at the time it is dequeued.
///
/// The visited nodes are kept between calls to [Bfs::continue_from],
/// such that multiple searches can partition the graph among themselves.
pub struct Bfs<'a, Graph: StaticGraph> {
    graph: &'a Graph,
    direction: TraversalDirection,
    queue: VecDeque<Graph::NodeIndex>,
    visited: NodeSet<Graph::NodeIndex>,
}

impl<'a, Graph: StaticGraph> Bfs<'a, Graph> {
    /// Creates a search in the given direction that starts at `start`.
    pub fn new(graph: &'a Graph, direction: TraversalDirection, start: Graph::NodeIndex) -> Self {
        let mut bfs = Self::new_without_start(graph, direction);
        bfs.continue_from(start);
        bfs
    }

    /// Creates a search in the given direction that has not visited any node yet.
    pub fn new_without_start(graph: &'a Graph, direction: TraversalDirection) -> Self {
        Self {
            graph,
            direction,
            queue: VecDeque::new(),
            visited: NodeSet::new_empty(graph.node_count()),
        }
    }

    /// Queues `start` if it was not visited before, and returns true in this case.
    pub fn continue_from(&mut self, start: Graph::NodeIndex) -> bool {
        if self.visited.insert(start) {
            self.queue.push_back(start);
            true
        } else {
            false
        }
    }

    /// Returns true if the given node has been reached by the search.
    pub fn is_visited(&self, node: Graph::NodeIndex) -> bool {
        self.visited.contains(node)
    }

    /// Runs the search until the queue is empty and returns all nodes it reached.
    pub fn into_visited(mut self) -> NodeSet<Graph::NodeIndex> {
        for _ in &mut self {}
        self.visited
    }

    fn enqueue(&mut self, node: Graph::NodeIndex) {
        if self.visited.insert(node) {
            self.queue.push_back(node);
        }
    }
}

impl<'a, Graph: StaticGraph> Iterator for Bfs<'a, Graph> {
    type Item = Graph::NodeIndex;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        let graph = self.graph;
        match self.direction {
            TraversalDirection::Forward => {
                for neighbor in graph.out_neighbors(node) {
                    self.enqueue(neighbor.node_id);
                }
            }
            TraversalDirection::Backward => {
                for neighbor in graph.in_neighbors(node) {
                    self.enqueue(neighbor.node_id);
                }
            }
        }
        Some(node)
    }
}

/// Returns all nodes of the graph in depth first postorder, following edges forwards.
///
/// Roots are tried in ascending order, and the outgoing edges of a node in the order given by the graph.
pub fn forward_postorder<Graph: StaticGraph>(graph: &Graph) -> Vec<Graph::NodeIndex> {
    let mut postorder = Vec::with_capacity(graph.node_count());
    let mut visited = NodeSet::new_empty(graph.node_count());
    let mut stack = Vec::new();

    for root in graph.node_indices() {
        if !visited.insert(root) {
            continue;
        }

        stack.push((root, graph.out_neighbors(root)));
        while let Some((node, neighbors)) = stack.last_mut() {
            let node = *node;
            match neighbors.find(|neighbor| !visited.contains(neighbor.node_id)) {
                Some(neighbor) => {
                    visited.insert(neighbor.node_id);
                    stack.push((neighbor.node_id, graph.out_neighbors(neighbor.node_id)));
                }
                None => {
                    stack.pop();
                    postorder.push(node);
                }
            }
        }
    }

    postorder
}
