use crate::implementation::node_set::NodeSet;
use crate::interface::{GraphBase, StaticGraph};
use std::collections::VecDeque;

/// Returns the set of nodes reachable from `start` via one or more edges, never using `forbidden_edge`.
///
/// The start node itself is only contained if it lies on a cycle.
/// Parallel edges of the forbidden edge stay usable.
pub fn compute_reachable_nodes<Graph: StaticGraph>(
    graph: &Graph,
    start: Graph::NodeIndex,
    forbidden_edge: Option<Graph::EdgeIndex>,
) -> NodeSet<Graph::NodeIndex> {
    let mut reachable = NodeSet::new_empty(graph.node_count());
    let mut queue = VecDeque::new();
    queue.push_back(start);

    // The start node is only marked once it is entered by an edge, so it may be dequeued a second time.
    while let Some(node) = queue.pop_front() {
        for neighbor in graph.out_neighbors(node) {
            if Some(neighbor.edge_id) != forbidden_edge && reachable.insert(neighbor.node_id) {
                queue.push_back(neighbor.node_id);
            }
        }
    }

    reachable
}

/// Reachability queries on a graph.
/// This is an extension trait, it is implemented for all static graphs.
pub trait ReachabilityQueries: StaticGraph {
    /// Returns the set of nodes reachable from `start` via one or more edges.
    /// Unreachable nodes are simply not contained in the result.
    fn reachable_from(&self, start: Self::NodeIndex) -> NodeSet<Self::NodeIndex> {
        compute_reachable_nodes(self, start, None)
    }

    /// Returns a view of this graph with the given edge removed.
    /// The graph itself is not modified, and parallel edges with the same endpoints stay in the view.
    ///
    /// Panics if the edge does not exist.
    fn without_edge(&self, edge_id: Self::EdgeIndex) -> EdgeRemovedGraph<'_, Self> {
        assert!(
            self.contains_edge_index(edge_id),
            "Cannot remove edge {:?}, it does not exist",
            edge_id
        );
        EdgeRemovedGraph {
            graph: self,
            removed_edge: edge_id,
        }
    }

    /// Returns a view of this graph with one edge `(from, to)` removed.
    /// If there are parallel edges `(from, to)`, then only one of them is removed.
    ///
    /// Panics if there is no edge `(from, to)`.
    fn without_edge_between(
        &self,
        from: Self::NodeIndex,
        to: Self::NodeIndex,
    ) -> EdgeRemovedGraph<'_, Self> {
        let edge_id = self.edges_between(from, to).next().unwrap_or_else(|| {
            panic!(
                "Cannot remove an edge ({:?}, {:?}), there is none",
                from, to
            )
        });
        self.without_edge(edge_id)
    }
}

impl<Graph: StaticGraph> ReachabilityQueries for Graph {}

/// A graph with a single edge removed.
///
/// The edge is masked during queries instead of being deleted, so creating this view costs constant time
/// and the underlying graph is never modified.
pub struct EdgeRemovedGraph<'a, Graph: GraphBase> {
    graph: &'a Graph,
    removed_edge: Graph::EdgeIndex,
}

impl<'a, Graph: StaticGraph> EdgeRemovedGraph<'a, Graph> {
    /// Returns the set of nodes reachable from `start` via one or more edges without using the removed edge.
    pub fn reachable_from(&self, start: Graph::NodeIndex) -> NodeSet<Graph::NodeIndex> {
        compute_reachable_nodes(self.graph, start, Some(self.removed_edge))
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::reachability::ReachabilityQueries;
    use crate::implementation::petgraph_impl;
    use crate::interface::{ImmutableGraphContainer, MutableGraphContainer};

    #[test]
    fn test_reachable_from_excludes_start_without_cycle() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let n3 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n3, n0, ());

        let reachable = graph.reachable_from(n0);
        assert_eq!(reachable.iter().collect::<Vec<_>>(), vec![n1, n2]);
        assert!(graph.reachable_from(n2).is_empty());

        graph.add_edge(n2, n0, ());
        let reachable = graph.reachable_from(n0);
        assert_eq!(reachable.iter().collect::<Vec<_>>(), vec![n0, n1, n2]);
    }

    #[test]
    fn test_without_edge_does_not_modify_graph() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        let e0 = graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());
        graph.add_edge(n2, n0, ());

        let removed = graph.without_edge(e0);
        assert!(removed.reachable_from(n0).is_empty());
        assert_eq!(
            removed.reachable_from(n1).iter().collect::<Vec<_>>(),
            vec![n0, n2]
        );

        assert_eq!(graph.edge_count(), 3);
        assert_eq!(
            graph.reachable_from(n0).iter().collect::<Vec<_>>(),
            vec![n0, n1, n2]
        );
    }

    #[test]
    #[should_panic]
    fn test_without_missing_edge() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());

        graph.without_edge(1.into());
    }

    #[test]
    fn test_without_edge_between_removes_one_parallel_edge() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        let n2 = graph.add_node(());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n0, n1, ());
        graph.add_edge(n1, n2, ());

        let removed = graph.without_edge_between(n0, n1);
        assert_eq!(
            removed.reachable_from(n0).iter().collect::<Vec<_>>(),
            vec![n1, n2]
        );
        let removed = graph.without_edge_between(n1, n2);
        assert!(removed.reachable_from(n1).is_empty());
    }

    #[test]
    #[should_panic]
    fn test_without_edge_between_missing_edge() {
        let mut graph = petgraph_impl::new();
        let n0 = graph.add_node(());
        let n1 = graph.add_node(());
        graph.add_edge(n0, n1, ());

        graph.without_edge_between(n1, n0);
    }
}
