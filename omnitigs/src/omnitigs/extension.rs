use crate::error::{ErrorKind, Result};
use crate::omnitigs::{Omnitig, OmnitigSearchStatistics, Omnitigs};
use traitgraph::algo::reachability::ReachabilityQueries;
use traitgraph::implementation::node_set::NodeSet;
use traitgraph::interface::{Neighbor, StaticGraph};

/// Limits for the omnitig search.
/// The default configuration is unlimited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OmnitigSearchConfiguration {
    /// If set, the search aborts when a walk has more than this amount of edges.
    pub max_walk_edges: Option<usize>,
    /// If set, the search aborts when it performs more than this amount of safety tests in total.
    pub max_extension_steps: Option<usize>,
}

/// Extends walks along safe edges until they are maximal.
///
/// The extension is depth first with an explicit stack of walks, where each branch owns its walk.
pub struct SafeWalkExtender<'a, Graph: StaticGraph> {
    graph: &'a Graph,
    configuration: OmnitigSearchConfiguration,
    statistics: OmnitigSearchStatistics,
}

impl<'a, Graph: StaticGraph> SafeWalkExtender<'a, Graph> {
    /// Creates a new extender for the given graph.
    pub fn new(graph: &'a Graph, configuration: OmnitigSearchConfiguration) -> Self {
        Self {
            graph,
            configuration,
            statistics: Default::default(),
        }
    }

    /// Returns the counters collected by this extender so far.
    pub fn statistics(&self) -> OmnitigSearchStatistics {
        self.statistics
    }

    /// Extends the given seed walk in all safe ways and inserts each resulting maximal walk into `omnitigs`.
    pub fn extend_to_maximal_walks(
        &mut self,
        seed: Omnitig<Graph>,
        omnitigs: &mut Omnitigs<Graph>,
    ) -> Result<()> {
        self.statistics.seeds += 1;
        let mut stack = vec![seed];

        while let Some(walk) = stack.pop() {
            if let Some(max_walk_edges) = self.configuration.max_walk_edges {
                if walk.len_edges() > max_walk_edges {
                    bail!(ErrorKind::SearchLimitExceeded(format!(
                        "walk {:?} has more than {} edges",
                        walk, max_walk_edges
                    )));
                }
            }

            let safe_extensions = self.compute_safe_extensions(&walk)?;
            if safe_extensions.is_empty() {
                trace!("Found maximal walk {:?}", walk);
                self.statistics.maximal_walks += 1;
                omnitigs.insert(walk);
            } else {
                // Reversed, such that extensions are popped in the order of the outgoing edges.
                for extension in safe_extensions.into_iter().rev() {
                    stack.push(walk.extended_by(extension.edge_id, extension.node_id));
                }
            }
        }

        Ok(())
    }

    fn compute_safe_extensions(
        &mut self,
        walk: &Omnitig<Graph>,
    ) -> Result<Vec<Neighbor<Graph::NodeIndex, Graph::EdgeIndex>>> {
        let graph = self.graph;
        let tail = walk.last_node();
        let external_sources = compute_external_sources(graph, walk);
        let mut safe_extensions = Vec::new();

        for neighbor in graph.out_neighbors(tail) {
            if walk.contains_edge(neighbor.edge_id) {
                continue;
            }

            self.count_safety_test()?;
            if is_safe_extension(graph, tail, neighbor.edge_id, &external_sources) {
                safe_extensions.push(neighbor);
            }
        }

        Ok(safe_extensions)
    }

    fn count_safety_test(&mut self) -> Result<()> {
        self.statistics.safety_tests += 1;
        if let Some(max_extension_steps) = self.configuration.max_extension_steps {
            if self.statistics.safety_tests > max_extension_steps {
                bail!(ErrorKind::SearchLimitExceeded(format!(
                    "more than {} safety tests",
                    max_extension_steps
                )));
            }
        }
        Ok(())
    }
}

/// Returns the external sources of the given walk.
/// These are the nodes outside of the walk that have an edge into a node of the walk other than its first node.
pub fn compute_external_sources<Graph: StaticGraph>(
    graph: &Graph,
    walk: &Omnitig<Graph>,
) -> NodeSet<Graph::NodeIndex> {
    let mut external_sources = graph.predecessors_into(walk.nodes()[1..].iter().copied());
    for &node in walk.nodes() {
        external_sources.remove(node);
    }
    external_sources
}

/// Returns true if extending a walk ending in `tail` by `edge` is safe.
///
/// This is the case if none of the external sources of the walk is reachable from `tail` without using `edge`.
/// Parallel edges with the same endpoints as `edge` may be used.
pub fn is_safe_extension<Graph: StaticGraph>(
    graph: &Graph,
    tail: Graph::NodeIndex,
    edge: Graph::EdgeIndex,
    external_sources: &NodeSet<Graph::NodeIndex>,
) -> bool {
    if external_sources.is_empty() {
        return true;
    }

    graph
        .without_edge(edge)
        .reachable_from(tail)
        .is_disjoint(external_sources)
}
