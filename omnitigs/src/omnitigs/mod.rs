/// The safe walk extension algorithm.
pub mod extension;

pub use crate::omnitigs::extension::OmnitigSearchConfiguration;

use crate::error::{ErrorKind, Result};
use crate::omnitigs::extension::SafeWalkExtender;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use traitgraph::interface::{GraphBase, StaticGraph};

/// A walk in a graph, stored as its sequence of nodes together with the sequence of edges joining them.
///
/// The edges are stored explicitly, such that walks through different parallel edges are distinct.
/// An omnitig never contains an edge twice, but it may contain a node multiple times.
pub struct Omnitig<Graph: GraphBase> {
    nodes: Vec<Graph::NodeIndex>,
    edges: Vec<Graph::EdgeIndex>,
}

impl<Graph: StaticGraph> Omnitig<Graph> {
    /// Creates the walk consisting of the given edge only.
    pub fn new_seed(graph: &Graph, edge: Graph::EdgeIndex) -> Self {
        let endpoints = graph.edge_endpoints(edge);
        Self {
            nodes: vec![endpoints.from_node, endpoints.to_node],
            edges: vec![edge],
        }
    }

    /// Creates the walk consisting of the given edges.
    /// Panics if the edges are empty or do not form a walk.
    pub fn from_edges(graph: &Graph, edges: &[Graph::EdgeIndex]) -> Self {
        let (&first_edge, rest) = edges.split_first().expect("A walk needs at least one edge");
        let mut walk = Self::new_seed(graph, first_edge);
        for &edge in rest {
            let endpoints = graph.edge_endpoints(edge);
            assert_eq!(
                endpoints.from_node,
                walk.last_node(),
                "Edge {:?} does not continue the walk {:?}",
                edge,
                walk
            );
            walk = walk.extended_by(edge, endpoints.to_node);
        }
        walk
    }

    /// Returns true if each pair of consecutive nodes is joined by the recorded edge and no edge is used twice.
    pub fn is_valid_in(&self, graph: &Graph) -> bool {
        if self.edges.is_empty() || self.nodes.len() != self.edges.len() + 1 {
            return false;
        }

        let mut used_edges = BTreeSet::new();
        self.edges
            .iter()
            .zip(self.nodes.windows(2))
            .all(|(&edge, nodes)| {
                graph.contains_edge_index(edge) && used_edges.insert(edge) && {
                    let endpoints = graph.edge_endpoints(edge);
                    endpoints.from_node == nodes[0] && endpoints.to_node == nodes[1]
                }
            })
    }
}

impl<Graph: GraphBase> Omnitig<Graph> {
    /// Returns the nodes of this walk in order.
    pub fn nodes(&self) -> &[Graph::NodeIndex] {
        &self.nodes
    }

    /// Returns the edges of this walk in order.
    pub fn edges(&self) -> &[Graph::EdgeIndex] {
        &self.edges
    }

    /// Returns the first node of this walk.
    pub fn first_node(&self) -> Graph::NodeIndex {
        self.nodes[0]
    }

    /// Returns the last node of this walk.
    pub fn last_node(&self) -> Graph::NodeIndex {
        self.nodes[self.nodes.len() - 1]
    }

    /// Returns the amount of edges in this walk.
    pub fn len_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if this walk uses the given edge.
    pub fn contains_edge(&self, edge: Graph::EdgeIndex) -> bool {
        self.edges.contains(&edge)
    }

    /// Returns a new walk that is this walk followed by the given edge into `to_node`.
    /// This walk is left unchanged.
    /// Panics if this walk already contains the edge.
    pub fn extended_by(&self, edge: Graph::EdgeIndex, to_node: Graph::NodeIndex) -> Self {
        assert!(
            !self.contains_edge(edge),
            "Walk {:?} already contains edge {:?}",
            self,
            edge
        );
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1);
        nodes.extend_from_slice(&self.nodes);
        nodes.push(to_node);
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(edge);
        Self { nodes, edges }
    }
}

impl<Graph: GraphBase> Clone for Omnitig<Graph> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }
}

impl<Graph: GraphBase> PartialEq for Omnitig<Graph> {
    fn eq(&self, rhs: &Self) -> bool {
        self.nodes == rhs.nodes && self.edges == rhs.edges
    }
}

impl<Graph: GraphBase> Eq for Omnitig<Graph> {}

impl<Graph: GraphBase> PartialOrd for Omnitig<Graph> {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

impl<Graph: GraphBase> Ord for Omnitig<Graph> {
    fn cmp(&self, rhs: &Self) -> Ordering {
        self.nodes
            .cmp(&rhs.nodes)
            .then_with(|| self.edges.cmp(&rhs.edges))
    }
}

impl<Graph: GraphBase> std::fmt::Debug for Omnitig<Graph> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Omnitig[{:?}", self.nodes[0])?;
        for (edge, node) in self.edges.iter().zip(self.nodes.iter().skip(1)) {
            write!(f, " -{:?}-> {:?}", edge, node)?;
        }
        write!(f, "]")
    }
}

/// Counters collected while computing omnitigs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OmnitigSearchStatistics {
    /// The amount of seed walks, i.e. one per edge.
    pub seeds: usize,
    /// The amount of safety tests, i.e. restricted reachability queries.
    pub safety_tests: usize,
    /// The amount of maximal walks found, including those found from multiple seeds.
    pub maximal_walks: usize,
}

/// A deduplicated set of omnitigs of a graph, ordered by their node sequences and then by their edge sequences.
pub struct Omnitigs<Graph: GraphBase> {
    omnitigs: BTreeSet<Omnitig<Graph>>,
    statistics: OmnitigSearchStatistics,
}

impl<Graph: StaticGraph> Omnitigs<Graph> {
    /// Computes the maximal safe walks of the given graph by extending a walk from every edge.
    pub fn compute(graph: &Graph) -> Result<Self> {
        Self::compute_with_configuration(graph, &OmnitigSearchConfiguration::default())
    }

    /// Computes the maximal safe walks of the given graph, aborting if the search exceeds the limits of the given configuration.
    pub fn compute_with_configuration(
        graph: &Graph,
        configuration: &OmnitigSearchConfiguration,
    ) -> Result<Self> {
        check_graph(graph)?;

        let mut omnitigs = Self::default();
        let mut extender = SafeWalkExtender::new(graph, *configuration);
        let edge_count = graph.edge_count();
        debug!(
            "Extending {} seed walks with configuration {:?}",
            edge_count, configuration
        );

        for (seed_number, edge) in graph.edge_indices().enumerate() {
            extender.extend_to_maximal_walks(Omnitig::new_seed(graph, edge), &mut omnitigs)?;
            if (seed_number + 1) % 10_000 == 0 {
                debug!(
                    "Extended {}/{} seeds, {} distinct maximal walks so far",
                    seed_number + 1,
                    edge_count,
                    omnitigs.len()
                );
            }
        }

        omnitigs.statistics = extender.statistics();
        info!(
            "Found {} distinct maximal walks from {} seeds using {} safety tests",
            omnitigs.len(),
            omnitigs.statistics.seeds,
            omnitigs.statistics.safety_tests
        );
        Ok(omnitigs)
    }
}

/// Computes the maximal safe walks of the given graph.
/// This is a shortcut for [Omnitigs::compute].
pub fn compute_omnitigs<Graph: StaticGraph>(graph: &Graph) -> Result<Omnitigs<Graph>> {
    Omnitigs::compute(graph)
}

fn check_graph<Graph: StaticGraph>(graph: &Graph) -> Result<()> {
    for edge in graph.edge_indices() {
        let endpoints = graph.edge_endpoints(edge);
        if !graph.contains_node_index(endpoints.from_node)
            || !graph.contains_node_index(endpoints.to_node)
        {
            bail!(ErrorKind::InvalidGraph(format!(
                "edge {:?} has endpoints ({:?}, {:?}) outside of the node range 0..{}",
                edge,
                endpoints.from_node,
                endpoints.to_node,
                graph.node_count()
            )));
        }
    }

    Ok(())
}

impl<Graph: GraphBase> Omnitigs<Graph> {
    /// Returns an iterator over the omnitigs in this set in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Omnitig<Graph>> {
        self.omnitigs.iter()
    }

    /// Returns the amount of omnitigs in this set.
    pub fn len(&self) -> usize {
        self.omnitigs.len()
    }

    /// Returns true if this set contains no omnitigs.
    pub fn is_empty(&self) -> bool {
        self.omnitigs.is_empty()
    }

    /// Adds the given omnitig to this set.
    /// Returns true if it was not contained before.
    pub fn insert(&mut self, omnitig: Omnitig<Graph>) -> bool {
        self.omnitigs.insert(omnitig)
    }

    /// Returns true if this set contains the given omnitig.
    pub fn contains(&self, omnitig: &Omnitig<Graph>) -> bool {
        self.omnitigs.contains(omnitig)
    }

    /// Returns the counters collected while computing this set.
    pub fn statistics(&self) -> &OmnitigSearchStatistics {
        &self.statistics
    }
}

impl<Graph: GraphBase> Default for Omnitigs<Graph> {
    fn default() -> Self {
        Self {
            omnitigs: Default::default(),
            statistics: Default::default(),
        }
    }
}

/// Two sets are equal if they contain the same omnitigs, the statistics are ignored.
impl<Graph: GraphBase> PartialEq for Omnitigs<Graph> {
    fn eq(&self, rhs: &Self) -> bool {
        self.omnitigs == rhs.omnitigs
    }
}

impl<Graph: GraphBase> Eq for Omnitigs<Graph> {}

impl<Graph: GraphBase> std::fmt::Debug for Omnitigs<Graph> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_set().entries(self.omnitigs.iter()).finish()
    }
}

impl<Graph: GraphBase> IntoIterator for Omnitigs<Graph> {
    type Item = Omnitig<Graph>;
    type IntoIter = std::collections::btree_set::IntoIter<Omnitig<Graph>>;

    fn into_iter(self) -> Self::IntoIter {
        self.omnitigs.into_iter()
    }
}

impl<'a, Graph: GraphBase> IntoIterator for &'a Omnitigs<Graph> {
    type Item = &'a Omnitig<Graph>;
    type IntoIter = std::collections::btree_set::Iter<'a, Omnitig<Graph>>;

    fn into_iter(self) -> Self::IntoIter {
        self.omnitigs.iter()
    }
}
