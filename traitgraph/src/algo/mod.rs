/// Algorithms related to strongly connected components, i.e. decomposing a graph into its components and extracting the subgraph of a component.
pub mod components;
/// Algorithms to create certain parameterisable graph classes, like random graphs and cycles.
pub mod predefined_graphs;
/// Reachability queries, optionally with a single edge removed from the graph.
pub mod reachability;
/// Breadth first search in both directions and a forward depth first postorder.
pub mod traversal;
