use crate::io::edge_list::write_graph_as_edge_list_to_file;
use crate::io::{read_graph_from_file, GraphFormat};
use crate::CliOptions;
use clap::Parser;
use traitgraph::algo::components::{
    count_strongly_connected_components, decompose_strongly_connected_components,
};
use traitgraph::implementation::petgraph_impl::PetGraph;
use traitgraph::index::GraphIndex;
use traitgraph::interface::StaticGraph;

#[derive(Parser)]
pub struct VerifyCommand {
    #[clap(
        short,
        long,
        default_value = "fastg",
        help = "The format of the input file, either fastg (SPAdes assembly graph) or edgelist (one 'FROM TO' pair of node names per line)"
    )]
    pub file_format: String,

    #[clap(short, long, help = "The input file in the specified format")]
    pub input: String,

    #[clap(
        short,
        long,
        help = "The output file, to which the graph should be written as edge list for verification purposes"
    )]
    pub output: Option<String>,
}

/// Statistics about the structure of a graph.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
struct GraphStatistics {
    node_count: usize,
    edge_count: usize,
    scc_count: usize,
    largest_scc_size: usize,
    source_count: usize,
    sink_count: usize,
    self_loop_count: usize,
}

fn compute_graph_statistics<Graph: StaticGraph>(graph: &Graph) -> GraphStatistics {
    let roots = decompose_strongly_connected_components(graph);
    let mut scc_sizes = vec![0usize; graph.node_count()];
    for root in &roots {
        scc_sizes[root.as_usize()] += 1;
    }

    GraphStatistics {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        scc_count: count_strongly_connected_components(&roots),
        largest_scc_size: scc_sizes.iter().copied().max().unwrap_or(0),
        source_count: graph
            .node_indices()
            .filter(|&node| graph.in_degree(node) == 0)
            .count(),
        sink_count: graph
            .node_indices()
            .filter(|&node| graph.out_degree(node) == 0)
            .count(),
        self_loop_count: graph
            .node_indices()
            .map(|node| {
                graph
                    .successors(node)
                    .filter(|&successor| successor == node)
                    .count()
            })
            .sum(),
    }
}

fn print_graph_statistics(statistics: &GraphStatistics) {
    info!("");
    info!(" === Graph Statistics === ");
    info!("");
    info!("Nodes: {}", statistics.node_count);
    info!("Edges: {}", statistics.edge_count);
    info!("Strongly connected components: {}", statistics.scc_count);
    info!(
        "Largest strongly connected component: {} nodes",
        statistics.largest_scc_size
    );
    info!("Sources: {}", statistics.source_count);
    info!("Sinks: {}", statistics.sink_count);
    info!("Self-loops: {}", statistics.self_loop_count);
    if statistics.scc_count > 1 {
        warn!("Graph is not strongly connected");
    }
    info!("");
}

pub(crate) fn verify(_options: &CliOptions, subcommand: &VerifyCommand) -> crate::Result<()> {
    let format: GraphFormat = subcommand.file_format.parse()?;
    info!(
        "Reading graph from '{}' in {:?} format",
        subcommand.input, format
    );
    let graph: PetGraph<String, ()> = read_graph_from_file(&subcommand.input, format)?;
    print_graph_statistics(&compute_graph_statistics(&graph));

    if let Some(output) = &subcommand.output {
        info!("Writing graph as edge list to '{}'", output);
        write_graph_as_edge_list_to_file(&graph, output)?;
    }

    Ok(())
}
