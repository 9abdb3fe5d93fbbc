use crate::io::{read_graph_from_file, write_omnitigs_as_node_names_to_file, GraphFormat};
use crate::{CliOptions, Error, ErrorKind};
use clap::Parser;
use omnitigs::omnitigs::{OmnitigSearchConfiguration, Omnitigs};
use traitgraph::algo::components::{
    count_strongly_connected_components, decompose_strongly_connected_components,
    extract_subgraph, strongly_connected_component_of,
};
use traitgraph::implementation::petgraph_impl::PetGraph;
use traitgraph::interface::{DynamicGraph, GraphBase};

#[derive(Parser)]
pub struct ComputeOmnitigsCommand {
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
        help = "The file the omnitigs are stored into, one per line as node names separated by spaces"
    )]
    pub output: String,

    #[clap(
        long,
        help = "Compute omnitigs only in the strongly connected component containing the node with this name"
    )]
    pub component_of: Option<String>,

    #[clap(
        long,
        help = "Abort if a walk gets more than this amount of edges"
    )]
    pub max_walk_edges: Option<usize>,

    #[clap(
        long,
        help = "Abort if the search performs more than this amount of safety tests in total"
    )]
    pub max_extension_steps: Option<usize>,
}

fn print_omnitigs_statistics<Graph: GraphBase>(maximal_omnitigs: &Omnitigs<Graph>) {
    info!("");
    info!(" === Omnitig Statistics === ");
    info!("");

    let statistics = maximal_omnitigs.statistics();
    info!("Seeds: {}", statistics.seeds);
    info!("Safety tests: {}", statistics.safety_tests);
    info!(
        "Maximal walks (with duplicates): {}",
        statistics.maximal_walks
    );
    info!("Distinct maximal walks: {}", maximal_omnitigs.len());

    if maximal_omnitigs.is_empty() {
        info!("");
        return;
    }

    let omnitig_lengths: Vec<_> = maximal_omnitigs.iter().map(|o| o.len_edges()).collect();
    let min_omnitig_len = omnitig_lengths.iter().min().unwrap();
    let max_omnitig_len = omnitig_lengths.iter().max().unwrap();
    let median_omnitig_len = statistical::median(&omnitig_lengths);
    let mean_omnitig_len = statistical::mean(
        &omnitig_lengths
            .iter()
            .map(|&len| len as f64)
            .collect::<Vec<_>>(),
    );
    info!("Minimum edge length: {}", min_omnitig_len);
    info!("Maximum edge length: {}", max_omnitig_len);
    info!("Median edge length: {}", median_omnitig_len);
    info!("Mean edge length: {:.1}", mean_omnitig_len);
    info!("");
}

fn compute_and_write_omnitigs<Graph: DynamicGraph<NodeData = String, EdgeData = ()> + Default>(
    graph: &Graph,
    subcommand: &ComputeOmnitigsCommand,
) -> crate::Result<()> {
    info!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let component_graph;
    let graph = if let Some(node_name) = &subcommand.component_of {
        let node = graph
            .node_indices()
            .find(|&node| graph.node_data(node) == node_name)
            .ok_or_else(|| Error::from(ErrorKind::UnknownNode(node_name.clone())))?;
        let component = strongly_connected_component_of(graph, node);
        component_graph = extract_subgraph::<_, Graph>(graph, &component);
        info!(
            "Selected the strongly connected component of '{}' with {} nodes and {} edges",
            node_name,
            component_graph.node_count(),
            component_graph.edge_count()
        );
        &component_graph
    } else {
        let scc_count =
            count_strongly_connected_components(&decompose_strongly_connected_components(graph));
        if scc_count > 1 {
            warn!("Graph is not strongly connected!");
            warn!("Found {} SCCs", scc_count);
        }
        graph
    };

    let configuration = OmnitigSearchConfiguration {
        max_walk_edges: subcommand.max_walk_edges,
        max_extension_steps: subcommand.max_extension_steps,
    };

    info!("Computing maximal omnitigs");
    let omnitigs = Omnitigs::compute_with_configuration(graph, &configuration)?;
    print_omnitigs_statistics(&omnitigs);

    info!("Storing maximal omnitigs to '{}'", subcommand.output);
    write_omnitigs_as_node_names_to_file(graph, &omnitigs, &subcommand.output)
}

pub(crate) fn compute_omnitigs(
    _options: &CliOptions,
    subcommand: &ComputeOmnitigsCommand,
) -> crate::Result<()> {
    let format: GraphFormat = subcommand.file_format.parse()?;
    info!(
        "Reading graph from '{}' in {:?} format",
        subcommand.input, format
    );
    let graph: PetGraph<String, ()> = read_graph_from_file(&subcommand.input, format)?;
    compute_and_write_omnitigs(&graph, subcommand)
}
