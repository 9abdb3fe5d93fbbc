use crate::{Error, ErrorKind, Result};
use omnitigs::omnitigs::Omnitigs;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;
use traitgraph::interface::{DynamicGraph, StaticGraph};

/// Reading and writing graphs as lists of node name pairs.
pub mod edge_list;
/// Reading graphs in SPAdes FASTG format.
pub mod fastg;

/// The supported input graph formats.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GraphFormat {
    /// SPAdes assembly graph headers `>NAME:SUCC1,SUCC2;`.
    Fastg,
    /// One edge `FROM TO` per line.
    EdgeList,
}

impl FromStr for GraphFormat {
    type Err = Error;

    fn from_str(format: &str) -> Result<Self> {
        match format {
            "fastg" => Ok(Self::Fastg),
            "edgelist" => Ok(Self::EdgeList),
            unknown => Err(ErrorKind::UnknownFileFormat(unknown.to_string()).into()),
        }
    }
}

/// Reads a graph in the given format from a file.
/// The nodes of the graph are labelled with their names.
pub fn read_graph_from_file<
    P: AsRef<Path>,
    Graph: DynamicGraph<NodeData = String, EdgeData = ()> + Default,
>(
    file: P,
    format: GraphFormat,
) -> Result<Graph> {
    let file = File::open(file)?;
    match format {
        GraphFormat::Fastg => fastg::read_graph_from_fastg(file),
        GraphFormat::EdgeList => edge_list::read_graph_from_edge_list(BufReader::new(file)),
    }
}

/// Writes the omnitigs to a file, one per line, as their node names separated by single spaces.
pub fn write_omnitigs_as_node_names_to_file<
    P: AsRef<Path>,
    Graph: StaticGraph<NodeData = String>,
>(
    graph: &Graph,
    omnitigs: &Omnitigs<Graph>,
    output_file: P,
) -> Result<()> {
    let mut output = BufWriter::new(File::create(output_file)?);
    write_omnitigs_as_node_names(graph, omnitigs, &mut output)?;
    output.flush()?;
    Ok(())
}

/// Writes the omnitigs, one per line, as their node names separated by single spaces.
pub fn write_omnitigs_as_node_names<W: Write, Graph: StaticGraph<NodeData = String>>(
    graph: &Graph,
    omnitigs: &Omnitigs<Graph>,
    output: &mut W,
) -> Result<()> {
    for omnitig in omnitigs {
        let node_names: Vec<_> = omnitig
            .nodes()
            .iter()
            .map(|&node| graph.node_data(node).as_str())
            .collect();
        writeln!(output, "{}", node_names.join(" "))?;
    }

    Ok(())
}

/// Returns the node with the given name, adding it to the graph if it does not exist yet.
fn get_or_insert_node<Graph: DynamicGraph<NodeData = String>>(
    graph: &mut Graph,
    node_id_map: &mut HashMap<String, Graph::NodeIndex>,
    name: &str,
) -> Graph::NodeIndex {
    if let Some(&node) = node_id_map.get(name) {
        node
    } else {
        let node = graph.add_node(name.to_string());
        node_id_map.insert(name.to_string(), node);
        node
    }
}
