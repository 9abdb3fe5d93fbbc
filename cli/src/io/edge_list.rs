use crate::io::get_or_insert_node;
use crate::{ErrorKind, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;
use traitgraph::interface::{DynamicGraph, StaticGraph};

/// Reads a graph from a list of edges.
///
/// Each line is an edge `FROM TO` given by the names of its endpoints.
/// Nodes are created in order of their first occurrence.
/// Empty lines and lines starting with `#` are ignored.
pub fn read_graph_from_edge_list<
    R: BufRead,
    Graph: DynamicGraph<NodeData = String, EdgeData = ()> + Default,
>(
    edge_list: R,
) -> Result<Graph> {
    let mut graph = Graph::default();
    let mut node_id_map = HashMap::new();

    for (line_index, line) in edge_list.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let (from_name, to_name) = match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(from_name), Some(to_name), None) => (from_name, to_name),
            _ => bail!(ErrorKind::Parse(
                line_index + 1,
                format!("expected 'FROM TO', but found '{}'", line)
            )),
        };

        let from_node = get_or_insert_node(&mut graph, &mut node_id_map, from_name);
        let to_node = get_or_insert_node(&mut graph, &mut node_id_map, to_name);
        graph.add_edge(from_node, to_node, ());
    }

    Ok(graph)
}

/// Writes the graph to a file as list of edges, see [write_graph_as_edge_list].
pub fn write_graph_as_edge_list_to_file<P: AsRef<Path>, Graph: StaticGraph<NodeData = String>>(
    graph: &Graph,
    output_file: P,
) -> Result<()> {
    let mut output = BufWriter::new(File::create(output_file)?);
    write_graph_as_edge_list(graph, &mut output)?;
    output.flush()?;
    Ok(())
}

/// Writes the graph as list of edges, one `FROM TO` pair of node names per line in order of the edge indices.
/// Nodes without edges are not written.
pub fn write_graph_as_edge_list<W: Write, Graph: StaticGraph<NodeData = String>>(
    graph: &Graph,
    output: &mut W,
) -> Result<()> {
    for edge in graph.edge_indices() {
        let endpoints = graph.edge_endpoints(edge);
        writeln!(
            output,
            "{} {}",
            graph.node_data(endpoints.from_node),
            graph.node_data(endpoints.to_node)
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::io::edge_list::{read_graph_from_edge_list, write_graph_as_edge_list};
    use crate::ErrorKind;
    use traitgraph::implementation::petgraph_impl::PetGraph;
    use traitgraph::interface::StaticGraph;

    fn counts<Graph: StaticGraph>(graph: &Graph) -> (usize, usize) {
        (graph.node_count(), graph.edge_count())
    }

    #[test]
    fn test_read_and_write_edge_list() {
        let edge_list = "# a multigraph\n\
                         a b\n\
                         \n\
                         b\ta\n\
                         a  b\n\
                         c c\n";
        let graph: PetGraph<String, ()> = read_graph_from_edge_list(edge_list.as_bytes()).unwrap();
        assert_eq!(counts(&graph), (3, 4));

        let mut output = Vec::new();
        write_graph_as_edge_list(&graph, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "a b\nb a\na b\nc c\n");
    }

    #[test]
    fn test_read_edge_list_wrong_token_count() {
        let error = read_graph_from_edge_list::<_, PetGraph<String, ()>>("a b\nc\n".as_bytes())
            .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Parse(2, _)));

        let error = read_graph_from_edge_list::<_, PetGraph<String, ()>>("a b c\n".as_bytes())
            .unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Parse(1, _)));
    }
}
