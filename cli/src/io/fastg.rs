use crate::{Error, ErrorKind, Result};
use bio::io::fasta::Record;
use std::collections::HashMap;
use std::convert::{TryFrom, TryInto};
use std::io::Read;
use traitgraph::interface::DynamicGraph;

/// The graph-relevant part of a FASTG record, parsed from a header `>NAME:SUCC1,SUCC2;` or `>NAME;`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PlainFastgNodeData {
    /// The name of the node, including a trailing `'` for reverse complements.
    pub name: String,
    /// The names of the heads of the outgoing edges, in order of the header.
    pub successors: Vec<String>,
}

impl TryFrom<Record> for PlainFastgNodeData {
    type Error = Error;

    fn try_from(value: Record) -> Result<Self> {
        let header = value.id();
        let malformed = |reason: &str| {
            Error::from(ErrorKind::MalformedFastgHeader(
                header.to_owned(),
                reason.to_owned(),
            ))
        };

        let header_content = header
            .strip_suffix(';')
            .ok_or_else(|| malformed("missing ';' at the end"))?;
        let (name, successors): (_, Vec<&str>) = match header_content.split_once(':') {
            Some((name, successors)) => (name, successors.split(',').collect()),
            None => (header_content, Vec::new()),
        };

        ensure!(!name.is_empty(), malformed("empty node name"));
        ensure!(
            successors.iter().all(|successor| !successor.is_empty()),
            malformed("empty successor name")
        );

        Ok(Self {
            name: name.to_owned(),
            successors: successors.into_iter().map(ToOwned::to_owned).collect(),
        })
    }
}

/// Reads a graph from an assembly graph in SPAdes FASTG format.
///
/// Each record declares a node named by its header, with an edge to each listed successor.
/// The sequences are ignored.
/// Successors that are not declared by a record of their own are an error.
pub fn read_graph_from_fastg<
    R: Read,
    Graph: DynamicGraph<NodeData = String, EdgeData = ()> + Default,
>(
    fastg: R,
) -> Result<Graph> {
    let mut graph = Graph::default();
    let mut node_id_map = HashMap::new();
    let mut successor_lists = Vec::new();

    for record in bio::io::fasta::Reader::new(fastg).records() {
        let record: PlainFastgNodeData = record?.try_into()?;
        let node = graph.add_node(record.name.clone());
        ensure!(
            node_id_map.insert(record.name.clone(), node).is_none(),
            ErrorKind::MalformedFastgHeader(record.name, "duplicate node".to_owned())
        );
        successor_lists.push((node, record.successors));
    }

    for (from_node, successors) in successor_lists {
        for successor in successors {
            let to_node = *node_id_map
                .get(&successor)
                .ok_or_else(|| Error::from(ErrorKind::UnknownNode(successor.clone())))?;
            graph.add_edge(from_node, to_node, ());
        }
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use crate::io::fastg::{read_graph_from_fastg, PlainFastgNodeData};
    use crate::ErrorKind;
    use bio::io::fasta::Record;
    use std::convert::TryFrom;
    use traitgraph::implementation::petgraph_impl::PetGraph;
    use traitgraph::interface::StaticGraph;

    fn edges_by_name<Graph: StaticGraph<NodeData = String>>(graph: &Graph) -> Vec<(String, String)> {
        graph
            .edge_indices()
            .map(|edge| {
                let endpoints = graph.edge_endpoints(edge);
                (
                    graph.node_data(endpoints.from_node).clone(),
                    graph.node_data(endpoints.to_node).clone(),
                )
            })
            .collect()
    }

    fn node_names<Graph: StaticGraph<NodeData = String>>(graph: &Graph) -> Vec<String> {
        graph
            .node_indices()
            .map(|node| graph.node_data(node).clone())
            .collect()
    }

    #[test]
    fn test_read_fastg() {
        let fastg = ">EDGE_1_length_5_cov_2.0:EDGE_2_length_4_cov_1.0',EDGE_1_length_5_cov_2.0;\n\
                     ACGTA\n\
                     >EDGE_2_length_4_cov_1.0';\n\
                     ACGT\n\
                     >EDGE_3:EDGE_2_length_4_cov_1.0';\n\
                     AC\n\
                     GT\n";
        let graph: PetGraph<String, ()> = read_graph_from_fastg(fastg.as_bytes()).unwrap();

        assert_eq!(
            node_names(&graph),
            vec![
                "EDGE_1_length_5_cov_2.0",
                "EDGE_2_length_4_cov_1.0'",
                "EDGE_3"
            ]
        );
        assert_eq!(
            edges_by_name(&graph),
            vec![
                (
                    "EDGE_1_length_5_cov_2.0".to_string(),
                    "EDGE_2_length_4_cov_1.0'".to_string()
                ),
                (
                    "EDGE_1_length_5_cov_2.0".to_string(),
                    "EDGE_1_length_5_cov_2.0".to_string()
                ),
                (
                    "EDGE_3".to_string(),
                    "EDGE_2_length_4_cov_1.0'".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_parse_fastg_header() {
        let record = Record::with_attrs("A:B,C';", None, b"ACGT");
        assert_eq!(
            PlainFastgNodeData::try_from(record).unwrap(),
            PlainFastgNodeData {
                name: "A".to_string(),
                successors: vec!["B".to_string(), "C'".to_string()],
            }
        );

        let record = Record::with_attrs("A';", None, b"");
        assert_eq!(
            PlainFastgNodeData::try_from(record).unwrap().successors,
            Vec::<String>::new()
        );
    }

    #[test]
    fn test_read_fastg_unknown_successor() {
        let fastg = ">A:B;\nAC\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::UnknownNode(name) if name == "B"));
    }

    #[test]
    fn test_read_fastg_malformed_header() {
        let fastg = ">A;\nAC\n>B:A\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MalformedFastgHeader(header, _) if header == "B:A"));

        let fastg = ">A;\n>A;\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MalformedFastgHeader(header, _) if header == "A"));

        let fastg = ">A:B,;\n>B;\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(
            matches!(error.kind(), ErrorKind::MalformedFastgHeader(header, _) if header == "A:B,;")
        );

        let fastg = ">:B;\n>B;\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::MalformedFastgHeader(..)));
    }

    #[test]
    fn test_read_fastg_without_header() {
        let fastg = "ACGT\n>A;\n";
        let error = read_graph_from_fastg::<_, PetGraph<String, ()>>(fastg.as_bytes()).unwrap_err();
        assert!(matches!(error.kind(), ErrorKind::Io(_)));
    }
}
