use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};

use crate::graph::{Edge, Graph};

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &Graph) -> Result<String, TopoError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string, re-validating simplicity.
pub fn graph_from_json(json: &str) -> Result<Graph, TopoError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| TopoError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    nodes: usize,
    edges: Vec<Edge>,
}

impl SerializableGraph {
    fn from_graph(graph: &Graph) -> Self {
        Self {
            nodes: graph.node_count(),
            edges: graph.edges().collect(),
        }
    }

    fn into_graph(self) -> Result<Graph, TopoError> {
        Graph::from_edges(self.nodes, self.edges)
    }
}
