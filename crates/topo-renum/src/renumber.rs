use std::path::{Path, PathBuf};

use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{NodeId, RngHandle};
use topo_graph::{generate_regular, Graph};

use crate::auxiliary::AuxiliaryGraph;
use crate::permutation::{stride_order, Permutation};
use crate::tour::greedy_tour;

/// Result of renumbering a graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Renumbering {
    /// Closed greedy tour over the original ids (source first and last).
    pub tour: Vec<NodeId>,
    /// Original ids in the order they receive new ids, after striding.
    pub order: Vec<NodeId>,
    /// Old id → new id.
    pub permutation: Permutation,
    /// The relabelled graph with original edge weights.
    pub graph: Graph,
}

impl Renumbering {
    /// Consecutive new ids `(k, k+1)` that are not physically linked.
    pub fn sentinel_steps(&self) -> usize {
        let n = self.graph.node_count();
        (1..n).filter(|&k| !self.graph.has_edge(k - 1, k)).count()
    }
}

/// Renumbers `graph` along a greedy tour from node 0, applying `stride`.
pub fn renumber(graph: &Graph, stride: usize) -> Result<Renumbering, TopoError> {
    if stride == 0 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("stride-zero", "stride must be at least 1")
                .with_context("stride", stride),
        ));
    }
    let aux = AuxiliaryGraph::build(graph);
    let tour = greedy_tour(&aux, 0);
    let visit = &tour[..tour.len().saturating_sub(1)];
    let order = stride_order(visit, stride)?;
    let permutation = Permutation::from_order(&order)?;
    let renumbered = permutation.apply(graph)?;
    let result = Renumbering {
        tour,
        order,
        permutation,
        graph: renumbered,
    };
    log::info!(
        "renumbered {} nodes with stride {}: {} non-adjacent steps",
        graph.node_count(),
        stride,
        result.sentinel_steps()
    );
    Ok(result)
}

/// Generates a random `degree`-regular graph on `n` nodes and renumbers it.
pub fn renumber_regular(
    n: usize,
    degree: usize,
    stride: usize,
    rng: &mut RngHandle,
) -> Result<Renumbering, TopoError> {
    if degree >= n {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("degree-too-large", "degree must be smaller than the node count")
                .with_context("nodes", n)
                .with_context("degree", degree),
        ));
    }
    let graph = generate_regular(n, degree, rng)?;
    renumber(&graph, stride)
}

/// Output path for a renumbered edge list: `<stem>.re<stride>.edges` beside
/// `input`.
pub fn renumbered_path(input: &Path, stride: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}.re{stride}.edges"))
}
