use serde::{Deserialize, Serialize};
use topo_graph::{DegreeStats, Graph};

use crate::moore::{moore_bound, MooreBound};
use crate::paths::{shortest_paths, Weighting};
use crate::summary::{diameter_and_aspl, PathStats};

/// Baseline measurement of a topology against its Moore bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsReport {
    /// Node count.
    pub nodes: usize,
    /// Edge count.
    pub edges: usize,
    /// Degree sequence summary.
    pub degree: DegreeStats,
    /// Hop diameter and ASPL.
    pub paths: PathStats,
    /// Moore bound for `(nodes, max degree)`; absent for degenerate graphs.
    pub bound: Option<MooreBound>,
}

impl MetricsReport {
    /// Measures hop-count metrics of `graph`.
    pub fn measure(graph: &Graph) -> Self {
        let paths = diameter_and_aspl(&shortest_paths(graph, Weighting::Unweighted));
        Self::from_paths(graph, paths)
    }

    /// Builds a report from already computed path statistics.
    pub fn from_paths(graph: &Graph, paths: PathStats) -> Self {
        let degree = graph.degree_stats();
        Self {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            degree,
            paths,
            bound: moore_bound(graph.node_count(), degree.max).ok(),
        }
    }

    /// `diameter - bound.diameter`; absent without a bound or when disconnected.
    pub fn diameter_gap(&self) -> Option<f64> {
        self.finite_bound()
            .map(|bound| self.paths.diameter - bound.diameter)
    }

    /// `aspl - bound.aspl`; absent without a bound or when disconnected.
    pub fn aspl_gap(&self) -> Option<f64> {
        self.finite_bound().map(|bound| self.paths.aspl - bound.aspl)
    }

    /// ASPL gap relative to the bound, in percent.
    pub fn aspl_gap_percent(&self) -> Option<f64> {
        self.finite_bound()
            .filter(|bound| bound.aspl > 0.0)
            .map(|bound| 100.0 * (self.paths.aspl - bound.aspl) / bound.aspl)
    }

    fn finite_bound(&self) -> Option<MooreBound> {
        self.bound
            .filter(|bound| bound.aspl.is_finite() && self.paths.is_connected())
    }
}
