use serde::{Deserialize, Serialize};
use topo_core::errors::TopoError;
use topo_graph::Graph;
use topo_metrics::{bisection_bandwidth, diameter_and_aspl, shortest_paths, Partitioner, Weighting};

/// Which way an objective improves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Smaller values are better.
    Minimize,
    /// Larger values are better.
    Maximize,
}

impl Direction {
    /// True when `candidate` is strictly better than `current`.
    pub fn improves(self, candidate: f64, current: f64) -> bool {
        match self {
            Direction::Minimize => candidate < current,
            Direction::Maximize => candidate > current,
        }
    }
}

/// Quantity the optimizer drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Objective {
    /// Average shortest path length in hops; `+inf` while disconnected.
    #[default]
    MinimizeAspl,
    /// Edge cut of a balanced `parts`-way partition.
    MaximizeBisection {
        /// Number of balanced parts handed to the partitioner.
        parts: usize,
    },
}

impl Objective {
    /// Comparison direction.
    pub fn direction(&self) -> Direction {
        match self {
            Objective::MinimizeAspl => Direction::Minimize,
            Objective::MaximizeBisection { .. } => Direction::Maximize,
        }
    }

    /// Short label used in file names (`aspl`, `bisec`).
    pub fn label(&self) -> &'static str {
        match self {
            Objective::MinimizeAspl => "aspl",
            Objective::MaximizeBisection { .. } => "bisec",
        }
    }

    /// Evaluates the objective on `graph`. Only the bisection objective calls
    /// the partitioner.
    pub fn evaluate(&self, graph: &Graph, partitioner: &dyn Partitioner) -> Result<f64, TopoError> {
        match *self {
            Objective::MinimizeAspl => {
                Ok(diameter_and_aspl(&shortest_paths(graph, Weighting::Unweighted)).aspl)
            }
            Objective::MaximizeBisection { parts } => {
                Ok(bisection_bandwidth(graph, parts, partitioner)? as f64)
            }
        }
    }
}
