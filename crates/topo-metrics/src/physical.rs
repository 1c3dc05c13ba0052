use serde::{Deserialize, Serialize};
use topo_graph::Graph;

use crate::paths::shortest_paths_by;
use crate::summary::diameter_and_aspl;

/// Aggregate cable length over all links (edge weights read as centimetres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CableStats {
    /// Sum of all edge weights.
    pub total: f64,
    /// Longest single link.
    pub max: f64,
    /// Mean link length (0 without edges).
    pub mean: f64,
}

/// Zero-load latency model for a switched network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyModel {
    /// Per-switch traversal delay in nanoseconds.
    #[serde(default)]
    pub switch_delay_ns: f64,
    /// Propagation delay per centimetre of cable.
    #[serde(default = "default_link_delay")]
    pub link_delay_ns_per_cm: f64,
    /// Injection plus ejection delay at the end hosts.
    #[serde(default = "default_host_delay")]
    pub host_delay_ns: f64,
}

fn default_link_delay() -> f64 {
    0.05
}

fn default_host_delay() -> f64 {
    300.0
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self {
            switch_delay_ns: 0.0,
            link_delay_ns_per_cm: default_link_delay(),
            host_delay_ns: default_host_delay(),
        }
    }
}

/// Worst-case and mean end-to-end latency over all ordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyStats {
    /// Largest pairwise latency in nanoseconds.
    #[serde(with = "topo_core::float_serde")]
    pub max_ns: f64,
    /// Mean pairwise latency in nanoseconds.
    #[serde(with = "topo_core::float_serde")]
    pub mean_ns: f64,
}

/// Sum, maximum and mean of edge weights.
pub fn cable_stats(graph: &Graph) -> CableStats {
    let mut total = 0.0;
    let mut max: f64 = 0.0;
    for edge in graph.edges() {
        total += edge.weight;
        max = max.max(edge.weight);
    }
    let mean = if graph.edge_count() == 0 {
        0.0
    } else {
        total / graph.edge_count() as f64
    };
    CableStats { total, max, mean }
}

/// Latency along fastest paths, where each link costs
/// `switch_delay + length * link_delay` and each path additionally pays one
/// switch delay and the host delay.
pub fn latency_stats(graph: &Graph, model: &LatencyModel) -> LatencyStats {
    if graph.node_count() < 2 {
        return LatencyStats {
            max_ns: 0.0,
            mean_ns: 0.0,
        };
    }
    let matrix = shortest_paths_by(graph, |length| {
        model.switch_delay_ns + length * model.link_delay_ns_per_cm
    });
    let stats = diameter_and_aspl(&matrix);
    let per_path = model.switch_delay_ns + model.host_delay_ns;
    LatencyStats {
        max_ns: stats.diameter + per_path,
        mean_ns: stats.aspl + per_path,
    }
}
