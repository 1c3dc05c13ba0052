#![deny(missing_docs)]
//! Locality metrics for interconnection topologies: all-pairs shortest paths,
//! diameter / ASPL, the Moore lower bound, bisection bandwidth through an
//! external partitioner, and cable / latency statistics.

mod bisection;
mod moore;
mod paths;
mod physical;
mod report;
mod summary;

pub use bisection::{
    bisection_bandwidth, bisection_sweep, metis_input, parse_edge_cut, GpmetisPartitioner,
    Partitioner,
};
pub use moore::{moore_bound, MooreBound};
pub use paths::{shortest_paths, shortest_paths_by, DistanceMatrix, Weighting};
pub use physical::{cable_stats, latency_stats, CableStats, LatencyModel, LatencyStats};
pub use report::MetricsReport;
pub use summary::{diameter_and_aspl, hop_histogram, PathStats};
