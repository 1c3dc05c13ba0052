use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::paths::DistanceMatrix;

/// Diameter and average shortest path length of a distance matrix.
///
/// Both are `+inf` when some pair is unreachable. This is a sentinel, not an
/// error: disconnected graphs are legitimate intermediate optimizer states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathStats {
    /// Largest off-diagonal distance.
    #[serde(with = "topo_core::float_serde")]
    pub diameter: f64,
    /// Mean distance over ordered pairs `i != j`.
    #[serde(with = "topo_core::float_serde")]
    pub aspl: f64,
}

impl PathStats {
    /// Stats reported for a disconnected graph.
    pub const DISCONNECTED: PathStats = PathStats {
        diameter: f64::INFINITY,
        aspl: f64::INFINITY,
    };

    /// True when every pair is reachable.
    pub fn is_connected(&self) -> bool {
        self.diameter.is_finite()
    }
}

/// Reduces a distance matrix to its diameter and ASPL.
///
/// Matrices with fewer than two nodes have no ordered pairs and report zero.
pub fn diameter_and_aspl(matrix: &DistanceMatrix) -> PathStats {
    let mut count = 0usize;
    let mut sum = 0.0;
    let mut max: f64 = 0.0;
    for (_, _, value) in matrix.off_diagonal() {
        if value.is_infinite() {
            return PathStats::DISCONNECTED;
        }
        count += 1;
        sum += value;
        max = max.max(value);
    }
    if count == 0 {
        return PathStats {
            diameter: 0.0,
            aspl: 0.0,
        };
    }
    PathStats {
        diameter: max,
        aspl: sum / count as f64,
    }
}

/// Counts ordered pairs per hop distance; unreachable pairs are skipped.
pub fn hop_histogram(matrix: &DistanceMatrix) -> BTreeMap<u64, u64> {
    let mut histogram = BTreeMap::new();
    for (_, _, value) in matrix.off_diagonal() {
        if value.is_finite() {
            *histogram.entry(value.round() as u64).or_insert(0) += 1;
        }
    }
    histogram
}
