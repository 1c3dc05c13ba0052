use sha2::{Digest, Sha256};

use crate::graph::Graph;

/// Computes the canonical structural hash for the provided graph.
///
/// Edges are visited in canonical order, so two graphs with the same node
/// count and the same weighted edge set hash identically.
pub fn canonical_hash(graph: &Graph) -> String {
    let mut hasher = Sha256::new();
    hasher.update((graph.node_count() as u64).to_le_bytes());
    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for edge in graph.edges() {
        hasher.update((edge.u as u64).to_le_bytes());
        hasher.update((edge.v as u64).to_le_bytes());
        hasher.update(edge.weight.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}
