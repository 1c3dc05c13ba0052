use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::NodeId;
use topo_graph::Graph;

/// Bijection on `[0, n)`; `get(old)` is the new id of `old`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: Vec<NodeId>,
}

impl Permutation {
    /// The identity on `n` nodes.
    pub fn identity(n: usize) -> Self {
        Self {
            forward: (0..n).collect(),
        }
    }

    /// Permutation giving new id `k` to `order[k]`.
    pub fn from_order(order: &[NodeId]) -> Result<Self, TopoError> {
        let n = order.len();
        let mut forward = vec![usize::MAX; n];
        for (rank, &node) in order.iter().enumerate() {
            if node >= n || forward[node] != usize::MAX {
                return Err(TopoError::InvalidParameters(
                    ErrorInfo::new("not-a-permutation", "visit order must list every node once")
                        .with_context("node", node)
                        .with_context("rank", rank),
                ));
            }
            forward[node] = rank;
        }
        Ok(Self { forward })
    }

    /// Number of nodes permuted.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// True for the permutation of zero nodes.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// New id of `old`.
    pub fn get(&self, old: NodeId) -> NodeId {
        self.forward[old]
    }

    /// Mapping old id → new id.
    pub fn as_slice(&self) -> &[NodeId] {
        &self.forward
    }

    /// The permutation undoing this one.
    pub fn inverse(&self) -> Self {
        let mut backward = vec![0; self.forward.len()];
        for (old, &new) in self.forward.iter().enumerate() {
            backward[new] = old;
        }
        Self { forward: backward }
    }

    /// Relabels every edge endpoint of `graph`; weights are preserved.
    pub fn apply(&self, graph: &Graph) -> Result<Graph, TopoError> {
        graph.relabel(&self.forward)
    }
}

/// Interleaves `order` with stride `stride`: `order[0], order[s], order[2s],
/// ...`, then `order[1], order[1+s], ...` and so on. Stride 1 is the identity.
pub fn stride_order(order: &[NodeId], stride: usize) -> Result<Vec<NodeId>, TopoError> {
    if stride == 0 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("stride-zero", "stride must be at least 1")
                .with_context("stride", stride),
        ));
    }
    let mut strided = Vec::with_capacity(order.len());
    for offset in 0..stride.min(order.len()) {
        strided.extend(order.iter().skip(offset).step_by(stride).copied());
    }
    Ok(strided)
}
