use topo_core::NodeId;
use topo_graph::Graph;

/// Baseline penalty for walking between nodes that share no link.
pub const DEFAULT_SENTINEL: u64 = 10_000;

/// Penalty used for `node_count` nodes: [`DEFAULT_SENTINEL`], raised to
/// `n + 1` so it exceeds the length of any simple path over real links.
pub fn sentinel_for(node_count: usize) -> u64 {
    DEFAULT_SENTINEL.max(node_count as u64 + 1)
}

/// Complete weighted graph over the same nodes: cost 1 for a physical link,
/// the sentinel for every other pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuxiliaryGraph {
    n: usize,
    sentinel: u64,
    costs: Vec<u64>,
}

impl AuxiliaryGraph {
    /// Builds the auxiliary graph with the sentinel from [`sentinel_for`].
    pub fn build(graph: &Graph) -> Self {
        Self::with_sentinel(graph, sentinel_for(graph.node_count()))
    }

    /// Builds the auxiliary graph with an explicit penalty.
    pub fn with_sentinel(graph: &Graph, sentinel: u64) -> Self {
        let n = graph.node_count();
        let mut costs = vec![sentinel; n * n];
        for node in 0..n {
            costs[node * n + node] = 0;
            for &next in graph.neighbors(node) {
                costs[node * n + next] = 1;
            }
        }
        Self { n, sentinel, costs }
    }

    /// Node count.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Penalty assigned to non-adjacent pairs.
    pub fn sentinel(&self) -> u64 {
        self.sentinel
    }

    /// Walking cost between `a` and `b`.
    pub fn cost(&self, a: NodeId, b: NodeId) -> u64 {
        self.costs[a * self.n + b]
    }

    /// True when `a` and `b` share a physical link.
    pub fn is_link(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.cost(a, b) == 1
    }
}
