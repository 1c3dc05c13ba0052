use std::collections::{BTreeMap, BTreeSet, VecDeque};

use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{NodeId, DEFAULT_WEIGHT};

/// Undirected weighted edge stored with `u < v`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint.
    pub u: NodeId,
    /// Larger endpoint.
    pub v: NodeId,
    /// Non-negative weight (cable length when measuring physical layouts).
    pub weight: f64,
}

impl Edge {
    /// Creates an edge with the default weight, normalising endpoint order.
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self::with_weight(a, b, DEFAULT_WEIGHT)
    }

    /// Creates an edge with an explicit weight, normalising endpoint order.
    pub fn with_weight(a: NodeId, b: NodeId, weight: f64) -> Self {
        let (u, v) = canonical_pair(a, b);
        Self { u, v, weight }
    }

    /// Returns the endpoints as `(smaller, larger)`.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.u, self.v)
    }
}

/// Summary of the degree sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DegreeStats {
    /// Smallest degree observed (0 for an empty graph).
    pub min: usize,
    /// Largest degree observed.
    pub max: usize,
    /// Mean degree.
    pub mean: f64,
}

pub(crate) fn canonical_pair(a: NodeId, b: NodeId) -> (NodeId, NodeId) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Simple undirected graph over the index space `[0, n)`.
///
/// Adjacency is kept as one sorted neighbour set per node so iteration order is
/// deterministic; weights live in a parallel map keyed by the canonical pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<NodeId>>,
    weights: BTreeMap<(NodeId, NodeId), f64>,
}

impl Graph {
    /// Creates a graph with `node_count` isolated nodes.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); node_count],
            weights: BTreeMap::new(),
        }
    }

    /// Builds a graph from explicit edges, rejecting self-loops, duplicates,
    /// out-of-range endpoints and invalid weights.
    pub fn from_edges<I>(node_count: usize, edges: I) -> Result<Self, TopoError>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::new(node_count);
        for (index, edge) in edges.into_iter().enumerate() {
            graph
                .add_edge(edge.u, edge.v, edge.weight)
                .map_err(|err| match err {
                    TopoError::MalformedInput(info) => {
                        TopoError::MalformedInput(info.with_context("edge_index", index))
                    }
                    other => other,
                })?;
        }
        Ok(graph)
    }

    /// Builds a graph from `(src, dst, weight)` tuples.
    pub fn load(node_count: usize, edge_list: &[(NodeId, NodeId, f64)]) -> Result<Self, TopoError> {
        Self::from_edges(
            node_count,
            edge_list
                .iter()
                .map(|&(src, dst, weight)| Edge::with_weight(src, dst, weight)),
        )
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }

    /// Degree of `node`.
    ///
    /// # Panics
    /// Panics when `node >= node_count()`.
    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency[node].len()
    }

    /// Sorted neighbour set of `node`.
    ///
    /// # Panics
    /// Panics when `node >= node_count()`.
    pub fn neighbors(&self, node: NodeId) -> &BTreeSet<NodeId> {
        &self.adjacency[node]
    }

    /// Returns true when `a` and `b` are adjacent.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.weights.contains_key(&canonical_pair(a, b))
    }

    /// Weight of the edge between `a` and `b`, if present.
    pub fn weight(&self, a: NodeId, b: NodeId) -> Option<f64> {
        self.weights.get(&canonical_pair(a, b)).copied()
    }

    /// Iterates over all edges in canonical `(u, v)` order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Edge> + '_ {
        self.weights
            .iter()
            .map(|(&(u, v), &weight)| Edge { u, v, weight })
    }

    /// Inserts an edge, keeping the graph simple.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId, weight: f64) -> Result<(), TopoError> {
        let n = self.node_count();
        for node in [a, b] {
            if node >= n {
                return Err(TopoError::MalformedInput(
                    ErrorInfo::new("node-out-of-range", "edge references an unknown node")
                        .with_context("node", node)
                        .with_context("node_count", n),
                ));
            }
        }
        if a == b {
            return Err(TopoError::MalformedInput(
                ErrorInfo::new("self-loop", "self-loops are not allowed").with_context("node", a),
            ));
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(TopoError::MalformedInput(
                ErrorInfo::new("invalid-weight", "edge weights must be finite and non-negative")
                    .with_context("edge", format!("{a}-{b}"))
                    .with_context("weight", weight),
            ));
        }
        let key = canonical_pair(a, b);
        if self.weights.contains_key(&key) {
            return Err(TopoError::MalformedInput(
                ErrorInfo::new("duplicate-edge", "edge already present")
                    .with_context("edge", format!("{}-{}", key.0, key.1)),
            ));
        }
        self.weights.insert(key, weight);
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        Ok(())
    }

    /// Removes the edge between `a` and `b`, returning its weight.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) -> Option<f64> {
        let weight = self.weights.remove(&canonical_pair(a, b))?;
        self.adjacency[a].remove(&b);
        self.adjacency[b].remove(&a);
        Some(weight)
    }

    /// Returns true when every node is reachable from node 0.
    ///
    /// Graphs with fewer than two nodes are considered connected.
    pub fn is_connected(&self) -> bool {
        let n = self.node_count();
        if n < 2 {
            return true;
        }
        let mut seen = vec![false; n];
        let mut queue = VecDeque::from([0]);
        seen[0] = true;
        let mut reached = 1usize;
        while let Some(node) = queue.pop_front() {
            for &next in &self.adjacency[node] {
                if !seen[next] {
                    seen[next] = true;
                    reached += 1;
                    queue.push_back(next);
                }
            }
        }
        reached == n
    }

    /// Graph on the same nodes whose edges are exactly the missing pairs,
    /// each with the default weight.
    pub fn complement(&self) -> Graph {
        let n = self.node_count();
        let mut complement = Graph::new(n);
        for u in 0..n {
            for v in (u + 1)..n {
                if !self.adjacency[u].contains(&v) {
                    complement.weights.insert((u, v), DEFAULT_WEIGHT);
                    complement.adjacency[u].insert(v);
                    complement.adjacency[v].insert(u);
                }
            }
        }
        complement
    }

    /// Minimum, maximum and mean degree.
    pub fn degree_stats(&self) -> DegreeStats {
        let n = self.node_count();
        if n == 0 {
            return DegreeStats {
                min: 0,
                max: 0,
                mean: 0.0,
            };
        }
        let degrees = self.adjacency.iter().map(BTreeSet::len);
        let min = degrees.clone().min().unwrap_or(0);
        let max = degrees.max().unwrap_or(0);
        DegreeStats {
            min,
            max,
            mean: 2.0 * self.edge_count() as f64 / n as f64,
        }
    }

    /// Common degree when the graph is regular.
    pub fn regular_degree(&self) -> Option<usize> {
        let stats = self.degree_stats();
        (stats.min == stats.max).then_some(stats.min)
    }

    /// Returns a copy with every endpoint `x` replaced by `mapping[x]`.
    ///
    /// `mapping` must be a permutation of `[0, n)`; edge weights are kept.
    pub fn relabel(&self, mapping: &[NodeId]) -> Result<Graph, TopoError> {
        let n = self.node_count();
        if mapping.len() != n {
            return Err(TopoError::invalid(
                "mapping-length",
                format!("mapping has {} entries for {n} nodes", mapping.len()),
            ));
        }
        Graph::from_edges(
            n,
            self.edges()
                .map(|edge| Edge::with_weight(mapping[edge.u], mapping[edge.v], edge.weight)),
        )
    }
}
