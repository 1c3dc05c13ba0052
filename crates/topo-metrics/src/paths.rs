use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use topo_core::NodeId;
use topo_graph::Graph;

/// How edge lengths are measured when computing shortest paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Weighting {
    /// Every edge counts as one hop (breadth-first search).
    Unweighted,
    /// Edges count their stored weight (Dijkstra).
    ByEdgeWeight,
}

/// Dense `n x n` table of shortest-path distances, `+inf` where unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Number of nodes covered by the matrix.
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Distance from `src` to `dst`.
    pub fn get(&self, src: NodeId, dst: NodeId) -> f64 {
        self.data[src * self.n + dst]
    }

    /// All distances from `src`.
    pub fn row(&self, src: NodeId) -> &[f64] {
        &self.data[src * self.n..(src + 1) * self.n]
    }

    /// Iterates over `(i, j, distance)` for every ordered pair with `i != j`.
    pub fn off_diagonal(&self) -> impl Iterator<Item = (NodeId, NodeId, f64)> + '_ {
        let n = self.n;
        self.data
            .iter()
            .enumerate()
            .filter(move |(index, _)| index / n != index % n)
            .map(move |(index, &value)| (index / n, index % n, value))
    }
}

/// All-pairs shortest paths, one traversal per source node.
///
/// Sources are processed in parallel; each traversal owns one row.
pub fn shortest_paths(graph: &Graph, weighting: Weighting) -> DistanceMatrix {
    match weighting {
        Weighting::Unweighted => build_matrix(graph, |graph, src, row| bfs_row(graph, src, row)),
        Weighting::ByEdgeWeight => shortest_paths_by(graph, |weight| weight),
    }
}

/// All-pairs Dijkstra where each edge costs `link_cost(weight)`.
///
/// `link_cost` must map non-negative weights to non-negative costs.
pub fn shortest_paths_by<F>(graph: &Graph, link_cost: F) -> DistanceMatrix
where
    F: Fn(f64) -> f64 + Sync,
{
    build_matrix(graph, |graph, src, row| {
        dijkstra_row(graph, src, row, &link_cost)
    })
}

fn build_matrix<F>(graph: &Graph, fill_row: F) -> DistanceMatrix
where
    F: Fn(&Graph, NodeId, &mut [f64]) + Sync,
{
    let n = graph.node_count();
    let mut data = vec![f64::INFINITY; n * n];
    if n > 0 {
        data.par_chunks_mut(n)
            .enumerate()
            .for_each(|(src, row)| fill_row(graph, src, row));
    }
    DistanceMatrix { n, data }
}

fn bfs_row(graph: &Graph, src: NodeId, row: &mut [f64]) {
    row[src] = 0.0;
    let mut queue = VecDeque::from([src]);
    while let Some(node) = queue.pop_front() {
        let next_distance = row[node] + 1.0;
        for &next in graph.neighbors(node) {
            if row[next].is_infinite() {
                row[next] = next_distance;
                queue.push_back(next);
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Frontier {
    cost: f64,
    node: NodeId,
}

impl Eq for Frontier {}

impl Ord for Frontier {
    // Reversed so the max-heap pops the cheapest entry first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn dijkstra_row<F>(graph: &Graph, src: NodeId, row: &mut [f64], link_cost: &F)
where
    F: Fn(f64) -> f64,
{
    row[src] = 0.0;
    let mut heap = BinaryHeap::from([Frontier { cost: 0.0, node: src }]);
    while let Some(Frontier { cost, node }) = heap.pop() {
        if cost > row[node] {
            continue;
        }
        for &next in graph.neighbors(node) {
            let weight = graph.weight(node, next).unwrap_or(topo_core::DEFAULT_WEIGHT);
            let candidate = cost + link_cost(weight);
            if candidate < row[next] {
                row[next] = candidate;
                heap.push(Frontier {
                    cost: candidate,
                    node: next,
                });
            }
        }
    }
}
