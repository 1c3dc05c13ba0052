use topo_core::NodeId;

use crate::auxiliary::AuxiliaryGraph;

/// Nearest-neighbour tour starting and ending at `source`.
///
/// From the current node the cheapest unvisited node is taken next, the
/// lowest id winning ties. The returned tour lists `source` twice, first and
/// last; an empty graph yields an empty tour.
pub fn greedy_tour(aux: &AuxiliaryGraph, source: NodeId) -> Vec<NodeId> {
    let n = aux.node_count();
    if n == 0 {
        return Vec::new();
    }
    let mut visited = vec![false; n];
    let mut tour = Vec::with_capacity(n + 1);
    let mut current = source;
    visited[current] = true;
    tour.push(current);
    for _ in 1..n {
        let mut best: Option<(u64, NodeId)> = None;
        for (candidate, seen) in visited.iter().enumerate() {
            if *seen {
                continue;
            }
            let cost = aux.cost(current, candidate);
            if best.map_or(true, |(best_cost, _)| cost < best_cost) {
                best = Some((cost, candidate));
            }
        }
        let Some((_, next)) = best else { break };
        visited[next] = true;
        tour.push(next);
        current = next;
    }
    tour.push(source);
    tour
}

/// Total auxiliary cost of walking `tour` in order.
pub fn tour_cost(aux: &AuxiliaryGraph, tour: &[NodeId]) -> u64 {
    tour.windows(2).map(|pair| aux.cost(pair[0], pair[1])).sum()
}
