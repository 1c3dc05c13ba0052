use std::collections::{BTreeMap, BTreeSet};

use rand::seq::SliceRandom;
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::rng::RngHandle;
use topo_core::{NodeId, DEFAULT_WEIGHT};

use crate::graph::{canonical_pair, Graph};

/// Restarts allowed before the stub-pairing generator gives up.
const MAX_PAIRING_ATTEMPTS: usize = 1_000;

/// Generates a uniformly random simple `degree`-regular graph on `n` nodes.
///
/// Stubs (`degree` per node) are shuffled and paired; pairs that would form a
/// self-loop or a parallel edge are returned to the pool and re-shuffled until
/// the pool empties or no admissible pair remains, in which case the attempt is
/// restarted. Dense requests (`degree > (n - 1) / 2`) are served as the
/// complement of a sparse regular graph. Connectivity is not guaranteed.
pub fn generate_regular(n: usize, degree: usize, rng: &mut RngHandle) -> Result<Graph, TopoError> {
    validate_regular_parameters(n, degree)?;
    let complement_degree = n - 1 - degree;
    if complement_degree < degree {
        let sparse = generate_regular(n, complement_degree, rng)?;
        return Ok(sparse.complement());
    }
    if degree == 0 {
        return Ok(Graph::new(n));
    }

    for attempt in 0..MAX_PAIRING_ATTEMPTS {
        if let Some(edges) = try_pairing(n, degree, rng) {
            log::debug!("regular graph n={n} d={degree} paired after {} attempt(s)", attempt + 1);
            let mut graph = Graph::new(n);
            for (u, v) in edges {
                graph.add_edge(u, v, DEFAULT_WEIGHT)?;
            }
            return Ok(graph);
        }
    }

    Err(TopoError::InvalidParameters(
        ErrorInfo::new(
            "regular-generation-exhausted",
            "could not pair stubs into a simple regular graph",
        )
        .with_context("nodes", n)
        .with_context("degree", degree)
        .with_context("attempts", MAX_PAIRING_ATTEMPTS),
    ))
}

/// Checks that a simple `degree`-regular graph on `n` nodes can exist.
pub fn validate_regular_parameters(n: usize, degree: usize) -> Result<(), TopoError> {
    if degree >= n {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("degree-too-large", "degree must be smaller than the node count")
                .with_context("nodes", n)
                .with_context("degree", degree),
        ));
    }
    if (n * degree) % 2 == 1 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("odd-stub-count", "n * degree must be even for a regular graph")
                .with_context("nodes", n)
                .with_context("degree", degree)
                .with_hint("change either the node count or the degree to an even value"),
        ));
    }
    Ok(())
}

fn try_pairing(n: usize, degree: usize, rng: &mut RngHandle) -> Option<BTreeSet<(NodeId, NodeId)>> {
    let mut edges = BTreeSet::new();
    let mut stubs: Vec<NodeId> = (0..n)
        .flat_map(|node| std::iter::repeat(node).take(degree))
        .collect();

    while !stubs.is_empty() {
        let mut leftovers: BTreeMap<NodeId, usize> = BTreeMap::new();
        stubs.shuffle(rng);
        for pair in stubs.chunks_exact(2) {
            let (u, v) = canonical_pair(pair[0], pair[1]);
            if u != v && !edges.contains(&(u, v)) {
                edges.insert((u, v));
            } else {
                *leftovers.entry(u).or_insert(0) += 1;
                *leftovers.entry(v).or_insert(0) += 1;
            }
        }
        if !has_admissible_pair(&edges, &leftovers) {
            return None;
        }
        stubs = leftovers
            .into_iter()
            .flat_map(|(node, count)| std::iter::repeat(node).take(count))
            .collect();
    }
    Some(edges)
}

fn has_admissible_pair(
    edges: &BTreeSet<(NodeId, NodeId)>,
    leftovers: &BTreeMap<NodeId, usize>,
) -> bool {
    if leftovers.is_empty() {
        return true;
    }
    let nodes: Vec<NodeId> = leftovers.keys().copied().collect();
    for (idx, &u) in nodes.iter().enumerate() {
        for &v in &nodes[idx + 1..] {
            if !edges.contains(&(u, v)) {
                return true;
            }
        }
    }
    false
}
