use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{NodeId, DEFAULT_WEIGHT};

use crate::graph::{Edge, Graph};

/// Record of an applied double-edge swap, sufficient to undo it.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapOutcome {
    /// Edges removed by the swap, with their original weights.
    pub removed: [Edge; 2],
    /// Edges inserted by the swap.
    pub added: [Edge; 2],
}

/// Outcome of validating a swap without mutating the graph.
#[derive(Debug)]
pub enum SwapDryRun {
    /// The swap would succeed and insert these edges.
    Valid {
        /// Edges the swap would add.
        added: [Edge; 2],
    },
    /// The swap would fail with the provided error.
    Invalid(TopoError),
}

/// Replaces `(a,b)` and `(c,d)` with `(a,d)` and `(b,c)`.
///
/// When `(a,d)` or `(b,c)` already exists the alternative re-pairing
/// `(a,c)`, `(b,d)` is tried. If neither keeps the graph simple, or the four
/// endpoints are not distinct, the graph is untouched and
/// [`TopoError::SwapRejected`] is returned. Degrees of all four endpoints and
/// the edge count are preserved.
pub fn apply_double_edge_swap(
    graph: &mut Graph,
    first: (NodeId, NodeId),
    second: (NodeId, NodeId),
) -> Result<SwapOutcome, TopoError> {
    let (removed, added) = resolve_swap(graph, first, second)?;
    for edge in &removed {
        graph.remove_edge(edge.u, edge.v);
    }
    for edge in &added {
        graph.add_edge(edge.u, edge.v, edge.weight)?;
    }
    Ok(SwapOutcome { removed, added })
}

/// Dry-run validator for [`apply_double_edge_swap`].
pub fn double_edge_swap_dry_run(
    graph: &Graph,
    first: (NodeId, NodeId),
    second: (NodeId, NodeId),
) -> SwapDryRun {
    match resolve_swap(graph, first, second) {
        Ok((_, added)) => SwapDryRun::Valid { added },
        Err(err) => SwapDryRun::Invalid(err),
    }
}

/// Reverts a swap previously applied to `graph`, restoring original weights.
pub fn undo_double_edge_swap(graph: &mut Graph, outcome: &SwapOutcome) -> Result<(), TopoError> {
    for edge in &outcome.added {
        if graph.remove_edge(edge.u, edge.v).is_none() {
            return Err(TopoError::InvalidParameters(
                ErrorInfo::new("undo-missing-edge", "swapped edge no longer present")
                    .with_context("edge", format!("{}-{}", edge.u, edge.v)),
            ));
        }
    }
    for edge in &outcome.removed {
        graph.add_edge(edge.u, edge.v, edge.weight)?;
    }
    Ok(())
}

fn resolve_swap(
    graph: &Graph,
    (a, b): (NodeId, NodeId),
    (c, d): (NodeId, NodeId),
) -> Result<([Edge; 2], [Edge; 2]), TopoError> {
    let mut removed = [Edge::new(a, b), Edge::new(c, d)];
    for edge in removed.iter_mut() {
        edge.weight = graph.weight(edge.u, edge.v).ok_or_else(|| {
            TopoError::InvalidParameters(
                ErrorInfo::new("missing-edge", "swap input edge is not in the graph")
                    .with_context("edge", format!("{}-{}", edge.u, edge.v)),
            )
        })?;
    }
    if a == c || a == d || b == c || b == d {
        return Err(TopoError::SwapRejected(
            ErrorInfo::new("shared-endpoint", "swap requires four distinct endpoints")
                .with_context("first", format!("{a}-{b}"))
                .with_context("second", format!("{c}-{d}")),
        ));
    }
    for (x, y) in [((a, d), (b, c)), ((a, c), (b, d))] {
        if !graph.has_edge(x.0, x.1) && !graph.has_edge(y.0, y.1) {
            let added = [
                Edge::with_weight(x.0, x.1, DEFAULT_WEIGHT),
                Edge::with_weight(y.0, y.1, DEFAULT_WEIGHT),
            ];
            return Ok((removed, added));
        }
    }
    Err(TopoError::SwapRejected(
        ErrorInfo::new("would-duplicate", "every re-pairing creates a parallel edge")
            .with_context("first", format!("{a}-{b}"))
            .with_context("second", format!("{c}-{d}")),
    ))
}
