use proptest::prelude::*;
use topo_core::errors::TopoError;
use topo_core::rng::RngHandle;
use topo_graph::{
    apply_double_edge_swap, double_edge_swap_dry_run, generate_regular, undo_double_edge_swap,
    Edge, Graph, SwapDryRun,
};

fn square() -> Graph {
    // 0-1, 2-3 plus 0-3 so the primary re-pairing (0,3),(1,2) is blocked.
    Graph::from_edges(4, [Edge::new(0, 1), Edge::new(2, 3), Edge::new(0, 3)]).unwrap()
}

#[test]
fn primary_repairing_is_preferred() {
    let mut graph = Graph::from_edges(4, [Edge::new(0, 1), Edge::new(2, 3)]).unwrap();
    let outcome = apply_double_edge_swap(&mut graph, (0, 1), (2, 3)).unwrap();
    assert!(graph.has_edge(0, 3));
    assert!(graph.has_edge(1, 2));
    assert!(!graph.has_edge(0, 1));
    assert!(!graph.has_edge(2, 3));
    assert_eq!(outcome.added, [Edge::new(0, 3), Edge::new(1, 2)]);
}

#[test]
fn alternative_repairing_is_used_when_primary_duplicates() {
    let mut graph = square();
    apply_double_edge_swap(&mut graph, (0, 1), (2, 3)).unwrap();
    assert!(graph.has_edge(0, 2));
    assert!(graph.has_edge(1, 3));
    assert!(graph.has_edge(0, 3));
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn swap_that_cannot_stay_simple_is_rejected_without_mutation() {
    let mut graph = Graph::from_edges(
        4,
        [
            Edge::new(0, 1),
            Edge::new(2, 3),
            Edge::new(0, 3),
            Edge::new(0, 2),
        ],
    )
    .unwrap();
    let before = graph.clone();
    let err = apply_double_edge_swap(&mut graph, (0, 1), (2, 3)).unwrap_err();
    assert!(err.is_swap_rejection());
    assert_eq!(err.info().code, "would-duplicate");
    assert_eq!(graph, before);
}

#[test]
fn shared_endpoint_is_rejected() {
    let mut graph = Graph::from_edges(3, [Edge::new(0, 1), Edge::new(1, 2)]).unwrap();
    let err = apply_double_edge_swap(&mut graph, (0, 1), (1, 2)).unwrap_err();
    assert!(matches!(err, TopoError::SwapRejected(info) if info.code == "shared-endpoint"));
}

#[test]
fn missing_edge_is_invalid() {
    let mut graph = Graph::from_edges(4, [Edge::new(0, 1)]).unwrap();
    let err = apply_double_edge_swap(&mut graph, (0, 1), (2, 3)).unwrap_err();
    assert!(matches!(err, TopoError::InvalidParameters(info) if info.code == "missing-edge"));
}

#[test]
fn dry_run_does_not_mutate() {
    let graph = square();
    match double_edge_swap_dry_run(&graph, (0, 1), (2, 3)) {
        SwapDryRun::Valid { added } => assert_eq!(added, [Edge::new(0, 2), Edge::new(1, 3)]),
        other => panic!("unexpected validator result: {other:?}"),
    }
    assert!(graph.has_edge(0, 1));
}

#[test]
fn undo_restores_weights() {
    let mut graph = Graph::from_edges(
        4,
        [Edge::with_weight(0, 1, 2.5), Edge::with_weight(2, 3, 7.0)],
    )
    .unwrap();
    let before = graph.clone();
    let outcome = apply_double_edge_swap(&mut graph, (1, 0), (3, 2)).unwrap();
    assert_ne!(graph, before);
    undo_double_edge_swap(&mut graph, &outcome).unwrap();
    assert_eq!(graph, before);
}

proptest! {
    #[test]
    fn swaps_preserve_degrees_and_edge_count(seed in any::<u64>(), picks in prop::collection::vec((0usize..1000, 0usize..1000), 1..20)) {
        let mut rng = RngHandle::from_seed(seed);
        let mut graph = generate_regular(12, 3, &mut rng).unwrap();
        let edge_total = graph.edge_count();
        for (i, j) in picks {
            let edges: Vec<Edge> = graph.edges().collect();
            let first = edges[i % edges.len()];
            let second = edges[j % edges.len()];
            let touched = [first.u, first.v, second.u, second.v];
            let degrees: Vec<usize> = touched.iter().map(|&node| graph.degree(node)).collect();
            match apply_double_edge_swap(&mut graph, first.endpoints(), second.endpoints()) {
                Ok(_) => {}
                Err(err) => prop_assert!(err.is_swap_rejection()),
            }
            prop_assert_eq!(graph.edge_count(), edge_total);
            let after: Vec<usize> = touched.iter().map(|&node| graph.degree(node)).collect();
            prop_assert_eq!(degrees, after);
            prop_assert_eq!(graph.regular_degree(), Some(3));
        }
    }
}
