use topo_core::rng::RngHandle;
use topo_graph::{generate_regular, parse_edge_list, Edge, Graph};
use topo_metrics::{
    diameter_and_aspl, hop_histogram, shortest_paths, MetricsReport, PathStats, Weighting,
};

fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|v| Edge::new(v, (v + 1) % n))).unwrap()
}

fn petersen() -> Graph {
    let outer = (0..5).map(|v| Edge::new(v, (v + 1) % 5));
    let spokes = (0..5).map(|v| Edge::new(v, v + 5));
    let inner = (0..5).map(|v| Edge::new(5 + v, 5 + (v + 2) % 5));
    Graph::from_edges(10, outer.chain(spokes).chain(inner)).unwrap()
}

#[test]
fn cycle_hop_metrics() {
    let matrix = shortest_paths(&cycle(6), Weighting::Unweighted);
    assert_eq!(matrix.get(0, 3), 3.0);
    assert_eq!(matrix.get(1, 5), 2.0);
    let stats = diameter_and_aspl(&matrix);
    assert_eq!(stats.diameter, 3.0);
    // each node sees distances 1,1,2,2,3
    assert!((stats.aspl - 9.0 / 5.0).abs() < 1e-12);
    let histogram = hop_histogram(&matrix);
    assert_eq!(histogram.get(&1), Some(&12));
    assert_eq!(histogram.get(&2), Some(&12));
    assert_eq!(histogram.get(&3), Some(&6));
}

#[test]
fn petersen_meets_moore_bound() {
    let report = MetricsReport::measure(&petersen());
    assert_eq!(report.paths.diameter, 2.0);
    assert_eq!(report.diameter_gap(), Some(0.0));
    assert!(report.aspl_gap().unwrap().abs() < 1e-12);
    assert!(report.aspl_gap_percent().unwrap().abs() < 1e-9);
}

#[test]
fn isolated_node_reports_infinity() {
    let mut graph = Graph::new(4);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 1.0).unwrap();
    let stats = diameter_and_aspl(&shortest_paths(&graph, Weighting::Unweighted));
    assert_eq!(stats, PathStats::DISCONNECTED);
    assert!(stats.diameter.is_infinite() && stats.aspl.is_infinite());
    assert!(!stats.is_connected());
}

#[test]
fn disconnected_report_survives_json() {
    let triangles = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
    let graph = Graph::from_edges(6, triangles.iter().map(|&(a, b)| Edge::new(a, b))).unwrap();
    let report = MetricsReport::measure(&graph);
    assert_eq!(report.paths, PathStats::DISCONNECTED);
    assert!(report.bound.is_some());
    assert_eq!(report.diameter_gap(), None);
    assert_eq!(report.aspl_gap_percent(), None);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains(r#""aspl":"inf""#), "{json}");
    let back: MetricsReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn weighted_paths_prefer_cheaper_detours() {
    let graph = parse_edge_list("0 1 10\n0 2 1\n2 1 2\n1 3 1\n").unwrap();
    let weighted = shortest_paths(&graph, Weighting::ByEdgeWeight);
    assert_eq!(weighted.get(0, 1), 3.0);
    assert_eq!(weighted.get(0, 3), 4.0);
    let hops = shortest_paths(&graph, Weighting::Unweighted);
    assert_eq!(hops.get(0, 1), 1.0);
    assert_eq!(hops.get(0, 3), 2.0);
}

#[test]
fn matrix_is_symmetric_for_random_graphs() {
    let graph = generate_regular(40, 4, &mut RngHandle::from_seed(11)).unwrap();
    let matrix = shortest_paths(&graph, Weighting::Unweighted);
    for i in 0..40 {
        assert_eq!(matrix.get(i, i), 0.0);
        for j in 0..40 {
            assert_eq!(matrix.get(i, j), matrix.get(j, i));
        }
    }
    assert_eq!(matrix.row(3).len(), 40);
}

#[test]
fn tiny_graphs_have_zero_metrics() {
    let stats = diameter_and_aspl(&shortest_paths(&Graph::new(1), Weighting::Unweighted));
    assert_eq!(stats.diameter, 0.0);
    assert_eq!(stats.aspl, 0.0);
    let empty = shortest_paths(&Graph::new(0), Weighting::ByEdgeWeight);
    assert_eq!(empty.node_count(), 0);
}
