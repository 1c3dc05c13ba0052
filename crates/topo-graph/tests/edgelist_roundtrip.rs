use std::collections::BTreeSet;

use topo_core::errors::TopoError;
use topo_core::rng::RngHandle;
use topo_graph::{
    canonical_hash, generate_regular, graph_from_json, graph_to_json, parse_edge_list,
    parse_edge_list_with_nodes, read_edge_list_file, write_edge_list, write_edge_list_file, Graph,
    MAX_NODES,
};

#[test]
fn parses_comments_blank_lines_and_weights() {
    let text = "# n4 ring\n0 1\n1 2 3.5\n\n2 3   # trailing comment\n3 0 1\n";
    let graph = parse_edge_list(text).unwrap();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.weight(2, 1), Some(3.5));
    assert_eq!(graph.weight(0, 3), Some(1.0));
}

#[test]
fn round_trip_reproduces_edge_set() {
    let text = "5 0\n0 1\n1 2 12\n2 3\n3 4 0.25\n4 5\n";
    let graph = parse_edge_list(text).unwrap();
    let written = write_edge_list(&graph);
    let reparsed = parse_edge_list(&written).unwrap();
    assert_eq!(graph, reparsed);

    let normalise = |input: &str| -> BTreeSet<String> {
        input
            .lines()
            .filter(|line| !line.starts_with('#'))
            .map(|line| {
                let mut fields: Vec<&str> = line.split_whitespace().collect();
                if fields[0].parse::<usize>().unwrap() > fields[1].parse::<usize>().unwrap() {
                    fields.swap(0, 1);
                }
                fields.join(" ")
            })
            .collect()
    };
    assert_eq!(normalise(text), normalise(&written));
}

#[test]
fn self_loop_reports_line() {
    let err = parse_edge_list("0 1\n2 2\n").unwrap_err();
    match err {
        TopoError::MalformedInput(info) => {
            assert_eq!(info.code, "self-loop");
            assert_eq!(info.context.get("line"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn duplicate_edge_is_malformed() {
    let err = parse_edge_list("0 1\n1 0\n").unwrap_err();
    assert!(matches!(err, TopoError::MalformedInput(info) if info.code == "duplicate-edge"));
}

#[test]
fn out_of_range_with_explicit_node_count() {
    let err = parse_edge_list_with_nodes("0 1\n1 4\n", Some(4)).unwrap_err();
    match err {
        TopoError::MalformedInput(info) => {
            assert_eq!(info.code, "node-out-of-range");
            assert_eq!(info.context.get("line"), Some(&"2".to_string()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn oversized_node_ids_are_malformed() {
    for text in ["0 18446744073709551615\n", "0 10000000000\n", "# nodes 99999999999\n0 1\n"] {
        let err = parse_edge_list(text).unwrap_err();
        match err {
            TopoError::MalformedInput(info) => {
                assert_eq!(info.code, "node-id-too-large", "{text:?}");
                assert!(info.context.contains_key("line"));
            }
            other => panic!("unexpected error for {text:?}: {other:?}"),
        }
    }
    let err = parse_edge_list(&format!("0 {MAX_NODES}\n")).unwrap_err();
    assert!(matches!(err, TopoError::MalformedInput(_)));
}

#[test]
fn explicit_node_count_bounds_ids_instead_of_the_size_cap() {
    let err = parse_edge_list_with_nodes("0 18446744073709551615\n", Some(4)).unwrap_err();
    assert!(matches!(err, TopoError::MalformedInput(info) if info.code == "node-out-of-range"));
}

#[test]
fn isolated_trailing_node_survives_round_trip() {
    let mut graph = Graph::new(5);
    graph.add_edge(0, 1, 1.0).unwrap();
    graph.add_edge(1, 2, 2.5).unwrap();
    let written = write_edge_list(&graph);
    assert!(written.starts_with("# nodes 5\n"));
    let reparsed = parse_edge_list(&written).unwrap();
    assert_eq!(reparsed.node_count(), 5);
    assert_eq!(reparsed.degree(4), 0);
    assert_eq!(reparsed, graph);
}

#[test]
fn node_header_must_cover_listed_ids() {
    let err = parse_edge_list("# nodes 3\n0 1\n1 3\n").unwrap_err();
    assert!(matches!(err, TopoError::MalformedInput(info) if info.code == "node-out-of-range"));
    let err = parse_edge_list("# nodes many\n0 1\n").unwrap_err();
    assert!(matches!(err, TopoError::MalformedInput(info) if info.code == "bad-node-header"));
}

#[test]
fn garbage_tokens_are_malformed() {
    for text in ["0\n", "0 1 2 3\n", "a 1\n", "0 -1\n", "0 1 heavy\n"] {
        let err = parse_edge_list(text).unwrap_err();
        assert!(matches!(err, TopoError::MalformedInput(_)), "{text:?}");
    }
}

#[test]
fn file_and_json_round_trip() {
    let graph = generate_regular(16, 3, &mut RngHandle::from_seed(5)).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("n16d3.edges");
    write_edge_list_file(&graph, &path).unwrap();
    let restored = read_edge_list_file(&path).unwrap();
    assert_eq!(canonical_hash(&graph), canonical_hash(&restored));

    let json = graph_to_json(&graph).unwrap();
    assert_eq!(graph_from_json(&json).unwrap(), graph);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_edge_list_file(&dir.path().join("absent.edges")).unwrap_err();
    assert!(matches!(err, TopoError::Io(info) if info.code == "edges-read"));
}
