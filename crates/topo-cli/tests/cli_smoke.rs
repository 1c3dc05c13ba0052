use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::tempdir;
use topo_graph::read_edge_list_file;
use topo_opt::RunManifest;

fn topo(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_topo"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("run topo")
}

#[test]
fn generate_writes_a_regular_edge_list() {
    let dir = tempdir().unwrap();
    let output = topo(&["generate", "16", "3", "--seed", "5"], dir.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("nnodes\tdegree\tdiam\taspl"));
    assert!(stdout.lines().nth(1).unwrap().starts_with("16\t3\t"));
    let graph = read_edge_list_file(&dir.path().join("n16d3r.edges")).unwrap();
    assert_eq!(graph.regular_degree(), Some(3));
}

#[test]
fn odd_stub_count_fails() {
    let dir = tempdir().unwrap();
    let output = topo(&["generate", "5", "3"], dir.path());
    assert!(!output.status.success());
}

#[test]
fn optimize_writes_edges_results_and_summary() {
    let dir = tempdir().unwrap();
    let output = topo(
        &["optimize", "10", "3", "-i", "20", "--seed", "42", "--restarts", "2", "--out", "run"],
        dir.path(),
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let run = dir.path().join("run");
    let graph = read_edge_list_file(&run.join("n10d3r.aspl.edges")).unwrap();
    assert_eq!(graph.regular_degree(), Some(3));
    let results = fs::read_to_string(run.join("n10d3r.aspl.txt")).unwrap();
    assert_eq!(results.lines().count(), 2);
    assert!(run.join("n10d3r.aspl.graph.json").exists());
    let manifest = RunManifest::load(&run.join("summary.json")).unwrap();
    assert_eq!(manifest.master_seed, 42);
    assert_eq!(manifest.restarts.len(), 2);
    assert!(manifest.summary.final_value <= manifest.summary.initial_value);
}

#[test]
fn optimize_names_output_after_the_input_graph() {
    let dir = tempdir().unwrap();
    // two disjoint 4-cycles: 8 nodes of degree 2, disconnected at the start
    let cycles = "0 1\n1 2\n2 3\n3 0\n4 5\n5 6\n6 7\n7 4\n";
    fs::write(dir.path().join("split.edges"), cycles).unwrap();
    let output = topo(
        &["optimize", "--input", "split.edges", "-i", "5", "--seed", "7", "--out", "run"],
        dir.path(),
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let run = dir.path().join("run");
    let graph = read_edge_list_file(&run.join("n8d2r.aspl.edges")).unwrap();
    assert_eq!(graph.regular_degree(), Some(2));
    let manifest = RunManifest::load(&run.join("summary.json")).unwrap();
    assert!(manifest.summary.initial_value.is_infinite());
    assert_eq!(
        manifest.edges_file.as_deref(),
        Some(Path::new("n8d2r.aspl.edges"))
    );
}

#[test]
fn renumber_writes_strided_file() {
    let dir = tempdir().unwrap();
    let generated = topo(&["generate", "12", "3", "--seed", "1", "--out", "g.edges"], dir.path());
    assert!(generated.status.success());
    let output = topo(&["renumber", "-f", "g.edges", "-s", "2"], dir.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let original = read_edge_list_file(&dir.path().join("g.edges")).unwrap();
    let renumbered = read_edge_list_file(&dir.path().join("g.re2.edges")).unwrap();
    assert_eq!(renumbered.edge_count(), original.edge_count());
    assert_eq!(renumbered.regular_degree(), Some(3));
}

#[test]
fn metrics_reports_json() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ring.edges"), "0 1\n1 2\n2 3\n3 0\n").unwrap();
    let output = topo(&["metrics", "ring.edges", "--hist"], dir.path());
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["report"]["paths"]["diameter"], 2.0);
    assert_eq!(value["histogram"]["1"], 8);
    assert_eq!(value["histogram"]["2"], 4);
}
