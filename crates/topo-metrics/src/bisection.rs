use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_graph::Graph;

/// External balanced k-way graph partitioner.
///
/// Implementations receive the graph in METIS adjacency format and return the
/// tool's raw report; the edge cut is parsed by [`parse_edge_cut`].
pub trait Partitioner: Send + Sync {
    /// Partitions `metis_graph` into `parts` balanced parts.
    fn partition(&self, metis_graph: &str, parts: usize) -> Result<String, TopoError>;
}

/// Partitioner backed by the `gpmetis` command-line tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GpmetisPartitioner {
    /// Program to execute; resolved through `PATH` when relative.
    #[serde(default = "default_program")]
    pub program: PathBuf,
    /// Load imbalance tolerance passed as `-ufactor`.
    #[serde(default = "default_ufactor")]
    pub ufactor: u32,
}

fn default_program() -> PathBuf {
    PathBuf::from("gpmetis")
}

fn default_ufactor() -> u32 {
    1
}

impl Default for GpmetisPartitioner {
    fn default() -> Self {
        Self {
            program: default_program(),
            ufactor: default_ufactor(),
        }
    }
}

impl GpmetisPartitioner {
    /// Partitioner running the given executable with the default imbalance.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            ..Self::default()
        }
    }
}

impl Partitioner for GpmetisPartitioner {
    fn partition(&self, metis_graph: &str, parts: usize) -> Result<String, TopoError> {
        // gpmetis writes `<input>.part.<k>` beside its input; the scratch
        // directory takes both with it on drop.
        let scratch = tempfile::tempdir().map_err(|err| {
            TopoError::Partitioner(ErrorInfo::new("scratch-dir", err.to_string()))
        })?;
        let input = scratch.path().join("graph.metis");
        fs::write(&input, metis_graph).map_err(|err| {
            TopoError::Partitioner(
                ErrorInfo::new("input-write", err.to_string())
                    .with_context("path", input.display()),
            )
        })?;

        log::debug!("running {} on {} parts", self.program.display(), parts);
        let output = Command::new(&self.program)
            .arg(format!("-ufactor={}", self.ufactor))
            .arg(&input)
            .arg(parts.to_string())
            .output()
            .map_err(|err| {
                TopoError::Partitioner(
                    ErrorInfo::new("spawn", err.to_string())
                        .with_context("program", self.program.display())
                        .with_hint("install METIS or pass the gpmetis path explicitly"),
                )
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            return Err(TopoError::Partitioner(
                ErrorInfo::new("exit-status", format!("partitioner exited with {}", output.status))
                    .with_context("program", self.program.display())
                    .with_context("stderr", String::from_utf8_lossy(&output.stderr).trim())
                    .with_context("stdout", stdout.trim()),
            ));
        }
        Ok(stdout)
    }
}

/// Renders the graph in METIS format: a `n m` header, then one line per node
/// listing its neighbours with 1-based ids.
pub fn metis_input(graph: &Graph) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} {}", graph.node_count(), graph.edge_count());
    for node in 0..graph.node_count() {
        let line: Vec<String> = graph
            .neighbors(node)
            .iter()
            .map(|next| (next + 1).to_string())
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Extracts the integer following `Edgecut:` in a partitioner report.
pub fn parse_edge_cut(report: &str) -> Result<usize, TopoError> {
    let Some(position) = report.find("Edgecut:") else {
        return Err(TopoError::Partitioner(
            ErrorInfo::new("edgecut-missing", "partitioner report has no `Edgecut:` field")
                .with_context("report", report.trim()),
        ));
    };
    let digits: String = report[position + "Edgecut:".len()..]
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<usize>().map_err(|err| {
        TopoError::Partitioner(
            ErrorInfo::new("edgecut-parse", err.to_string()).with_context("report", report.trim()),
        )
    })
}

/// Edge cut of a balanced `parts`-way partition of `graph`.
///
/// For `parts == 2` this is the bisection bandwidth: higher means more links
/// cross any balanced cut.
pub fn bisection_bandwidth(
    graph: &Graph,
    parts: usize,
    partitioner: &dyn Partitioner,
) -> Result<usize, TopoError> {
    if parts < 2 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("partition-count", "partition count must be at least 2")
                .with_context("parts", parts),
        ));
    }
    let report = partitioner.partition(&metis_input(graph), parts)?;
    parse_edge_cut(&report)
}

/// Edge cut for each requested partition count, keyed by the count.
pub fn bisection_sweep(
    graph: &Graph,
    parts: &[usize],
    partitioner: &dyn Partitioner,
) -> Result<BTreeMap<usize, usize>, TopoError> {
    let mut cuts = BTreeMap::new();
    for &count in parts {
        if cuts.contains_key(&count) {
            continue;
        }
        let cut = bisection_bandwidth(graph, count, partitioner)?;
        log::info!("edge cut for {count} parts: {cut}");
        cuts.insert(count, cut);
    }
    Ok(cuts)
}
