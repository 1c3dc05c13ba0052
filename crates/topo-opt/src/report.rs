use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use topo_core::errors::TopoError;
use topo_metrics::MetricsReport;

use crate::objective::Objective;

/// One tab-separated result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Node count.
    pub nodes: usize,
    /// Target degree.
    pub degree: usize,
    /// Hop diameter.
    #[serde(with = "topo_core::float_serde")]
    pub diameter: f64,
    /// Average shortest path length.
    #[serde(with = "topo_core::float_serde")]
    pub aspl: f64,
    /// Diameter minus its Moore bound.
    #[serde(with = "topo_core::float_serde")]
    pub diameter_gap: f64,
    /// ASPL minus its Moore bound.
    #[serde(with = "topo_core::float_serde")]
    pub aspl_gap: f64,
    /// ASPL gap relative to the bound, in percent.
    #[serde(with = "topo_core::float_serde")]
    pub aspl_gap_percent: f64,
    /// Edge cut, for bisection runs.
    pub bisection: Option<usize>,
    /// Remaining non-improvement budget.
    pub iteration: usize,
}

impl SummaryRow {
    /// Row for `report`; gaps are infinite for a disconnected graph and NaN
    /// when no Moore bound exists.
    pub fn new(
        report: &MetricsReport,
        degree: usize,
        bisection: Option<usize>,
        iteration: usize,
    ) -> Self {
        let missing = if report.paths.is_connected() {
            f64::NAN
        } else {
            f64::INFINITY
        };
        Self {
            nodes: report.nodes,
            degree,
            diameter: report.paths.diameter,
            aspl: report.paths.aspl,
            diameter_gap: report.diameter_gap().unwrap_or(missing),
            aspl_gap: report.aspl_gap().unwrap_or(missing),
            aspl_gap_percent: report.aspl_gap_percent().unwrap_or(missing),
            bisection,
            iteration,
        }
    }
}

/// Column header matching [`summary_line`] for `objective`.
pub fn header(objective: &Objective) -> String {
    let mut columns = vec![
        "nnodes",
        "degree",
        "diam",
        "aspl",
        "diam_diff",
        "aspl_diff",
        "aspl_diff_rel",
    ];
    if matches!(objective, Objective::MaximizeBisection { .. }) {
        columns.push("bisec");
    }
    columns.push("iteration");
    columns.join("\t")
}

/// `nnodes degree diam aspl diam_diff aspl_diff aspl_diff_rel% [bisec] iteration`.
pub fn summary_line(row: &SummaryRow) -> String {
    let mut fields = vec![
        row.nodes.to_string(),
        row.degree.to_string(),
        row.diameter.to_string(),
        row.aspl.to_string(),
        row.diameter_gap.to_string(),
        row.aspl_gap.to_string(),
        format!("{}%", row.aspl_gap_percent),
    ];
    if let Some(cut) = row.bisection {
        fields.push(cut.to_string());
    }
    fields.push(row.iteration.to_string());
    fields.join("\t")
}

/// Output base name, `n<nodes>d<degree>r.<label>`.
pub fn base_name(objective: &Objective, nodes: usize, degree: usize) -> String {
    format!("n{nodes}d{degree}r.{}", objective.label())
}

/// Appends `line` to the results file at `path`, creating it if needed.
pub fn append_line(path: &Path, line: &str) -> Result<(), TopoError> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|err| TopoError::io("results-mkdir", err, parent.display()))?;
    }
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| TopoError::io("results-open", err, path.display()))?;
    writeln!(file, "{line}").map_err(|err| TopoError::io("results-write", err, path.display()))
}
