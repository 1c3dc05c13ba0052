pub mod bisect;
pub mod generate;
pub mod metrics;
pub mod optimize;
pub mod renumber;

use topo_core::RngHandle;
use topo_graph::Graph;
use topo_metrics::MetricsReport;
use topo_opt::report::{summary_line, SummaryRow};

/// Seeded RNG, or fresh entropy when no seed is given.
pub(crate) fn rng_for(seed: Option<u64>) -> RngHandle {
    RngHandle::from_optional_seed(seed)
}

/// Summary line for `graph` as printed and appended by the commands.
pub(crate) fn graph_line(graph: &Graph, bisection: Option<usize>, iteration: usize) -> String {
    let report = MetricsReport::measure(graph);
    let degree = report.degree.max;
    summary_line(&SummaryRow::new(&report, degree, bisection, iteration))
}
