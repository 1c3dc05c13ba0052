use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use serde_json::json;
use topo_graph::read_edge_list_file;
use topo_metrics::{
    cable_stats, diameter_and_aspl, hop_histogram, latency_stats, shortest_paths, LatencyModel,
    MetricsReport, Weighting,
};

#[derive(Args, Debug)]
pub struct MetricsArgs {
    /// Edge-list file to measure.
    pub file: PathBuf,
    /// Also report shortest paths over edge weights.
    #[arg(long)]
    pub weighted: bool,
    /// Include the hop-distance histogram.
    #[arg(long)]
    pub hist: bool,
    /// Include cable and zero-load latency statistics (weights read as cm).
    #[arg(long)]
    pub latency: bool,
    /// Per-switch delay in nanoseconds for `--latency`.
    #[arg(long, default_value_t = 0.0)]
    pub switch_delay: f64,
}

pub fn run(args: &MetricsArgs) -> Result<(), Box<dyn Error>> {
    let graph = read_edge_list_file(&args.file)?;
    let hops = shortest_paths(&graph, Weighting::Unweighted);
    let report = MetricsReport::from_paths(&graph, diameter_and_aspl(&hops));

    let mut output = json!({
        "file": args.file.display().to_string(),
        "report": report,
        "diameter_gap": report.diameter_gap(),
        "aspl_gap": report.aspl_gap(),
        "aspl_gap_percent": report.aspl_gap_percent(),
    });
    if args.weighted {
        let weighted = diameter_and_aspl(&shortest_paths(&graph, Weighting::ByEdgeWeight));
        output["weighted"] = serde_json::to_value(weighted)?;
    }
    if args.hist {
        output["histogram"] = serde_json::to_value(hop_histogram(&hops))?;
    }
    if args.latency {
        let model = LatencyModel {
            switch_delay_ns: args.switch_delay,
            ..LatencyModel::default()
        };
        output["cables"] = serde_json::to_value(cable_stats(&graph))?;
        output["latency"] = serde_json::to_value(latency_stats(&graph, &model))?;
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
