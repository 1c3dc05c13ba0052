use std::error::Error;
use std::fs;
use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, ValueEnum};
use rand::RngCore;
use topo_core::RngHandle;
use topo_graph::{
    generate_regular, graph_to_json, read_edge_list_file, write_edge_list_file, Graph,
};
use topo_metrics::bisection_bandwidth;
use topo_opt::report::{self, append_line};
use topo_opt::{determinism, optimize_restarts, Objective, OptimizerConfig, RunManifest};

use super::graph_line;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ObjectiveArg {
    /// Minimize the average shortest path length.
    Aspl,
    /// Maximize the bisection bandwidth.
    Bisection,
}

#[derive(Args, Debug)]
pub struct OptimizeArgs {
    /// Number of nodes (taken from the graph with `--input`).
    #[arg(required_unless_present = "input")]
    pub nnodes: Option<usize>,
    /// Degree of every node (taken from the graph with `--input`).
    #[arg(required_unless_present = "input")]
    pub degree: Option<usize>,
    /// Objective to optimize (overrides the config file).
    #[arg(long, value_enum)]
    pub objective: Option<ObjectiveArg>,
    /// Non-improvement budget (overrides the config file).
    #[arg(short = 'i')]
    pub budget: Option<usize>,
    /// Partition count for the bisection objective.
    #[arg(long, default_value_t = 2)]
    pub parts: usize,
    /// Master seed; random when neither this nor the config sets one.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Independent restarts run in parallel.
    #[arg(long, default_value_t = 1)]
    pub restarts: usize,
    /// YAML optimizer configuration.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Wall-clock limit in seconds.
    #[arg(long)]
    pub time_limit: Option<f64>,
    /// Start from this edge list instead of a random regular graph.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output directory.
    #[arg(long, default_value = "output")]
    pub out: PathBuf,
    /// Path to the gpmetis executable.
    #[arg(long)]
    pub gpmetis: Option<PathBuf>,
}

pub fn run(args: &OptimizeArgs) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(args)?;
    let master_seed = config
        .seed
        .unwrap_or_else(|| RngHandle::from_entropy().next_u64());
    let input = match &args.input {
        Some(path) => Some(read_edge_list_file(path)?),
        None => None,
    };
    let (nnodes, degree) = match &input {
        Some(graph) => loaded_shape(graph, args),
        None => (
            args.nnodes.ok_or("missing node count")?,
            args.degree.ok_or("missing degree")?,
        ),
    };
    let build = |rng: &mut RngHandle| match &input {
        Some(graph) => Ok(graph.clone()),
        None => generate_regular(nnodes, degree, rng),
    };

    let outcome = optimize_restarts(
        &build,
        &config,
        args.restarts,
        master_seed,
        &config.partitioner,
    )?;
    let mut generator = RngHandle::from_seed(determinism::generator_seed(
        master_seed,
        outcome.best_index,
    ));
    let initial = build(&mut generator)?;
    let best = &outcome.best;

    let base = report::base_name(&config.objective, nnodes, degree);
    let edges_path = args.out.join(format!("{base}.edges"));
    let results_path = args.out.join(format!("{base}.txt"));
    write_edge_list_file(&best.graph, &edges_path)?;
    fs::write(args.out.join(format!("{base}.graph.json")), graph_to_json(&best.graph)?)?;

    let header = report::header(&config.objective);
    let first = summary_for(&initial, &config, config.non_improvement_budget)?;
    let last = summary_for(&best.graph, &config, best.summary.remaining_budget)?;
    println!("{header}");
    println!("{first}");
    println!("{last}");
    append_line(&results_path, &first)?;
    append_line(&results_path, &last)?;

    let manifest = RunManifest {
        created_at: Utc::now(),
        config: config.clone(),
        master_seed,
        restarts: outcome.records.clone(),
        best_index: outcome.best_index,
        summary: best.summary.clone(),
        edges_file: Some(PathBuf::from(format!("{base}.edges"))),
    };
    manifest.write(&args.out.join("summary.json"))?;
    log::info!(
        "{:?} after {} trials; wrote {}",
        best.summary.termination,
        best.summary.trials,
        edges_path.display()
    );
    Ok(())
}

/// Node count and degree of a loaded graph; the maximum degree stands in
/// when the graph is not regular.
fn loaded_shape(graph: &Graph, args: &OptimizeArgs) -> (usize, usize) {
    let nnodes = graph.node_count();
    let degree = graph
        .regular_degree()
        .unwrap_or_else(|| graph.degree_stats().max);
    if args.nnodes.is_some_and(|n| n != nnodes) || args.degree.is_some_and(|d| d != degree) {
        log::warn!("input graph has n={nnodes} d={degree}; ignoring the positional shape");
    }
    (nnodes, degree)
}

fn resolve_config(args: &OptimizeArgs) -> Result<OptimizerConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => OptimizerConfig::load(path)?,
        None => OptimizerConfig::default(),
    };
    match args.objective {
        Some(ObjectiveArg::Aspl) => config.objective = Objective::MinimizeAspl,
        Some(ObjectiveArg::Bisection) => {
            config.objective = Objective::MaximizeBisection { parts: args.parts }
        }
        None => {}
    }
    if let Some(budget) = args.budget {
        config.non_improvement_budget = budget;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.time_limit.is_some() {
        config.time_limit_secs = args.time_limit;
    }
    if let Some(program) = &args.gpmetis {
        config.partitioner.program = program.clone();
    }
    config.validate()?;
    Ok(config)
}

fn summary_for(
    graph: &Graph,
    config: &OptimizerConfig,
    iteration: usize,
) -> Result<String, Box<dyn Error>> {
    let bisection = match config.objective {
        Objective::MaximizeBisection { parts } => {
            Some(bisection_bandwidth(graph, parts, &config.partitioner)?)
        }
        Objective::MinimizeAspl => None,
    };
    Ok(graph_line(graph, bisection, iteration))
}
