use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use topo_graph::{generate_regular, write_edge_list_file};
use topo_opt::{report, Objective};

use super::{graph_line, rng_for};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of nodes.
    pub nnodes: usize,
    /// Degree of every node.
    pub degree: usize,
    /// Seed for the generator; random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Edge-list output path (default `n<N>d<D>r.edges`).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let mut rng = rng_for(args.seed);
    let graph = generate_regular(args.nnodes, args.degree, &mut rng)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("n{}d{}r.edges", args.nnodes, args.degree)));
    write_edge_list_file(&graph, &out)?;
    println!("{}", report::header(&Objective::MinimizeAspl));
    println!("{}", graph_line(&graph, None, 0));
    log::info!("wrote {}", out.display());
    Ok(())
}
