use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use topo_graph::{read_edge_list_file, write_edge_list_file};
use topo_renum::{renumber, renumbered_path};

#[derive(Args, Debug)]
pub struct RenumberArgs {
    /// Edge-list file to renumber.
    #[arg(short = 'f', long = "file")]
    pub file: PathBuf,
    /// Interleave the tour order with this stride.
    #[arg(short = 's', long, default_value_t = 1)]
    pub stride: usize,
    /// Output path (default `<stem>.re<stride>.edges` beside the input).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &RenumberArgs) -> Result<(), Box<dyn Error>> {
    let graph = read_edge_list_file(&args.file)?;
    let result = renumber(&graph, args.stride)?;
    let out = args
        .out
        .clone()
        .unwrap_or_else(|| renumbered_path(&args.file, args.stride));
    write_edge_list_file(&result.graph, &out)?;
    println!(
        "{}\t{} nodes\t{} non-adjacent steps",
        out.display(),
        result.graph.node_count(),
        result.sentinel_steps()
    );
    Ok(())
}
