use std::error::Error;
use std::path::PathBuf;

use clap::Args;
use topo_graph::read_edge_list_file;
use topo_metrics::{bisection_sweep, GpmetisPartitioner};

#[derive(Args, Debug)]
pub struct BisectArgs {
    /// Edge-list file to partition.
    pub file: PathBuf,
    /// Partition counts to evaluate.
    #[arg(long, num_args = 1.., default_values_t = [2usize])]
    pub parts: Vec<usize>,
    /// Path to the gpmetis executable.
    #[arg(long, default_value = "gpmetis")]
    pub gpmetis: PathBuf,
}

pub fn run(args: &BisectArgs) -> Result<(), Box<dyn Error>> {
    let graph = read_edge_list_file(&args.file)?;
    let partitioner = GpmetisPartitioner::with_program(&args.gpmetis);
    let cuts = bisection_sweep(&graph, &args.parts, &partitioner)?;
    println!("parts\tedgecut");
    for (parts, cut) in cuts {
        println!("{parts}\t{cut}");
    }
    Ok(())
}
