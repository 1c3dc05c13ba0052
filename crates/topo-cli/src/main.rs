use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    bisect::{self, BisectArgs},
    generate::{self, GenerateArgs},
    metrics::{self, MetricsArgs},
    optimize::{self, OptimizeArgs},
    renumber::{self, RenumberArgs},
};

mod commands;

#[derive(Parser, Debug)]
#[command(name = "topo", about = "Regular interconnection topology generator and optimizer")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a random regular graph and report its metrics.
    Generate(GenerateArgs),
    /// Report diameter, ASPL and physical statistics of an edge list.
    Metrics(MetricsArgs),
    /// Improve ASPL or bisection bandwidth with double-edge swaps.
    Optimize(OptimizeArgs),
    /// Renumber nodes along a greedy tour of the physical links.
    Renumber(RenumberArgs),
    /// Edge cut of balanced partitions through gpmetis.
    Bisect(BisectArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Metrics(args) => metrics::run(&args),
        Command::Optimize(args) => optimize::run(&args),
        Command::Renumber(args) => renumber::run(&args),
        Command::Bisect(args) => bisect::run(&args),
    }
}
