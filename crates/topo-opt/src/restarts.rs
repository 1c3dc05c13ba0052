use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::RngHandle;
use topo_graph::Graph;
use topo_metrics::Partitioner;

use crate::config::OptimizerConfig;
use crate::determinism;
use crate::kernel::{optimize, OptimizeOutcome};

/// Per-restart record kept alongside the winning outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestartRecord {
    /// Restart index.
    pub index: usize,
    /// Seed driving the swaps of this restart.
    pub seed: u64,
    /// Objective value this restart ended with.
    #[serde(with = "topo_core::float_serde")]
    pub final_value: f64,
}

/// Best of several independent runs.
#[derive(Debug, Clone)]
pub struct RestartOutcome {
    /// Index of the winning restart.
    pub best_index: usize,
    /// All restarts in index order.
    pub records: Vec<RestartRecord>,
    /// Outcome of the winning restart.
    pub best: OptimizeOutcome,
}

/// Runs `restarts` independent optimizations in parallel and keeps the best.
///
/// Each restart builds its own starting graph through `factory`, which gets an
/// RNG seeded from [`determinism::generator_seed`]; swaps draw from
/// [`determinism::restart_seed`]. Ties go to the lowest index, so the result
/// depends only on `master_seed`.
pub fn optimize_restarts<F>(
    factory: F,
    config: &OptimizerConfig,
    restarts: usize,
    master_seed: u64,
    partitioner: &dyn Partitioner,
) -> Result<RestartOutcome, TopoError>
where
    F: Fn(&mut RngHandle) -> Result<Graph, TopoError> + Sync,
{
    if restarts == 0 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("restart-count", "at least one restart is required")
                .with_context("restarts", restarts),
        ));
    }
    config.validate()?;

    let outcomes = (0..restarts)
        .into_par_iter()
        .map(|index| {
            let mut generator = RngHandle::from_seed(determinism::generator_seed(master_seed, index));
            let graph = factory(&mut generator)?;
            let seed = determinism::restart_seed(master_seed, index);
            let mut rng = RngHandle::from_seed(seed);
            let outcome = optimize(graph, config, &mut rng, partitioner)?;
            log::info!(
                "restart {index} (seed {seed}) finished at {}",
                outcome.summary.final_value
            );
            Ok((seed, outcome))
        })
        .collect::<Result<Vec<_>, TopoError>>()?;

    let direction = config.objective.direction();
    let records: Vec<RestartRecord> = outcomes
        .iter()
        .enumerate()
        .map(|(index, (seed, outcome))| RestartRecord {
            index,
            seed: *seed,
            final_value: outcome.summary.final_value,
        })
        .collect();
    let mut best_index = 0;
    for record in &records[1..] {
        if direction.improves(record.final_value, records[best_index].final_value) {
            best_index = record.index;
        }
    }
    let best = outcomes
        .into_iter()
        .nth(best_index)
        .map(|(_, outcome)| outcome)
        .ok_or_else(|| TopoError::invalid("restart-missing", "winning restart vanished"))?;
    Ok(RestartOutcome {
        best_index,
        records,
        best,
    })
}
