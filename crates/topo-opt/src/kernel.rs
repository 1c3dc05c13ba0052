use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_core::{NodeId, RngHandle};
use topo_graph::{apply_double_edge_swap, canonical_hash, undo_double_edge_swap, Graph, SwapOutcome};
use topo_metrics::Partitioner;

use crate::config::OptimizerConfig;
use crate::objective::Objective;

/// Verdict on a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrialState {
    /// Strict improvement; the budget is reset.
    Accepted,
    /// Equal objective; the swap is kept and the budget decremented.
    AcceptedTie,
    /// Worse objective; the swap is undone and the budget decremented.
    RejectedWorse,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Termination {
    /// The non-improvement budget reached zero.
    Exhausted,
    /// The wall-clock limit elapsed.
    TimeLimit,
    /// The hard trial cap was reached.
    TrialLimit,
}

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Objective that was optimized.
    pub objective: Objective,
    /// Objective value of the input graph.
    #[serde(with = "topo_core::float_serde")]
    pub initial_value: f64,
    /// Objective value of the returned graph.
    #[serde(with = "topo_core::float_serde")]
    pub final_value: f64,
    /// Trials evaluated.
    pub trials: usize,
    /// Trials that strictly improved the objective.
    pub accepted: usize,
    /// Trials kept with an unchanged objective.
    pub ties: usize,
    /// Trials undone because they were worse.
    pub rejected: usize,
    /// Swap draws discarded because they were invalid or disconnecting.
    pub swap_retries: usize,
    /// Remaining non-improvement budget at the end of the run.
    pub remaining_budget: usize,
    /// Stop reason.
    pub termination: Termination,
    /// Canonical hash of the returned graph.
    pub final_graph_hash: String,
}

/// Optimized graph plus run statistics.
#[derive(Debug, Clone)]
pub struct OptimizeOutcome {
    /// Best graph found.
    pub graph: Graph,
    /// Run statistics.
    pub summary: RunSummary,
}

/// Hill-climbs `graph` with double-edge swaps until the non-improvement budget
/// runs out or a time or trial limit is hit. Degrees and the edge count are
/// invariant across the run.
pub fn optimize(
    mut graph: Graph,
    config: &OptimizerConfig,
    rng: &mut RngHandle,
    partitioner: &dyn Partitioner,
) -> Result<OptimizeOutcome, TopoError> {
    config.validate()?;
    if graph.edge_count() < 2 {
        return Err(TopoError::InvalidParameters(
            ErrorInfo::new("too-few-edges", "a double-edge swap needs at least two edges")
                .with_context("edges", graph.edge_count()),
        ));
    }

    let objective = config.objective;
    let direction = objective.direction();
    // A limit too large for `Instant` means no deadline.
    let deadline = config.time_limit_secs.and_then(|secs| {
        Duration::try_from_secs_f64(secs)
            .ok()
            .and_then(|limit| Instant::now().checked_add(limit))
    });

    let initial_value = objective.evaluate(&graph, partitioner)?;
    let mut current = initial_value;
    let mut connected = graph.is_connected();
    let mut budget = config.non_improvement_budget;
    let mut stats = Counters::default();
    log::info!(
        "optimizing {} on n={} m={}: initial {}",
        objective.label(),
        graph.node_count(),
        graph.edge_count(),
        initial_value
    );

    let termination = loop {
        if budget == 0 {
            break Termination::Exhausted;
        }
        if deadline.is_some_and(|limit| Instant::now() >= limit) {
            break Termination::TimeLimit;
        }
        if config.max_trials.is_some_and(|cap| stats.trials >= cap) {
            break Termination::TrialLimit;
        }

        let guard_connectivity = config.preserve_connectivity && connected;
        let swap = draw_swap(&mut graph, config.max_swap_attempts, guard_connectivity, rng, &mut stats)?;
        let candidate = match objective.evaluate(&graph, partitioner) {
            Ok(value) => value,
            Err(err) => {
                undo_double_edge_swap(&mut graph, &swap)?;
                return Err(err);
            }
        };
        stats.trials += 1;

        let state = if direction.improves(candidate, current) {
            TrialState::Accepted
        } else if candidate == current {
            TrialState::AcceptedTie
        } else {
            TrialState::RejectedWorse
        };
        match state {
            TrialState::Accepted => {
                log::info!("trial {}: {} -> {}", stats.trials, current, candidate);
                current = candidate;
                budget = config.non_improvement_budget;
                stats.accepted += 1;
            }
            TrialState::AcceptedTie => {
                budget -= 1;
                stats.ties += 1;
            }
            TrialState::RejectedWorse => {
                undo_double_edge_swap(&mut graph, &swap)?;
                budget -= 1;
                stats.rejected += 1;
            }
        }
        if state != TrialState::RejectedWorse && !connected {
            connected = graph.is_connected();
        }
        log::debug!(
            "trial {} {:?}: candidate {} current {} budget {}",
            stats.trials,
            state,
            candidate,
            current,
            budget
        );
    };

    log::info!(
        "{:?} after {} trials: {} -> {}",
        termination,
        stats.trials,
        initial_value,
        current
    );
    let summary = RunSummary {
        objective,
        initial_value,
        final_value: current,
        trials: stats.trials,
        accepted: stats.accepted,
        ties: stats.ties,
        rejected: stats.rejected,
        swap_retries: stats.swap_retries,
        remaining_budget: budget,
        termination,
        final_graph_hash: canonical_hash(&graph),
    };
    Ok(OptimizeOutcome { graph, summary })
}

/// [`optimize`] with [`Objective::MinimizeAspl`].
pub fn minimize_aspl(
    graph: Graph,
    config: &OptimizerConfig,
    rng: &mut RngHandle,
) -> Result<OptimizeOutcome, TopoError> {
    let config = OptimizerConfig {
        objective: Objective::MinimizeAspl,
        ..config.clone()
    };
    optimize(graph, &config, rng, &config.partitioner)
}

/// [`optimize`] with [`Objective::MaximizeBisection`].
pub fn maximize_bisection(
    graph: Graph,
    parts: usize,
    config: &OptimizerConfig,
    rng: &mut RngHandle,
    partitioner: &dyn Partitioner,
) -> Result<OptimizeOutcome, TopoError> {
    let config = OptimizerConfig {
        objective: Objective::MaximizeBisection { parts },
        ..config.clone()
    };
    optimize(graph, &config, rng, partitioner)
}

#[derive(Default)]
struct Counters {
    trials: usize,
    accepted: usize,
    ties: usize,
    rejected: usize,
    swap_retries: usize,
}

/// Applies a random valid swap, redrawing rejected or disconnecting ones.
fn draw_swap(
    graph: &mut Graph,
    max_attempts: usize,
    guard_connectivity: bool,
    rng: &mut RngHandle,
    stats: &mut Counters,
) -> Result<SwapOutcome, TopoError> {
    let edges: Vec<(NodeId, NodeId)> = graph.edges().map(|edge| edge.endpoints()).collect();
    for _ in 0..max_attempts {
        let first = rng.gen_range(0..edges.len());
        let mut second = rng.gen_range(0..edges.len() - 1);
        if second >= first {
            second += 1;
        }
        let (c, d) = edges[second];
        let oriented = if rng.gen_bool(0.5) { (c, d) } else { (d, c) };
        match apply_double_edge_swap(graph, edges[first], oriented) {
            Ok(swap) => {
                if guard_connectivity && !graph.is_connected() {
                    undo_double_edge_swap(graph, &swap)?;
                    stats.swap_retries += 1;
                    continue;
                }
                return Ok(swap);
            }
            Err(err) if err.is_swap_rejection() => stats.swap_retries += 1,
            Err(err) => return Err(err),
        }
    }
    Err(TopoError::NoValidSwapFound(
        ErrorInfo::new("swap-attempts-exhausted", "no valid swap found within the attempt bound")
            .with_context("attempts", max_attempts)
            .with_context("edges", edges.len()),
    ))
}
