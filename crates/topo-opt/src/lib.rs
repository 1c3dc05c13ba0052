#![deny(missing_docs)]

//! Hill-climbing topology optimizer: repeated random double-edge swaps, kept
//! when the objective does not get worse, until a budget of consecutive
//! non-improving trials is spent.

/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation for restarts.
pub mod determinism;
/// Optimization kernel and the `optimize` entry points.
pub mod kernel;
/// Run manifest serialization.
pub mod manifest;
/// Objectives and their comparison direction.
pub mod objective;
/// Tab-separated result lines.
pub mod report;
/// Parallel independent restarts.
pub mod restarts;

pub use config::OptimizerConfig;
pub use kernel::{
    maximize_bisection, minimize_aspl, optimize, OptimizeOutcome, RunSummary, Termination,
    TrialState,
};
pub use manifest::RunManifest;
pub use objective::{Direction, Objective};
pub use restarts::{optimize_restarts, RestartOutcome, RestartRecord};
