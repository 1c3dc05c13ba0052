use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use topo_core::errors::{ErrorInfo, TopoError};
use topo_metrics::GpmetisPartitioner;

use crate::objective::Objective;

/// YAML-configurable parameters governing one optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Quantity being optimized.
    #[serde(default)]
    pub objective: Objective,
    /// Consecutive non-improving trials tolerated before stopping; reset on
    /// every strict improvement.
    #[serde(default = "default_budget")]
    pub non_improvement_budget: usize,
    /// Redraws allowed per trial before giving up with `NoValidSwapFound`.
    #[serde(default = "default_swap_attempts")]
    pub max_swap_attempts: usize,
    /// Undo and redraw swaps that disconnect a connected graph.
    #[serde(default = "default_preserve_connectivity")]
    pub preserve_connectivity: bool,
    /// Master seed; fresh entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Wall-clock limit in seconds.
    #[serde(default)]
    pub time_limit_secs: Option<f64>,
    /// Hard cap on the number of trials.
    #[serde(default)]
    pub max_trials: Option<usize>,
    /// External partitioner used by the bisection objective.
    #[serde(default)]
    pub partitioner: GpmetisPartitioner,
}

fn default_budget() -> usize {
    1000
}

fn default_swap_attempts() -> usize {
    1000
}

fn default_preserve_connectivity() -> bool {
    true
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            objective: Objective::default(),
            non_improvement_budget: default_budget(),
            max_swap_attempts: default_swap_attempts(),
            preserve_connectivity: default_preserve_connectivity(),
            seed: None,
            time_limit_secs: None,
            max_trials: None,
            partitioner: GpmetisPartitioner::default(),
        }
    }
}

impl OptimizerConfig {
    /// Parses a configuration from YAML text; missing fields take defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self, TopoError> {
        serde_yaml::from_str(text)
            .map_err(|err| TopoError::Serde(ErrorInfo::new("config-parse", err.to_string())))
    }

    /// Reads a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, TopoError> {
        let text = fs::read_to_string(path)
            .map_err(|err| TopoError::io("config-read", err, path.display()))?;
        Self::from_yaml_str(&text).map_err(|err| match err {
            TopoError::Serde(info) => {
                TopoError::Serde(info.with_context("path", path.display()))
            }
            other => other,
        })
    }

    /// Rejects parameter combinations that cannot run.
    pub fn validate(&self) -> Result<(), TopoError> {
        if self.non_improvement_budget == 0 {
            return Err(TopoError::InvalidParameters(
                ErrorInfo::new("budget-zero", "non-improvement budget must be at least 1")
                    .with_hint("an unbounded search is not supported; pick a finite budget"),
            ));
        }
        if self.max_swap_attempts == 0 {
            return Err(TopoError::invalid(
                "swap-attempts-zero",
                "max_swap_attempts must be at least 1",
            ));
        }
        if let Objective::MaximizeBisection { parts } = self.objective {
            if parts < 2 {
                return Err(TopoError::InvalidParameters(
                    ErrorInfo::new("partition-count", "partition count must be at least 2")
                        .with_context("parts", parts),
                ));
            }
        }
        if let Some(limit) = self.time_limit_secs {
            if !(limit.is_finite() && limit >= 0.0) {
                return Err(TopoError::InvalidParameters(
                    ErrorInfo::new("time-limit", "time limit must be a non-negative number")
                        .with_context("seconds", limit),
                ));
            }
        }
        Ok(())
    }
}
