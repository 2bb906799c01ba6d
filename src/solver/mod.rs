//! Solver adapter boundary.
//!
//! The search algorithm is a pluggable collaborator behind the
//! [`CpSolver`] trait: any solver that accepts an
//! [`AssignmentModel`](crate::cp::AssignmentModel) plus a seed and
//! budget, and returns a status with a complete valuation, can be
//! substituted without touching model building or result assembly.
//!
//! [`BacktrackSolver`] is the default implementation.

mod backtrack;

pub use backtrack::BacktrackSolver;

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::cp::AssignmentModel;

/// Default wall-clock budget per solve.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Default search-node budget per solve.
pub const DEFAULT_MAX_NODES: u64 = 200_000;

/// A pluggable constraint solver.
pub trait CpSolver {
    /// Solves the model within the configured budgets.
    ///
    /// Must return a complete valuation when the status indicates a
    /// solution, and must honor the time limit rather than blocking
    /// indefinitely.
    fn solve(&self, model: &AssignmentModel, config: &SolverConfig) -> Solution;
}

/// Solve-call configuration: randomization seed and search budgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Randomization seed. Identical seeds reproduce identical
    /// search order; different seeds may yield different, equally
    /// valid solutions.
    pub seed: u64,
    /// Wall-clock budget. Exceeding it reports the incumbent (or
    /// Unknown), never blocks.
    pub time_limit: Duration,
    /// Search-node budget; keeps optimization anytime.
    pub max_nodes: u64,
}

impl SolverConfig {
    /// Creates a configuration with the given seed and default budgets.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            time_limit: DEFAULT_TIME_LIMIT,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Creates a configuration with a fresh seed from the
    /// thread-local RNG.
    ///
    /// This is the only process-wide randomness source; it is
    /// thread-local, so concurrent solves never contend.
    pub fn randomized() -> Self {
        Self::new(rand::rng().random())
    }

    /// Sets the wall-clock budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the search-node budget.
    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Outcome classification of a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverStatus {
    /// Search space exhausted; the returned valuation is best possible.
    Optimal,
    /// Budget reached with a satisfying valuation in hand.
    Feasible,
    /// Search space exhausted without any satisfying valuation.
    Infeasible,
    /// Budget reached before any satisfying valuation was found.
    Unknown,
}

/// Result of a solve: status, valuation, and search statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    /// Outcome classification.
    pub status: SolverStatus,
    /// Value per variable; empty unless a solution was found.
    pub values: Vec<usize>,
    /// Objective value of the valuation, when an objective is set.
    pub objective: Option<i64>,
    /// Search nodes explored.
    pub nodes_explored: u64,
}

impl Solution {
    /// Whether a satisfying valuation was found.
    pub fn is_solution_found(&self) -> bool {
        matches!(self.status, SolverStatus::Optimal | SolverStatus::Feasible)
    }
}
