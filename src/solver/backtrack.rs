//! Default backtracking solver.
//!
//! Depth-first search over the decision variables in index order,
//! with the candidate values of each variable visited in a
//! seed-shuffled order. Maintains the used-value set (global
//! all-different) and checks forbidden values and forbidden pairs
//! against already-assigned variables at every step, so invalid
//! branches are never entered.
//!
//! With a load-spread objective the search is anytime: it keeps the
//! best valuation found and stops on the wall-clock or node budget,
//! on proof of optimality (spread zero, or search space exhausted),
//! reporting the incumbent. Without an objective it stops at the
//! first satisfying valuation.

use std::collections::HashMap;
use std::time::Instant;

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::cp::{AssignmentModel, Objective, VarId};

use super::{CpSolver, Solution, SolverConfig, SolverStatus};

/// Seeded randomized depth-first search solver.
#[derive(Debug, Clone, Default)]
pub struct BacktrackSolver;

impl BacktrackSolver {
    /// Creates a new solver.
    pub fn new() -> Self {
        Self
    }
}

impl CpSolver for BacktrackSolver {
    fn solve(&self, model: &AssignmentModel, config: &SolverConfig) -> Solution {
        let mut rng = SmallRng::seed_from_u64(config.seed);

        // Shuffled candidate order per variable; forbidden values are
        // already excluded here.
        let value_order: Vec<Vec<usize>> = (0..model.var_count())
            .map(|var| {
                let mut values = model.allowed_values(var);
                values.shuffle(&mut rng);
                values
            })
            .collect();

        // Index each forbidden pair at its later variable, so the
        // check runs when the second variable of the pair is assigned.
        let mut pair_guard: HashMap<(VarId, usize), Vec<(VarId, usize)>> = HashMap::new();
        for pair in model.forbidden_pairs() {
            let (first, second) = if pair.var_a <= pair.var_b {
                ((pair.var_a, pair.value_a), (pair.var_b, pair.value_b))
            } else {
                ((pair.var_b, pair.value_b), (pair.var_a, pair.value_a))
            };
            pair_guard.entry(second).or_default().push(first);
        }

        let mut search = Search {
            model,
            value_order,
            pair_guard,
            assignment: vec![usize::MAX; model.var_count()],
            used: vec![false; model.value_count()],
            best: None,
            nodes: 0,
            deadline: Instant::now() + config.time_limit,
            max_nodes: config.max_nodes,
            budget_hit: false,
            proved_optimal: false,
            stop: false,
        };
        search.dfs(0);

        let status = match (&search.best, search.budget_hit, search.proved_optimal) {
            (Some(_), _, true) => SolverStatus::Optimal,
            (Some(_), true, false) => SolverStatus::Feasible,
            // Exhausted without optimality proof: first-solution stop.
            (Some(_), false, false) => SolverStatus::Feasible,
            (None, true, _) => SolverStatus::Unknown,
            (None, false, _) => SolverStatus::Infeasible,
        };

        debug!(
            "backtrack solve: status={status:?} nodes={} seed={}",
            search.nodes, config.seed
        );

        let (values, objective) = match search.best {
            Some((values, spread)) => {
                let objective = match model.objective() {
                    Objective::MinimizeLoadSpread => Some(spread),
                    Objective::FeasibleOnly => None,
                };
                (values, objective)
            }
            None => (Vec::new(), None),
        };

        Solution {
            status,
            values,
            objective,
            nodes_explored: search.nodes,
        }
    }
}

struct Search<'a> {
    model: &'a AssignmentModel,
    value_order: Vec<Vec<usize>>,
    pair_guard: HashMap<(VarId, usize), Vec<(VarId, usize)>>,
    assignment: Vec<usize>,
    used: Vec<bool>,
    best: Option<(Vec<usize>, i64)>,
    nodes: u64,
    deadline: Instant,
    max_nodes: u64,
    budget_hit: bool,
    proved_optimal: bool,
    stop: bool,
}

impl Search<'_> {
    fn dfs(&mut self, var: VarId) {
        if self.stop {
            return;
        }
        if var == self.model.var_count() {
            self.record_solution();
            // A fully exhausted search proves optimality below; here
            // only a spread of zero stops early.
            return;
        }

        for idx in 0..self.value_order[var].len() {
            let value = self.value_order[var][idx];
            if self.used[value] {
                continue;
            }
            if self.violates_pair(var, value) {
                continue;
            }

            self.nodes += 1;
            if self.nodes >= self.max_nodes || Instant::now() >= self.deadline {
                self.budget_hit = true;
                self.stop = true;
                return;
            }

            self.assignment[var] = value;
            self.used[value] = true;
            self.dfs(var + 1);
            self.used[value] = false;
            self.assignment[var] = usize::MAX;

            if self.stop {
                return;
            }
        }

        if var == 0 {
            // Root-level loop finished: the search space is exhausted.
            self.proved_optimal = self.best.is_some();
        }
    }

    /// Whether assigning `value` to `var` completes a forbidden pair
    /// with an earlier, already-assigned variable.
    fn violates_pair(&self, var: VarId, value: usize) -> bool {
        match self.pair_guard.get(&(var, value)) {
            Some(guards) => guards
                .iter()
                .any(|&(other, other_value)| self.assignment[other] == other_value),
            None => false,
        }
    }

    fn record_solution(&mut self) {
        match self.model.objective() {
            Objective::FeasibleOnly => {
                self.best = Some((self.assignment.clone(), 0));
                self.stop = true;
            }
            Objective::MinimizeLoadSpread => {
                let spread = self.model.load_spread(&self.assignment);
                let improved = match &self.best {
                    Some((_, incumbent)) => spread < *incumbent,
                    None => true,
                };
                if improved {
                    self.best = Some((self.assignment.clone(), spread));
                }
                if spread == 0 {
                    // Spread cannot go below zero.
                    self.proved_optimal = true;
                    self.stop = true;
                }
            }
        }
    }
}
