//! Abstract integer assignment model.
//!
//! The model a `CpSolver` consumes: a set of integer decision
//! variables over a shared 0-based value domain, with an implicit
//! global all-different constraint, per-variable forbidden values,
//! forbidden joint value pairs, and an optional load-balancing
//! objective over per-variable weights.
//!
//! The model is solver-agnostic; it records constraints without
//! interpreting them.

use serde::{Deserialize, Serialize};

/// Index of a decision variable.
pub type VarId = usize;

/// A forbidden joint assignment: NOT (var_a == value_a AND var_b == value_b).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenPair {
    /// First variable.
    pub var_a: VarId,
    /// Forbidden value of the first variable.
    pub value_a: usize,
    /// Second variable.
    pub var_b: VarId,
    /// Forbidden value of the second variable.
    pub value_b: usize,
}

/// Optimization objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Objective {
    /// Any satisfying assignment is acceptable.
    #[default]
    FeasibleOnly,
    /// Minimize the spread (max - min) of per-value load sums, where
    /// each variable contributes its weight to the value it takes.
    MinimizeLoadSpread,
}

/// An integer assignment model.
///
/// All decision variables share the domain `0..value_count` and are
/// implicitly pairwise distinct (global all-different): a value is a
/// scarce resource claimed by at most one variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentModel {
    num_vars: usize,
    num_values: usize,
    /// `forbidden[var][value]` — value excluded from var's domain.
    forbidden: Vec<Vec<bool>>,
    forbidden_pairs: Vec<ForbiddenPair>,
    /// Per-variable load weight (objective term).
    weights: Vec<i64>,
    objective: Objective,
}

impl AssignmentModel {
    /// Creates a model with `num_vars` variables over `0..num_values`.
    pub fn new(num_vars: usize, num_values: usize) -> Self {
        Self {
            num_vars,
            num_values,
            forbidden: vec![vec![false; num_values]; num_vars],
            forbidden_pairs: Vec::new(),
            weights: vec![0; num_vars],
            objective: Objective::default(),
        }
    }

    /// Excludes a value from a variable's domain.
    pub fn forbid_value(&mut self, var: VarId, value: usize) {
        self.forbidden[var][value] = true;
    }

    /// Forbids the joint assignment (var_a == value_a AND var_b == value_b).
    ///
    /// The pair must span two distinct variables; a single-variable
    /// exclusion is [`forbid_value`](Self::forbid_value).
    pub fn forbid_pair(&mut self, var_a: VarId, value_a: usize, var_b: VarId, value_b: usize) {
        debug_assert_ne!(var_a, var_b, "a forbidden pair must span two distinct variables");
        self.forbidden_pairs.push(ForbiddenPair {
            var_a,
            value_a,
            var_b,
            value_b,
        });
    }

    /// Sets a variable's load weight.
    pub fn set_weight(&mut self, var: VarId, weight: i64) {
        self.weights[var] = weight;
    }

    /// Sets the objective.
    pub fn set_objective(&mut self, objective: Objective) {
        self.objective = objective;
    }

    /// Number of decision variables.
    #[inline]
    pub fn var_count(&self) -> usize {
        self.num_vars
    }

    /// Size of the shared value domain.
    #[inline]
    pub fn value_count(&self) -> usize {
        self.num_values
    }

    /// Whether a value remains in a variable's domain.
    #[inline]
    pub fn is_value_allowed(&self, var: VarId, value: usize) -> bool {
        !self.forbidden[var][value]
    }

    /// The values remaining in a variable's domain, ascending.
    pub fn allowed_values(&self, var: VarId) -> Vec<usize> {
        (0..self.num_values)
            .filter(|&v| self.is_value_allowed(var, v))
            .collect()
    }

    /// The forbidden joint assignments.
    pub fn forbidden_pairs(&self) -> &[ForbiddenPair] {
        &self.forbidden_pairs
    }

    /// Number of forbidden joint assignments.
    pub fn forbidden_pair_count(&self) -> usize {
        self.forbidden_pairs.len()
    }

    /// A variable's load weight.
    #[inline]
    pub fn weight(&self, var: VarId) -> i64 {
        self.weights[var]
    }

    /// The objective in effect.
    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Per-value load sums under a complete valuation.
    ///
    /// `values[var]` is the value taken by `var`; each variable
    /// contributes its weight to the value it takes (the indicator
    /// linking: value taken == v exactly when var's weight counts
    /// toward v's load).
    pub fn value_loads(&self, values: &[usize]) -> Vec<i64> {
        let mut loads = vec![0i64; self.num_values];
        for (var, &value) in values.iter().enumerate() {
            loads[value] += self.weights[var];
        }
        loads
    }

    /// Load spread (max - min over all values) under a valuation.
    ///
    /// Returns 0 for an empty value domain.
    pub fn load_spread(&self, values: &[usize]) -> i64 {
        let loads = self.value_loads(values);
        match (loads.iter().max(), loads.iter().min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_exclusion() {
        let mut model = AssignmentModel::new(2, 4);
        model.forbid_value(0, 1);
        model.forbid_value(0, 3);

        assert!(model.is_value_allowed(0, 0));
        assert!(!model.is_value_allowed(0, 1));
        assert_eq!(model.allowed_values(0), vec![0, 2]);
        assert_eq!(model.allowed_values(1), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_forbidden_pairs() {
        let mut model = AssignmentModel::new(2, 3);
        model.forbid_pair(0, 1, 1, 2);
        model.forbid_pair(0, 2, 1, 1);

        assert_eq!(model.forbidden_pair_count(), 2);
        assert_eq!(
            model.forbidden_pairs()[0],
            ForbiddenPair {
                var_a: 0,
                value_a: 1,
                var_b: 1,
                value_b: 2
            }
        );
    }

    #[test]
    #[should_panic(expected = "distinct variables")]
    fn test_forbid_pair_rejects_single_variable() {
        let mut model = AssignmentModel::new(2, 3);
        model.forbid_pair(0, 1, 0, 2);
    }

    #[test]
    fn test_value_loads_and_spread() {
        let mut model = AssignmentModel::new(3, 4);
        model.set_weight(0, 5);
        model.set_weight(1, 2);
        model.set_weight(2, 7);

        // var0 -> value 1, var1 -> value 3, var2 -> value 0.
        let values = vec![1, 3, 0];
        assert_eq!(model.value_loads(&values), vec![7, 5, 0, 2]);
        assert_eq!(model.load_spread(&values), 7);
    }

    #[test]
    fn test_default_objective() {
        let model = AssignmentModel::new(1, 1);
        assert_eq!(model.objective(), Objective::FeasibleOnly);
    }
}
