//! CP formulation of the nurse-to-bay assignment problem.
//!
//! Builds an [`AssignmentModel`] from nurses and bay blocks, then
//! decodes a solver valuation back into a labeled [`Roster`].
//!
//! # Formulation
//!
//! One integer decision variable per (block, position), valued with
//! a 0-based nurse index. Hard constraints:
//! - Global all-different across every variable: a nurse holds at
//!   most one position system-wide.
//! - Shift eligibility as forbidden values: nurses without the
//!   position's required shift are cut from its domain up front, so
//!   the solver never explores invalid branches.
//! - Skill pairing as forbidden joint assignments: within a block,
//!   the two early positions may not both be taken by junior-tier,
//!   early-shift nurses. Every ordered pair of distinct such nurses
//!   is forbidden explicitly; this is not a cardinality constraint.
//!
//! The load-balancing objective minimizes the spread between the
//! most and least loaded nurse, where a position's load weight is
//! the combined surgery count of its bay pair.

mod model;

pub use model::{AssignmentModel, ForbiddenPair, Objective, VarId};

use crate::models::{
    group_label, required_shift, BayBlock, GroupAssignment, Nurse, Roster, POSITIONS_PER_BLOCK,
};
use crate::solver::{CpSolver, Solution, SolverConfig};

/// Builds and decodes the assignment model.
///
/// Inputs are borrowed; the builder holds no solver state and can be
/// reused across solves.
pub struct RosterCpBuilder<'a> {
    nurses: &'a [Nurse],
    blocks: &'a [BayBlock],
}

impl<'a> RosterCpBuilder<'a> {
    /// Creates a builder over the given nurses and blocks.
    pub fn new(nurses: &'a [Nurse], blocks: &'a [BayBlock]) -> Self {
        Self { nurses, blocks }
    }

    /// The variable for a (block, position).
    #[inline]
    fn var(block: usize, position: usize) -> VarId {
        block * POSITIONS_PER_BLOCK + position
    }

    /// Builds the assignment model.
    ///
    /// Inputs must already be structurally valid (see
    /// [`validate_blocks`](crate::validation::validate_blocks)).
    pub fn build(&self) -> AssignmentModel {
        let num_vars = self.blocks.len() * POSITIONS_PER_BLOCK;
        let mut model = AssignmentModel::new(num_vars, self.nurses.len());

        self.add_shift_eligibility(&mut model);
        self.add_skill_pairing(&mut model);
        self.add_fairness_objective(&mut model);

        model
    }

    /// Cuts wrong-shift nurses from each variable's domain.
    fn add_shift_eligibility(&self, model: &mut AssignmentModel) {
        for block in 0..self.blocks.len() {
            for position in 0..POSITIONS_PER_BLOCK {
                let shift = required_shift(position);
                let var = Self::var(block, position);
                for (idx, nurse) in self.nurses.iter().enumerate() {
                    if nurse.shift != shift {
                        model.forbid_value(var, idx);
                    }
                }
            }
        }
    }

    /// Forbids junior/early nurses from jointly filling a block's
    /// two early positions.
    fn add_skill_pairing(&self, model: &mut AssignmentModel) {
        let junior_early: Vec<usize> = self
            .nurses
            .iter()
            .enumerate()
            .filter(|(_, n)| n.is_junior_early())
            .map(|(idx, _)| idx)
            .collect();

        for block in 0..self.blocks.len() {
            let pos0 = Self::var(block, 0);
            let pos1 = Self::var(block, 1);
            for &i in &junior_early {
                for &j in &junior_early {
                    if i != j {
                        model.forbid_pair(pos0, i, pos1, j);
                    }
                }
            }
        }
    }

    /// Sets per-position load weights and the min-max objective.
    ///
    /// A position's weight is the combined surgery count of its bay
    /// pair; a nurse's load is the sum of the weights of the
    /// positions valued with that nurse's index.
    fn add_fairness_objective(&self, model: &mut AssignmentModel) {
        for (block_idx, block) in self.blocks.iter().enumerate() {
            for position in 0..POSITIONS_PER_BLOCK {
                model.set_weight(Self::var(block_idx, position), block.pair_surgeries(position));
            }
        }
        model.set_objective(Objective::MinimizeLoadSpread);
    }

    /// Builds the model and solves it with the given solver.
    pub fn solve<S: CpSolver>(&self, solver: &S, config: &SolverConfig) -> Solution {
        let model = self.build();
        solver.solve(&model, config)
    }

    /// Decodes a solver valuation into a labeled roster.
    ///
    /// Blocks are labeled alphabetically in input order, with a
    /// numeric fallback past "Z". Returns an empty roster when the
    /// solution holds no valuation. No further validation happens
    /// here.
    pub fn decode_solution(&self, solution: &Solution) -> Roster {
        let mut roster = Roster::new();
        if !solution.is_solution_found() {
            return roster;
        }

        for (block_idx, block) in self.blocks.iter().enumerate() {
            let nurses = (0..POSITIONS_PER_BLOCK)
                .map(|position| {
                    let nurse_idx = solution.values[Self::var(block_idx, position)];
                    self.nurses[nurse_idx].clone()
                })
                .collect();

            roster.add_group(GroupAssignment {
                label: group_label(block_idx),
                nurses,
                block: block.clone(),
            });
        }

        roster
    }
}
