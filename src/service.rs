//! Assignment service.
//!
//! The one synchronous entry point: validate the request, build the
//! CP model, run the solver, and assemble the labeled roster.
//! Validation failures abort before any solver work; solver
//! infeasibility (or an exhausted budget with no solution) surfaces
//! as [`SolveError::NoFeasibleAssignment`].
//!
//! Each `solve_roster` call draws a fresh seed from the thread-local
//! RNG, so repeated calls with identical input may produce
//! different, equally valid rosters. Use [`solve_roster_with`] with
//! a fixed [`SolverConfig`] seed for reproducible solves or to
//! substitute another [`CpSolver`].

use log::{debug, info};

use crate::cp::RosterCpBuilder;
use crate::error::SolveError;
use crate::models::{BayBlock, Nurse, Roster};
use crate::solver::{BacktrackSolver, CpSolver, SolverConfig};
use crate::validation::validate_blocks;

/// Input container for an assignment request.
#[derive(Debug, Clone)]
pub struct SolveRequest {
    /// The full nurse roster.
    pub nurses: Vec<Nurse>,
    /// The bay blocks to staff.
    pub blocks: Vec<BayBlock>,
}

impl SolveRequest {
    /// Creates a new request.
    pub fn new(nurses: Vec<Nurse>, blocks: Vec<BayBlock>) -> Self {
        Self { nurses, blocks }
    }
}

/// Solves a request with the default solver and a fresh random seed.
pub fn solve_roster(request: &SolveRequest) -> Result<Roster, SolveError> {
    solve_roster_with(request, &BacktrackSolver::new(), &SolverConfig::randomized())
}

/// Solves a request with an injected solver and configuration.
pub fn solve_roster_with<S: CpSolver>(
    request: &SolveRequest,
    solver: &S,
    config: &SolverConfig,
) -> Result<Roster, SolveError> {
    validate_blocks(&request.blocks)?;

    let builder = RosterCpBuilder::new(&request.nurses, &request.blocks);
    debug!(
        "solving assignment: {} nurses, {} blocks, seed={}",
        request.nurses.len(),
        request.blocks.len(),
        config.seed
    );

    let solution = builder.solve(solver, config);
    if !solution.is_solution_found() {
        info!(
            "no feasible assignment: status={:?} nodes={}",
            solution.status, solution.nodes_explored
        );
        return Err(SolveError::NoFeasibleAssignment);
    }

    info!(
        "assignment solved: status={:?} spread={:?} nodes={}",
        solution.status, solution.objective, solution.nodes_explored
    );
    Ok(builder.decode_solution(&solution))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bay, DurationClass, Shift, SkillTier, BAYS_PER_BLOCK};
    use std::collections::HashSet;

    fn valid_block(id: u32) -> BayBlock {
        let mut block = BayBlock::new(id);
        for i in 0..BAYS_PER_BLOCK {
            let duration = if i % 2 == 0 {
                DurationClass::Short
            } else {
                DurationClass::Long
            };
            block = block.with_bay(Bay::new(format!("B{id}-OR{i}"), duration, (i as i64 % 3) + 1));
        }
        block
    }

    /// 30 nurses: 22 early (6 junior), 8 late (exactly 1 junior).
    fn ward_roster() -> Vec<Nurse> {
        let mut nurses = Vec::new();
        for i in 0..22u32 {
            let tier = if i < 6 {
                SkillTier::Junior
            } else {
                SkillTier::Senior
            };
            nurses.push(Nurse::new(i, tier, Shift::Early).with_name(format!("Early {i}")));
        }
        for i in 22..30u32 {
            let tier = if i == 22 {
                SkillTier::Junior
            } else {
                SkillTier::Senior
            };
            nurses.push(Nurse::new(i, tier, Shift::Late).with_name(format!("Late {i}")));
        }
        nurses
    }

    fn fixed_config() -> SolverConfig {
        init_logging();
        SolverConfig::new(1234)
    }

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_ward_scenario_solves() {
        let request = SolveRequest::new(ward_roster(), (1..=5).map(valid_block).collect());
        let roster =
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()).unwrap();

        assert_eq!(roster.group_count(), 5);
        let labels: Vec<&str> = roster.groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_no_nurse_reused() {
        let request = SolveRequest::new(ward_roster(), (1..=5).map(valid_block).collect());
        let roster =
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()).unwrap();

        let ids = roster.assigned_nurse_ids();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(ids.len(), 15);
        assert_eq!(unique.len(), 15);
    }

    #[test]
    fn test_shift_eligibility_holds() {
        let request = SolveRequest::new(ward_roster(), (1..=5).map(valid_block).collect());
        let roster =
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()).unwrap();

        for group in &roster.groups {
            assert_eq!(group.nurses[0].shift, Shift::Early);
            assert_eq!(group.nurses[1].shift, Shift::Early);
            assert_eq!(group.nurses[2].shift, Shift::Late);
        }
    }

    #[test]
    fn test_pairing_rule_holds() {
        let request = SolveRequest::new(ward_roster(), (1..=5).map(valid_block).collect());
        let roster =
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()).unwrap();

        for group in &roster.groups {
            assert!(
                !(group.nurses[0].is_junior_early() && group.nurses[1].is_junior_early()),
                "group {} pairs two junior early nurses",
                group.label
            );
        }
    }

    #[test]
    fn test_pairing_rule_binding() {
        // Two juniors and one senior on early: the juniors may never
        // share a block's early slots, so the senior always appears.
        let nurses = vec![
            Nurse::new(0, SkillTier::Junior, Shift::Early),
            Nurse::new(1, SkillTier::Junior, Shift::Early),
            Nurse::new(2, SkillTier::Senior, Shift::Early),
            Nurse::new(3, SkillTier::Senior, Shift::Late),
        ];
        let request = SolveRequest::new(nurses, vec![valid_block(1)]);

        init_logging();
        for seed in 0..10 {
            let roster =
                solve_roster_with(&request, &BacktrackSolver::new(), &SolverConfig::new(seed))
                    .unwrap();
            let group = &roster.groups[0];
            assert!(
                group.nurses[0].tier == SkillTier::Senior
                    || group.nurses[1].tier == SkillTier::Senior
            );
        }
    }

    #[test]
    fn test_too_few_early_nurses_infeasible() {
        // 5 blocks need 10 early nurses; supply 9.
        let mut nurses: Vec<Nurse> = (0..9u32)
            .map(|i| Nurse::new(i, SkillTier::Senior, Shift::Early))
            .collect();
        for i in 9..14u32 {
            nurses.push(Nurse::new(i, SkillTier::Senior, Shift::Late));
        }
        let request = SolveRequest::new(nurses, (1..=5).map(valid_block).collect());

        assert_eq!(
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()),
            Err(SolveError::NoFeasibleAssignment)
        );
    }

    #[test]
    fn test_malformed_block_rejected_before_solve() {
        let mut bad = valid_block(3);
        bad.bays.pop();
        let request = SolveRequest::new(ward_roster(), vec![valid_block(1), bad]);

        assert_eq!(
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()),
            Err(SolveError::MalformedBlock {
                block_id: 3,
                found: 5
            })
        );
    }

    #[test]
    fn test_duplicate_label_rejected_before_solve() {
        let mut bad = valid_block(2);
        bad.bays[5].label = bad.bays[0].label.clone();
        let request = SolveRequest::new(ward_roster(), vec![valid_block(1), bad]);

        let err =
            solve_roster_with(&request, &BacktrackSolver::new(), &fixed_config()).unwrap_err();
        assert_eq!(err, SolveError::DuplicateBayLabel { block_id: 2 });
        assert!(err.is_input_error());
    }

    #[test]
    fn test_fixed_seed_reproduces_roster() {
        let request = SolveRequest::new(ward_roster(), (1..=3).map(valid_block).collect());
        init_logging();
        let config = SolverConfig::new(77);
        let a = solve_roster_with(&request, &BacktrackSolver::new(), &config).unwrap();
        let b = solve_roster_with(&request, &BacktrackSolver::new(), &config).unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn test_randomized_entry_point_solves() {
        let request = SolveRequest::new(ward_roster(), (1..=2).map(valid_block).collect());
        init_logging();
        let roster = solve_roster(&request).unwrap();
        assert_eq!(roster.group_count(), 2);
    }
}
