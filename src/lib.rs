//! Nurse-to-bay assignment for operating-room pods.
//!
//! Assigns a fixed roster of nurses to staffing positions across
//! parallel bay blocks, subject to hard eligibility rules (shift
//! windows, skill-tier pairing), structural validity checks, and a
//! soft workload-balance objective. The search algorithm is a
//! pluggable collaborator behind the `CpSolver` trait; a seeded
//! randomized backtracking solver is provided.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Nurse`, `Bay`, `BayBlock`,
//!   `Roster`, position/pair layout constants
//! - **`validation`**: Structural input checks run before any model
//!   variable is created
//! - **`cp`**: `AssignmentModel` and `RosterCpBuilder` — constraint
//!   formulation, fairness objective, solution decoding
//! - **`solver`**: The `CpSolver` boundary, `SolverConfig`, and the
//!   default `BacktrackSolver`
//! - **`service`**: `solve_roster` — the synchronous
//!   validate → build → solve → assemble pipeline
//! - **`error`**: The `SolveError` taxonomy
//!
//! # Pipeline
//!
//! Validator → Model Builder → Fairness Objective → Solver →
//! Result Assembler. One request builds one model and runs one
//! bounded solve; nothing is persisted and nothing is retried.
//!
//! # References
//!
//! - Rossi, van Beek, Walsh (2006), "Handbook of Constraint
//!   Programming"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod cp;
pub mod error;
pub mod models;
pub mod service;
pub mod solver;
pub mod validation;

pub use error::SolveError;
pub use service::{solve_roster, solve_roster_with, SolveRequest};
