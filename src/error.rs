//! Failure taxonomy for the assignment pipeline.
//!
//! Three variants are client-input defects detected before any model
//! variable exists; `NoFeasibleAssignment` is a legitimate solver
//! outcome (too few eligible nurses, not a fault). None are retried
//! or silently recovered.

use thiserror::Error;

/// An assignment failure reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A block's bay labels are not pairwise distinct.
    #[error("bay block {block_id} has duplicate bay labels; all bays in a block must be unique")]
    DuplicateBayLabel {
        /// Offending block.
        block_id: u32,
    },

    /// A block does not contain exactly six bays.
    #[error("bay block {block_id} must have exactly 6 bays, found {found}")]
    MalformedBlock {
        /// Offending block.
        block_id: u32,
        /// Actual bay count.
        found: usize,
    },

    /// A position's bay pair is not one short plus one long.
    #[error("bay block {block_id} has an invalid duration pairing for position {position}")]
    InvalidDurationPairing {
        /// Offending block.
        block_id: u32,
        /// Offending position index (0..3).
        position: usize,
    },

    /// The solver found no assignment satisfying the hard constraints.
    #[error("no feasible assignment found")]
    NoFeasibleAssignment,
}

impl SolveError {
    /// Whether this failure is a client-input defect, as opposed to
    /// a no-solution outcome on structurally valid input.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, SolveError::NoFeasibleAssignment)
    }
}
