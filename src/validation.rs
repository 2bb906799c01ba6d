//! Structural validation of bay blocks.
//!
//! Checks input shape invariants before any model variable is
//! created. Runs in two passes:
//! 1. Every block: bay labels pairwise distinct, exactly six bays.
//! 2. Every block and position: the bay pair mixes one short and one
//!    long duration.
//!
//! The first violation aborts validation; no partial model is ever
//! built on failure.

use std::collections::HashSet;

use crate::error::SolveError;
use crate::models::{BayBlock, DurationClass, BAYS_PER_BLOCK, POSITIONS_PER_BLOCK};

/// Validates the bay blocks of an assignment request.
///
/// # Returns
/// `Ok(())` if all blocks are well-formed, otherwise the first
/// violation encountered in two-pass order.
pub fn validate_blocks(blocks: &[BayBlock]) -> Result<(), SolveError> {
    // Pass 1: label uniqueness and bay count, across all blocks.
    for block in blocks {
        let mut labels = HashSet::new();
        for bay in &block.bays {
            if !labels.insert(bay.label.as_str()) {
                return Err(SolveError::DuplicateBayLabel { block_id: block.id });
            }
        }

        if block.bays.len() != BAYS_PER_BLOCK {
            return Err(SolveError::MalformedBlock {
                block_id: block.id,
                found: block.bays.len(),
            });
        }
    }

    // Pass 2: each position's bay pair must be one short, one long.
    for block in blocks {
        for position in 0..POSITIONS_PER_BLOCK {
            let (a, b) = block.pair_durations(position);
            let valid = matches!(
                (a, b),
                (DurationClass::Short, DurationClass::Long)
                    | (DurationClass::Long, DurationClass::Short)
            );
            if !valid {
                return Err(SolveError::InvalidDurationPairing {
                    block_id: block.id,
                    position,
                });
            }
        }
    }

    Ok(())
}
