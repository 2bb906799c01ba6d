//! Roster (solution) model.
//!
//! A roster is the assembled output of a solve: one labeled
//! assignment record per bay block, each holding the three
//! position-to-nurse mappings alongside a copy of the block's bay
//! data for downstream display.

use serde::{Deserialize, Serialize};

use super::{BayBlock, Nurse};

/// A complete assignment of nurses to bay blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    /// Per-block assignments, in input block order.
    pub groups: Vec<GroupAssignment>,
}

/// The staffing of a single bay block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupAssignment {
    /// Display label ("A".."Z", then "Group_{index}").
    pub label: String,
    /// Assigned nurses indexed by position (0, 1 early; 2 late).
    pub nurses: Vec<Nurse>,
    /// Copy of the original block data.
    pub block: BayBlock,
}

/// Display label for the block at a given ordering position.
///
/// The first 26 blocks are labeled "A" through "Z"; beyond that a
/// numeric fallback is used.
pub fn group_label(index: usize) -> String {
    if index < 26 {
        char::from(b'A' + index as u8).to_string()
    } else {
        format!("Group_{index}")
    }
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a group assignment.
    pub fn add_group(&mut self, group: GroupAssignment) {
        self.groups.push(group);
    }

    /// Number of staffed blocks.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// The nurse filling a given (group, position), if present.
    pub fn nurse_at(&self, group: usize, position: usize) -> Option<&Nurse> {
        self.groups.get(group)?.nurses.get(position)
    }

    /// All assigned nurse IDs across the roster, in group order.
    pub fn assigned_nurse_ids(&self) -> Vec<u32> {
        self.groups
            .iter()
            .flat_map(|g| g.nurses.iter().map(|n| n.id))
            .collect()
    }
}
