//! Bay and bay block models.
//!
//! A bay is an individual unit of scheduled work: it carries a
//! duration class, a surgery count (workload weight), and a label
//! that must be unique within its block. A bay block groups exactly
//! six bays into three fixed pairs, one pair per nurse position.

use serde::{Deserialize, Serialize};

use super::Shift;

/// Number of bays in a well-formed block.
pub const BAYS_PER_BLOCK: usize = 6;

/// Number of nurse positions per block.
pub const POSITIONS_PER_BLOCK: usize = 3;

/// The late-shift position index.
pub const LATE_POSITION: usize = 2;

/// Fixed bay-pair mapping per position.
///
/// Position 0 covers bays 0 and 1, position 1 covers bays 3 and 4,
/// and the late position covers bays 2 and 5.
pub const POSITION_PAIRS: [(usize, usize); POSITIONS_PER_BLOCK] = [(0, 1), (3, 4), (2, 5)];

/// Shift required to fill a position.
#[inline]
pub fn required_shift(position: usize) -> Shift {
    if position == LATE_POSITION {
        Shift::Late
    } else {
        Shift::Early
    }
}

/// A single bay within a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    /// Operating-room label; must be unique within the owning block.
    pub label: String,
    /// Procedure duration class.
    pub duration: DurationClass,
    /// Number of surgeries scheduled in this bay (workload weight).
    pub surgeries: i64,
    /// Specialty or service line (informational).
    pub specialty: Option<String>,
}

/// Procedure duration classification.
///
/// Each position's bay pair must contain one of each class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DurationClass {
    /// Short procedures (around 30 minutes).
    Short,
    /// Long procedures (45-60 minutes).
    Long,
}

/// A block of six bays staffed by three nurse positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BayBlock {
    /// Unique block identifier.
    pub id: u32,
    /// The block's bays, in pair-mapping order.
    pub bays: Vec<Bay>,
}

impl Bay {
    /// Creates a new bay.
    pub fn new(label: impl Into<String>, duration: DurationClass, surgeries: i64) -> Self {
        Self {
            label: label.into(),
            duration,
            surgeries,
            specialty: None,
        }
    }

    /// Sets the specialty.
    pub fn with_specialty(mut self, specialty: impl Into<String>) -> Self {
        self.specialty = Some(specialty.into());
        self
    }
}

impl BayBlock {
    /// Creates an empty block.
    pub fn new(id: u32) -> Self {
        Self {
            id,
            bays: Vec::new(),
        }
    }

    /// Adds a bay.
    pub fn with_bay(mut self, bay: Bay) -> Self {
        self.bays.push(bay);
        self
    }

    /// Combined surgery count of a position's bay pair.
    ///
    /// # Panics
    /// Panics if the block is malformed or `position` is out of
    /// range; callers must validate first.
    pub fn pair_surgeries(&self, position: usize) -> i64 {
        let (a, b) = POSITION_PAIRS[position];
        self.bays[a].surgeries + self.bays[b].surgeries
    }

    /// Duration classes of a position's bay pair.
    ///
    /// # Panics
    /// Panics if the block is malformed or `position` is out of
    /// range; callers must validate first.
    pub fn pair_durations(&self, position: usize) -> (DurationClass, DurationClass) {
        let (a, b) = POSITION_PAIRS[position];
        (self.bays[a].duration, self.bays[b].duration)
    }
}
