//! Nurse model.
//!
//! Nurses are the assignable staff pool. Each nurse has a skill tier
//! and a shift window; both drive hard eligibility constraints during
//! model construction.

use serde::{Deserialize, Serialize};

/// A nurse available for assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    /// Unique nurse identifier.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Skill classification.
    pub tier: SkillTier,
    /// Shift window this nurse works.
    pub shift: Shift,
}

/// Skill tier classification.
///
/// Drives the pairing rule: a bay block's two early positions may
/// not both be filled by junior-tier, early-shift nurses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTier {
    /// Fully qualified nurse (e.g., RN).
    Senior,
    /// Nurse working under supervision (e.g., LPN).
    Junior,
}

/// Shift window classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Shift {
    /// Early shift; eligible for positions 0 and 1.
    Early,
    /// Late shift; eligible for position 2.
    Late,
}

impl Nurse {
    /// Creates a new nurse.
    pub fn new(id: u32, tier: SkillTier, shift: Shift) -> Self {
        Self {
            id,
            name: String::new(),
            tier,
            shift,
        }
    }

    /// Sets the nurse name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Whether this nurse is a junior on the early shift.
    ///
    /// These nurses are subject to the pairing restriction on the two
    /// early positions of a block.
    #[inline]
    pub fn is_junior_early(&self) -> bool {
        self.tier == SkillTier::Junior && self.shift == Shift::Early
    }
}
