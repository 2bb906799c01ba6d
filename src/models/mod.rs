//! Assignment domain models.
//!
//! Core data types for the nurse-to-bay assignment problem and its
//! solution. Inputs (`Nurse`, `Bay`, `BayBlock`) are constructed
//! fresh per request; the `Roster` output is produced once per solve
//! and never persisted.
//!
//! # Domain Mapping
//!
//! | bay-roster | Hospital |
//! |------------|----------|
//! | Nurse | PCC nurse (RN/LPN, early/late shift) |
//! | Bay | Operating-room bay with scheduled surgeries |
//! | BayBlock | Group of 6 bays staffed by 3 nurses |
//! | Roster | The day's labeled assignment grid |

mod bay;
mod nurse;
mod roster;

pub use bay::{
    required_shift, Bay, BayBlock, DurationClass, BAYS_PER_BLOCK, LATE_POSITION,
    POSITIONS_PER_BLOCK, POSITION_PAIRS,
};
pub use nurse::{Nurse, Shift, SkillTier};
pub use roster::{group_label, GroupAssignment, Roster};
