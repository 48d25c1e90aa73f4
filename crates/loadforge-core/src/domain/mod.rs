//! Domain model for loadout optimization.
//!
//! A loadout is one [`Piece`] per [`ArmorSlot`]. Every piece carries a
//! fixed six-entry [`Stats`] vector; [`Objectives`] describe what the
//! caller wants, and a [`BuildResult`] is one ranked outcome.

mod build;
mod objectives;
mod piece;
mod slot;
mod stats;

#[cfg(test)]
mod tests;

pub use build::BuildResult;
pub use objectives::{Objectives, ObjectivesSpec, DEFAULT_MAX_EXOTICS};
pub use piece::{CharacterClass, Piece, Rarity};
pub use slot::{ArmorSlot, SLOT_COUNT};
pub use stats::{StatKind, Stats, Tiers, MAX_TIER, STAT_COUNT, TIER_SIZE};

/// Flat bonus a masterworked piece adds to every stat.
pub const DEFAULT_MASTERWORK_BONUS: u32 = 2;
