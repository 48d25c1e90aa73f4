//! LoadForge Core - Core types and traits for loadout optimization
//!
//! This crate provides the fundamental abstractions for LoadForge:
//! - Domain types for gear pieces, slots, stats and objectives
//! - The build score type used to rank loadouts
//! - The catalog interface consumed from the definition service
//! - Error types shared by every LoadForge crate

pub mod catalog;
pub mod domain;
pub mod error;
pub mod score;

pub use catalog::{DefinitionSource, DefinitionTable, InvestmentStat, ItemCategory, RawEntry};
pub use domain::{
    ArmorSlot, BuildResult, CharacterClass, Objectives, ObjectivesSpec, Piece, Rarity, StatKind,
    Stats, Tiers, DEFAULT_MASTERWORK_BONUS, DEFAULT_MAX_EXOTICS, MAX_TIER, SLOT_COUNT, STAT_COUNT,
    TIER_SIZE,
};
pub use error::{LoadForgeError, Result};
pub use score::BuildScore;
