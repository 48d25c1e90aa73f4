//! LoadForge - A Loadout Optimizer in Rust
//!
//! Hand it a gear catalog and your stat targets, get back the best
//! five-piece builds.
//!
//! # Example
//!
//! ```rust
//! use loadforge::prelude::*;
//!
//! let objectives = Objectives::new(CharacterClass::Titan)
//!     .with_minimum(StatKind::Resilience, 100)
//!     .with_masterwork(true);
//! assert_eq!(objectives.max_exotics(), 1);
//!
//! let table = DefinitionTable::new();
//! let err = loadforge::search(&objectives, &[], &table, 10).unwrap_err();
//! assert!(matches!(err, LoadForgeError::CatalogUnavailable(_)));
//! ```

// Domain types
pub use loadforge_core::{
    ArmorSlot, BuildResult, BuildScore, CharacterClass, DefinitionSource, DefinitionTable,
    InvestmentStat, ItemCategory, LoadForgeError, Objectives, ObjectivesSpec, Piece, Rarity,
    RawEntry, Result, StatKind, Stats, Tiers,
};

// Scoring
pub use loadforge_scoring::{BuildEvaluation, BuildScorer, ScoreBreakdown, TierScorer};

// Configuration
pub use loadforge_config::{ConfigError, SearchConfig, TerminationConfig};

// Solver
pub use loadforge_solver::{LoadoutSolver, SearchOutcome, SearchStatistics};

#[cfg(feature = "console")]
pub mod console;

mod search;
pub use search::search;

pub mod prelude {
    pub use super::search;
    pub use super::{
        ArmorSlot, BuildResult, CharacterClass, DefinitionSource, DefinitionTable,
        LoadForgeError, Objectives, RawEntry, StatKind, Stats,
    };
    pub use super::{LoadoutSolver, SearchConfig, SearchOutcome};
}
