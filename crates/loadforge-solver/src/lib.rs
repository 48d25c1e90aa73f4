//! LoadForge Solver Engine
//!
//! This crate provides the loadout search:
//! - Candidate normalization from raw catalog entries
//! - Slot grouping
//! - Branch-and-bound exhaustive search, sequential or parallel
//! - Bounded top-K result keeping
//! - Termination conditions and search statistics
//! - `LoadoutSolver`, which wires everything to a `SearchConfig`

pub mod exhaustive;
pub mod group;
pub mod keeper;
pub mod normalize;
pub mod solver;
pub mod statistics;
pub mod termination;

pub use exhaustive::{CeilingBounder, ExhaustiveSearch, NoBounder, SearchNode, StatBounder};
pub use group::SlotGroups;
pub use keeper::ResultKeeper;
pub use normalize::{normalize, normalize_entry, Rejection};
pub use solver::{LoadoutSolver, SearchOutcome};
pub use statistics::{SearchCounters, SearchStatistics};
pub use termination::{
    ExternalTermination, NeverTermination, NodeCountTermination, OrTermination, Termination,
    TimeTermination,
};
