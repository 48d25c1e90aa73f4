//! Build scoring for LoadForge.
//!
//! A complete loadout is reduced to a [`BuildEvaluation`] (final stats,
//! tiers, total tier, wasted points) and ranked by a [`BuildScorer`]. The
//! default [`TierScorer`] rewards meeting stat targets and penalizes
//! points that do not complete a tier. [`ScoreBreakdown`] explains a score
//! term by term.

pub mod analysis;
pub mod evaluation;
pub mod scorer;

pub use analysis::{ScoreBreakdown, StatTerm, TargetOutcome};
pub use evaluation::BuildEvaluation;
pub use scorer::{BuildScorer, TierScorer};
