//! Score breakdown for explaining why a build ranks where it does.
//!
//! The breakdown follows [`TierScorer`](crate::TierScorer) term by term, so
//! its total always equals the scorer's result for the same input.

use std::fmt;

use loadforge_core::{BuildScore, Objectives, StatKind, MAX_TIER, TIER_SIZE};

use crate::evaluation::BuildEvaluation;
use crate::scorer::{
    DEFICIT_POINTS, MAX_TIER_POINTS, OVERFLOW_TIER_POINTS, TARGET_MET_POINTS, TIER_POINTS,
    WASTE_POINTS,
};

/// Whether a prioritized stat reached its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    /// Target reached; `overflow_tiers` may be negative when the tier cap
    /// sits below the target's tier.
    Met { overflow_tiers: i64 },
    /// Target missed by `deficit` points.
    Missed { deficit: u32 },
}

/// Contribution of one prioritized stat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatTerm {
    pub stat: StatKind,
    pub target: u32,
    pub value: u32,
    pub outcome: TargetOutcome,
    /// Points from meeting or missing the target.
    pub target_points: i64,
    /// Points from sitting at the maximum tier.
    pub max_tier_points: i64,
}

impl StatTerm {
    pub fn points(&self) -> i64 {
        self.target_points + self.max_tier_points
    }
}

/// Itemised score of one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub tier_points: i64,
    pub stat_terms: Vec<StatTerm>,
    /// Always zero or negative.
    pub waste_points: i64,
}

impl ScoreBreakdown {
    /// Breaks down the score of `evaluation` under `objectives`.
    pub fn of(evaluation: &BuildEvaluation, objectives: &Objectives) -> Self {
        let stat_terms = objectives
            .prioritized()
            .map(|(stat, target)| {
                let value = evaluation.stats[stat];
                let tier = evaluation.tiers[stat];
                let (outcome, target_points) = if value >= target {
                    let overflow_tiers = i64::from(tier) - i64::from(target / TIER_SIZE);
                    (
                        TargetOutcome::Met { overflow_tiers },
                        TARGET_MET_POINTS + overflow_tiers * OVERFLOW_TIER_POINTS,
                    )
                } else {
                    let deficit = target - value;
                    (
                        TargetOutcome::Missed { deficit },
                        -i64::from(deficit) * DEFICIT_POINTS,
                    )
                };
                let max_tier_points = if tier >= MAX_TIER { MAX_TIER_POINTS } else { 0 };
                StatTerm {
                    stat,
                    target,
                    value,
                    outcome,
                    target_points,
                    max_tier_points,
                }
            })
            .collect();

        Self {
            tier_points: i64::from(evaluation.total_tier) * TIER_POINTS,
            stat_terms,
            waste_points: -i64::from(evaluation.wasted) * WASTE_POINTS,
        }
    }

    pub fn total(&self) -> BuildScore {
        let stat_points: i64 = self.stat_terms.iter().map(StatTerm::points).sum();
        BuildScore::of(self.tier_points + stat_points + self.waste_points)
    }

    /// Number of prioritized stats that reached their target.
    pub fn targets_met(&self) -> usize {
        self.stat_terms
            .iter()
            .filter(|term| matches!(term.outcome, TargetOutcome::Met { .. }))
            .count()
    }
}

impl fmt::Display for ScoreBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "tiers: {:+}", self.tier_points)?;
        for term in &self.stat_terms {
            match term.outcome {
                TargetOutcome::Met { .. } => writeln!(
                    f,
                    "{} {}/{} met: {:+}",
                    term.stat,
                    term.value,
                    term.target,
                    term.points()
                )?,
                TargetOutcome::Missed { deficit } => writeln!(
                    f,
                    "{} {}/{} short by {}: {:+}",
                    term.stat,
                    term.value,
                    term.target,
                    deficit,
                    term.points()
                )?,
            }
        }
        writeln!(f, "waste: {:+}", self.waste_points)?;
        write!(f, "total: {}", self.total())
    }
}
