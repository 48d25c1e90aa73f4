//! Build scorers.

use std::fmt::Debug;

use loadforge_core::{BuildScore, Objectives, MAX_TIER, TIER_SIZE};

use crate::evaluation::BuildEvaluation;

/// Points per tier across all stats.
pub const TIER_POINTS: i64 = 100;
/// Flat reward for a prioritized stat that reaches its target.
pub const TARGET_MET_POINTS: i64 = 500;
/// Reward per tier above a met target's tier.
pub const OVERFLOW_TIER_POINTS: i64 = 50;
/// Penalty per point a prioritized stat falls short of its target.
pub const DEFICIT_POINTS: i64 = 10;
/// Penalty per wasted point.
pub const WASTE_POINTS: i64 = 2;
/// Reward for a prioritized stat at the maximum tier.
pub const MAX_TIER_POINTS: i64 = 200;

/// Ranks complete builds.
///
/// Implementations must be pure: the same evaluation and objectives always
/// yield the same score.
pub trait BuildScorer: Send + Sync + Debug {
    fn score(&self, evaluation: &BuildEvaluation, objectives: &Objectives) -> BuildScore;
}

/// The standard tier-based scorer.
///
/// ```text
/// score = total_tier * 100
///       + for each prioritized stat:
///           met:    500 + (tier - target / 10) * 50
///           missed: -(target - value) * 10
///       - wasted * 2
///       + 200 for each prioritized stat at tier 10
/// ```
///
/// # Examples
///
/// ```
/// use loadforge_core::{CharacterClass, Objectives, StatKind, Stats};
/// use loadforge_scoring::{BuildEvaluation, BuildScorer, TierScorer};
///
/// let objectives = Objectives::new(CharacterClass::Hunter).with_minimum(StatKind::Mobility, 40);
/// let eval = BuildEvaluation::of(Stats::new([50, 0, 0, 0, 0, 0]));
///
/// // 5 tiers, target met with one tier to spare, no waste
/// assert_eq!(TierScorer.score(&eval, &objectives).value(), 500 + 500 + 50);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TierScorer;

impl TierScorer {
    pub fn new() -> Self {
        Self
    }
}

impl BuildScorer for TierScorer {
    fn score(&self, evaluation: &BuildEvaluation, objectives: &Objectives) -> BuildScore {
        let mut score = i64::from(evaluation.total_tier) * TIER_POINTS;

        for (kind, target) in objectives.prioritized() {
            let value = evaluation.stats[kind];
            let tier = evaluation.tiers[kind];
            if value >= target {
                let target_tier = i64::from(target / TIER_SIZE);
                score += TARGET_MET_POINTS + (i64::from(tier) - target_tier) * OVERFLOW_TIER_POINTS;
            } else {
                score -= i64::from(target - value) * DEFICIT_POINTS;
            }
        }

        score -= i64::from(evaluation.wasted) * WASTE_POINTS;

        for (kind, _) in objectives.prioritized() {
            if evaluation.tiers[kind] >= MAX_TIER {
                score += MAX_TIER_POINTS;
            }
        }

        BuildScore::of(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadforge_core::{CharacterClass, StatKind, Stats};

    fn objectives(priority: [i64; 6]) -> Objectives {
        Objectives::new(CharacterClass::Titan)
            .with_priorities(&priority)
            .unwrap()
    }

    #[test]
    fn test_no_priorities_scores_tiers_and_waste() {
        let eval = BuildEvaluation::of(Stats::new([60, 10, 10, 10, 10, 10]));
        let score = TierScorer.score(&eval, &objectives([0; 6]));

        assert_eq!(score.value(), 11 * 100);
    }

    #[test]
    fn test_target_met_with_overflow() {
        let eval = BuildEvaluation::of(Stats::new([0, 0, 75, 0, 0, 0]));
        let score = TierScorer.score(&eval, &objectives([0, 0, 50, 0, 0, 0]));

        // 7 tiers, met, two tiers over, 5 wasted
        assert_eq!(score.value(), 700 + 500 + 2 * 50 - 5 * 2);
    }

    #[test]
    fn test_target_missed_is_linear_deficit() {
        let eval = BuildEvaluation::of(Stats::new([0, 0, 0, 0, 34, 0]));
        let score = TierScorer.score(&eval, &objectives([0, 0, 0, 0, 60, 0]));

        assert_eq!(score.value(), 300 - 26 * 10 - 4 * 2);
    }

    #[test]
    fn test_max_tier_bonus_only_for_prioritized_stats() {
        let eval = BuildEvaluation::of(Stats::new([100, 100, 0, 0, 0, 0]));
        let score = TierScorer.score(&eval, &objectives([100, 0, 0, 0, 0, 0]));

        assert_eq!(score.value(), 2000 + 500 + 200);
    }

    #[test]
    fn test_capped_tier_can_undershoot_target_tier() {
        // tier is capped at 10 while the target sits in "tier 12"
        let eval = BuildEvaluation::of(Stats::new([0, 125, 0, 0, 0, 0]));
        let score = TierScorer.score(&eval, &objectives([0, 120, 0, 0, 0, 0]));

        assert_eq!(score.value(), 1000 + 500 - 2 * 50 - 5 * 2 + 200);
    }

    #[test]
    fn test_prioritized_stats_scored_independently() {
        let eval = BuildEvaluation::of(Stats::new([40, 0, 0, 0, 0, 20]));
        let score = TierScorer.score(
            &eval,
            &Objectives::new(CharacterClass::Hunter)
                .with_minimum(StatKind::Mobility, 40)
                .with_minimum(StatKind::Strength, 30),
        );

        assert_eq!(score.value(), 600 + 500 - 100);
    }
}
