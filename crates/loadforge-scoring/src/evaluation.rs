//! Derived figures of a complete build.

use loadforge_core::{Stats, Tiers, SLOT_COUNT};

/// Everything the scorer needs to know about a finished build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildEvaluation {
    /// Final stats, including any masterwork bonus.
    pub stats: Stats,
    pub tiers: Tiers,
    pub total_tier: u32,
    pub wasted: u32,
}

impl BuildEvaluation {
    /// Evaluates final stats that already include any bonus.
    pub fn of(stats: Stats) -> Self {
        let tiers = stats.tiers();
        Self {
            stats,
            tiers,
            total_tier: tiers.total(),
            wasted: stats.wasted(),
        }
    }

    /// Evaluates summed piece stats, adding `masterwork_bonus` per piece
    /// to every stat when `assume_masterwork` is set.
    ///
    /// The bonus saturates at `u32::MAX` like every other stat sum.
    ///
    /// ```
    /// use loadforge_core::Stats;
    /// use loadforge_scoring::BuildEvaluation;
    ///
    /// let eval = BuildEvaluation::from_piece_totals(Stats::new([50, 0, 0, 0, 0, 0]), true, 2);
    /// assert_eq!(eval.stats.values(), &[60, 10, 10, 10, 10, 10]);
    /// assert_eq!(eval.total_tier, 11);
    /// ```
    pub fn from_piece_totals(totals: Stats, assume_masterwork: bool, masterwork_bonus: u32) -> Self {
        if assume_masterwork {
            Self::of(totals + Stats::splat(masterwork_bonus.saturating_mul(SLOT_COUNT as u32)))
        } else {
            Self::of(totals)
        }
    }
}
