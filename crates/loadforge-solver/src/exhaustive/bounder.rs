//! Stat bounders for branch-and-bound pruning.
//!
//! A bounder decides whether a partial build can still reach every
//! prioritized target once the remaining slots are filled.

use std::fmt::Debug;

use loadforge_config::DEFAULT_SLOT_STAT_CEILING;
use loadforge_core::{Objectives, StatKind, Stats, DEFAULT_MASTERWORK_BONUS};

/// Estimates whether a partial build can still meet its targets.
pub trait StatBounder: Send + Sync + Debug {
    /// Returns true if the build with `totals` and `remaining` unassigned
    /// slots may still reach every prioritized target.
    ///
    /// Returning false prunes the branch.
    fn can_reach(&self, totals: &Stats, remaining: usize, objectives: &Objectives) -> bool;
}

/// A bounder that never prunes.
///
/// Useful for checking that pruning does not change results.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBounder;

impl StatBounder for NoBounder {
    fn can_reach(&self, _totals: &Stats, _remaining: usize, _objectives: &Objectives) -> bool {
        true
    }
}

/// Assumes every remaining slot contributes at most `slot_ceiling` to
/// each stat.
///
/// The bound for a prioritized stat is
///
/// ```text
/// totals[i] + remaining * slot_ceiling + (masterwork ? bonus * (remaining + 1) : 0)
/// ```
///
/// and the branch is pruned if any bound falls below its target.
///
/// This is not admissible: a piece may carry more than `slot_ceiling` in a
/// single stat, and the final build receives the masterwork bonus for all
/// five pieces. Either can prune a build that would have met its targets.
///
/// # Examples
///
/// ```
/// use loadforge_core::{CharacterClass, Objectives, StatKind, Stats};
/// use loadforge_solver::exhaustive::{CeilingBounder, StatBounder};
///
/// let bounder = CeilingBounder::new(30, 2);
/// let objectives = Objectives::new(CharacterClass::Titan).with_minimum(StatKind::Mobility, 100);
///
/// // 10 + 3 * 30 = 100 still reaches the target
/// assert!(bounder.can_reach(&Stats::new([10, 0, 0, 0, 0, 0]), 3, &objectives));
/// // 9 + 3 * 30 = 99 does not
/// assert!(!bounder.can_reach(&Stats::new([9, 0, 0, 0, 0, 0]), 3, &objectives));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CeilingBounder {
    slot_ceiling: u32,
    masterwork_bonus: u32,
}

impl CeilingBounder {
    pub fn new(slot_ceiling: u32, masterwork_bonus: u32) -> Self {
        Self {
            slot_ceiling,
            masterwork_bonus,
        }
    }

    pub fn slot_ceiling(&self) -> u32 {
        self.slot_ceiling
    }

    /// Optimistic final value of `kind`.
    pub fn bound(&self, totals: &Stats, kind: StatKind, remaining: usize, masterwork: bool) -> u64 {
        let remaining = remaining as u64;
        let mut bound = u64::from(totals[kind]) + remaining * u64::from(self.slot_ceiling);
        if masterwork {
            bound += u64::from(self.masterwork_bonus) * (remaining + 1);
        }
        bound
    }
}

impl Default for CeilingBounder {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_STAT_CEILING, DEFAULT_MASTERWORK_BONUS)
    }
}

impl StatBounder for CeilingBounder {
    fn can_reach(&self, totals: &Stats, remaining: usize, objectives: &Objectives) -> bool {
        let masterwork = objectives.assume_masterwork();
        objectives
            .prioritized()
            .all(|(kind, target)| self.bound(totals, kind, remaining, masterwork) >= u64::from(target))
    }
}
