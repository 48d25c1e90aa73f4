//! Exhaustive branch-and-bound search.
//!
//! Assigns one piece per slot in canonical slot order, visiting candidates
//! in catalog order. Each partial build is checked against the exotic cap
//! and the stat bounder before it is expanded; every complete build is
//! scored and offered to a [`ResultKeeper`].
//!
//! # Algorithm
//!
//! 1. Start from the empty build (the root node)
//! 2. For the next slot, try each candidate:
//!    - skip it if it would exceed the exotic cap
//!    - prune it if the bounder says a target is out of reach
//!    - otherwise recurse into the child node
//! 3. When all five slots are filled, evaluate and score the build
//! 4. Offer it to the keeper unless the keeper is full of better builds
//!
//! The optional parallel mode fans the first slot out across the rayon
//! thread pool, giving every branch its own keeper, and merges the keepers
//! in branch order.

mod bounder;
mod node;

#[cfg(test)]
mod tests;

use std::fmt;
use std::ops::ControlFlow;

use loadforge_core::{ArmorSlot, BuildResult, Objectives, Piece, DEFAULT_MASTERWORK_BONUS};
use loadforge_scoring::{BuildEvaluation, BuildScorer};
use rayon::prelude::*;
use tracing::trace;

use crate::group::SlotGroups;
use crate::keeper::ResultKeeper;
use crate::statistics::SearchCounters;
use crate::termination::{NeverTermination, Termination};

pub use bounder::{CeilingBounder, NoBounder, StatBounder};
pub use node::SearchNode;

/// Branch-and-bound search over one set of slot groups.
///
/// # Type Parameters
/// * `Sc` - The build scorer
/// * `B` - The stat bounder used for pruning
/// * `T` - The termination condition
///
/// # Example
///
/// ```
/// use loadforge_core::{ArmorSlot, CharacterClass, Objectives, Piece, Rarity, Stats};
/// use loadforge_scoring::TierScorer;
/// use loadforge_solver::exhaustive::ExhaustiveSearch;
/// use loadforge_solver::{ResultKeeper, SearchCounters, SlotGroups};
///
/// let groups = SlotGroups::from_pieces(ArmorSlot::ALL.map(|slot| {
///     Piece::new(slot.to_string(), 0, slot, Rarity::Legendary, CharacterClass::Any, Stats::splat(10))
/// }));
/// let objectives = Objectives::new(CharacterClass::Hunter);
/// let counters = SearchCounters::new();
///
/// let search = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters);
/// let mut keeper = ResultKeeper::new(10);
/// search.search(&mut keeper);
///
/// assert_eq!(keeper.len(), 1);
/// assert_eq!(keeper.results()[0].total_tier, 30);
/// ```
pub struct ExhaustiveSearch<'a, Sc, B = CeilingBounder, T = NeverTermination> {
    groups: &'a SlotGroups,
    objectives: &'a Objectives,
    scorer: &'a Sc,
    counters: &'a SearchCounters,
    bounder: B,
    termination: T,
    masterwork_bonus: u32,
}

impl<Sc, B, T> fmt::Debug for ExhaustiveSearch<'_, Sc, B, T>
where
    B: fmt::Debug,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExhaustiveSearch")
            .field("slot_counts", &self.groups.counts())
            .field("bounder", &self.bounder)
            .field("termination", &self.termination)
            .field("masterwork_bonus", &self.masterwork_bonus)
            .finish()
    }
}

impl<'a, Sc: BuildScorer> ExhaustiveSearch<'a, Sc> {
    /// Creates a search with the default bounder and no termination.
    pub fn new(
        groups: &'a SlotGroups,
        objectives: &'a Objectives,
        scorer: &'a Sc,
        counters: &'a SearchCounters,
    ) -> Self {
        Self {
            groups,
            objectives,
            scorer,
            counters,
            bounder: CeilingBounder::default(),
            termination: NeverTermination,
            masterwork_bonus: DEFAULT_MASTERWORK_BONUS,
        }
    }
}

impl<'a, Sc, B, T> ExhaustiveSearch<'a, Sc, B, T>
where
    Sc: BuildScorer,
    B: StatBounder,
    T: Termination,
{
    pub fn with_bounder<B2: StatBounder>(self, bounder: B2) -> ExhaustiveSearch<'a, Sc, B2, T> {
        ExhaustiveSearch {
            groups: self.groups,
            objectives: self.objectives,
            scorer: self.scorer,
            counters: self.counters,
            bounder,
            termination: self.termination,
            masterwork_bonus: self.masterwork_bonus,
        }
    }

    pub fn with_termination<T2: Termination>(
        self,
        termination: T2,
    ) -> ExhaustiveSearch<'a, Sc, B, T2> {
        ExhaustiveSearch {
            groups: self.groups,
            objectives: self.objectives,
            scorer: self.scorer,
            counters: self.counters,
            bounder: self.bounder,
            termination,
            masterwork_bonus: self.masterwork_bonus,
        }
    }

    /// Sets the per-piece, per-stat bonus applied when the objectives
    /// assume masterworked gear.
    pub fn with_masterwork_bonus(mut self, bonus: u32) -> Self {
        self.masterwork_bonus = bonus;
        self
    }

    /// Runs the search sequentially, filling `keeper`.
    ///
    /// Returns `ControlFlow::Break` if the termination condition stopped
    /// the search early.
    pub fn search(&self, keeper: &mut ResultKeeper) -> ControlFlow<()> {
        self.explore(&SearchNode::root(), keeper)
    }

    /// Runs the search with the first slot's candidates spread across the
    /// rayon thread pool.
    ///
    /// The merged keeper holds the same builds, in the same order, as a
    /// sequential run unless termination stops the search part way.
    pub fn search_parallel(&self, capacity: usize) -> ResultKeeper {
        let root = SearchNode::root();
        if self.should_stop() {
            return ResultKeeper::new(capacity);
        }
        self.counters.record_node();

        let first = self.groups.get(ArmorSlot::Head);
        let keepers: Vec<ResultKeeper> = first
            .par_iter()
            .enumerate()
            .map(|(index, piece)| {
                let mut keeper = ResultKeeper::new(capacity);
                if let Some(child) = self.step(&root, index, piece) {
                    let _ = self.explore(&child, &mut keeper);
                }
                keeper
            })
            .collect();

        ResultKeeper::merge(keepers, capacity)
    }

    fn should_stop(&self) -> bool {
        if self.counters.is_terminated() {
            return true;
        }
        if self.termination.is_terminated(self.counters) {
            self.counters.mark_terminated();
            return true;
        }
        false
    }

    fn explore(&self, node: &SearchNode, keeper: &mut ResultKeeper) -> ControlFlow<()> {
        if self.should_stop() {
            return ControlFlow::Break(());
        }
        self.counters.record_node();

        let Some(slot) = node.next_slot() else {
            self.settle(node, keeper);
            return ControlFlow::Continue(());
        };

        for (index, piece) in self.groups.get(slot).iter().enumerate() {
            if let Some(child) = self.step(node, index, piece) {
                self.explore(&child, keeper)?;
            }
        }
        ControlFlow::Continue(())
    }

    /// Checks a candidate against the exotic cap and the bounder.
    fn step(&self, node: &SearchNode, index: usize, piece: &Piece) -> Option<SearchNode> {
        if piece.is_exotic() && node.exotic_count() >= self.objectives.max_exotics() {
            self.counters.record_exotic_rejection();
            return None;
        }

        let child = node.child(index, piece);
        let remaining = node.remaining_after_next();
        if !self
            .bounder
            .can_reach(child.totals(), remaining, self.objectives)
        {
            self.counters.record_prune();
            trace!(
                event = "branch_pruned",
                slot = %piece.slot,
                candidate = %piece.id,
                remaining = remaining,
            );
            return None;
        }

        Some(child)
    }

    /// Scores a complete build and offers it to the keeper.
    fn settle(&self, node: &SearchNode, keeper: &mut ResultKeeper) {
        self.counters.record_evaluation();

        let evaluation = BuildEvaluation::from_piece_totals(
            *node.totals(),
            self.objectives.assume_masterwork(),
            self.masterwork_bonus,
        );
        if let Some(minimum_tier) = self.objectives.minimum_tier() {
            if evaluation.total_tier < minimum_tier {
                return;
            }
        }

        let score = self.scorer.score(&evaluation, self.objectives);
        if !keeper.would_accept(score) {
            return;
        }

        let choices = node.choices();
        let pieces = ArmorSlot::ALL.map(|slot| self.groups.get(slot)[choices[slot.index()]].clone());
        let accepted = keeper.offer(BuildResult {
            pieces,
            stats: evaluation.stats,
            tiers: evaluation.tiers,
            total_tier: evaluation.total_tier,
            wasted: evaluation.wasted,
            score,
        });
        if accepted {
            self.counters.record_accepted();
        }
    }
}
