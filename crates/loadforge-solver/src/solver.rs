//! Search wiring: normalization, grouping, termination and the
//! exhaustive search, driven by a [`SearchConfig`].

use std::path::Path;
use std::sync::atomic::AtomicBool;

use loadforge_config::SearchConfig;
use loadforge_core::{BuildResult, DefinitionSource, Objectives, Piece, RawEntry, Result};
use loadforge_scoring::{BuildScorer, TierScorer};
use tracing::{debug, info};

use crate::exhaustive::{CeilingBounder, ExhaustiveSearch};
use crate::group::SlotGroups;
use crate::keeper::ResultKeeper;
use crate::normalize::normalize;
use crate::statistics::{SearchCounters, SearchStatistics};
use crate::termination::{
    ExternalTermination, NodeCountTermination, OrTermination, TimeTermination,
};

/// Result of one search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best builds, score-descending.
    pub results: Vec<BuildResult>,
    pub statistics: SearchStatistics,
    /// True if a termination condition stopped the search before the
    /// whole tree was explored.
    pub terminated_early: bool,
}

impl SearchOutcome {
    pub fn best(&self) -> Option<&BuildResult> {
        self.results.first()
    }

    pub fn into_results(self) -> Vec<BuildResult> {
        self.results
    }
}

/// Finds the best loadouts for a set of objectives.
///
/// # Example
///
/// ```
/// use loadforge_config::SearchConfig;
/// use loadforge_core::{CharacterClass, Objectives, StatKind};
/// use loadforge_solver::LoadoutSolver;
/// use loadforge_test::scenario_catalog;
///
/// let catalog = scenario_catalog();
/// let objectives = Objectives::new(CharacterClass::Titan).with_minimum(StatKind::Mobility, 40);
///
/// let solver = LoadoutSolver::new(SearchConfig::default().with_max_results(5));
/// let outcome = solver.solve(&objectives, &catalog.entries, &catalog.definitions).unwrap();
///
/// assert_eq!(outcome.results.len(), 1);
/// assert_eq!(outcome.results[0].stats[StatKind::Mobility], 50);
/// assert!(!outcome.terminated_early);
/// ```
#[derive(Debug, Clone)]
pub struct LoadoutSolver<Sc = TierScorer> {
    config: SearchConfig,
    scorer: Sc,
}

impl LoadoutSolver {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            scorer: TierScorer,
        }
    }

    /// Creates a solver from a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`LoadForgeError::Config`](loadforge_core::LoadForgeError::Config)
    /// if the file cannot be read or is invalid.
    pub fn from_config_file(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(SearchConfig::load(path)?))
    }
}

impl Default for LoadoutSolver {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<Sc: BuildScorer> LoadoutSolver<Sc> {
    /// Replaces the scorer.
    pub fn with_scorer<Sc2: BuildScorer>(self, scorer: Sc2) -> LoadoutSolver<Sc2> {
        LoadoutSolver {
            config: self.config,
            scorer,
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SearchConfig {
        &mut self.config
    }

    /// Searches `entries` for the best builds.
    ///
    /// # Errors
    ///
    /// Fails before searching if the definitions are not loaded or the
    /// configuration is invalid. Finding no build is not an error.
    pub fn solve<D: DefinitionSource + ?Sized>(
        &self,
        objectives: &Objectives,
        entries: &[RawEntry],
        definitions: &D,
    ) -> Result<SearchOutcome> {
        self.solve_with_flag(objectives, entries, definitions, None)
    }

    /// Like [`solve`](Self::solve), stopping early once `terminate` is set.
    pub fn solve_with_flag<D: DefinitionSource + ?Sized>(
        &self,
        objectives: &Objectives,
        entries: &[RawEntry],
        definitions: &D,
        terminate: Option<&AtomicBool>,
    ) -> Result<SearchOutcome> {
        self.config.validate()?;
        let pieces = normalize(entries, definitions, objectives.target_class())?;
        Ok(self.solve_pieces(objectives, pieces, terminate))
    }

    /// Searches already-normalized pieces.
    pub fn solve_pieces(
        &self,
        objectives: &Objectives,
        pieces: Vec<Piece>,
        terminate: Option<&AtomicBool>,
    ) -> SearchOutcome {
        let counters = SearchCounters::new();
        let groups = SlotGroups::from_pieces(pieces);
        let max_results = self.config.max_results;

        info!(
            event = "search_start",
            target_class = %objectives.target_class(),
            slot_counts = ?groups.counts(),
            combinations = %groups.combination_count(),
            max_results = max_results,
            parallel = self.config.parallel,
        );

        if let Some(slot) = groups.first_empty() {
            debug!(event = "search_infeasible", empty_slot = %slot);
            return self.finish(Vec::new(), &counters);
        }

        let termination = OrTermination((
            self.config.node_limit().map(NodeCountTermination::new),
            self.config.time_limit().map(TimeTermination::new),
            terminate.map(ExternalTermination::new),
        ));
        let search = ExhaustiveSearch::new(&groups, objectives, &self.scorer, &counters)
            .with_bounder(CeilingBounder::new(
                self.config.slot_stat_ceiling,
                self.config.masterwork_bonus,
            ))
            .with_termination(termination)
            .with_masterwork_bonus(self.config.masterwork_bonus);

        let keeper = if self.config.parallel {
            search.search_parallel(max_results)
        } else {
            let mut keeper = ResultKeeper::new(max_results);
            let _ = search.search(&mut keeper);
            keeper
        };

        self.finish(keeper.into_results(), &counters)
    }

    fn finish(&self, results: Vec<BuildResult>, counters: &SearchCounters) -> SearchOutcome {
        let statistics = counters.snapshot();
        let terminated_early = counters.is_terminated();

        if terminated_early {
            debug!(
                event = "search_terminated",
                nodes_expanded = statistics.nodes_expanded,
                elapsed_ms = statistics.elapsed.as_millis() as u64,
            );
        }

        let best_score = results
            .first()
            .map_or_else(|| "none".to_string(), |r| r.score.to_string());
        info!(
            event = "search_end",
            results = results.len(),
            best_score = %best_score,
            nodes_expanded = statistics.nodes_expanded,
            builds_evaluated = statistics.builds_evaluated,
            branches_pruned = statistics.branches_pruned,
            duration_ms = statistics.elapsed.as_millis() as u64,
            terminated_early = terminated_early,
        );

        SearchOutcome {
            results,
            statistics,
            terminated_early,
        }
    }
}
