//! Search entry point that hides all internal wiring.

use loadforge_core::{BuildResult, DefinitionSource, Objectives, RawEntry, Result};
use loadforge_config::SearchConfig;
use loadforge_solver::LoadoutSolver;

/// Returns up to `max_results` builds for `objectives`, best first.
///
/// Runs with the default [`SearchConfig`] and never reads configuration
/// files; use [`LoadoutSolver::from_config_file`] for tuned settings.
///
/// # Errors
///
/// [`LoadForgeError::CatalogUnavailable`](crate::LoadForgeError::CatalogUnavailable)
/// when `definitions` is not loaded. A catalog that cannot fill every
/// slot is not an error; it yields an empty list.
pub fn search<D: DefinitionSource + ?Sized>(
    objectives: &Objectives,
    entries: &[RawEntry],
    definitions: &D,
    max_results: usize,
) -> Result<Vec<BuildResult>> {
    #[cfg(feature = "console")]
    crate::console::init();

    let solver = LoadoutSolver::new(SearchConfig::default().with_max_results(max_results));
    Ok(solver.solve(objectives, entries, definitions)?.into_results())
}
