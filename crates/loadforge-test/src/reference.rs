//! Unpruned brute-force search.
//!
//! Enumerates every combination in canonical slot order and catalog order,
//! so its output is the ground truth the pruned search is checked against.

use loadforge_core::{ArmorSlot, BuildResult, Objectives, Piece, Stats};
use loadforge_scoring::{BuildEvaluation, BuildScorer, TierScorer};

/// Returns the best `k` builds from `pieces`, score-descending, earliest
/// found first among equal scores.
///
/// Pieces that do not fit the target class are ignored. Builds over the
/// exotic cap, under the minimum tier or short of a prioritized target
/// are skipped, which is the set a pruned search can return. Without
/// masterwork and with no piece stat above the pruning ceiling, the
/// pruned search must return exactly this list.
pub fn brute_force_top_k(
    pieces: &[Piece],
    objectives: &Objectives,
    masterwork_bonus: u32,
    k: usize,
) -> Vec<BuildResult> {
    let by_slot: Vec<Vec<&Piece>> = ArmorSlot::ALL
        .iter()
        .map(|&slot| {
            pieces
                .iter()
                .filter(|p| p.slot == slot && p.class.fits(objectives.target_class()))
                .collect()
        })
        .collect();

    let mut all = Vec::new();
    for head in &by_slot[0] {
        for arms in &by_slot[1] {
            for chest in &by_slot[2] {
                for legs in &by_slot[3] {
                    for class_item in &by_slot[4] {
                        let build = [*head, *arms, *chest, *legs, *class_item];
                        if let Some(result) = evaluate(build, objectives, masterwork_bonus) {
                            all.push(result);
                        }
                    }
                }
            }
        }
    }

    all.sort_by(|a, b| b.score.cmp(&a.score));
    all.truncate(k);
    all
}

fn evaluate(
    build: [&Piece; 5],
    objectives: &Objectives,
    masterwork_bonus: u32,
) -> Option<BuildResult> {
    let exotics = build.iter().filter(|p| p.is_exotic()).count() as u32;
    if exotics > objectives.max_exotics() {
        return None;
    }

    let totals = build
        .iter()
        .fold(Stats::ZERO, |acc, piece| acc + piece.stats);
    let evaluation = BuildEvaluation::from_piece_totals(
        totals,
        objectives.assume_masterwork(),
        masterwork_bonus,
    );
    if objectives
        .prioritized()
        .any(|(kind, target)| evaluation.stats[kind] < target)
    {
        return None;
    }
    if objectives
        .minimum_tier()
        .is_some_and(|minimum| evaluation.total_tier < minimum)
    {
        return None;
    }

    Some(BuildResult {
        pieces: build.map(Piece::clone),
        stats: evaluation.stats,
        tiers: evaluation.tiers,
        total_tier: evaluation.total_tier,
        wasted: evaluation.wasted,
        score: TierScorer.score(&evaluation, objectives),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use loadforge_core::CharacterClass;

    #[test]
    fn test_enumerates_every_combination() {
        let mut builder = CatalogBuilder::new();
        for slot in ArmorSlot::ALL {
            builder = builder
                .legendary(&format!("{slot}-a"), slot, [10, 0, 0, 0, 0, 0])
                .legendary(&format!("{slot}-b"), slot, [0, 10, 0, 0, 0, 0]);
        }
        let catalog = builder.build();
        let objectives = Objectives::new(CharacterClass::Titan);

        let results = brute_force_top_k(&catalog.pieces, &objectives, 2, 100);
        assert_eq!(results.len(), 32);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_respects_exotic_cap() {
        let mut builder = CatalogBuilder::new();
        for slot in ArmorSlot::ALL {
            builder = builder.exotic(&format!("{slot}-x"), slot, [10, 0, 0, 0, 0, 0]);
        }
        let catalog = builder.build();
        let objectives = Objectives::new(CharacterClass::Titan);

        assert!(brute_force_top_k(&catalog.pieces, &objectives, 2, 10).is_empty());
    }

    #[test]
    fn test_skips_missed_targets() {
        let mut builder = CatalogBuilder::new();
        for slot in ArmorSlot::ALL {
            builder = builder
                .legendary(&format!("{slot}-a"), slot, [10, 0, 0, 0, 0, 0])
                .legendary(&format!("{slot}-b"), slot, [0, 10, 0, 0, 0, 0]);
        }
        let catalog = builder.build();
        let objectives = Objectives::new(CharacterClass::Titan)
            .with_minimum(loadforge_core::StatKind::Mobility, 40);

        // four or five Mobility pieces out of five
        let results = brute_force_top_k(&catalog.pieces, &objectives, 2, 100);
        assert_eq!(results.len(), 6);
    }
}
