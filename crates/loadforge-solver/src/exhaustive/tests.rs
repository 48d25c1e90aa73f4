//! Tests for the exhaustive search.

use super::*;
use crate::termination::NodeCountTermination;
use loadforge_core::{CharacterClass, StatKind, Stats};
use loadforge_scoring::TierScorer;
use loadforge_test::{brute_force_top_k, random_catalog, scenario_catalog, CatalogBuilder};

fn run(groups: &SlotGroups, objectives: &Objectives, k: usize) -> Vec<BuildResult> {
    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(k);
    let flow = ExhaustiveSearch::new(groups, objectives, &TierScorer, &counters).search(&mut keeper);
    assert!(flow.is_continue());
    keeper.into_results()
}

fn ids(results: &[BuildResult]) -> Vec<[String; 5]> {
    results
        .iter()
        .map(|r| r.pieces.clone().map(|p| p.id))
        .collect()
}

#[test]
fn test_node_root_and_child() {
    let root = SearchNode::root();
    assert_eq!(root.depth(), 0);
    assert_eq!(root.next_slot(), Some(ArmorSlot::Head));
    assert_eq!(root.remaining_after_next(), 4);

    let catalog = CatalogBuilder::new()
        .exotic("x", ArmorSlot::Head, [5, 0, 0, 0, 0, 1])
        .build();
    let child = root.child(3, &catalog.pieces[0]);

    assert_eq!(child.depth(), 1);
    assert_eq!(child.choices()[0], 3);
    assert_eq!(child.exotic_count(), 1);
    assert_eq!(child.totals(), &Stats::new([5, 0, 0, 0, 0, 1]));
    // value semantics: the parent is untouched
    assert_eq!(root.exotic_count(), 0);
}

#[test]
fn test_ceiling_bounder_masterwork_term() {
    let bounder = CeilingBounder::new(30, 2);
    let totals = Stats::ZERO;

    // last slot: 0 remaining, masterwork adds one bonus
    assert_eq!(bounder.bound(&totals, StatKind::Mobility, 0, true), 2);
    assert_eq!(bounder.bound(&totals, StatKind::Mobility, 4, true), 120 + 10);
    assert_eq!(bounder.bound(&totals, StatKind::Mobility, 4, false), 120);
}

#[test]
fn test_ceiling_bounder_ignores_unprioritized() {
    let objectives = Objectives::new(CharacterClass::Titan);
    assert!(CeilingBounder::default().can_reach(&Stats::ZERO, 0, &objectives));
}

#[test]
fn test_scenario_priority_met() {
    let catalog = scenario_catalog();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    let objectives = Objectives::new(CharacterClass::Titan).with_minimum(StatKind::Mobility, 40);

    let results = run(&groups, &objectives, 10);

    assert_eq!(results.len(), 1);
    let best = &results[0];
    assert_eq!(best.stats[StatKind::Mobility], 50);
    assert_eq!(best.tiers[StatKind::Mobility], 5);
    assert_eq!(best.total_tier, 5);
    for (piece, slot) in best.pieces.iter().zip(ArmorSlot::ALL) {
        assert_eq!(piece.slot, slot);
    }
}

#[test]
fn test_scenario_masterwork() {
    let catalog = scenario_catalog();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    let objectives = Objectives::new(CharacterClass::Warlock).with_masterwork(true);

    let results = run(&groups, &objectives, 10);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].stats[StatKind::Mobility], 60);
    assert_eq!(results[0].stats[StatKind::Resilience], 10);
}

#[test]
fn test_exotic_cap() {
    let catalog = CatalogBuilder::new()
        .exotic("head-x", ArmorSlot::Head, [30, 0, 0, 0, 0, 0])
        .legendary("head-l", ArmorSlot::Head, [2, 0, 0, 0, 0, 0])
        .exotic("arms-x", ArmorSlot::Arms, [30, 0, 0, 0, 0, 0])
        .legendary("arms-l", ArmorSlot::Arms, [2, 0, 0, 0, 0, 0])
        .legendary("chest", ArmorSlot::Chest, [0; 6])
        .legendary("legs", ArmorSlot::Legs, [0; 6])
        .legendary("class", ArmorSlot::ClassItem, [0; 6])
        .build();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    let objectives = Objectives::new(CharacterClass::Hunter);

    let results = run(&groups, &objectives, 10);

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.exotic_count() <= 1));

    let none = run(&groups, &objectives.clone().with_max_exotics(0), 10);
    assert_eq!(none.len(), 1);
    assert_eq!(none[0].exotic_count(), 0);

    let both = run(&groups, &objectives.with_max_exotics(2), 10);
    assert_eq!(both.len(), 4);
    assert_eq!(both[0].stats[StatKind::Mobility], 60);
}

#[test]
fn test_only_exotic_with_zero_cap_is_empty() {
    let mut builder = CatalogBuilder::new();
    for slot in ArmorSlot::ALL {
        builder = if slot == ArmorSlot::Chest {
            builder.exotic("chest-x", slot, [10; 6])
        } else {
            builder.legendary(&format!("{slot}"), slot, [10; 6])
        };
    }
    let groups = SlotGroups::from_pieces(builder.build().pieces);
    let objectives = Objectives::new(CharacterClass::Titan).with_max_exotics(0);

    assert!(run(&groups, &objectives, 10).is_empty());
}

#[test]
fn test_unreachable_targets_prune_everything() {
    let catalog = scenario_catalog();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    // 20 + 4 * 30 = 140 < 150 at the first slot
    let objectives = Objectives::new(CharacterClass::Titan).with_minimum(StatKind::Mobility, 150);

    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(10);
    let _ = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters).search(&mut keeper);

    assert!(keeper.is_empty());
    let stats = counters.snapshot();
    assert_eq!(stats.nodes_expanded, 1);
    assert_eq!(stats.branches_pruned, 1);
    assert_eq!(stats.builds_evaluated, 0);
}

#[test]
fn test_ceiling_prunes_reachable_outlier() {
    // a 40-point piece exceeds the assumed ceiling of 30
    let catalog = CatalogBuilder::new()
        .legendary("head", ArmorSlot::Head, [0; 6])
        .legendary("arms", ArmorSlot::Arms, [0; 6])
        .legendary("chest", ArmorSlot::Chest, [0; 6])
        .legendary("legs", ArmorSlot::Legs, [0; 6])
        .legendary("class", ArmorSlot::ClassItem, [40, 0, 0, 0, 0, 0])
        .build();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    let objectives = Objectives::new(CharacterClass::Titan).with_minimum(StatKind::Mobility, 40);

    assert!(run(&groups, &objectives, 10).is_empty());

    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(10);
    let _ = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters)
        .with_bounder(NoBounder)
        .search(&mut keeper);
    assert_eq!(keeper.len(), 1);

    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(10);
    let _ = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters)
        .with_bounder(CeilingBounder::new(40, 2))
        .search(&mut keeper);
    assert_eq!(keeper.len(), 1);
}

#[test]
fn test_minimum_tier_filters_results() {
    let mut builder = CatalogBuilder::new();
    for slot in ArmorSlot::ALL {
        builder = builder
            .legendary(&format!("{slot}-low"), slot, [2, 2, 2, 2, 2, 2])
            .legendary(&format!("{slot}-high"), slot, [12, 12, 12, 12, 12, 12]);
    }
    let groups = SlotGroups::from_pieces(builder.build().pieces);
    let objectives = Objectives::new(CharacterClass::Titan).with_minimum_tier(Some(36));

    let results = run(&groups, &objectives, 100);

    assert!(!results.is_empty());
    assert!(results.iter().all(|r| r.total_tier >= 36));
    assert!(results.len() < 32);
}

#[test]
fn test_results_sorted_and_bounded() {
    let catalog = random_catalog(3, 4, 30);
    let objectives = Objectives::new(CharacterClass::Titan)
        .with_minimum(StatKind::Recovery, 60)
        .with_minimum(StatKind::Discipline, 40);
    let groups = SlotGroups::from_pieces(catalog.pieces_for(CharacterClass::Titan));

    let results = run(&groups, &objectives, 7);

    assert!(results.len() <= 7);
    assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
}

#[test]
fn test_matches_brute_force() {
    for seed in 0..6 {
        let catalog = random_catalog(seed, 4, 30);
        let pieces = catalog.pieces_for(CharacterClass::Titan);
        let groups = SlotGroups::from_pieces(pieces.clone());
        let objectives = Objectives::new(CharacterClass::Titan)
            .with_minimum(StatKind::Mobility, 50)
            .with_minimum(StatKind::Intellect, 70)
            .with_max_exotics(1);

        let expected = brute_force_top_k(&pieces, &objectives, 2, 10);
        let actual = run(&groups, &objectives, 10);

        assert_eq!(ids(&actual), ids(&expected), "seed {seed}");
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for seed in [1, 5, 9] {
        let catalog = random_catalog(seed, 5, 30);
        let groups = SlotGroups::from_pieces(catalog.pieces_for(CharacterClass::Titan));
        let objectives = Objectives::new(CharacterClass::Titan)
            .with_minimum(StatKind::Resilience, 60)
            .with_masterwork(true);

        let sequential = run(&groups, &objectives, 12);

        let counters = SearchCounters::new();
        let parallel = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters)
            .search_parallel(12)
            .into_results();

        assert_eq!(parallel, sequential, "seed {seed}");
        assert!(!counters.is_terminated());
    }
}

#[test]
fn test_node_budget_stops_search() {
    let catalog = random_catalog(2, 6, 30);
    let groups = SlotGroups::from_pieces(catalog.pieces_for(CharacterClass::Titan));
    let objectives = Objectives::new(CharacterClass::Titan);

    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(10);
    let flow = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters)
        .with_termination(NodeCountTermination::new(50))
        .search(&mut keeper);

    assert!(flow.is_break());
    assert!(counters.is_terminated());
    assert_eq!(counters.nodes_expanded(), 50);
    assert!(keeper.len() <= 10);
}

#[test]
fn test_node_budget_stops_parallel_search() {
    let catalog = random_catalog(4, 6, 30);
    let groups = SlotGroups::from_pieces(catalog.pieces_for(CharacterClass::Titan));
    let objectives = Objectives::new(CharacterClass::Titan);

    let counters = SearchCounters::new();
    let keeper = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters)
        .with_termination(NodeCountTermination::new(100))
        .search_parallel(10);

    assert!(counters.is_terminated());
    assert!(keeper.len() <= 10);
}

#[test]
fn test_search_counts_nodes() {
    // one candidate per slot: root plus five levels
    let catalog = scenario_catalog();
    let groups = SlotGroups::from_pieces(catalog.pieces);
    let objectives = Objectives::new(CharacterClass::Titan);

    let counters = SearchCounters::new();
    let mut keeper = ResultKeeper::new(1);
    let _ = ExhaustiveSearch::new(&groups, &objectives, &TierScorer, &counters).search(&mut keeper);

    let stats = counters.snapshot();
    assert_eq!(stats.nodes_expanded, 6);
    assert_eq!(stats.builds_evaluated, 1);
    assert_eq!(stats.builds_accepted, 1);
}
