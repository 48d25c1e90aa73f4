//! Tests for the domain model.

use super::*;
use crate::error::LoadForgeError;

#[test]
fn test_slot_order_and_index() {
    for (i, slot) in ArmorSlot::ALL.iter().enumerate() {
        assert_eq!(slot.index(), i);
    }
    assert_eq!(ArmorSlot::ALL[0], ArmorSlot::Head);
    assert_eq!(ArmorSlot::ALL[4], ArmorSlot::ClassItem);
}

#[test]
fn test_slot_bucket_round_trip() {
    for slot in ArmorSlot::ALL {
        assert_eq!(ArmorSlot::from_bucket_hash(slot.bucket_hash()), Some(slot));
    }
    assert_eq!(ArmorSlot::from_bucket_hash(1_498_876_634), None);
}

#[test]
fn test_stat_hash_lookup() {
    assert_eq!(
        StatKind::from_stat_hash(1_943_323_491),
        Some(StatKind::Recovery)
    );
    assert_eq!(StatKind::from_stat_hash(7), None);
}

#[test]
fn test_tier_math() {
    let stats = Stats::new([0, 9, 10, 55, 100, 137]);
    let tiers = stats.tiers();

    assert_eq!(tiers.values(), &[0, 0, 1, 5, 10, 10]);
    assert_eq!(tiers.total(), 26);
    assert_eq!(stats.wasted(), 9 + 5 + 7);
}

#[test]
fn test_stats_addition_saturates() {
    let a = Stats::new([1, 2, 3, 4, 5, u32::MAX]);
    let b = Stats::splat(2);
    let sum = a + b;

    assert_eq!(sum.values(), &[3, 4, 5, 6, 7, u32::MAX]);
    assert_eq!(sum[StatKind::Mobility], 3);
}

#[test]
fn test_stats_display() {
    let stats = Stats::new([10, 20, 30, 40, 50, 60]);
    assert_eq!(stats.to_string(), "10/20/30/40/50/60");
}

#[test]
fn test_rarity_from_tier_type() {
    assert_eq!(Rarity::from_tier_type(6), Some(Rarity::Exotic));
    assert_eq!(Rarity::from_tier_type(5), Some(Rarity::Legendary));
    assert_eq!(Rarity::from_tier_type(4), None);
    assert!(Rarity::Exotic.is_exotic());
    assert!(!Rarity::Legendary.is_exotic());
}

#[test]
fn test_class_fits() {
    assert!(CharacterClass::Hunter.fits(CharacterClass::Hunter));
    assert!(CharacterClass::Any.fits(CharacterClass::Titan));
    assert!(!CharacterClass::Warlock.fits(CharacterClass::Titan));
    assert_eq!(CharacterClass::from_class_type(9), None);
}

#[test]
fn test_objectives_defaults() {
    let objectives = Objectives::new(CharacterClass::Titan);

    assert_eq!(objectives.max_exotics(), DEFAULT_MAX_EXOTICS);
    assert_eq!(objectives.priority(), &Stats::ZERO);
    assert!(objectives.minimum_tier().is_none());
    assert!(!objectives.assume_masterwork());
    assert_eq!(objectives.prioritized().count(), 0);
}

#[test]
fn test_objectives_prioritized() {
    let objectives = Objectives::new(CharacterClass::Titan)
        .with_minimum(StatKind::Resilience, 100)
        .with_minimum(StatKind::Strength, 30);

    let prioritized: Vec<_> = objectives.prioritized().collect();
    assert_eq!(
        prioritized,
        vec![(StatKind::Resilience, 100), (StatKind::Strength, 30)]
    );
}

#[test]
fn test_objectives_reject_wrong_length() {
    let err = Objectives::new(CharacterClass::Hunter)
        .with_priorities(&[10, 20, 30])
        .unwrap_err();
    assert!(matches!(err, LoadForgeError::InvalidInput(_)));
}

#[test]
fn test_objectives_reject_negative() {
    let err = Objectives::new(CharacterClass::Hunter)
        .with_priorities(&[0, 0, -5, 0, 0, 0])
        .unwrap_err();
    assert!(err.to_string().contains("priority[2]"));
}

#[test]
fn test_objectives_reject_too_large() {
    let err = Objectives::new(CharacterClass::Hunter)
        .with_priorities(&[0, 0, 0, 0, 0, i64::MAX])
        .unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn test_objectives_from_spec() {
    let spec = ObjectivesSpec {
        target_class: 2,
        priority: vec![0, 0, 100, 0, 0, 0],
        max_exotics: 0,
        minimum_tier: Some(30),
        assume_masterwork: true,
    };

    let objectives = Objectives::try_from(spec).unwrap();
    assert_eq!(objectives.target_class(), CharacterClass::Warlock);
    assert_eq!(objectives.priority().get(StatKind::Recovery), 100);
    assert_eq!(objectives.max_exotics(), 0);
    assert_eq!(objectives.minimum_tier(), Some(30));
    assert!(objectives.assume_masterwork());
}

#[test]
fn test_objectives_from_spec_unknown_class() {
    let spec = ObjectivesSpec {
        target_class: 42,
        priority: vec![0; STAT_COUNT],
        max_exotics: 1,
        minimum_tier: None,
        assume_masterwork: false,
    };
    assert!(Objectives::try_from(spec).is_err());
}
