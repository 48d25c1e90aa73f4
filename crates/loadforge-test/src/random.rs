//! Seeded random catalogs.

use loadforge_core::{ArmorSlot, CharacterClass, Rarity, STAT_COUNT};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::catalog::{CatalogBuilder, TestCatalog};

/// Chance that a generated piece is exotic.
const EXOTIC_PROBABILITY: f64 = 0.2;

/// Generates `per_slot` pieces for every slot with stats drawn from
/// `0..=max_stat`.
///
/// Pieces are for Titans or universal. The same seed always produces the
/// same catalog.
pub fn random_catalog(seed: u64, per_slot: usize, max_stat: u32) -> TestCatalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = CatalogBuilder::new();

    for slot in ArmorSlot::ALL {
        for n in 0..per_slot {
            let stats: [u32; STAT_COUNT] = std::array::from_fn(|_| rng.random_range(0..=max_stat));
            let rarity = if rng.random_bool(EXOTIC_PROBABILITY) {
                Rarity::Exotic
            } else {
                Rarity::Legendary
            };
            let class = if rng.random_bool(0.5) {
                CharacterClass::Titan
            } else {
                CharacterClass::Any
            };
            builder = builder
                .class(class)
                .piece(&format!("{slot}-{n}"), slot, rarity, stats);
        }
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_catalog() {
        let a = random_catalog(7, 4, 30);
        let b = random_catalog(7, 4, 30);

        assert_eq!(a.pieces, b.pieces);
        assert_eq!(a.pieces.len(), 20);
    }

    #[test]
    fn test_stats_within_range() {
        let catalog = random_catalog(11, 6, 12);

        assert!(catalog
            .pieces
            .iter()
            .all(|piece| piece.stats.values().iter().all(|&v| v <= 12)));
    }
}
