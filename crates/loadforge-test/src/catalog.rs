//! Hand-built catalogs.

use loadforge_core::{
    ArmorSlot, CharacterClass, DefinitionTable, Piece, Rarity, RawEntry, StatKind, Stats,
    STAT_COUNT,
};

/// First item hash handed out by [`CatalogBuilder`].
const FIRST_ITEM_HASH: u32 = 1_000;

/// Mobility of the scenario pieces, in slot order.
pub const SCENARIO_MOBILITY: [u32; 5] = [20, 10, 10, 10, 0];

/// A catalog in both raw and normalized form.
///
/// `pieces` holds what normalization should produce for a target class
/// every piece fits.
#[derive(Debug, Clone, Default)]
pub struct TestCatalog {
    pub entries: Vec<RawEntry>,
    pub definitions: DefinitionTable,
    pub pieces: Vec<Piece>,
}

impl TestCatalog {
    /// Pieces that fit `class`, in catalog order.
    pub fn pieces_for(&self, class: CharacterClass) -> Vec<Piece> {
        self.pieces
            .iter()
            .filter(|piece| piece.class.fits(class))
            .cloned()
            .collect()
    }
}

/// Builds catalogs piece by piece.
///
/// Every piece gets its own item hash and definition.
///
/// # Example
///
/// ```
/// use loadforge_core::ArmorSlot;
/// use loadforge_test::CatalogBuilder;
///
/// let catalog = CatalogBuilder::new()
///     .legendary("helm", ArmorSlot::Head, [10, 0, 0, 0, 0, 0])
///     .exotic("gauntlets", ArmorSlot::Arms, [0, 20, 0, 0, 0, 0])
///     .build();
///
/// assert_eq!(catalog.entries.len(), 2);
/// assert_eq!(catalog.definitions.len(), 2);
/// assert!(catalog.pieces[1].is_exotic());
/// ```
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    catalog: TestCatalog,
    class: CharacterClass,
    next_hash: u32,
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            catalog: TestCatalog::default(),
            class: CharacterClass::Any,
            next_hash: FIRST_ITEM_HASH,
        }
    }

    /// Sets the class of pieces added after this call.
    pub fn class(mut self, class: CharacterClass) -> Self {
        self.class = class;
        self
    }

    pub fn legendary(self, id: &str, slot: ArmorSlot, stats: [u32; STAT_COUNT]) -> Self {
        self.piece(id, slot, Rarity::Legendary, stats)
    }

    pub fn exotic(self, id: &str, slot: ArmorSlot, stats: [u32; STAT_COUNT]) -> Self {
        self.piece(id, slot, Rarity::Exotic, stats)
    }

    pub fn piece(
        mut self,
        id: &str,
        slot: ArmorSlot,
        rarity: Rarity,
        stats: [u32; STAT_COUNT],
    ) -> Self {
        let item_hash = self.next_hash;
        self.next_hash += 1;

        let stats = Stats::new(stats);
        self.catalog.entries.push(RawEntry::armor(
            id,
            item_hash,
            slot,
            rarity.tier_type(),
            self.class.class_type(),
        ));
        self.catalog.definitions.insert_stats(item_hash, stats);
        self.catalog
            .pieces
            .push(Piece::new(id, item_hash, slot, rarity, self.class, stats));
        self
    }

    /// Adds a raw entry that normalization is expected to reject.
    pub fn raw(mut self, entry: RawEntry) -> Self {
        self.catalog.entries.push(entry);
        self
    }

    pub fn build(self) -> TestCatalog {
        self.catalog
    }
}

/// One legendary piece per slot with Mobility from [`SCENARIO_MOBILITY`]
/// and every other stat zero.
pub fn scenario_catalog() -> TestCatalog {
    ArmorSlot::ALL
        .into_iter()
        .zip(SCENARIO_MOBILITY)
        .fold(CatalogBuilder::new(), |builder, (slot, mobility)| {
            let stats = Stats::ZERO.with(StatKind::Mobility, mobility);
            builder.legendary(&format!("{slot}-1"), slot, *stats.values())
        })
        .build()
}
