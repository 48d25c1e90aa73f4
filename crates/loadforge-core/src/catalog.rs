//! Catalog interface.
//!
//! The catalog service is an external collaborator: it hands LoadForge a
//! flat list of [`RawEntry`] records and a [`DefinitionSource`] that maps
//! item definitions to their investment stats. Nothing here performs I/O.

use std::collections::HashMap;

use crate::domain::{ArmorSlot, StatKind, Stats};

/// Broad item category reported by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ItemCategory {
    Armor,
    Weapon,
    Other,
}

/// One raw candidate record as supplied by the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawEntry {
    pub instance_id: String,
    /// Definition identifier used to look up stats.
    pub item_hash: u32,
    pub category: ItemCategory,
    /// Inventory bucket; armor buckets identify the slot.
    pub bucket_hash: u32,
    /// Catalog rarity number.
    pub tier_type: u8,
    /// Catalog class tag.
    pub class_type: u8,
}

impl RawEntry {
    /// Creates an armor entry for the given slot.
    pub fn armor(
        instance_id: impl Into<String>,
        item_hash: u32,
        slot: ArmorSlot,
        tier_type: u8,
        class_type: u8,
    ) -> Self {
        Self {
            instance_id: instance_id.into(),
            item_hash,
            category: ItemCategory::Armor,
            bucket_hash: slot.bucket_hash(),
            tier_type,
            class_type,
        }
    }
}

/// A single investment stat on an item definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InvestmentStat {
    pub stat_hash: u32,
    pub value: u32,
}

impl InvestmentStat {
    pub fn new(stat_hash: u32, value: u32) -> Self {
        Self { stat_hash, value }
    }
}

/// Looks up item definitions by hash.
///
/// Implementations wrap whatever store the catalog service populated. A
/// source that is not loaded makes every search fail before it starts.
pub trait DefinitionSource {
    /// Whether definitions are available at all.
    fn is_loaded(&self) -> bool;

    /// Investment stats of an item definition, if the definition is known.
    fn investment_stats(&self, item_hash: u32) -> Option<&[InvestmentStat]>;

    /// Resolves an item's base stats, zero-filling anything missing.
    ///
    /// Stat identifiers outside the six known stats are ignored.
    fn base_stats(&self, item_hash: u32) -> Stats {
        let mut stats = Stats::ZERO;
        if let Some(entries) = self.investment_stats(item_hash) {
            for entry in entries {
                if let Some(kind) = StatKind::from_stat_hash(entry.stat_hash) {
                    stats = stats.with(kind, stats.get(kind).saturating_add(entry.value));
                }
            }
        }
        stats
    }
}

impl<T: DefinitionSource + ?Sized> DefinitionSource for &T {
    fn is_loaded(&self) -> bool {
        (**self).is_loaded()
    }

    fn investment_stats(&self, item_hash: u32) -> Option<&[InvestmentStat]> {
        (**self).investment_stats(item_hash)
    }
}

/// In-memory definition store.
///
/// An empty table reports itself as not loaded.
///
/// # Examples
///
/// ```
/// use loadforge_core::{DefinitionSource, DefinitionTable, StatKind, Stats};
///
/// let mut table = DefinitionTable::new();
/// assert!(!table.is_loaded());
///
/// table.insert_stats(1001, Stats::new([2, 30, 10, 2, 12, 6]));
/// assert!(table.is_loaded());
/// assert_eq!(table.base_stats(1001).get(StatKind::Resilience), 30);
/// assert_eq!(table.base_stats(9999), Stats::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DefinitionTable {
    items: HashMap<u32, Vec<InvestmentStat>>,
}

impl DefinitionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition's raw investment stats.
    pub fn insert(&mut self, item_hash: u32, stats: Vec<InvestmentStat>) {
        self.items.insert(item_hash, stats);
    }

    /// Registers a definition from a positional stat vector.
    pub fn insert_stats(&mut self, item_hash: u32, stats: Stats) {
        let entries = stats
            .iter()
            .filter(|(_, value)| *value > 0)
            .map(|(kind, value)| InvestmentStat::new(kind.stat_hash(), value))
            .collect();
        self.insert(item_hash, entries);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DefinitionSource for DefinitionTable {
    fn is_loaded(&self) -> bool {
        !self.items.is_empty()
    }

    fn investment_stats(&self, item_hash: u32) -> Option<&[InvestmentStat]> {
        self.items.get(&item_hash).map(Vec::as_slice)
    }
}

impl FromIterator<(u32, Vec<InvestmentStat>)> for DefinitionTable {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<InvestmentStat>)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
