//! Normalized gear pieces.

use std::fmt;

use super::slot::ArmorSlot;
use super::stats::Stats;

/// Rarity of an eligible piece.
///
/// Only the two highest catalog tiers take part in optimization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Rarity {
    Legendary,
    Exotic,
}

impl Rarity {
    /// Catalog tier number of legendary ("superior") items.
    pub const LEGENDARY_TIER_TYPE: u8 = 5;
    /// Catalog tier number of exotic items.
    pub const EXOTIC_TIER_TYPE: u8 = 6;

    /// Maps a catalog tier number to an eligible rarity.
    ///
    /// Returns `None` for anything below legendary.
    pub fn from_tier_type(tier_type: u8) -> Option<Rarity> {
        match tier_type {
            Self::LEGENDARY_TIER_TYPE => Some(Rarity::Legendary),
            Self::EXOTIC_TIER_TYPE => Some(Rarity::Exotic),
            _ => None,
        }
    }

    pub const fn tier_type(self) -> u8 {
        match self {
            Rarity::Legendary => Self::LEGENDARY_TIER_TYPE,
            Rarity::Exotic => Self::EXOTIC_TIER_TYPE,
        }
    }

    #[inline]
    pub const fn is_exotic(self) -> bool {
        matches!(self, Rarity::Exotic)
    }
}

/// Class affinity of a piece or of the character being optimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CharacterClass {
    Titan,
    Hunter,
    Warlock,
    /// Wearable by every class.
    Any,
}

impl CharacterClass {
    /// Maps a catalog class tag; unknown tags yield `None`.
    pub fn from_class_type(class_type: u8) -> Option<CharacterClass> {
        match class_type {
            0 => Some(CharacterClass::Titan),
            1 => Some(CharacterClass::Hunter),
            2 => Some(CharacterClass::Warlock),
            3 => Some(CharacterClass::Any),
            _ => None,
        }
    }

    pub const fn class_type(self) -> u8 {
        match self {
            CharacterClass::Titan => 0,
            CharacterClass::Hunter => 1,
            CharacterClass::Warlock => 2,
            CharacterClass::Any => 3,
        }
    }

    /// Whether a piece with this affinity can be worn by `target`.
    #[inline]
    pub fn fits(self, target: CharacterClass) -> bool {
        self == CharacterClass::Any || self == target
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Titan => write!(f, "Titan"),
            CharacterClass::Hunter => write!(f, "Hunter"),
            CharacterClass::Warlock => write!(f, "Warlock"),
            CharacterClass::Any => write!(f, "Any"),
        }
    }
}

/// One candidate item, normalized from a catalog entry.
///
/// Pieces are never mutated once normalized; the search only reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    /// Opaque instance identifier, for display only.
    pub id: String,
    /// Definition identifier the stats were looked up by.
    pub item_hash: u32,
    pub slot: ArmorSlot,
    pub rarity: Rarity,
    pub class: CharacterClass,
    /// Base stats before any masterwork bonus.
    pub stats: Stats,
}

impl Piece {
    pub fn new(
        id: impl Into<String>,
        item_hash: u32,
        slot: ArmorSlot,
        rarity: Rarity,
        class: CharacterClass,
        stats: Stats,
    ) -> Self {
        Self {
            id: id.into(),
            item_hash,
            slot,
            rarity,
            class,
            stats,
        }
    }

    #[inline]
    pub fn is_exotic(&self) -> bool {
        self.rarity.is_exotic()
    }
}
