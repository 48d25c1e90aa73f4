//! Armor slots.

use std::fmt;

/// Number of armor slots in a loadout.
pub const SLOT_COUNT: usize = 5;

/// One of the five fixed equipment positions.
///
/// The declaration order is the canonical search order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArmorSlot {
    Head,
    Arms,
    Chest,
    Legs,
    ClassItem,
}

impl ArmorSlot {
    /// All slots in canonical order.
    pub const ALL: [ArmorSlot; SLOT_COUNT] = [
        ArmorSlot::Head,
        ArmorSlot::Arms,
        ArmorSlot::Chest,
        ArmorSlot::Legs,
        ArmorSlot::ClassItem,
    ];

    /// Position of this slot in canonical order.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inventory bucket identifier the catalog files this slot under.
    pub const fn bucket_hash(self) -> u32 {
        match self {
            ArmorSlot::Head => 3_448_274_439,
            ArmorSlot::Arms => 3_551_918_588,
            ArmorSlot::Chest => 14_239_492,
            ArmorSlot::Legs => 20_886_954,
            ArmorSlot::ClassItem => 1_585_787_867,
        }
    }

    /// Resolves a catalog bucket identifier, if it names an armor slot.
    pub fn from_bucket_hash(bucket_hash: u32) -> Option<ArmorSlot> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.bucket_hash() == bucket_hash)
    }
}

impl fmt::Display for ArmorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArmorSlot::Head => write!(f, "Head"),
            ArmorSlot::Arms => write!(f, "Arms"),
            ArmorSlot::Chest => write!(f, "Chest"),
            ArmorSlot::Legs => write!(f, "Legs"),
            ArmorSlot::ClassItem => write!(f, "ClassItem"),
        }
    }
}
