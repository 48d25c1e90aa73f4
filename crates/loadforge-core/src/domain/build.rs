//! Ranked build results.

use crate::score::BuildScore;

use super::piece::Piece;
use super::slot::SLOT_COUNT;
use super::stats::{Stats, Tiers};

/// One complete, scored loadout.
///
/// `pieces[i]` always belongs to `ArmorSlot::ALL[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildResult {
    pub pieces: [Piece; SLOT_COUNT],
    /// Piece stats summed, plus the masterwork bonus when assumed.
    ///
    /// Each stat saturates at `u32::MAX`; below that it is the exact sum.
    pub stats: Stats,
    pub tiers: Tiers,
    pub total_tier: u32,
    /// Points that do not complete a tier.
    pub wasted: u32,
    pub score: BuildScore,
}

impl BuildResult {
    pub fn exotic_count(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_exotic()).count()
    }

    /// Instance identifiers in slot order.
    pub fn piece_ids(&self) -> [&str; SLOT_COUNT] {
        std::array::from_fn(|i| self.pieces[i].id.as_str())
    }
}
