//! Per-slot candidate lists.

use loadforge_core::{ArmorSlot, Piece, SLOT_COUNT};

/// Candidates grouped by slot, each list in catalog order.
#[derive(Debug, Clone, Default)]
pub struct SlotGroups {
    slots: [Vec<Piece>; SLOT_COUNT],
}

impl SlotGroups {
    /// Groups pieces by their slot. Relative order within a slot is kept.
    pub fn from_pieces(pieces: impl IntoIterator<Item = Piece>) -> Self {
        let mut slots: [Vec<Piece>; SLOT_COUNT] = Default::default();
        for piece in pieces {
            slots[piece.slot.index()].push(piece);
        }
        Self { slots }
    }

    pub fn get(&self, slot: ArmorSlot) -> &[Piece] {
        &self.slots[slot.index()]
    }

    /// Candidate counts in slot order.
    pub fn counts(&self) -> [usize; SLOT_COUNT] {
        std::array::from_fn(|i| self.slots[i].len())
    }

    /// True when every slot has at least one candidate.
    pub fn is_feasible(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_empty())
    }

    /// Size of the unpruned search space.
    pub fn combination_count(&self) -> u128 {
        self.slots.iter().map(|slot| slot.len() as u128).product()
    }

    /// Returns the slot with no candidates, if any.
    pub fn first_empty(&self) -> Option<ArmorSlot> {
        ArmorSlot::ALL
            .into_iter()
            .find(|slot| self.slots[slot.index()].is_empty())
    }
}
