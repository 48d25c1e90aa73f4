//! Search node representation.
//!
//! A node is the partial build reached after assigning a prefix of the
//! slots. Nodes are small `Copy` values; each recursion level owns its own.

use loadforge_core::{ArmorSlot, Piece, Stats, SLOT_COUNT};

/// A partial build in the search tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchNode {
    /// Number of slots already assigned (0 = root).
    depth: usize,

    /// Candidate index chosen for each assigned slot.
    choices: [usize; SLOT_COUNT],

    /// Sum of the chosen pieces' stats, without masterwork.
    totals: Stats,

    exotic_count: u32,
}

impl SearchNode {
    /// The empty build.
    pub fn root() -> Self {
        Self {
            depth: 0,
            choices: [0; SLOT_COUNT],
            totals: Stats::ZERO,
            exotic_count: 0,
        }
    }

    /// Returns the node reached by choosing candidate `index`, which is
    /// `piece`, for the next slot.
    pub fn child(&self, index: usize, piece: &Piece) -> Self {
        debug_assert!(self.depth < SLOT_COUNT);
        let mut choices = self.choices;
        choices[self.depth] = index;
        Self {
            depth: self.depth + 1,
            choices,
            totals: self.totals + piece.stats,
            exotic_count: self.exotic_count + u32::from(piece.is_exotic()),
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns true when every slot is assigned.
    pub fn is_complete(&self) -> bool {
        self.depth == SLOT_COUNT
    }

    /// The slot assigned by this node's children.
    pub fn next_slot(&self) -> Option<ArmorSlot> {
        ArmorSlot::ALL.get(self.depth).copied()
    }

    /// Slots left after the next one.
    pub fn remaining_after_next(&self) -> usize {
        SLOT_COUNT.saturating_sub(self.depth + 1)
    }

    /// Chosen candidate indices. Only the first `depth` are meaningful.
    pub fn choices(&self) -> &[usize; SLOT_COUNT] {
        &self.choices
    }

    pub fn totals(&self) -> &Stats {
        &self.totals
    }

    pub fn exotic_count(&self) -> u32 {
        self.exotic_count
    }
}

impl Default for SearchNode {
    fn default() -> Self {
        Self::root()
    }
}
