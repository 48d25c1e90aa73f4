//! Stat vectors and tier math.

use std::fmt;
use std::ops::{Add, AddAssign, Index};

/// Number of stats carried by every piece and every build.
pub const STAT_COUNT: usize = 6;

/// Stat points per tier.
pub const TIER_SIZE: u32 = 10;

/// Highest tier a single stat can reach.
pub const MAX_TIER: u32 = 10;

/// One of the six independent character stats.
///
/// The declaration order is the positional order of [`Stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatKind {
    Mobility,
    Resilience,
    Recovery,
    Discipline,
    Intellect,
    Strength,
}

impl StatKind {
    /// All stats in positional order.
    pub const ALL: [StatKind; STAT_COUNT] = [
        StatKind::Mobility,
        StatKind::Resilience,
        StatKind::Recovery,
        StatKind::Discipline,
        StatKind::Intellect,
        StatKind::Strength,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stat definition identifier used by the catalog's investment stats.
    pub const fn stat_hash(self) -> u32 {
        match self {
            StatKind::Mobility => 2_996_146_975,
            StatKind::Resilience => 392_767_087,
            StatKind::Recovery => 1_943_323_491,
            StatKind::Discipline => 1_735_777_505,
            StatKind::Intellect => 144_602_215,
            StatKind::Strength => 4_244_567_218,
        }
    }

    /// Resolves a stat definition identifier, if it is one of the six.
    pub fn from_stat_hash(stat_hash: u32) -> Option<StatKind> {
        Self::ALL.into_iter().find(|kind| kind.stat_hash() == stat_hash)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatKind::Mobility => write!(f, "Mobility"),
            StatKind::Resilience => write!(f, "Resilience"),
            StatKind::Recovery => write!(f, "Recovery"),
            StatKind::Discipline => write!(f, "Discipline"),
            StatKind::Intellect => write!(f, "Intellect"),
            StatKind::Strength => write!(f, "Strength"),
        }
    }
}

#[inline]
const fn tier_of(value: u32) -> u32 {
    let tier = value / TIER_SIZE;
    if tier > MAX_TIER {
        MAX_TIER
    } else {
        tier
    }
}

/// A fixed six-entry vector of non-negative stat values.
///
/// Addition saturates instead of wrapping, so a malformed catalog value can
/// never turn a large total into a small one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Stats([u32; STAT_COUNT]);

impl Stats {
    /// All stats zero.
    pub const ZERO: Stats = Stats([0; STAT_COUNT]);

    #[inline]
    pub const fn new(values: [u32; STAT_COUNT]) -> Self {
        Stats(values)
    }

    /// The same value in every position.
    #[inline]
    pub const fn splat(value: u32) -> Self {
        Stats([value; STAT_COUNT])
    }

    #[inline]
    pub fn get(&self, kind: StatKind) -> u32 {
        self.0[kind.index()]
    }

    /// Returns a copy with one stat replaced.
    pub fn with(mut self, kind: StatKind, value: u32) -> Self {
        self.0[kind.index()] = value;
        self
    }

    #[inline]
    pub fn values(&self) -> &[u32; STAT_COUNT] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatKind, u32)> + '_ {
        StatKind::ALL.into_iter().zip(self.0.iter().copied())
    }

    /// Sum of all six values.
    pub fn total(&self) -> u32 {
        self.0.iter().fold(0u32, |acc, v| acc.saturating_add(*v))
    }

    /// Tier reached by a raw stat total.
    ///
    /// ```
    /// use loadforge_core::domain::Stats;
    ///
    /// assert_eq!(Stats::tier_of(49), 4);
    /// assert_eq!(Stats::tier_of(50), 5);
    /// assert_eq!(Stats::tier_of(137), 10);
    /// ```
    #[inline]
    pub const fn tier_of(value: u32) -> u32 {
        tier_of(value)
    }

    /// Per-stat tiers, each capped at [`MAX_TIER`].
    pub fn tiers(&self) -> Tiers {
        Tiers(self.0.map(tier_of))
    }

    /// Points that do not complete a tier: the sum of `value % 10`.
    pub fn wasted(&self) -> u32 {
        self.0.iter().map(|v| v % TIER_SIZE).sum()
    }
}

impl From<[u32; STAT_COUNT]> for Stats {
    fn from(values: [u32; STAT_COUNT]) -> Self {
        Stats(values)
    }
}

impl Index<usize> for Stats {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl Index<StatKind> for Stats {
    type Output = u32;

    fn index(&self, kind: StatKind) -> &u32 {
        &self.0[kind.index()]
    }
}

impl Add for Stats {
    type Output = Stats;

    fn add(mut self, other: Stats) -> Stats {
        self += other;
        self
    }
}

impl AddAssign for Stats {
    fn add_assign(&mut self, other: Stats) {
        for (lhs, rhs) in self.0.iter_mut().zip(other.0) {
            *lhs = lhs.saturating_add(rhs);
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [mob, res, rec, dis, int, stre] = self.0;
        write!(f, "{mob}/{res}/{rec}/{dis}/{int}/{stre}")
    }
}

/// Per-stat tiers of a build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tiers([u32; STAT_COUNT]);

impl Tiers {
    #[inline]
    pub fn get(&self, kind: StatKind) -> u32 {
        self.0[kind.index()]
    }

    #[inline]
    pub fn values(&self) -> &[u32; STAT_COUNT] {
        &self.0
    }

    /// Sum of the six tiers.
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }
}

impl Index<usize> for Tiers {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.0[index]
    }
}

impl Index<StatKind> for Tiers {
    type Output = u32;

    fn index(&self, kind: StatKind) -> &u32 {
        &self.0[kind.index()]
    }
}
