//! BuildScore - Single-level score for ranking loadouts

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub};

/// The score of one complete loadout.
///
/// Higher is better. Scores are plain integers, so comparing two builds
/// never involves rounding.
///
/// # Examples
///
/// ```
/// use loadforge_core::BuildScore;
///
/// let a = BuildScore::of(1_250);
/// let b = BuildScore::of(900);
///
/// assert!(a > b);
/// assert_eq!((a - b).value(), 350);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BuildScore {
    score: i64,
}

impl BuildScore {
    /// The zero score.
    pub const ZERO: BuildScore = BuildScore { score: 0 };

    /// Creates a new BuildScore with the given value.
    #[inline]
    pub const fn of(score: i64) -> Self {
        BuildScore { score }
    }

    /// Returns the score value.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.score
    }
}

impl Ord for BuildScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for BuildScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for BuildScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        BuildScore::of(self.score + other.score)
    }
}

impl AddAssign for BuildScore {
    fn add_assign(&mut self, other: Self) {
        self.score += other.score;
    }
}

impl Sub for BuildScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        BuildScore::of(self.score - other.score)
    }
}

impl Neg for BuildScore {
    type Output = Self;

    fn neg(self) -> Self {
        BuildScore::of(-self.score)
    }
}

impl fmt::Debug for BuildScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuildScore({})", self.score)
    }
}

impl fmt::Display for BuildScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.score)
    }
}

impl From<i64> for BuildScore {
    fn from(score: i64) -> Self {
        BuildScore::of(score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        let mut scores = vec![BuildScore::of(3), BuildScore::of(-7), BuildScore::of(12)];
        scores.sort();
        assert_eq!(
            scores,
            vec![BuildScore::of(-7), BuildScore::of(3), BuildScore::of(12)]
        );
    }

    #[test]
    fn test_arithmetic() {
        let mut score = BuildScore::of(500);
        score += BuildScore::of(50);
        assert_eq!(score.value(), 550);
        assert_eq!((-score).value(), -550);
        assert_eq!(score - BuildScore::of(600), BuildScore::of(-50));
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", BuildScore::of(42)), "42");
        assert_eq!(format!("{:?}", BuildScore::of(-1)), "BuildScore(-1)");
    }
}
