//! Bounded top-K result collection.

use loadforge_core::{BuildResult, BuildScore};

/// Keeps the best `capacity` builds in descending score order.
///
/// Builds with equal scores stay in the order they were offered, so a
/// sequential search always reports the earliest-found build first.
#[derive(Debug, Clone)]
pub struct ResultKeeper {
    capacity: usize,
    results: Vec<BuildResult>,
}

impl ResultKeeper {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            results: Vec::with_capacity(capacity.min(64) + 1),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.results.len() >= self.capacity
    }

    /// Score a new build must beat once the keeper is full.
    pub fn worst_accepted_score(&self) -> Option<BuildScore> {
        if self.is_full() {
            self.results.last().map(|r| r.score)
        } else {
            None
        }
    }

    /// Returns true if a build with `score` would be kept.
    pub fn would_accept(&self, score: BuildScore) -> bool {
        if self.capacity == 0 {
            return false;
        }
        match self.worst_accepted_score() {
            Some(worst) => score > worst,
            None => true,
        }
    }

    /// Offers a build. Returns true if it was kept.
    pub fn offer(&mut self, result: BuildResult) -> bool {
        if !self.would_accept(result.score) {
            return false;
        }
        let at = self.results.partition_point(|r| r.score >= result.score);
        self.results.insert(at, result);
        self.results.truncate(self.capacity);
        true
    }

    pub fn results(&self) -> &[BuildResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<BuildResult> {
        self.results
    }

    /// Merges keepers filled by independent branches.
    ///
    /// Keepers must be passed in branch order. The stable sort keeps equal
    /// scores in that order, which makes the merged list identical to the
    /// one a single sequential pass would have kept.
    pub fn merge(keepers: impl IntoIterator<Item = ResultKeeper>, capacity: usize) -> Self {
        let mut results: Vec<BuildResult> = keepers
            .into_iter()
            .flat_map(ResultKeeper::into_results)
            .collect();
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.truncate(capacity);
        Self { capacity, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loadforge_core::{ArmorSlot, CharacterClass, Piece, Rarity, Stats};

    fn result(id: &str, score: i64) -> BuildResult {
        let pieces = ArmorSlot::ALL.map(|slot| {
            Piece::new(
                format!("{id}-{slot}"),
                0,
                slot,
                Rarity::Legendary,
                CharacterClass::Any,
                Stats::ZERO,
            )
        });
        BuildResult {
            pieces,
            stats: Stats::ZERO,
            tiers: Stats::ZERO.tiers(),
            total_tier: 0,
            wasted: 0,
            score: BuildScore::of(score),
        }
    }

    fn scores(keeper: &ResultKeeper) -> Vec<i64> {
        keeper.results().iter().map(|r| r.score.value()).collect()
    }

    fn heads(keeper: &ResultKeeper) -> Vec<&str> {
        keeper
            .results()
            .iter()
            .map(|r| r.pieces[0].id.as_str())
            .collect()
    }

    #[test]
    fn test_keeps_best_in_order() {
        let mut keeper = ResultKeeper::new(3);
        for (i, score) in [5, 1, 9, 3, 7].into_iter().enumerate() {
            keeper.offer(result(&i.to_string(), score));
        }

        assert_eq!(scores(&keeper), vec![9, 7, 5]);
        assert_eq!(keeper.worst_accepted_score(), Some(BuildScore::of(5)));
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut keeper = ResultKeeper::new(2);
        assert!(keeper.offer(result("first", 4)));
        assert!(keeper.offer(result("second", 4)));
        // full; a tie with the worst is not an improvement
        assert!(!keeper.offer(result("third", 4)));

        assert_eq!(heads(&keeper), vec!["first-Head", "second-Head"]);
    }

    #[test]
    fn test_would_accept() {
        let mut keeper = ResultKeeper::new(1);
        assert!(keeper.would_accept(BuildScore::of(-100)));
        assert_eq!(keeper.worst_accepted_score(), None);

        keeper.offer(result("a", 10));
        assert!(!keeper.would_accept(BuildScore::of(10)));
        assert!(keeper.would_accept(BuildScore::of(11)));
    }

    #[test]
    fn test_zero_capacity_keeps_nothing() {
        let mut keeper = ResultKeeper::new(0);
        assert!(!keeper.offer(result("a", 1_000)));
        assert!(keeper.is_empty());
    }

    #[test]
    fn test_merge_matches_sequential() {
        let offers = [("a", 3), ("b", 8), ("c", 3), ("d", 8), ("e", 1), ("f", 3)];

        let mut sequential = ResultKeeper::new(4);
        for (id, score) in offers {
            sequential.offer(result(id, score));
        }

        let mut left = ResultKeeper::new(4);
        let mut right = ResultKeeper::new(4);
        for (id, score) in &offers[..3] {
            left.offer(result(id, *score));
        }
        for (id, score) in &offers[3..] {
            right.offer(result(id, *score));
        }
        let merged = ResultKeeper::merge([left, right], 4);

        assert_eq!(heads(&merged), heads(&sequential));
        assert_eq!(heads(&merged), vec!["b-Head", "d-Head", "a-Head", "c-Head"]);
    }
}
