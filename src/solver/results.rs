//! Best-path accumulator
//!
//! An explicit per-run (or per-task) accumulator replacing the reference
//! design's process-wide mutable best. Candidates are offered at terminal
//! trie nodes; strictly better candidates clear and replace the tied set,
//! equal candidates append, worse candidates are discarded. Two accumulators
//! combine with an associative [`merge`](ResultSet::merge), which is how the
//! parallel sub-searches reduce to one global result.

use crate::core::Path;
use std::cmp::Ordering;

/// Which objective ordering ranks candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Objective {
    /// Maximize word score only
    #[default]
    Score,
    /// Maximize gems collected; word score breaks ties
    Eco,
}

/// The set of tied best paths under an objective
#[derive(Debug, Clone)]
pub struct ResultSet {
    objective: Objective,
    best_score: u32,
    best_eco_score: u32,
    paths: Vec<Path>,
}

impl ResultSet {
    /// Create an empty accumulator
    #[must_use]
    pub const fn new(objective: Objective) -> Self {
        Self {
            objective,
            best_score: 0,
            best_eco_score: 0,
            paths: Vec::new(),
        }
    }

    /// Whether any candidate has been accepted
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// The objective this set ranks by
    #[inline]
    #[must_use]
    pub const fn objective(&self) -> Objective {
        self.objective
    }

    /// Best word score seen so far (0 while empty)
    ///
    /// Under [`Objective::Eco`] this is the word score of the best-eco
    /// path(s), which the search also uses as its prune floor.
    #[inline]
    #[must_use]
    pub const fn best_score(&self) -> u32 {
        self.best_score
    }

    /// Best eco score seen so far (meaningful under [`Objective::Eco`])
    #[inline]
    #[must_use]
    pub const fn best_eco_score(&self) -> u32 {
        self.best_eco_score
    }

    /// The tied best paths
    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Rank a candidate against the incumbent under this set's objective
    fn rank(&self, score: u32, eco_score: u32) -> Ordering {
        match self.objective {
            Objective::Score => score.cmp(&self.best_score),
            Objective::Eco => eco_score
                .cmp(&self.best_eco_score)
                .then(score.cmp(&self.best_score)),
        }
    }

    /// Offer a candidate path with its word and eco scores
    ///
    /// Strictly better clears and replaces the tied set; equal appends;
    /// worse is discarded. Under [`Objective::Eco`] a lower eco score is
    /// discarded regardless of word score.
    pub fn offer(&mut self, path: Path, score: u32, eco_score: u32) {
        if self.paths.is_empty() {
            self.best_score = score;
            self.best_eco_score = eco_score;
            self.paths.push(path);
            return;
        }

        match self.rank(score, eco_score) {
            Ordering::Greater => {
                self.paths.clear();
                self.paths.push(path);
                self.best_score = score;
                self.best_eco_score = eco_score;
            }
            Ordering::Equal => self.paths.push(path),
            Ordering::Less => {}
        }
    }

    /// Combine two accumulators built under the same objective
    ///
    /// Associative and, up to path order, commutative — safe as a parallel
    /// reduction. The surviving key is the better of the two; ties keep both
    /// tied sets.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        debug_assert_eq!(self.objective, other.objective);

        if other.paths.is_empty() {
            return self;
        }
        if self.paths.is_empty() {
            return other;
        }

        match self.rank(other.best_score, other.best_eco_score) {
            Ordering::Greater => other,
            Ordering::Equal => {
                self.paths.extend(other.paths);
                self
            }
            Ordering::Less => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Letter;

    fn path(cells: &[(usize, usize, char)]) -> Path {
        let mut p = Path::default();
        for &(x, y, c) in cells {
            p.push(x, y, Letter::new(c).unwrap());
        }
        p
    }

    #[test]
    fn score_mode_replaces_on_improvement() {
        let mut set = ResultSet::new(Objective::Score);
        set.offer(path(&[(0, 0, 'a')]), 5, 0);
        set.offer(path(&[(1, 1, 'b')]), 9, 0);

        assert_eq!(set.best_score(), 9);
        assert_eq!(set.paths().len(), 1);
        assert_eq!(set.paths()[0].word(), "b");
    }

    #[test]
    fn score_mode_appends_on_tie() {
        let mut set = ResultSet::new(Objective::Score);
        set.offer(path(&[(0, 0, 'a')]), 5, 0);
        set.offer(path(&[(1, 1, 'b')]), 5, 0);

        assert_eq!(set.paths().len(), 2);
    }

    #[test]
    fn score_mode_discards_worse() {
        let mut set = ResultSet::new(Objective::Score);
        set.offer(path(&[(0, 0, 'a')]), 5, 0);
        set.offer(path(&[(1, 1, 'b')]), 3, 7);

        assert_eq!(set.best_score(), 5);
        assert_eq!(set.paths().len(), 1);
    }

    #[test]
    fn eco_mode_prefers_gems_over_score() {
        let mut set = ResultSet::new(Objective::Eco);
        set.offer(path(&[(0, 0, 'a')]), 50, 1);
        set.offer(path(&[(1, 1, 'b')]), 5, 2);

        // Lower word score wins on gems
        assert_eq!(set.best_eco_score(), 2);
        assert_eq!(set.best_score(), 5);
        assert_eq!(set.paths()[0].word(), "b");
    }

    #[test]
    fn eco_mode_equal_gems_falls_back_to_score() {
        let mut set = ResultSet::new(Objective::Eco);
        set.offer(path(&[(0, 0, 'a')]), 5, 2);
        set.offer(path(&[(1, 1, 'b')]), 9, 2);
        set.offer(path(&[(2, 2, 'c')]), 9, 2);

        assert_eq!(set.best_score(), 9);
        assert_eq!(set.paths().len(), 2);
    }

    #[test]
    fn eco_mode_discards_lower_gems_despite_higher_score() {
        let mut set = ResultSet::new(Objective::Eco);
        set.offer(path(&[(0, 0, 'a')]), 5, 2);
        set.offer(path(&[(1, 1, 'b')]), 100, 1);

        assert_eq!(set.best_eco_score(), 2);
        assert_eq!(set.best_score(), 5);
        assert_eq!(set.paths().len(), 1);
    }

    #[test]
    fn merge_keeps_better_side() {
        let mut a = ResultSet::new(Objective::Score);
        a.offer(path(&[(0, 0, 'a')]), 5, 0);
        let mut b = ResultSet::new(Objective::Score);
        b.offer(path(&[(1, 1, 'b')]), 9, 0);

        let merged = a.clone().merge(b.clone());
        assert_eq!(merged.best_score(), 9);
        assert_eq!(merged.paths().len(), 1);

        // Same winner in either order
        let merged = b.merge(a);
        assert_eq!(merged.best_score(), 9);
    }

    #[test]
    fn merge_concatenates_ties() {
        let mut a = ResultSet::new(Objective::Score);
        a.offer(path(&[(0, 0, 'a')]), 5, 0);
        let mut b = ResultSet::new(Objective::Score);
        b.offer(path(&[(1, 1, 'b')]), 5, 0);
        b.offer(path(&[(2, 2, 'c')]), 5, 0);

        let merged = a.merge(b);
        assert_eq!(merged.paths().len(), 3);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut a = ResultSet::new(Objective::Score);
        a.offer(path(&[(0, 0, 'a')]), 5, 0);

        let merged = a.clone().merge(ResultSet::new(Objective::Score));
        assert_eq!(merged.best_score(), 5);
        assert_eq!(merged.paths().len(), 1);

        let merged = ResultSet::new(Objective::Score).merge(a);
        assert_eq!(merged.best_score(), 5);
    }

    #[test]
    fn merge_eco_prefers_gems() {
        let mut a = ResultSet::new(Objective::Eco);
        a.offer(path(&[(0, 0, 'a')]), 100, 0);
        let mut b = ResultSet::new(Objective::Eco);
        b.offer(path(&[(1, 1, 'b')]), 3, 1);

        let merged = a.merge(b);
        assert_eq!(merged.best_eco_score(), 1);
        assert_eq!(merged.best_score(), 3);
    }
}
