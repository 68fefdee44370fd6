//! Solve command
//!
//! Builds the trie for the loaded board and dictionary, runs the search,
//! and returns the outcome with timing.

use crate::core::{Board, Word};
use crate::solver::{BoundOverflow, Objective, ResultSet, SearchConfig, SearchEngine, build_trie};
use std::time::{Duration, Instant};

/// Configuration for a solve run
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Letter swaps available per path
    pub swaps: u8,
    /// Rank results by gems collected instead of word score
    pub eco_mode: bool,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(swaps: u8, eco_mode: bool) -> Self {
        Self { swaps, eco_mode }
    }

    /// The objective ordering this configuration selects
    #[must_use]
    pub const fn objective(&self) -> Objective {
        if self.eco_mode {
            Objective::Eco
        } else {
            Objective::Score
        }
    }
}

/// Result of a solve run
pub struct SolveOutcome {
    pub results: ResultSet,
    /// Distinct dictionary words indexed
    pub word_count: usize,
    /// Trie arena size, root included
    pub node_count: usize,
    /// Search time, excluding the trie build
    pub elapsed: Duration,
}

/// Build the trie and run the full search
///
/// # Errors
/// Returns [`BoundOverflow`] if any word's score upper bound does not fit
/// the trie's per-node byte; nothing is searched in that case.
pub fn run_solve(
    board: &Board,
    words: &[Word],
    config: SolveConfig,
) -> Result<SolveOutcome, BoundOverflow> {
    let trie = build_trie(words.iter(), board)?;

    let engine = SearchEngine::new(
        board,
        &trie,
        SearchConfig {
            swaps: config.swaps,
            objective: config.objective(),
        },
    );

    let started = Instant::now();
    let results = engine.run();
    let elapsed = started.elapsed();

    Ok(SolveOutcome {
        results,
        word_count: trie.word_count(),
        node_count: trie.node_count(),
        elapsed,
    })
}
