//! Benchmark command
//!
//! Runs the same search repeatedly and reports timing statistics, plus a
//! stability check: identical inputs must produce an identical best score
//! on every iteration.

use super::solve::{SolveConfig, run_solve};
use crate::core::{Board, Word};
use crate::solver::BoundOverflow;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Statistics from a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub iterations: usize,
    pub total: Duration,
    pub average: Duration,
    pub fastest: Duration,
    pub slowest: Duration,
    pub searches_per_second: f64,
    /// Best score of the first iteration
    pub best_score: u32,
    /// Size of the tied path set
    pub tied_paths: usize,
    /// Whether every iteration reproduced the same best score
    pub stable: bool,
}

/// Run the search `iterations` times with a progress bar
///
/// The trie is rebuilt each iteration so the timing covers a whole solve,
/// matching what a user of the `solve` command experiences.
///
/// # Errors
/// Returns [`BoundOverflow`] from the first failed trie build.
///
/// # Panics
/// Panics if `iterations` is zero.
pub fn run_benchmark(
    board: &Board,
    words: &[Word],
    config: SolveConfig,
    iterations: usize,
) -> Result<BenchmarkResult, BoundOverflow> {
    assert!(iterations > 0, "benchmark needs at least one iteration");

    let pb = ProgressBar::new(iterations as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut durations = Vec::with_capacity(iterations);
    let mut best_score = 0;
    let mut tied_paths = 0;
    let mut stable = true;

    let total_start = Instant::now();
    for i in 0..iterations {
        let iter_start = Instant::now();
        let outcome = run_solve(board, words, config)?;
        durations.push(iter_start.elapsed());

        if i == 0 {
            best_score = outcome.results.best_score();
            tied_paths = outcome.results.paths().len();
        } else if outcome.results.best_score() != best_score {
            stable = false;
        }

        pb.set_message(format!("best: {best_score}"));
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    let total = total_start.elapsed();
    let average = total / iterations as u32;
    let fastest = durations.iter().min().copied().unwrap_or_default();
    let slowest = durations.iter().max().copied().unwrap_or_default();
    let searches_per_second = if total.as_secs_f64() > 0.0 {
        iterations as f64 / total.as_secs_f64()
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        iterations,
        total,
        average,
        fastest,
        slowest,
        searches_per_second,
        best_score,
        tied_paths,
        stable,
    })
}
