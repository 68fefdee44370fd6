//! Display functions for command results

use super::formatters::{CellRender, cell_token, classify, displayed_letter};
use crate::commands::{BenchmarkResult, SolveOutcome};
use crate::core::{Board, Path, SIZE};
use crate::solver::Objective;
use colored::Colorize;

/// Print the board as loaded, with modifier and gem codes
pub fn print_board(board: &Board) {
    println!("\n{}", "─".repeat(40).cyan());
    for x in 0..SIZE {
        let row: Vec<String> = (0..SIZE)
            .map(|y| format!("{:3}", cell_token(board, x, y)))
            .collect();
        println!("  {}", row.join(" "));
    }
    println!("{}", "─".repeat(40).cyan());
    println!(
        "  double word: {} | strongest letter tile: {:?} | ice cells: {}",
        board.has_double_word(),
        board.max_letter_modifier(),
        board.ice_mask().count()
    );
}

/// Render one path over the board
///
/// Path cells are bracketed: the starting cell green, swapped cells red,
/// the rest white. The colors mirror the classification, so a path is
/// readable even when several tie.
fn print_path_grid(board: &Board, path: &Path) {
    for x in 0..SIZE {
        let mut line = String::new();
        for y in 0..SIZE {
            let letter = displayed_letter(board, path, x, y);
            let rendered = match classify(board, path, x, y) {
                CellRender::Unused => format!(" {letter} "),
                CellRender::Start => format!("[{letter}]").bright_green().bold().to_string(),
                CellRender::Swapped => format!("[{letter}]").bright_red().bold().to_string(),
                CellRender::Natural => format!("[{letter}]").bright_white().to_string(),
            };
            line.push_str(&rendered);
        }
        println!("  {line}");
    }
}

/// Print the result of a solve run
pub fn print_solve_result(board: &Board, outcome: &SolveOutcome, limit: usize, verbose: bool) {
    let results = &outcome.results;

    println!("\n{}", "─".repeat(60).cyan());
    if verbose {
        println!(
            "Indexed {} words ({} trie nodes), searched in {:.3}ms",
            outcome.word_count,
            outcome.node_count,
            outcome.elapsed.as_secs_f64() * 1e3
        );
    }

    if results.is_empty() {
        println!("{}", "No word from the dictionary fits this board.".yellow());
        return;
    }

    println!(
        "Best score: {}",
        results.best_score().to_string().bright_yellow().bold()
    );
    if results.objective() == Objective::Eco {
        println!(
            "Best gem count: {}",
            results.best_eco_score().to_string().bright_yellow().bold()
        );
    }
    println!("Tied paths: {}", results.paths().len());
    println!("{}", "─".repeat(60).cyan());

    for path in results.paths().iter().take(limit) {
        println!();
        print_path_grid(board, path);
        println!(
            "\n  word: {}  swaps: {}",
            path.word().to_uppercase().bright_yellow().bold(),
            path.swap_count(board)
        );
        println!("  path: {path}");
    }

    let hidden = results.paths().len().saturating_sub(limit);
    if hidden > 0 {
        println!("\n({hidden} more tied paths not shown)");
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Iterations:       {}", result.iterations);
    println!(
        "   Average time:     {}",
        format!("{:.3}ms", result.average.as_secs_f64() * 1e3)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fastest:          {}",
        format!("{:.3}ms", result.fastest.as_secs_f64() * 1e3).green()
    );
    println!(
        "   Slowest:          {}",
        format!("{:.3}ms", result.slowest.as_secs_f64() * 1e3).yellow()
    );
    println!("   Searches/second:  {:.1}", result.searches_per_second);

    println!("\n🎯 {}", "Search:".bright_cyan().bold());
    println!("   Best score:       {}", result.best_score);
    println!("   Tied paths:       {}", result.tied_paths);
    if result.stable {
        println!("   Reproducible:     {}", "yes".green());
    } else {
        println!(
            "   Reproducible:     {}",
            "NO - best score varied between runs".red().bold()
        );
    }
}
