//! Grid Word Solver - CLI
//!
//! Loads a board and dictionary, runs the bound-pruned trie search, and
//! renders the best-scoring path(s).

use anyhow::Result;
use clap::{Parser, Subcommand};
use spellcast_solver::{
    commands::{SolveConfig, run_benchmark, run_solve},
    core::{Board, Word},
    input::{load_board, load_dictionary},
    output::{print_benchmark_result, print_board, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "spellcast_solver",
    about = "Boggle-style 5x5 grid word solver with letter swaps",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board file: 5 rows of 5 cell tokens (letter + optional l/t/w/i/g codes)
    #[arg(short, long, global = true, default_value = "board.txt")]
    board: String,

    /// Dictionary file: one word per line
    #[arg(short = 'w', long, global = true, default_value = "wordlist.txt")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the best-scoring path(s) (default)
    Solve {
        /// Letter swaps available per path
        #[arg(short, long, default_value_t = 0)]
        swaps: u8,

        /// Rank by gems collected; word score breaks ties
        #[arg(short, long)]
        eco: bool,

        /// Maximum number of tied paths to render
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Show dictionary and timing statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// Parse the board and print it with its modifiers
    Show,

    /// Benchmark the search on this board and dictionary
    Bench {
        /// Letter swaps available per path
        #[arg(short, long, default_value_t = 0)]
        swaps: u8,

        /// Rank by gems collected; word score breaks ties
        #[arg(short, long)]
        eco: bool,

        /// Number of iterations
        #[arg(short = 'n', long, default_value_t = 20)]
        iterations: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let board = load_board(&cli.board)?;

    // Default to a plain solve when no subcommand is given
    let command = cli.command.unwrap_or(Commands::Solve {
        swaps: 0,
        eco: false,
        limit: 10,
        verbose: false,
    });

    match command {
        Commands::Solve {
            swaps,
            eco,
            limit,
            verbose,
        } => {
            let words = load_dictionary(&cli.wordlist)?;
            run_solve_command(&board, &words, swaps, eco, limit, verbose)
        }
        Commands::Show => {
            print_board(&board);
            Ok(())
        }
        Commands::Bench {
            swaps,
            eco,
            iterations,
        } => {
            let words = load_dictionary(&cli.wordlist)?;
            run_bench_command(&board, &words, swaps, eco, iterations)
        }
    }
}

fn run_solve_command(
    board: &Board,
    words: &[Word],
    swaps: u8,
    eco: bool,
    limit: usize,
    verbose: bool,
) -> Result<()> {
    let outcome = run_solve(board, words, SolveConfig::new(swaps, eco))?;
    print_solve_result(board, &outcome, limit, verbose);
    Ok(())
}

fn run_bench_command(
    board: &Board,
    words: &[Word],
    swaps: u8,
    eco: bool,
    iterations: usize,
) -> Result<()> {
    println!(
        "Benchmarking {iterations} iterations ({} words, swaps={swaps}, eco={eco})...",
        words.len()
    );
    let result = run_benchmark(board, words, SolveConfig::new(swaps, eco), iterations)?;
    print_benchmark_result(&result);
    Ok(())
}
