//! Grid Word Solver
//!
//! Finds the highest-scoring word(s) traceable across a 5×5 letter grid
//! with tile modifiers, blocked cells, gems, and a budget of letter swaps,
//! using a dictionary trie with embedded pruning bounds.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use spellcast_solver::core::{Board, Word};
//! use spellcast_solver::solver::{SearchConfig, SearchEngine, build_trie};
//!
//! let board: Board = "a b c d e\nf g h i j\nk l m n o\np q r s t\nu v w x y"
//!     .parse()
//!     .unwrap();
//! let words = vec![Word::new("glow").unwrap()];
//!
//! let trie = build_trie(words.iter(), &board).unwrap();
//! let engine = SearchEngine::new(&board, &trie, SearchConfig::default());
//! let results = engine.run();
//! println!("best score: {}", results.best_score());
//! ```

// Core domain types
pub mod core;

// Search and scoring engine
pub mod solver;

// Board and dictionary loading
pub mod input;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
