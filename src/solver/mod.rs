//! Search and scoring engine
//!
//! Builds the bound-annotated dictionary trie for a board, then runs the
//! pruned backtracking search over every starting cell.

pub mod results;
pub mod scoring;
mod search;
mod trie;

pub use results::{Objective, ResultSet};
pub use search::{SearchConfig, SearchEngine};
pub use trie::{BoundOverflow, NodeId, Trie, build_trie};
