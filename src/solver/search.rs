//! Bound-pruned backtracking search
//!
//! One independent sub-search per starting cell (and, when the swap budget
//! is positive, per alternate starting letter). Each sub-search walks the
//! board depth-first in lockstep with the trie, carrying its progress in a
//! small `Copy` state value — every branch owns its own copy, so
//! backtracking needs no undo and the sub-searches parallelize without
//! shared mutable state. Sub-search results reduce into one global
//! [`ResultSet`] through a deterministic merge.

use crate::core::{BitBoard, Board, Cell, Letter, Modifier, Path};
use crate::solver::results::{Objective, ResultSet};
use crate::solver::scoring::{length_bonus, letter_multiplier, letter_value};
use crate::solver::trie::{NodeId, Trie};
use rayon::prelude::*;

/// Search parameters
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Letter swaps available per path
    pub swaps: u8,
    /// Objective ordering for the result set
    pub objective: Objective,
}

/// Per-branch search progress, copied at every descent
#[derive(Debug, Clone, Copy)]
struct SearchState {
    occupied: BitBoard,
    word_points: u32,
    eco_points: u32,
    length: u8,
    swaps_remaining: u8,
    has_word_multiplier: bool,
}

impl SearchState {
    /// State before any cell is entered; occupancy starts at the ice mask
    const fn initial(ice: BitBoard, swaps: u8) -> Self {
        Self {
            occupied: ice,
            word_points: 0,
            eco_points: 0,
            length: 0,
            swaps_remaining: swaps,
            has_word_multiplier: false,
        }
    }

    /// The state after playing `letter` on `cell` at `(x, y)`
    ///
    /// The cell's physical modifier and gem apply whether or not the letter
    /// was swapped; only the budget notices the difference.
    fn enter(mut self, cell: &Cell, x: usize, y: usize, letter: Letter, used_swap: bool) -> Self {
        debug_assert!(!used_swap || self.swaps_remaining > 0);

        self.occupied.insert(x, y);
        self.word_points += letter_value(letter) * letter_multiplier(cell.modifier());
        self.eco_points += u32::from(cell.has_gem());
        self.has_word_multiplier |= cell.modifier() == Modifier::DoubleWord;
        self.length += 1;
        self.swaps_remaining -= u8::from(used_swap);
        self
    }

    /// Word score of the path so far
    fn word_score(&self) -> u32 {
        let multiplier = if self.has_word_multiplier { 2 } else { 1 };
        self.word_points * multiplier + length_bonus(self.length as usize)
    }
}

/// One top-level sub-search: a starting cell and starting letter
struct Start {
    x: usize,
    y: usize,
    letter: Letter,
    node: NodeId,
    swap_used: bool,
}

/// The search engine, borrowing the immutable board and trie
pub struct SearchEngine<'a> {
    board: &'a Board,
    trie: &'a Trie,
    config: SearchConfig,
}

impl<'a> SearchEngine<'a> {
    /// Create an engine over an already-built board and trie
    #[must_use]
    pub const fn new(board: &'a Board, trie: &'a Trie, config: SearchConfig) -> Self {
        Self {
            board,
            trie,
            config,
        }
    }

    /// Run every sub-search and merge their results
    ///
    /// Sub-searches are mutually independent and run as parallel tasks,
    /// each accumulating into its own local result set; the final reduce is
    /// associative, so the merged outcome is the same for any task order.
    #[must_use]
    pub fn run(&self) -> ResultSet {
        let ice = self.board.ice_mask();
        self.starts()
            .into_par_iter()
            .map(|start| self.search_from(&start, ice))
            .reduce(|| ResultSet::new(self.config.objective), ResultSet::merge)
    }

    /// Enumerate the top-level sub-searches
    ///
    /// Ice cells are never starting points. With no swap budget each cell
    /// contributes at most its printed letter; otherwise every letter with a
    /// root trie child is tried, a differing letter costing one swap. A
    /// letter with no trie child contributes nothing.
    fn starts(&self) -> Vec<Start> {
        let root = self.trie.root();
        let mut starts = Vec::new();

        for (x, y, cell) in self.board.cells() {
            if cell.is_ice() {
                continue;
            }
            if self.config.swaps == 0 {
                if let Some(node) = self.trie.child(root, cell.letter()) {
                    starts.push(Start {
                        x,
                        y,
                        letter: cell.letter(),
                        node,
                        swap_used: false,
                    });
                }
            } else {
                for (letter, node) in self.trie.children(root) {
                    starts.push(Start {
                        x,
                        y,
                        letter,
                        node,
                        swap_used: letter != cell.letter(),
                    });
                }
            }
        }
        starts
    }

    /// Run one sub-search to completion
    fn search_from(&self, start: &Start, ice: BitBoard) -> ResultSet {
        let mut results = ResultSet::new(self.config.objective);
        let cell = self.board.cell(start.x, start.y);
        let state = SearchState::initial(ice, self.config.swaps).enter(
            cell,
            start.x,
            start.y,
            start.letter,
            start.swap_used,
        );

        let mut path = Path::with_max_capacity();
        path.push(start.x, start.y, start.letter);
        self.walk(start.node, start.x, start.y, state, &mut path, &mut results);
        results
    }

    /// Depth-first walk from a trie node at board position `(x, y)`
    fn walk(
        &self,
        node: NodeId,
        x: usize,
        y: usize,
        state: SearchState,
        path: &mut Path,
        results: &mut ResultSet,
    ) {
        // Bound prune: when the subtree's ceiling is strictly below the
        // incumbent, no word through here can even tie it. A ceiling equal
        // to the incumbent must still be explored for tied paths.
        if self.trie.max_score(node) < results.best_score() {
            return;
        }

        if self.trie.is_terminal(node) {
            results.offer(path.clone(), state.word_score(), state.eco_points);
        }

        for (nx, ny) in state.occupied.free_neighbors(x, y).iter() {
            let cell = self.board.cell(nx, ny);
            if state.swaps_remaining > 0 {
                // Any trie child is playable; a letter other than the
                // printed one costs a swap but keeps the cell's modifier.
                for (letter, child) in self.trie.children(node) {
                    let used_swap = letter != cell.letter();
                    path.push(nx, ny, letter);
                    self.walk(
                        child,
                        nx,
                        ny,
                        state.enter(cell, nx, ny, letter, used_swap),
                        path,
                        results,
                    );
                    path.pop();
                }
            } else if let Some(child) = self.trie.child(node, cell.letter()) {
                path.push(nx, ny, cell.letter());
                self.walk(
                    child,
                    nx,
                    ny,
                    state.enter(cell, nx, ny, cell.letter(), false),
                    path,
                    results,
                );
                path.pop();
            }
        }
    }
}
