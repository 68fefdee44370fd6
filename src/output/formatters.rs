//! Formatting utilities for terminal output
//!
//! The pure classification half of rendering: how each board cell relates
//! to a path determines its color and bracketing, decided here and painted
//! in `display`.

use crate::core::{Board, Path};

/// How a board cell is drawn relative to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRender {
    /// Not on the path
    Unused,
    /// First step of the path
    Start,
    /// On the path with a letter that is not the printed one
    Swapped,
    /// On the path with the printed letter
    Natural,
}

/// Classify a cell against a path
///
/// A swapped *starting* cell renders as `Start`; the path listing still
/// reveals the substitution.
#[must_use]
pub fn classify(board: &Board, path: &Path, x: usize, y: usize) -> CellRender {
    match path.step_at(x, y) {
        None => CellRender::Unused,
        Some((0, _)) => CellRender::Start,
        Some((_, step)) if step.letter != board.cell(x, y).letter() => CellRender::Swapped,
        Some(_) => CellRender::Natural,
    }
}

/// The letter a cell shows when drawn with a path overlaid
///
/// Path cells show the played letter, other cells the printed one.
#[must_use]
pub fn displayed_letter(board: &Board, path: &Path, x: usize, y: usize) -> char {
    path.step_at(x, y)
        .map_or_else(|| board.cell(x, y).letter().as_char(), |(_, step)| {
            step.letter.as_char()
        })
}

/// Compact token for a cell: letter plus modifier and gem codes
///
/// The same format the board file uses (`a`, `bl`, `dw`, `fg`, ...).
#[must_use]
pub fn cell_token(board: &Board, x: usize, y: usize) -> String {
    let cell = board.cell(x, y);
    let mut token = String::with_capacity(3);
    token.push(cell.letter().as_char());
    if let Some(code) = cell.modifier().code() {
        token.push(code);
    }
    if cell.has_gem() {
        token.push('g');
    }
    token
}
