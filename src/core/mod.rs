//! Core domain types for the grid solver
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. Everything here is validated at construction; the search
//! phase operates on these types without any failure surface.

mod bitboard;
mod board;
mod cell;
mod letter;
mod path;
mod word;

pub use bitboard::BitBoard;
pub use board::{Board, BoardError, CELL_COUNT, SIZE};
pub use cell::{Cell, CellError, Modifier};
pub use letter::{ALPHABET, Letter, LetterError};
pub use path::{Path, Step};
pub use word::{Word, WordError};
