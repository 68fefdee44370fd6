//! Board cell and tile modifiers
//!
//! A cell carries a printed letter, at most one scoring/blocking modifier,
//! and an optional gem. Cells are parsed from board-file tokens: the letter
//! followed by modifier codes, e.g. `a`, `bl` (double letter), `ct` (triple
//! letter), `dw` (double word), `ei` (ice), `fg` (gem), `glg` (double letter
//! plus gem).

use super::letter::{Letter, LetterError};
use std::fmt;

/// Physical tile modifier attached to a cell
///
/// The modifier belongs to the cell, not the letter printed on it: a swapped
/// letter played on a double-letter tile is still doubled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modifier {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    /// Permanently blocked; never part of any path
    Ice,
    #[default]
    Normal,
}

impl Modifier {
    /// Modifier code used in the board text format, if any
    #[must_use]
    pub const fn code(self) -> Option<char> {
        match self {
            Self::DoubleLetter => Some('l'),
            Self::TripleLetter => Some('t'),
            Self::DoubleWord => Some('w'),
            Self::Ice => Some('i'),
            Self::Normal => None,
        }
    }
}

/// A single board cell, immutable after load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    letter: Letter,
    modifier: Modifier,
    has_gem: bool,
}

/// Error type for invalid cell tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellError {
    EmptyToken,
    Letter(LetterError),
    UnknownModifier(char),
    ConflictingModifier(char),
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "Cell token must not be empty"),
            Self::Letter(e) => write!(f, "{e}"),
            Self::UnknownModifier(c) => write!(f, "Unknown modifier code '{c}'"),
            Self::ConflictingModifier(c) => {
                write!(f, "Modifier code '{c}' conflicts with an earlier one")
            }
        }
    }
}

impl std::error::Error for CellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Letter(e) => Some(e),
            _ => None,
        }
    }
}

impl Cell {
    /// Create a cell directly from validated parts
    #[must_use]
    pub const fn new(letter: Letter, modifier: Modifier, has_gem: bool) -> Self {
        Self {
            letter,
            modifier,
            has_gem,
        }
    }

    /// Parse a board-file token: a letter plus optional modifier codes
    ///
    /// Codes: `l` double letter, `t` triple letter, `w` double word,
    /// `i` ice, `g` gem. At most one of `l`/`t`/`w`/`i` per cell; `g`
    /// combines with any of them.
    ///
    /// # Errors
    /// Returns `CellError` for an empty token, an invalid letter, an unknown
    /// code, or conflicting modifier codes.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{Cell, Modifier};
    ///
    /// let cell = Cell::parse("qt").unwrap();
    /// assert_eq!(cell.letter().as_char(), 'q');
    /// assert_eq!(cell.modifier(), Modifier::TripleLetter);
    ///
    /// assert!(Cell::parse("qx").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, CellError> {
        let mut chars = token.chars();
        let letter_char = chars.next().ok_or(CellError::EmptyToken)?;
        let letter = Letter::new(letter_char).map_err(CellError::Letter)?;

        let mut modifier = Modifier::Normal;
        let mut has_gem = false;
        for code in chars {
            let parsed = match code {
                'l' => Modifier::DoubleLetter,
                't' => Modifier::TripleLetter,
                'w' => Modifier::DoubleWord,
                'i' => Modifier::Ice,
                'g' => {
                    has_gem = true;
                    continue;
                }
                other => return Err(CellError::UnknownModifier(other)),
            };
            if modifier != Modifier::Normal {
                return Err(CellError::ConflictingModifier(code));
            }
            modifier = parsed;
        }

        Ok(Self::new(letter, modifier, has_gem))
    }

    /// The printed letter
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Letter {
        self.letter
    }

    /// The cell's physical modifier
    #[inline]
    #[must_use]
    pub const fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Whether the cell carries a gem
    #[inline]
    #[must_use]
    pub const fn has_gem(&self) -> bool {
        self.has_gem
    }

    /// Whether the cell is permanently blocked
    #[inline]
    #[must_use]
    pub const fn is_ice(&self) -> bool {
        matches!(self.modifier, Modifier::Ice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_parse_plain_letter() {
        let cell = Cell::parse("a").unwrap();
        assert_eq!(cell.letter().as_char(), 'a');
        assert_eq!(cell.modifier(), Modifier::Normal);
        assert!(!cell.has_gem());
    }

    #[test]
    fn cell_parse_modifiers() {
        assert_eq!(Cell::parse("bl").unwrap().modifier(), Modifier::DoubleLetter);
        assert_eq!(Cell::parse("ct").unwrap().modifier(), Modifier::TripleLetter);
        assert_eq!(Cell::parse("dw").unwrap().modifier(), Modifier::DoubleWord);
        assert_eq!(Cell::parse("ei").unwrap().modifier(), Modifier::Ice);
    }

    #[test]
    fn cell_parse_gem() {
        let cell = Cell::parse("fg").unwrap();
        assert_eq!(cell.modifier(), Modifier::Normal);
        assert!(cell.has_gem());
    }

    #[test]
    fn cell_parse_gem_combined_with_modifier() {
        // Order of codes does not matter
        for token in ["glg", "ggl"] {
            let cell = Cell::parse(token).unwrap();
            assert_eq!(cell.letter().as_char(), 'g');
            assert_eq!(cell.modifier(), Modifier::DoubleLetter);
            assert!(cell.has_gem());
        }
    }

    #[test]
    fn cell_parse_empty_token() {
        assert!(matches!(Cell::parse(""), Err(CellError::EmptyToken)));
    }

    #[test]
    fn cell_parse_invalid_letter() {
        assert!(matches!(Cell::parse("A"), Err(CellError::Letter(_))));
        assert!(matches!(Cell::parse("5"), Err(CellError::Letter(_))));
    }

    #[test]
    fn cell_parse_unknown_modifier() {
        assert!(matches!(
            Cell::parse("ax"),
            Err(CellError::UnknownModifier('x'))
        ));
    }

    #[test]
    fn cell_parse_conflicting_modifiers() {
        assert!(matches!(
            Cell::parse("alt"),
            Err(CellError::ConflictingModifier('t'))
        ));
    }

    #[test]
    fn cell_is_ice() {
        assert!(Cell::parse("ai").unwrap().is_ice());
        assert!(!Cell::parse("al").unwrap().is_ice());
    }
}
