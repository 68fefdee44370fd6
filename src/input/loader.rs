//! Board and dictionary loading
//!
//! Thin glue from files to validated domain types. Any offending entry
//! aborts the load with a diagnostic naming it — a bad word or cell is
//! never skipped silently, since a quietly shrunken dictionary would change
//! search results without a trace.

use crate::core::{Board, BoardError, Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for input loading
#[derive(Debug)]
pub enum LoadError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Board {
        path: PathBuf,
        source: BoardError,
    },
    Word {
        path: PathBuf,
        line: usize,
        text: String,
        source: WordError,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read {}: {source}", path.display())
            }
            Self::Board { path, source } => {
                write!(f, "Invalid board in {}: {source}", path.display())
            }
            Self::Word {
                path,
                line,
                text,
                source,
            } => write!(
                f,
                "Invalid word '{text}' at {}:{line}: {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Board { source, .. } => Some(source),
            Self::Word { source, .. } => Some(source),
        }
    }
}

/// Parse dictionary text: one word per line, blank lines ignored
///
/// Duplicates are dropped (trie insertion is idempotent anyway, but there is
/// no point scoring the same word twice). The first invalid entry aborts
/// with its line number.
///
/// # Errors
/// Returns the offending line and word on the first validation failure.
pub fn parse_dictionary(text: &str) -> Result<Vec<Word>, (usize, String, WordError)> {
    let mut seen = FxHashSet::default();
    let mut words = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let word = Word::new(trimmed).map_err(|e| (i + 1, trimmed.to_string(), e))?;
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

/// Load and validate a board file
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or the board text is
/// malformed.
pub fn load_board<P: AsRef<Path>>(path: P) -> Result<Board, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    text.parse().map_err(|source| LoadError::Board {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate a dictionary file
///
/// # Errors
/// Returns `LoadError` if the file cannot be read or any word is invalid.
pub fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_dictionary(&text).map_err(|(line, text, source)| LoadError::Word {
        path: path.to_path_buf(),
        line,
        text,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dictionary_basic() {
        let words = parse_dictionary("cat\ndog\nbird\n").unwrap();
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "cat");
        assert_eq!(words[2].text(), "bird");
    }

    #[test]
    fn parse_dictionary_skips_blank_lines() {
        let words = parse_dictionary("cat\n\n  \ndog\n").unwrap();
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_dictionary_deduplicates_preserving_order() {
        let words = parse_dictionary("cat\ndog\ncat\n").unwrap();
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, vec!["cat", "dog"]);
    }

    #[test]
    fn parse_dictionary_aborts_on_first_bad_word() {
        let (line, text, _) = parse_dictionary("cat\ndo-g\nbird\n").unwrap_err();
        assert_eq!(line, 2);
        assert_eq!(text, "do-g");
    }

    #[test]
    fn parse_dictionary_normalizes_case() {
        let words = parse_dictionary("CAT\ncat\n").unwrap();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].text(), "cat");
    }

    #[test]
    fn load_board_missing_file_is_io_error() {
        let err = load_board("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("not/here.txt"));
    }

    #[test]
    fn load_dictionary_missing_file_is_io_error() {
        let err = load_dictionary("definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
