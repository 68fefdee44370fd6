//! Scoring rules
//!
//! Pure functions: letter point values, tile multipliers, the long-word
//! bonus, the admissible per-word upper bound used to prune the search, and
//! the batch path scorer used for display and cross-checking.

use crate::core::{Board, Letter, Modifier, Path, Word};

/// Minimum path length that earns the long-word bonus
pub const LONG_WORD_LEN: usize = 6;

/// Bonus points for a long word
pub const LONG_WORD_BONUS: u32 = 10;

/// Point value per letter, indexed by alphabet position
const LETTER_POINTS: [u32; 26] = [
    1, // a
    4, // b
    5, // c
    3, // d
    1, // e
    5, // f
    3, // g
    4, // h
    1, // i
    7, // j
    6, // k
    3, // l
    4, // m
    2, // n
    1, // o
    4, // p
    8, // q
    2, // r
    2, // s
    2, // t
    4, // u
    5, // v
    5, // w
    7, // x
    4, // y
    8, // z
];

/// Point value of a letter
#[inline]
#[must_use]
pub const fn letter_value(letter: Letter) -> u32 {
    LETTER_POINTS[letter.index()]
}

/// Multiplier a tile applies to the letter played on it
#[inline]
#[must_use]
pub const fn letter_multiplier(modifier: Modifier) -> u32 {
    match modifier {
        Modifier::DoubleLetter => 2,
        Modifier::TripleLetter => 3,
        _ => 1,
    }
}

/// Long-word bonus for a path of `len` steps
#[inline]
#[must_use]
pub const fn length_bonus(len: usize) -> u32 {
    if len >= LONG_WORD_LEN { LONG_WORD_BONUS } else { 0 }
}

/// Admissible upper bound on the score a word can achieve on a board
///
/// Sum of letter values, plus the best letter boosted by the board's
/// strongest letter modifier, doubled when the board has any double-word
/// tile, plus the length bonus. Never underestimates the true achievable
/// score; it is not required to be tight.
///
/// # Examples
/// ```
/// use spellcast_solver::core::{Modifier, Word};
/// use spellcast_solver::solver::scoring::upper_bound;
///
/// let word = Word::new("aa").unwrap();
/// assert_eq!(upper_bound(&word, false, Modifier::Normal), 2);
/// // Double-word board doubles, triple-letter boosts the best letter
/// assert_eq!(upper_bound(&word, true, Modifier::TripleLetter), (2 + 2) * 2);
/// ```
#[must_use]
pub fn upper_bound(word: &Word, has_double_word: bool, max_letter_modifier: Modifier) -> u32 {
    let mut total = 0;
    let mut best_letter = 0;
    for letter in word.letters() {
        let value = letter_value(letter);
        total += value;
        best_letter = best_letter.max(value);
    }

    total += best_letter * (letter_multiplier(max_letter_modifier) - 1);
    if has_double_word {
        total *= 2;
    }
    total + length_bonus(word.len())
}

/// Score a finished path against the board
///
/// Each played letter's value times its cell's letter multiplier, doubled
/// once if any visited cell is a double-word tile, plus the length bonus.
/// The search accumulates this incrementally; this batch form exists for
/// display and for cross-checking the incremental sum.
#[must_use]
pub fn total_score(path: &Path, board: &Board) -> u32 {
    let mut score = 0;
    let mut word_multiplier = 1;

    for step in path.steps() {
        let cell = board.cell(step.x, step.y);
        score += letter_value(step.letter) * letter_multiplier(cell.modifier());
        if cell.modifier() == Modifier::DoubleWord {
            word_multiplier = 2;
        }
    }

    score * word_multiplier + length_bonus(path.len())
}

/// Count the gems collected along a path
#[must_use]
pub fn eco_score(path: &Path, board: &Board) -> u32 {
    path.steps()
        .iter()
        .filter(|s| board.cell(s.x, s.y).has_gem())
        .count() as u32
}
