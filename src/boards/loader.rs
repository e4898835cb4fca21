//! Puzzle file loading
//!
//! One puzzle per line as `initial ; goal`, where each board uses any form
//! accepted by [`Board::parse`]. Blank lines and `#` comments are skipped.

use super::PuzzlePair;
use crate::core::{Board, BoardError};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for puzzle files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read puzzle file: {0}")]
    Io(#[from] io::Error),
    #[error("Line {line}: expected 'initial ; goal'")]
    MissingGoal { line: usize },
    #[error("Line {line}: {source}")]
    InvalidBoard {
        line: usize,
        #[source]
        source: BoardError,
    },
}

/// Load puzzle pairs from a file
///
/// # Errors
///
/// Returns `LoadError` if the file cannot be read or a line is malformed.
///
/// # Examples
/// ```no_run
/// use eight_puzzle::boards::loader::load_from_file;
///
/// let puzzles = load_from_file("puzzles.txt").unwrap();
/// println!("Loaded {} puzzles", puzzles.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PuzzlePair>, LoadError> {
    let content = fs::read_to_string(path)?;
    pairs_from_str(&content)
}

/// Parse puzzle pairs from text
///
/// # Errors
///
/// Returns `LoadError` naming the first malformed line (1-based).
///
/// # Examples
/// ```
/// use eight_puzzle::boards::loader::pairs_from_str;
///
/// let pairs = pairs_from_str("# warm-up\n123456708 ; 123456780\n").unwrap();
/// assert_eq!(pairs.len(), 1);
/// ```
pub fn pairs_from_str(content: &str) -> Result<Vec<PuzzlePair>, LoadError> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(line, text)| -> Result<PuzzlePair, LoadError> {
            let (initial, goal) = text.split_once(';').ok_or(LoadError::MissingGoal { line })?;
            let parse = |s: &str| {
                Board::parse(s).map_err(|source| LoadError::InvalidBoard { line, source })
            };
            Ok(PuzzlePair {
                initial: parse(initial)?,
                goal: parse(goal)?,
            })
        })
        .collect()
}
