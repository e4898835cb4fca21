//! Boards shown when the interactive editor first opens

use super::PuzzlePair;
use crate::core::Board;

/// Initial grid preloaded in the editor
pub const DEFAULT_INITIAL: [[u8; 3]; 3] = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// Goal grid preloaded in the editor
pub const DEFAULT_GOAL: [[u8; 3]; 3] = [[1, 2, 3], [4, 5, 0], [6, 7, 8]];

/// The preset pair as validated boards
#[must_use]
pub fn default_pair() -> PuzzlePair {
    PuzzlePair {
        initial: preset_board(&DEFAULT_INITIAL),
        goal: preset_board(&DEFAULT_GOAL),
    }
}

fn preset_board(rows: &[[u8; 3]; 3]) -> Board {
    Board::from_rows(rows).expect("preset boards are valid permutations")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid_and_solvable() {
        let pair = default_pair();
        assert_eq!(pair.initial.size(), 3);
        assert!(pair.initial.is_solvable_to(&pair.goal));
        assert_ne!(pair.initial, pair.goal);
    }
}
