//! Editable grid backing the board entry forms
//!
//! Unlike `Board`, an editor grid may be incomplete while the user is typing:
//! several cells can hold the `0` placeholder at once. Non-zero values are kept
//! unique as they are entered.

use crate::core::{Board, BoardError};

/// What happened to a cell edit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// The cell now holds the new value
    Inserted,
    /// The cell already held that value
    Unchanged,
    /// The value is present in another cell and was rejected
    Duplicate,
    /// The value does not fit on this board
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridEditor {
    size: usize,
    cells: Vec<u8>,
}

impl GridEditor {
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        Self {
            size: board.size(),
            cells: board.tiles().to_vec(),
        }
    }

    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.cells[row * self.size + col]
    }

    /// Write a value into a cell
    ///
    /// Non-zero values already present elsewhere in the grid are rejected;
    /// `0` is a placeholder and may repeat.
    pub fn set(&mut self, row: usize, col: usize, value: u8) -> EditResult {
        let index = row * self.size + col;
        let max = self.cells.len() - 1;

        if usize::from(value) > max {
            return EditResult::OutOfRange;
        }
        if self.cells[index] == value {
            return EditResult::Unchanged;
        }
        if value != 0 && self.cells.contains(&value) {
            return EditResult::Duplicate;
        }

        self.cells[index] = value;
        EditResult::Inserted
    }

    /// Validate the grid as a complete board
    ///
    /// # Errors
    /// Returns `BoardError::DuplicateValue(0)` while more than one cell is empty.
    pub fn to_board(&self) -> Result<Board, BoardError> {
        Board::new(self.cells.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor() -> GridEditor {
        GridEditor::from_board(&Board::parse("012345678").unwrap())
    }

    #[test]
    fn duplicate_value_rejected() {
        let mut grid = editor();
        assert_eq!(grid.set(0, 0, 5), EditResult::Duplicate);
        assert_eq!(grid.get(0, 0), 0);
    }

    #[test]
    fn placeholder_may_repeat() {
        let mut grid = editor();
        assert_eq!(grid.set(1, 1, 0), EditResult::Inserted);
        assert_eq!(grid.get(1, 1), 0);
        assert!(matches!(grid.to_board(), Err(BoardError::DuplicateValue(0))));
    }

    #[test]
    fn freed_value_can_be_reused() {
        let mut grid = editor();
        assert_eq!(grid.set(1, 1, 0), EditResult::Inserted);
        assert_eq!(grid.set(0, 0, 4), EditResult::Inserted);
        assert_eq!(grid.to_board().unwrap(), Board::parse("412305678").unwrap());
    }

    #[test]
    fn same_value_is_unchanged() {
        let mut grid = editor();
        assert_eq!(grid.set(0, 1, 1), EditResult::Unchanged);
    }

    #[test]
    fn out_of_range_rejected() {
        let mut grid = editor();
        assert_eq!(grid.set(0, 0, 9), EditResult::OutOfRange);
    }
}
