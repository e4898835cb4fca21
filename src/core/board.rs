//! Sliding puzzle board representation
//!
//! A Board is an immutable N x N grid stored row-major, with `0` marking the empty cell.

use super::Move;
use std::fmt;
use thiserror::Error;

/// Smallest supported grid width
pub const MIN_SIZE: usize = 2;
/// Largest supported grid width (tile values must fit in a `u8`)
pub const MAX_SIZE: usize = 5;

/// Error type for malformed boards
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Board is empty")]
    Empty,
    #[error("Board width must be between {MIN_SIZE} and {MAX_SIZE}, got {0}")]
    UnsupportedSize(usize),
    #[error("Board needs a square number of cells, got {0}")]
    NotSquare(usize),
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Value {value} is out of range (0..={max})")]
    ValueOutOfRange { value: u8, max: u8 },
    #[error("Value {0} appears more than once")]
    DuplicateValue(u8),
    #[error("Cannot parse '{0}' as a tile value")]
    InvalidToken(String),
    #[error("Initial board is {initial}x{initial} but goal board is {goal}x{goal}")]
    SizeMismatch { initial: usize, goal: usize },
}

/// An N x N sliding puzzle configuration
///
/// Values `1..N²-1` appear exactly once and `0` marks the empty cell.
/// Boards are value objects: sliding produces a new board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
    blank: usize,
}

impl Board {
    /// Create a board from a row-major tile vector
    ///
    /// # Errors
    /// Returns `BoardError` if:
    /// - The cell count is not a perfect square
    /// - The width is outside `MIN_SIZE..=MAX_SIZE`
    /// - A value is out of range or repeated
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::core::Board;
    ///
    /// let board = Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 0]).unwrap();
    /// assert_eq!(board.size(), 3);
    /// assert_eq!(board.blank(), (2, 2));
    ///
    /// assert!(Board::new(vec![1, 1, 2, 0]).is_err());
    /// ```
    pub fn new(tiles: Vec<u8>) -> Result<Self, BoardError> {
        if tiles.is_empty() {
            return Err(BoardError::Empty);
        }

        let size = square_width(tiles.len()).ok_or(BoardError::NotSquare(tiles.len()))?;
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }

        let max = (tiles.len() - 1) as u8;
        let mut seen = vec![false; tiles.len()];
        for &value in &tiles {
            if value > max {
                return Err(BoardError::ValueOutOfRange { value, max });
            }
            if std::mem::replace(&mut seen[usize::from(value)], true) {
                return Err(BoardError::DuplicateValue(value));
            }
        }

        // Every value 0..=max is present exactly once, so a blank exists
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or_default();

        Ok(Self { size, tiles, blank })
    }

    /// Create a board from a list of rows
    ///
    /// # Errors
    /// Returns `BoardError::RaggedRow` if a row length differs from the row count,
    /// and any error of [`Board::new`] otherwise.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, BoardError> {
        let size = rows.len();
        let mut tiles = Vec::with_capacity(size * size);

        for (row, cells) in rows.iter().enumerate() {
            let cells = cells.as_ref();
            if cells.len() != size {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: size,
                    found: cells.len(),
                });
            }
            tiles.extend_from_slice(cells);
        }

        Self::new(tiles)
    }

    /// The canonical solved board: `1..N²-1` in order, blank last
    ///
    /// # Errors
    /// Returns `BoardError::UnsupportedSize` if `size` is outside the supported range.
    pub fn solved(size: usize) -> Result<Self, BoardError> {
        if !(MIN_SIZE..=MAX_SIZE).contains(&size) {
            return Err(BoardError::UnsupportedSize(size));
        }
        let cells = size * size;
        let tiles = (1..cells).map(|v| v as u8).chain(std::iter::once(0)).collect();
        Self::new(tiles)
    }

    /// Parse a board from text
    ///
    /// Accepted forms:
    /// - rows separated by `/` or newlines, cells by `,` or whitespace: `"1,2,3/4,5,6/7,8,0"`
    /// - a flat list of cells: `"1 2 3 4 5 6 7 8 0"`
    /// - compact digits for boards up to 3x3: `"123456780"`
    ///
    /// # Errors
    /// Returns `BoardError` for unparsable tokens or an invalid grid.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::core::Board;
    ///
    /// let a = Board::parse("0,1,2/3,4,5/6,7,8").unwrap();
    /// let b = Board::parse("012345678").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::Empty);
        }

        if text.contains('/') || text.contains('\n') {
            let rows = text
                .split(['/', '\n'])
                .map(str::trim)
                .filter(|row| !row.is_empty())
                .map(parse_cells)
                .collect::<Result<Vec<_>, _>>()?;
            return Self::from_rows(&rows);
        }

        if text.contains(',') || text.contains(char::is_whitespace) {
            return Self::new(parse_cells(text)?);
        }

        let tiles = text
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| BoardError::InvalidToken(c.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(tiles)
    }

    /// Grid width
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Row-major tile values
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// Value at a cell
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds
    #[inline]
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(col < self.size, "column {col} out of bounds");
        self.tiles[row * self.size + col]
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.tiles.chunks(self.size)
    }

    /// Row and column of the empty cell
    #[inline]
    #[must_use]
    pub const fn blank(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Row and column of a value, if present
    #[must_use]
    pub fn position_of(&self, value: u8) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&t| t == value)
            .map(|i| (i / self.size, i % self.size))
    }

    /// Slide the empty cell in a direction
    ///
    /// Returns `None` if the move would leave the grid.
    #[must_use]
    pub fn slide(&self, mv: Move) -> Option<Self> {
        let (row, col) = self.blank();
        let (dr, dc) = mv.offset();
        let new_row = row.checked_add_signed(dr).filter(|&r| r < self.size)?;
        let new_col = col.checked_add_signed(dc).filter(|&c| c < self.size)?;
        let target = new_row * self.size + new_col;

        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, target);

        Some(Self {
            size: self.size,
            tiles,
            blank: target,
        })
    }

    /// All boards reachable by one slide, in `Move::ALL` order
    pub fn successors(&self) -> impl Iterator<Item = (Move, Self)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(|mv| self.slide(mv).map(|board| (mv, board)))
    }

    /// Number of tile pairs that appear in reverse order, ignoring the blank
    #[must_use]
    pub fn inversions(&self) -> usize {
        count_inversions(&self.tiles)
    }

    /// Check whether `goal` is reachable from this board by legal slides
    ///
    /// Uses the permutation parity invariant: on odd widths every slide preserves
    /// inversion parity; on even widths a vertical slide flips it together with
    /// the blank row, so their combined parity is preserved.
    #[must_use]
    pub fn is_solvable_to(&self, goal: &Self) -> bool {
        if self.size != goal.size || !self.same_values(goal) {
            return false;
        }

        let inversions = count_inversions(&self.relabel_for(goal));

        if self.size % 2 == 1 {
            inversions % 2 == 0
        } else {
            let row_distance = self.blank().0.abs_diff(goal.blank().0);
            (inversions + row_distance) % 2 == 0
        }
    }

    /// Rename tiles so that `goal` reads `1..N²-1` in order, keeping the blank as `0`
    fn relabel_for(&self, goal: &Self) -> Vec<u8> {
        let mut rank = vec![0u8; self.tiles.len()];
        let mut next = 1u8;
        for &value in &goal.tiles {
            if value != 0 {
                rank[usize::from(value)] = next;
                next += 1;
            }
        }
        self.tiles.iter().map(|&t| rank[usize::from(t)]).collect()
    }

    fn same_values(&self, other: &Self) -> bool {
        let mut a = self.tiles.clone();
        let mut b = other.tiles.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.tiles.len() > 10 { 2 } else { 1 };
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", "_")
                    } else {
                        format!("{v:>width$}")
                    }
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

fn parse_cells(text: &str) -> Result<Vec<u8>, BoardError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u8>()
                .map_err(|_| BoardError::InvalidToken(token.to_string()))
        })
        .collect()
}

fn square_width(cells: usize) -> Option<usize> {
    let width = cells.isqrt();
    (width * width == cells).then_some(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn board(tiles: &[u8]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    #[test]
    fn board_creation_valid() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(b.size(), 3);
        assert_eq!(b.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(b.blank(), (2, 2));
        assert_eq!(b.get(1, 0), 4);
    }

    #[test]
    fn board_creation_rejects_duplicates() {
        assert_eq!(
            Board::new(vec![1, 2, 3, 4, 5, 6, 7, 8, 8]),
            Err(BoardError::DuplicateValue(8))
        );
        assert_eq!(
            Board::new(vec![0, 0, 1, 2]),
            Err(BoardError::DuplicateValue(0))
        );
    }

    #[test]
    fn board_creation_rejects_out_of_range() {
        assert_eq!(
            Board::new(vec![1, 2, 3, 4, 5, 6, 7, 9, 0]),
            Err(BoardError::ValueOutOfRange { value: 9, max: 8 })
        );
    }

    #[test]
    fn board_creation_rejects_bad_shapes() {
        assert_eq!(Board::new(vec![]), Err(BoardError::Empty));
        assert_eq!(Board::new(vec![0, 1, 2]), Err(BoardError::NotSquare(3)));
        assert_eq!(Board::new(vec![0]), Err(BoardError::UnsupportedSize(1)));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let rows: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![4, 5], vec![6, 7, 8, 0]];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn solved_board_layout() {
        assert_eq!(Board::solved(3).unwrap(), board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]));
        assert_eq!(Board::solved(2).unwrap(), board(&[1, 2, 3, 0]));
        assert!(Board::solved(6).is_err());
    }

    #[test]
    fn parse_all_forms_agree() {
        let expected = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(Board::parse("0,1,2/3,4,5/6,7,8").unwrap(), expected);
        assert_eq!(Board::parse("0 1 2\n3 4 5\n6 7 8\n").unwrap(), expected);
        assert_eq!(Board::parse("0 1 2 3 4 5 6 7 8").unwrap(), expected);
        assert_eq!(Board::parse("012345678").unwrap(), expected);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(
            Board::parse("0,1,x/3,4,5/6,7,8"),
            Err(BoardError::InvalidToken("x".to_string()))
        );
        assert_eq!(Board::parse("   "), Err(BoardError::Empty));
        assert!(Board::parse("01234567a").is_err());
    }

    #[test]
    fn parse_larger_board() {
        let b = Board::parse("1,2,3,4/5,6,7,8/9,10,11,12/13,14,15,0").unwrap();
        assert_eq!(b, Board::solved(4).unwrap());
    }

    #[test]
    fn slide_moves_blank() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        assert_eq!(b.slide(Move::Up).unwrap().tiles(), &[1, 0, 3, 4, 2, 5, 6, 7, 8]);
        assert_eq!(b.slide(Move::Down).unwrap().tiles(), &[1, 2, 3, 4, 7, 5, 6, 0, 8]);
        assert_eq!(b.slide(Move::Left).unwrap().tiles(), &[1, 2, 3, 0, 4, 5, 6, 7, 8]);
        assert_eq!(b.slide(Move::Right).unwrap().tiles(), &[1, 2, 3, 4, 5, 0, 6, 7, 8]);
    }

    #[test]
    fn slide_does_not_mutate_original() {
        let b = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]);
        let _ = b.slide(Move::Up);
        assert_eq!(b.tiles(), &[1, 2, 3, 4, 0, 5, 6, 7, 8]);
    }

    #[test]
    fn slide_blocked_at_edges() {
        let corner = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert!(corner.slide(Move::Up).is_none());
        assert!(corner.slide(Move::Left).is_none());
        assert!(corner.slide(Move::Down).is_some());
        assert!(corner.slide(Move::Right).is_some());
    }

    #[test]
    fn successor_counts() {
        assert_eq!(board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]).successors().count(), 2);
        assert_eq!(board(&[1, 0, 2, 3, 4, 5, 6, 7, 8]).successors().count(), 3);
        assert_eq!(board(&[1, 2, 3, 4, 0, 5, 6, 7, 8]).successors().count(), 4);
    }

    #[test]
    fn successors_follow_move_order() {
        let moves: Vec<Move> = board(&[1, 2, 3, 4, 0, 5, 6, 7, 8])
            .successors()
            .map(|(mv, _)| mv)
            .collect();
        assert_eq!(moves, Move::ALL.to_vec());
    }

    #[test]
    fn position_lookup() {
        let b = board(&[8, 6, 7, 2, 5, 4, 3, 0, 1]);
        assert_eq!(b.position_of(8), Some((0, 0)));
        assert_eq!(b.position_of(1), Some((2, 2)));
        assert_eq!(b.position_of(0), Some(b.blank()));
    }

    #[test]
    fn inversion_count() {
        assert_eq!(Board::solved(3).unwrap().inversions(), 0);
        assert_eq!(board(&[2, 1, 3, 4, 5, 6, 7, 8, 0]).inversions(), 1);
    }

    #[test]
    fn solvability_odd_width() {
        let goal = Board::solved(3).unwrap();
        assert!(board(&[1, 2, 3, 4, 5, 6, 0, 7, 8]).is_solvable_to(&goal));
        assert!(!board(&[1, 2, 3, 4, 5, 6, 8, 7, 0]).is_solvable_to(&goal));
    }

    #[test]
    fn solvability_against_custom_goal() {
        let initial = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let goal = board(&[1, 2, 3, 4, 5, 0, 6, 7, 8]);
        assert!(initial.is_solvable_to(&goal));

        let swapped = board(&[2, 1, 3, 4, 5, 0, 6, 7, 8]);
        assert!(!initial.is_solvable_to(&swapped));
    }

    #[test]
    fn solvability_even_width() {
        let goal = Board::solved(2).unwrap();
        assert!(board(&[1, 2, 0, 3]).is_solvable_to(&goal));
        assert!(board(&[0, 2, 1, 3]).is_solvable_to(&goal));
        assert!(!board(&[2, 1, 3, 0]).is_solvable_to(&goal));
    }

    #[test]
    fn solvability_size_mismatch() {
        let small = Board::solved(2).unwrap();
        let large = Board::solved(3).unwrap();
        assert!(!small.is_solvable_to(&large));
    }

    #[test]
    fn display_grid() {
        let b = board(&[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(format!("{b}"), "1 2 3\n4 5 6\n7 8 _\n");
    }
}
