//! Distance estimates toward the goal board
//!
//! Defines the Heuristic trait and concrete implementations.

use crate::core::Board;

/// Goal-side lookup table: for each tile value, its row and column in the goal
///
/// Built once per search so that every estimate is a linear pass over the board.
#[derive(Debug, Clone)]
pub struct GoalIndex {
    size: usize,
    positions: Vec<(usize, usize)>,
}

impl GoalIndex {
    #[must_use]
    pub fn new(goal: &Board) -> Self {
        let size = goal.size();
        let mut positions = vec![(0, 0); goal.tiles().len()];
        for (i, &value) in goal.tiles().iter().enumerate() {
            positions[usize::from(value)] = (i / size, i % size);
        }
        Self { size, positions }
    }

    /// Goal row and column of a tile value
    #[inline]
    #[must_use]
    pub fn position(&self, value: u8) -> (usize, usize) {
        self.positions[usize::from(value)]
    }

    /// Grid width of the goal
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Iterate over non-blank tiles as (value, current row, current column)
    fn tiles<'b>(&self, board: &'b Board) -> impl Iterator<Item = (u8, usize, usize)> + 'b {
        let size = self.size;
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &value)| value != 0)
            .map(move |(i, &value)| (value, i / size, i % size))
    }
}

/// An estimate of the number of slides left before reaching the goal
pub trait Heuristic {
    /// Estimate the remaining distance from `board` to the goal described by `goal`
    fn estimate(&self, board: &Board, goal: &GoalIndex) -> u32;
}

/// Enum wrapper for all heuristic types
///
/// Allows runtime selection of the heuristic while keeping static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeuristicType {
    /// Sum of Manhattan distances (default)
    Manhattan(Manhattan),
    /// Count of misplaced tiles
    Misplaced(Misplaced),
    /// Manhattan distance plus linear conflict penalty
    LinearConflict(LinearConflict),
}

impl Heuristic for HeuristicType {
    fn estimate(&self, board: &Board, goal: &GoalIndex) -> u32 {
        match self {
            Self::Manhattan(h) => h.estimate(board, goal),
            Self::Misplaced(h) => h.estimate(board, goal),
            Self::LinearConflict(h) => h.estimate(board, goal),
        }
    }
}

impl HeuristicType {
    /// Every heuristic, in display order
    pub const ALL: [Self; 3] = [
        Self::Manhattan(Manhattan),
        Self::Misplaced(Misplaced),
        Self::LinearConflict(LinearConflict),
    ];

    /// Create heuristic from name string
    ///
    /// Supported names: "manhattan", "misplaced", "hamming", "linear-conflict", "linear"
    /// Defaults to manhattan if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "misplaced" | "hamming" => Self::Misplaced(Misplaced),
            "linear-conflict" | "linear" => Self::LinearConflict(LinearConflict),
            _ => Self::Manhattan(Manhattan),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Manhattan(_) => "manhattan",
            Self::Misplaced(_) => "misplaced",
            Self::LinearConflict(_) => "linear-conflict",
        }
    }
}

impl Default for HeuristicType {
    fn default() -> Self {
        Self::Manhattan(Manhattan)
    }
}

/// Sum over all tiles of the grid distance between current and goal position
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    fn estimate(&self, board: &Board, goal: &GoalIndex) -> u32 {
        goal.tiles(board)
            .map(|(value, row, col)| {
                let (goal_row, goal_col) = goal.position(value);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Number of tiles not on their goal cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Misplaced;

impl Heuristic for Misplaced {
    fn estimate(&self, board: &Board, goal: &GoalIndex) -> u32 {
        goal.tiles(board)
            .filter(|&(value, row, col)| goal.position(value) != (row, col))
            .count() as u32
    }
}

/// Manhattan distance plus 2 for every pair of tiles that sit in their goal
/// line but in reversed order
///
/// Counted pairwise, so it can overestimate when three or more tiles conflict
/// in the same line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinearConflict;

impl Heuristic for LinearConflict {
    fn estimate(&self, board: &Board, goal: &GoalIndex) -> u32 {
        Manhattan.estimate(board, goal) + 2 * linear_conflicts(board, goal)
    }
}

fn linear_conflicts(board: &Board, goal: &GoalIndex) -> u32 {
    let size = goal.size();
    let mut conflicts = 0;

    // (line, current offset along line, goal offset along line) for tiles already in their goal line
    let mut in_row: Vec<Vec<(usize, usize)>> = vec![Vec::new(); size];
    let mut in_col: Vec<Vec<(usize, usize)>> = vec![Vec::new(); size];

    for (value, row, col) in goal.tiles(board) {
        let (goal_row, goal_col) = goal.position(value);
        if goal_row == row {
            in_row[row].push((col, goal_col));
        }
        if goal_col == col {
            in_col[col].push((row, goal_row));
        }
    }

    for line in in_row.iter().chain(in_col.iter()) {
        for (i, &(current_a, goal_a)) in line.iter().enumerate() {
            for &(current_b, goal_b) in &line[i + 1..] {
                if (current_a < current_b) != (goal_a < goal_b) {
                    conflicts += 1;
                }
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(tiles: &[u8]) -> Board {
        Board::new(tiles.to_vec()).unwrap()
    }

    #[test]
    fn goal_scores_zero_for_every_heuristic() {
        let goal = board(&[8, 6, 7, 2, 5, 4, 3, 0, 1]);
        let index = GoalIndex::new(&goal);
        for heuristic in HeuristicType::ALL {
            assert_eq!(heuristic.estimate(&goal, &index), 0, "{}", heuristic.name());
        }
    }

    #[test]
    fn goal_index_positions() {
        let goal = board(&[1, 2, 3, 4, 5, 0, 6, 7, 8]);
        let index = GoalIndex::new(&goal);
        assert_eq!(index.position(1), (0, 0));
        assert_eq!(index.position(0), (1, 2));
        assert_eq!(index.position(8), (2, 2));
    }

    #[test]
    fn manhattan_example_pair() {
        let initial = board(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        let goal = board(&[1, 2, 3, 4, 5, 0, 6, 7, 8]);
        let index = GoalIndex::new(&goal);

        // 1,2: one step left each; 3: up one, right two; 4,5: one step left each; 6,7,8 placed
        assert_eq!(Manhattan.estimate(&initial, &index), 1 + 1 + 3 + 1 + 1);
    }

    #[test]
    fn manhattan_single_slide() {
        let goal = Board::solved(3).unwrap();
        let index = GoalIndex::new(&goal);
        let one_away = board(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(Manhattan.estimate(&one_away, &index), 1);
    }

    #[test]
    fn misplaced_ignores_blank() {
        let goal = Board::solved(3).unwrap();
        let index = GoalIndex::new(&goal);
        let state = board(&[1, 2, 3, 4, 5, 6, 0, 7, 8]);
        assert_eq!(Misplaced.estimate(&state, &index), 2);
    }

    #[test]
    fn linear_conflict_adds_penalty() {
        let goal = Board::solved(3).unwrap();
        let index = GoalIndex::new(&goal);
        // 2 and 1 share their goal row in reversed order
        let state = board(&[2, 1, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(Manhattan.estimate(&state, &index), 2);
        assert_eq!(LinearConflict.estimate(&state, &index), 4);
    }

    #[test]
    fn linear_conflict_dominates_manhattan() {
        let goal = Board::solved(3).unwrap();
        let index = GoalIndex::new(&goal);
        let state = board(&[8, 6, 7, 2, 5, 4, 3, 0, 1]);
        assert!(LinearConflict.estimate(&state, &index) >= Manhattan.estimate(&state, &index));
        assert!(Manhattan.estimate(&state, &index) >= Misplaced.estimate(&state, &index));
    }

    #[test]
    fn heuristic_from_name() {
        assert_eq!(HeuristicType::from_name("misplaced").name(), "misplaced");
        assert_eq!(HeuristicType::from_name("hamming").name(), "misplaced");
        assert_eq!(HeuristicType::from_name("linear").name(), "linear-conflict");
        assert_eq!(HeuristicType::from_name("bogus").name(), "manhattan");
        assert_eq!(HeuristicType::default().name(), "manhattan");
    }
}
