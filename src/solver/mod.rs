//! Puzzle search
//!
//! A best-first search engine over board states plus the distance estimates that guide it.

mod engine;
mod frontier;
pub mod heuristic;
mod node;

pub use engine::{SearchOptions, SearchOutcome, SearchReport, SearchStats, Solution, Solver, Step};
pub use heuristic::{GoalIndex, Heuristic, HeuristicType, LinearConflict, Manhattan, Misplaced};

use crate::core::{Board, BoardError};

/// Solve a board pair with the Manhattan heuristic and default options
///
/// # Errors
/// Returns `BoardError::SizeMismatch` if the boards have different widths.
///
/// # Examples
/// ```
/// use eight_puzzle::core::Board;
/// use eight_puzzle::solver::solve;
///
/// let initial = Board::parse("1,2,3/4,5,6/7,0,8").unwrap();
/// let goal = Board::solved(3).unwrap();
///
/// let outcome = solve(&initial, &goal).unwrap();
/// assert_eq!(outcome.solution().unwrap().depth(), 1);
/// ```
pub fn solve(initial: &Board, goal: &Board) -> Result<SearchOutcome, BoardError> {
    Ok(Solver::new(Manhattan, initial, goal)?.solve())
}
