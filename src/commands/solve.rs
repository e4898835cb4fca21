//! Puzzle solving command
//!
//! Parses a board pair, runs the search and returns the steps with statistics.

use crate::core::{Board, BoardError};
use crate::solver::{HeuristicType, SearchOptions, SearchOutcome, SearchStats, Solver};
use std::time::{Duration, Instant};

/// Configuration for solving a puzzle
pub struct SolveConfig {
    pub initial: String,
    pub goal: String,
    pub heuristic: HeuristicType,
    pub options: SearchOptions,
}

impl SolveConfig {
    #[must_use]
    pub fn new(initial: String, goal: String) -> Self {
        Self {
            initial,
            goal,
            heuristic: HeuristicType::default(),
            options: SearchOptions::default(),
        }
    }
}

/// Result of solving a puzzle
pub struct SolveResult {
    pub initial: Board,
    pub goal: Board,
    pub heuristic: HeuristicType,
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
    pub duration: Duration,
}

/// Parse both boards and search for a path between them
///
/// # Errors
///
/// Returns an error if:
/// - Either board is malformed (bad token, wrong cell count, repeated value)
/// - The boards have different widths
pub fn solve_puzzle(config: SolveConfig) -> Result<SolveResult, BoardError> {
    let initial = Board::parse(&config.initial)?;
    let goal = Board::parse(&config.goal)?;
    solve_boards(initial, goal, config.heuristic, config.options)
}

/// Search for a path between two already-parsed boards
///
/// # Errors
///
/// Returns `BoardError::SizeMismatch` if the boards have different widths.
pub fn solve_boards(
    initial: Board,
    goal: Board,
    heuristic: HeuristicType,
    options: SearchOptions,
) -> Result<SolveResult, BoardError> {
    let start = Instant::now();
    let report = Solver::new(heuristic, &initial, &goal)?
        .with_options(options)
        .search();
    let duration = start.elapsed();

    Ok(SolveResult {
        initial,
        goal,
        heuristic,
        outcome: report.outcome,
        stats: report.stats,
        duration,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solve_puzzle_succeeds() {
        let config = SolveConfig::new("0,1,2/3,4,5/6,7,8".to_string(), "1,2,3/4,5,0/6,7,8".to_string());
        let result = solve_puzzle(config).unwrap();

        let solution = result.outcome.solution().unwrap();
        assert_eq!(solution.initial(), &result.initial);
        assert_eq!(solution.goal(), &result.goal);
        assert!(result.stats.expanded > 0);
    }

    #[test]
    fn solve_invalid_board_returns_error() {
        let config = SolveConfig::new("0,1,1/3,4,5/6,7,8".to_string(), "123456780".to_string());
        assert_eq!(
            solve_puzzle(config).err(),
            Some(BoardError::DuplicateValue(1))
        );
    }

    #[test]
    fn solve_mismatched_sizes_returns_error() {
        let config = SolveConfig::new("1230".to_string(), "123456780".to_string());
        assert!(matches!(
            solve_puzzle(config),
            Err(BoardError::SizeMismatch { initial: 2, goal: 3 })
        ));
    }

    #[test]
    fn solve_respects_budget() {
        let mut config = SolveConfig::new("867254301".to_string(), "123456780".to_string());
        config.options.max_expansions = Some(5);

        let result = solve_puzzle(config).unwrap();
        assert_eq!(
            result.outcome,
            SearchOutcome::BudgetExceeded { expanded: 5 }
        );
    }

    #[test]
    fn solve_unreachable_goal() {
        let config = SolveConfig::new("123456780".to_string(), "213456780".to_string());
        let result = solve_puzzle(config).unwrap();
        assert_eq!(result.outcome, SearchOutcome::NotFound);
    }
}
