//! Board pair analysis command
//!
//! Reports heuristic estimates and solvability without running a search.

use crate::core::{Board, BoardError};
use crate::solver::{GoalIndex, Heuristic, HeuristicType};

/// Result of analyzing a board pair
pub struct AnalysisResult {
    pub initial: Board,
    pub goal: Board,
    /// Heuristic name and its estimate for the initial board
    pub estimates: Vec<(&'static str, u32)>,
    pub solvable: bool,
    pub initial_inversions: usize,
    pub goal_inversions: usize,
}

/// Analyze how far apart two boards are
///
/// # Errors
///
/// Returns an error if:
/// - Either board is malformed
/// - The boards have different widths
pub fn analyze_pair(initial: &str, goal: &str) -> Result<AnalysisResult, BoardError> {
    let initial = Board::parse(initial)?;
    let goal = Board::parse(goal)?;

    if initial.size() != goal.size() {
        return Err(BoardError::SizeMismatch {
            initial: initial.size(),
            goal: goal.size(),
        });
    }

    let index = GoalIndex::new(&goal);
    let estimates = HeuristicType::ALL
        .iter()
        .map(|h| (h.name(), h.estimate(&initial, &index)))
        .collect();

    Ok(AnalysisResult {
        solvable: initial.is_solvable_to(&goal),
        initial_inversions: initial.inversions(),
        goal_inversions: goal.inversions(),
        estimates,
        initial,
        goal,
    })
}
