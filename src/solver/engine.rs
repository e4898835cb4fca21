//! Best-first puzzle search
//!
//! Expands boards in order of `depth + heuristic`, never re-expanding a board
//! that is already closed, and walks parent links to rebuild the path.

use super::frontier::Frontier;
use super::heuristic::{GoalIndex, Heuristic};
use super::node::{Node, NodeArena};
use crate::core::{Board, BoardError, Move};
use log::{debug, warn};
use rustc_hash::{FxHashMap, FxHashSet};

/// Tuning knobs for a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Stop with `BudgetExceeded` after this many expansions
    pub max_expansions: Option<usize>,
    /// Skip queueing a board when an equal-or-shallower copy is already queued
    pub dedupe_frontier: bool,
}

/// One entry of a solution: a board and the slide that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub board: Board,
    /// `None` for the initial board
    pub mv: Option<Move>,
}

/// Ordered steps from the initial board to the goal board, both inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of slides in the solution
    #[must_use]
    pub fn depth(&self) -> usize {
        self.steps.len() - 1
    }

    /// The slides alone, without the root entry
    #[must_use]
    pub fn moves(&self) -> Vec<Move> {
        self.steps.iter().filter_map(|step| step.mv).collect()
    }

    #[must_use]
    pub fn initial(&self) -> &Board {
        &self.steps[0].board
    }

    #[must_use]
    pub fn goal(&self) -> &Board {
        &self.steps[self.steps.len() - 1].board
    }

    #[must_use]
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The goal was reached
    Solved(Solution),
    /// Every reachable board was expanded without meeting the goal
    NotFound,
    /// The expansion budget ran out first; the goal may still be reachable
    BudgetExceeded { expanded: usize },
}

impl SearchOutcome {
    #[must_use]
    pub const fn solution(&self) -> Option<&Solution> {
        match self {
            Self::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }
}

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Boards taken off the frontier and expanded
    pub expanded: usize,
    /// Nodes created, excluding the root
    pub generated: usize,
    /// Largest frontier size observed
    pub max_frontier: usize,
}

/// Outcome together with the work it took
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Sliding puzzle solver
///
/// Holds the inputs only; every call to `solve` builds fresh search state, so one
/// solver can be shared across threads.
pub struct Solver<'a, H: Heuristic> {
    heuristic: H,
    initial: &'a Board,
    goal: &'a Board,
    options: SearchOptions,
}

impl<'a, H: Heuristic> Solver<'a, H> {
    /// Create a solver for a pair of boards
    ///
    /// # Errors
    /// Returns `BoardError::SizeMismatch` if the boards have different widths.
    /// Valid boards of equal width always hold the same tile values.
    pub fn new(heuristic: H, initial: &'a Board, goal: &'a Board) -> Result<Self, BoardError> {
        if initial.size() != goal.size() {
            return Err(BoardError::SizeMismatch {
                initial: initial.size(),
                goal: goal.size(),
            });
        }

        Ok(Self {
            heuristic,
            initial,
            goal,
            options: SearchOptions::default(),
        })
    }

    /// Replace the search options
    #[must_use]
    pub const fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn options(&self) -> SearchOptions {
        self.options
    }

    /// Run the search and return only the outcome
    #[must_use]
    pub fn solve(&self) -> SearchOutcome {
        self.search().outcome
    }

    /// Run the search and return the outcome with statistics
    #[must_use]
    pub fn search(&self) -> SearchReport {
        let goal_index = GoalIndex::new(self.goal);
        let mut arena = NodeArena::new();
        let mut frontier = Frontier::new();
        let mut closed: FxHashSet<Board> = FxHashSet::default();
        let mut queued: FxHashMap<Board, u32> = FxHashMap::default();
        let mut stats = SearchStats::default();

        debug!(
            "search start: {}x{} board, options {:?}",
            self.initial.size(),
            self.initial.size(),
            self.options
        );

        let root = arena.push(Node {
            board: self.initial.clone(),
            parent: None,
            mv: None,
            depth: 0,
            heuristic: self.heuristic.estimate(self.initial, &goal_index),
        });
        frontier.push(arena.get(root).priority(), root);
        stats.max_frontier = 1;

        let outcome = loop {
            let Some(current) = frontier.pop() else {
                break SearchOutcome::NotFound;
            };

            let node = arena.get(current);
            if node.board == *self.goal {
                break SearchOutcome::Solved(Solution {
                    steps: arena.path_to(current),
                });
            }

            // Stale duplicate of a board expanded through a cheaper entry
            if closed.contains(&node.board) {
                continue;
            }

            if self
                .options
                .max_expansions
                .is_some_and(|limit| stats.expanded >= limit)
            {
                warn!("search budget of {} expansions exhausted", stats.expanded);
                break SearchOutcome::BudgetExceeded {
                    expanded: stats.expanded,
                };
            }

            let board = node.board.clone();
            let depth = node.depth + 1;
            closed.insert(board.clone());
            stats.expanded += 1;

            for (mv, next) in board.successors() {
                if closed.contains(&next) {
                    continue;
                }

                if self.options.dedupe_frontier {
                    if queued.get(&next).is_some_and(|&best| best <= depth) {
                        continue;
                    }
                    queued.insert(next.clone(), depth);
                }

                let heuristic = self.heuristic.estimate(&next, &goal_index);
                let index = arena.push(Node {
                    board: next,
                    parent: Some(current),
                    mv: Some(mv),
                    depth,
                    heuristic,
                });
                frontier.push(depth + heuristic, index);
            }

            stats.max_frontier = stats.max_frontier.max(frontier.len());
        };

        stats.generated = arena.len() - 1;

        debug!(
            "search finished: solved={} expanded={} generated={} max_frontier={}",
            outcome.is_solved(),
            stats.expanded,
            stats.generated,
            stats.max_frontier
        );

        SearchReport { outcome, stats }
    }
}
