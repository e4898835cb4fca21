//! Puzzle sources
//!
//! Built-in presets, puzzle files and random generation.

pub mod loader;
mod presets;
pub mod scramble;

pub use presets::{DEFAULT_GOAL, DEFAULT_INITIAL, default_pair};
pub use scramble::{random_board, scramble};

/// An initial board and the goal to reach from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzlePair {
    pub initial: crate::core::Board,
    pub goal: crate::core::Board,
}
