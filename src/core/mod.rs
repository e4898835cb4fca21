//! Core domain types for the sliding puzzle
//!
//! Boards and moves are pure value types with no search state attached.

mod board;
mod moves;

pub use board::{Board, BoardError, MAX_SIZE, MIN_SIZE};
pub use moves::Move;
