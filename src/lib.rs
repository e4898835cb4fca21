//! Eight Puzzle Solver
//!
//! A sliding-tile puzzle solver using best-first search guided by Manhattan distance.
//! Boards from 2x2 up to 5x5 are supported; the classic 8-puzzle is the 3x3 case.
//!
//! # Quick Start
//!
//! ```rust
//! use eight_puzzle::core::Board;
//! use eight_puzzle::solver::{Manhattan, Solver};
//!
//! let initial = Board::parse("0,1,2/3,4,5/6,7,8").unwrap();
//! let goal = Board::parse("1,2,3/4,5,0/6,7,8").unwrap();
//!
//! let solver = Solver::new(Manhattan, &initial, &goal).unwrap();
//! let solution = solver.solve().solution().cloned().unwrap();
//! assert_eq!(solution.depth(), 15);
//! ```

// Core domain types
pub mod core;

// Search engine and heuristics
pub mod solver;

// Presets, puzzle files and scrambling
pub mod boards;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
