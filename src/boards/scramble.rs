//! Random puzzle generation
//!
//! Both generators only produce boards that can reach their goal.

use crate::core::{Board, BoardError, Move};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rand::seq::SliceRandom;

/// Walk `moves` random slides away from `goal`, never undoing the previous slide
///
/// The result is reachable from `goal` and therefore solvable toward it; the
/// optimal distance is at most `moves`.
#[must_use]
pub fn scramble<R: Rng + ?Sized>(goal: &Board, moves: usize, rng: &mut R) -> Board {
    let mut board = goal.clone();
    let mut last: Option<Move> = None;

    for _ in 0..moves {
        let options: Vec<(Move, Board)> = board
            .successors()
            .filter(|&(mv, _)| last.is_none_or(|prev| mv != prev.opposite()))
            .collect();

        if let Some((mv, next)) = options.choose(rng) {
            last = Some(*mv);
            board = next.clone();
        }
    }

    board
}

/// Uniformly shuffle tiles until the board can reach the canonical solved board
///
/// # Errors
/// Returns `BoardError::UnsupportedSize` if `size` is outside the supported range.
pub fn random_board<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Result<Board, BoardError> {
    let goal = Board::solved(size)?;
    let mut tiles = goal.tiles().to_vec();

    loop {
        tiles.shuffle(rng);
        let board = Board::new(tiles.clone())?;
        if board.is_solvable_to(&goal) {
            return Ok(board);
        }
    }
}
