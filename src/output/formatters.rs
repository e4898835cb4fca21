//! Formatting utilities for terminal output

use crate::core::{Board, Move};

/// Render a board as a boxed grid, one string per line
#[must_use]
pub fn board_to_lines(board: &Board) -> Vec<String> {
    let width = if board.tiles().len() > 10 { 2 } else { 1 };
    let bar = "─".repeat(width + 2);
    let border = |left: &str, mid: &str, right: &str| {
        format!("{left}{}{right}", vec![bar.as_str(); board.size()].join(mid))
    };

    let mut lines = vec![border("┌", "┬", "┐")];
    for (i, row) in board.rows().enumerate() {
        if i > 0 {
            lines.push(border("├", "┼", "┤"));
        }
        let cells: Vec<String> = row
            .iter()
            .map(|&v| {
                if v == 0 {
                    format!(" {:>width$} ", " ")
                } else {
                    format!(" {v:>width$} ")
                }
            })
            .collect();
        lines.push(format!("│{}│", cells.join("│")));
    }
    lines.push(border("└", "┴", "┘"));
    lines
}

/// Arrow showing the direction the empty cell moved
#[must_use]
pub const fn move_arrow(mv: Move) -> char {
    match mv {
        Move::Up => '↑',
        Move::Down => '↓',
        Move::Left => '←',
        Move::Right => '→',
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
