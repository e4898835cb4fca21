//! Simple interactive CLI mode
//!
//! Text-based board entry and step listing without the TUI

use crate::boards::default_pair;
use crate::core::Board;
use crate::output::formatters::board_to_lines;
use crate::solver::{HeuristicType, SearchOutcome, Solver};
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(heuristic: HeuristicType) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(&mut stdin.lock(), &mut stdout.lock(), heuristic)
}

/// Prompt for board pairs until the user quits or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    heuristic: HeuristicType,
) -> io::Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║               8-Puzzle Solver - Interactive Mode             ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Enter boards row by row, e.g. '0,1,2/3,4,5/6,7,8' or '012345678'.")?;
    writeln!(out, "Press Enter to keep the default shown in brackets.")?;
    writeln!(out, "Commands: 'quit' to exit\n")?;

    let defaults = default_pair();

    loop {
        let Some(initial) = read_board(input, out, "Initial state", &defaults.initial)? else {
            break;
        };
        let Some(goal) = read_board(input, out, "Goal state", &defaults.goal)? else {
            break;
        };

        let solver = match Solver::new(heuristic, &initial, &goal) {
            Ok(solver) => solver,
            Err(e) => {
                writeln!(out, "❌ {e}\n")?;
                continue;
            }
        };

        match solver.solve() {
            SearchOutcome::Solved(solution) => {
                for (i, step) in solution.steps().iter().enumerate() {
                    match step.mv {
                        Some(mv) => writeln!(out, "Step {} ({mv})", i + 1)?,
                        None => writeln!(out, "Step {}", i + 1)?,
                    }
                    for line in board_to_lines(&step.board) {
                        writeln!(out, "  {line}")?;
                    }
                }
                writeln!(out, "\n✅ Solved in {} moves\n", solution.depth())?;
            }
            SearchOutcome::NotFound => {
                writeln!(out, "\n❌ The goal cannot be reached from this board\n")?;
            }
            SearchOutcome::BudgetExceeded { expanded } => {
                writeln!(out, "\n⚠ Gave up after {expanded} expansions\n")?;
            }
        }
    }

    writeln!(out, "\n👋 Goodbye!\n")?;
    Ok(())
}

/// Read a board, re-prompting on invalid input
///
/// Returns `None` when the user quits or input is exhausted.
fn read_board<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: &Board,
) -> io::Result<Option<Board>> {
    let compact: String = default.tiles().iter().map(u8::to_string).collect();

    loop {
        write!(out, "{prompt} [{compact}]: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.trim() {
            "quit" | "q" | "exit" => return Ok(None),
            "" => return Ok(Some(default.clone())),
            text => match Board::parse(text) {
                Ok(board) => return Ok(Some(board)),
                Err(e) => writeln!(out, "❌ {e}")?,
            },
        }
    }
}
