//! Benchmark command
//!
//! Solves a batch of puzzles in parallel and reports depth and effort statistics.

use crate::boards::{PuzzlePair, scramble};
use crate::core::{Board, BoardError};
use crate::solver::{HeuristicType, SearchOptions, SearchOutcome, Solver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub solved: usize,
    pub not_found: usize,
    pub budget_exceeded: usize,
    pub average_depth: f64,
    pub min_depth: usize,
    pub max_depth: usize,
    /// Solution depth -> number of puzzles
    pub distribution: FxHashMap<usize, usize>,
    pub total_expanded: usize,
    pub average_expanded: f64,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Per-puzzle outcome, reduced to what the statistics need
enum PuzzleOutcome {
    Solved { depth: usize, expanded: usize },
    NotFound { expanded: usize },
    BudgetExceeded { expanded: usize },
}

/// Generate `count` puzzles by scrambling `goal` with `moves` random slides each
#[must_use]
pub fn generate_puzzles<R: Rng + ?Sized>(
    goal: &Board,
    count: usize,
    moves: usize,
    rng: &mut R,
) -> Vec<PuzzlePair> {
    (0..count)
        .map(|_| PuzzlePair {
            initial: scramble(goal, moves, rng),
            goal: goal.clone(),
        })
        .collect()
}

/// Solve every puzzle and aggregate the results
///
/// Puzzles are solved in parallel; each search owns its own state.
///
/// # Errors
///
/// Returns `BoardError::SizeMismatch` if any pair mixes board widths.
pub fn run_benchmark(
    puzzles: &[PuzzlePair],
    heuristic: HeuristicType,
    options: SearchOptions,
    show_progress: bool,
) -> Result<BenchmarkResult, BoardError> {
    let solvers = puzzles
        .iter()
        .map(|pair| Ok(Solver::new(heuristic, &pair.initial, &pair.goal)?.with_options(options)))
        .collect::<Result<Vec<_>, BoardError>>()?;

    let pb = if show_progress {
        let pb = ProgressBar::new(puzzles.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<PuzzleOutcome> = solvers
        .par_iter()
        .map(|solver| {
            let report = solver.search();
            pb.inc(1);
            let expanded = report.stats.expanded;
            match report.outcome {
                SearchOutcome::Solved(solution) => PuzzleOutcome::Solved {
                    depth: solution.depth(),
                    expanded,
                },
                SearchOutcome::NotFound => PuzzleOutcome::NotFound { expanded },
                SearchOutcome::BudgetExceeded { .. } => PuzzleOutcome::BudgetExceeded { expanded },
            }
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved = 0;
    let mut not_found = 0;
    let mut budget_exceeded = 0;
    let mut total_depth = 0;
    let mut min_depth = usize::MAX;
    let mut max_depth = 0;
    let mut total_expanded = 0;

    for outcome in &outcomes {
        match *outcome {
            PuzzleOutcome::Solved { depth, expanded } => {
                solved += 1;
                total_depth += depth;
                min_depth = min_depth.min(depth);
                max_depth = max_depth.max(depth);
                total_expanded += expanded;
                *distribution.entry(depth).or_insert(0) += 1;
            }
            PuzzleOutcome::NotFound { expanded } => {
                not_found += 1;
                total_expanded += expanded;
            }
            PuzzleOutcome::BudgetExceeded { expanded } => {
                budget_exceeded += 1;
                total_expanded += expanded;
            }
        }
    }

    let total_puzzles = puzzles.len();
    let ratio = |value: usize, count: usize| {
        if count == 0 {
            0.0
        } else {
            value as f64 / count as f64
        }
    };

    Ok(BenchmarkResult {
        total_puzzles,
        solved,
        not_found,
        budget_exceeded,
        average_depth: ratio(total_depth, solved),
        min_depth: if solved == 0 { 0 } else { min_depth },
        max_depth,
        distribution,
        total_expanded,
        average_expanded: ratio(total_expanded, total_puzzles),
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn puzzles(count: usize, moves: usize) -> Vec<PuzzlePair> {
        let goal = Board::solved(3).unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        generate_puzzles(&goal, count, moves, &mut rng)
    }

    #[test]
    fn benchmark_runs() {
        let set = puzzles(10, 12);
        let result =
            run_benchmark(&set, HeuristicType::default(), SearchOptions::default(), false).unwrap();

        assert_eq!(result.total_puzzles, 10);
        assert_eq!(result.solved, 10);
        assert_eq!(result.not_found, 0);
        assert!(result.max_depth <= 12);
        assert!(result.average_depth >= result.min_depth as f64);
        assert!(result.average_depth <= result.max_depth as f64);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let set = puzzles(8, 10);
        let result =
            run_benchmark(&set, HeuristicType::default(), SearchOptions::default(), false).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
    }

    #[test]
    fn benchmark_counts_unreachable_and_budget() {
        let goal = Board::solved(3).unwrap();
        let set = vec![
            PuzzlePair {
                initial: Board::parse("867254301").unwrap(),
                goal: goal.clone(),
            },
            PuzzlePair {
                initial: Board::parse("123456708").unwrap(),
                goal,
            },
        ];
        let options = SearchOptions {
            max_expansions: Some(50),
            ..SearchOptions::default()
        };

        let result = run_benchmark(&set, HeuristicType::default(), options, false).unwrap();
        assert_eq!(result.solved, 1);
        assert_eq!(result.budget_exceeded, 1);
        assert_eq!(result.min_depth, 1);
    }

    #[test]
    fn benchmark_empty_puzzle_list() {
        let result =
            run_benchmark(&[], HeuristicType::default(), SearchOptions::default(), false).unwrap();

        assert_eq!(result.total_puzzles, 0);
        assert_eq!(result.solved, 0);
        assert_eq!(result.min_depth, 0);
        assert!(result.average_depth.abs() < f64::EPSILON);
    }

    #[test]
    fn benchmark_rejects_mixed_sizes() {
        let set = vec![PuzzlePair {
            initial: Board::solved(2).unwrap(),
            goal: Board::solved(3).unwrap(),
        }];
        assert!(
            run_benchmark(&set, HeuristicType::default(), SearchOptions::default(), false).is_err()
        );
    }
}
