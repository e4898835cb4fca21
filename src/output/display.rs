//! Display functions for command results

use super::formatters::{board_to_lines, create_progress_bar, move_arrow};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::Board;
use crate::solver::SearchOutcome;
use colored::Colorize;

/// Steps printed side by side per row of output
const STEPS_PER_ROW: usize = 4;

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving with {} heuristic",
        result.heuristic.name().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    print_boards_side_by_side(&[
        ("Initial State".to_string(), &result.initial),
        ("Goal State".to_string(), &result.goal),
    ]);

    match &result.outcome {
        SearchOutcome::Solved(solution) => {
            let labelled: Vec<(String, &Board)> = solution
                .steps()
                .iter()
                .enumerate()
                .map(|(i, step)| {
                    let label = match step.mv {
                        Some(mv) => format!("Step {} {}", i + 1, move_arrow(mv)),
                        None => format!("Step {}", i + 1),
                    };
                    (label, &step.board)
                })
                .collect();

            for chunk in labelled.chunks(STEPS_PER_ROW) {
                print_boards_side_by_side(chunk);
            }

            let moves = solution
                .moves()
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            if !moves.is_empty() {
                println!("Moves: {}", moves.bright_white());
            }

            println!();
            println!(
                "{}",
                format!("✅ Solved in {} moves!", solution.depth())
                    .green()
                    .bold()
            );
        }
        SearchOutcome::NotFound => {
            println!(
                "{}",
                "❌ No solution: the goal is not reachable from the initial state"
                    .red()
                    .bold()
            );
        }
        SearchOutcome::BudgetExceeded { expanded } => {
            println!(
                "{}",
                format!("⚠ Search stopped after {expanded} expansions without reaching the goal")
                    .yellow()
                    .bold()
            );
        }
    }

    if verbose {
        println!("\n📊 {}", "Search statistics:".bright_cyan().bold());
        println!("   Expanded:      {}", result.stats.expanded);
        println!("   Generated:     {}", result.stats.generated);
        println!("   Peak frontier: {}", result.stats.max_frontier);
        println!("   Time taken:    {:.2}ms", result.duration.as_secs_f64() * 1000.0);
    }
}

/// Print the result of board pair analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BOARD ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_boards_side_by_side(&[
        ("Initial State".to_string(), &result.initial),
        ("Goal State".to_string(), &result.goal),
    ]);

    println!("📏 {}", "Distance estimates:".bright_cyan().bold());
    let max = result
        .estimates
        .iter()
        .map(|&(_, estimate)| estimate)
        .max()
        .unwrap_or(0);
    for &(name, estimate) in &result.estimates {
        let bar = create_progress_bar(f64::from(estimate), f64::from(max), 20);
        println!(
            "   {name:<16} [{}] {}",
            bar.green(),
            estimate.to_string().bright_yellow()
        );
    }

    let (row, col) = result.initial.blank();
    let (goal_row, goal_col) = result.goal.blank();
    println!("\n🔎 {}", "Structure:".bright_cyan().bold());
    println!("   Blank:       ({row}, {col}) → ({goal_row}, {goal_col})");
    println!(
        "   Inversions:  {} → {}",
        result.initial_inversions, result.goal_inversions
    );

    if result.solvable {
        println!("   Solvable:    {}", "yes".green().bold());
    } else {
        println!(
            "   Solvable:    {} (permutation parity differs)",
            "no".red().bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles tested:   {}", result.total_puzzles);
    println!("   Solved:           {}", format!("{}", result.solved).green());
    if result.not_found > 0 {
        println!("   Unreachable:      {}", format!("{}", result.not_found).red());
    }
    if result.budget_exceeded > 0 {
        println!(
            "   Over budget:      {}",
            format!("{}", result.budget_exceeded).yellow()
        );
    }
    println!(
        "   Average depth:    {}",
        format!("{:.2}", result.average_depth).bright_yellow().bold()
    );
    println!("   Shallowest:       {}", format!("{}", result.min_depth).green());
    println!("   Deepest:          {}", format!("{}", result.max_depth).yellow());
    println!("   Avg expansions:   {:.1}", result.average_expanded);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    if result.solved == 0 {
        return;
    }

    println!("\n📈 {}", "Depth distribution:".bright_cyan().bold());
    let mut depths: Vec<(usize, usize)> = result
        .distribution
        .iter()
        .map(|(&depth, &count)| (depth, count))
        .collect();
    depths.sort_unstable();

    for (depth, count) in depths {
        let pct = (count as f64 / result.solved as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {depth:3}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

/// Print labelled boards next to each other
fn print_boards_side_by_side(boards: &[(String, &Board)]) {
    let rendered: Vec<Vec<String>> = boards.iter().map(|(_, b)| board_to_lines(b)).collect();
    let column_width = rendered
        .iter()
        .flat_map(|lines| lines.iter().map(|l| l.chars().count()))
        .chain(boards.iter().map(|(label, _)| label.chars().count()))
        .max()
        .unwrap_or(0)
        + 4;

    println!();
    let header: String = boards
        .iter()
        .map(|(label, _)| pad(label, column_width))
        .collect();
    println!("{}", header.bold());

    let height = rendered.iter().map(Vec::len).max().unwrap_or(0);
    for i in 0..height {
        let line: String = rendered
            .iter()
            .map(|lines| pad(lines.get(i).map_or("", String::as_str), column_width))
            .collect();
        println!("{}", line.trim_end());
    }
}

fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(len)))
}
