//! Eight Puzzle Solver - CLI
//!
//! Sliding-tile puzzle solver with TUI and CLI modes using best-first search.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eight_puzzle::{
    boards::loader::load_from_file,
    commands::{
        SolveConfig, analyze_pair, generate_puzzles, run_benchmark, run_simple, solve_puzzle,
    },
    core::Board,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{HeuristicType, SearchOptions},
};
use log::info;
use rand::{SeedableRng, rngs::StdRng};

#[derive(Parser)]
#[command(
    name = "eight_puzzle",
    about = "Sliding-tile puzzle solver using best-first search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Heuristic: manhattan (default), misplaced, linear-conflict
    #[arg(short = 'H', long, global = true, default_value = "manhattan")]
    heuristic: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based board entry without TUI)
    Simple,

    /// Solve a board pair, e.g. `solve 0,1,2/3,4,5/6,7,8 1,2,3/4,5,0/6,7,8`
    Solve {
        /// Initial board
        initial: String,

        /// Goal board
        goal: String,

        /// Give up after expanding this many boards
        #[arg(short, long)]
        max_expansions: Option<usize>,

        /// Keep at most one frontier entry per board
        #[arg(short, long)]
        dedupe: bool,

        /// Show search statistics and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compare heuristic estimates and solvability for a board pair
    Analyze {
        /// Initial board
        initial: String,

        /// Goal board
        goal: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of scrambled puzzles to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Random slides applied to the solved board per puzzle
        #[arg(short, long, default_value = "20")]
        moves: usize,

        /// Board width for scrambled puzzles
        #[arg(short, long, default_value = "3")]
        size: usize,

        /// Seed for reproducible puzzles
        #[arg(long)]
        seed: Option<u64>,

        /// Load puzzles from a file of `initial ; goal` lines instead
        #[arg(short, long)]
        file: Option<String>,

        /// Give up on a puzzle after expanding this many boards
        #[arg(long)]
        max_expansions: Option<usize>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let heuristic = HeuristicType::from_name(&cli.heuristic);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(heuristic),
        Commands::Simple => run_simple(heuristic).context("Interactive session failed"),
        Commands::Solve {
            initial,
            goal,
            max_expansions,
            dedupe,
            verbose,
        } => {
            let options = SearchOptions {
                max_expansions,
                dedupe_frontier: dedupe,
            };
            run_solve_command(initial, goal, heuristic, options, verbose)
        }
        Commands::Analyze { initial, goal } => run_analyze_command(&initial, &goal),
        Commands::Benchmark {
            count,
            moves,
            size,
            seed,
            file,
            max_expansions,
        } => {
            let options = SearchOptions {
                max_expansions,
                ..SearchOptions::default()
            };
            run_benchmark_command(
                heuristic,
                options,
                count,
                moves,
                size,
                seed,
                file.as_deref(),
            )
        }
    }
}

fn run_solve_command(
    initial: String,
    goal: String,
    heuristic: HeuristicType,
    options: SearchOptions,
    verbose: bool,
) -> Result<()> {
    let config = SolveConfig {
        heuristic,
        options,
        ..SolveConfig::new(initial, goal)
    };
    let result = solve_puzzle(config)?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_analyze_command(initial: &str, goal: &str) -> Result<()> {
    let result = analyze_pair(initial, goal)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    heuristic: HeuristicType,
    options: SearchOptions,
    count: usize,
    moves: usize,
    size: usize,
    seed: Option<u64>,
    file: Option<&str>,
) -> Result<()> {
    let puzzles = if let Some(path) = file {
        let puzzles = load_from_file(path)?;
        println!("Running benchmark on {} puzzles from {path}...", puzzles.len());
        puzzles
    } else {
        let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        let goal = Board::solved(size)?;
        println!("Running benchmark on {count} puzzles scrambled with {moves} moves...");
        generate_puzzles(&goal, count, moves, &mut rng)
    };
    info!("benchmark: {} puzzles, heuristic {}", puzzles.len(), heuristic.name());

    let result = run_benchmark(&puzzles, heuristic, options, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_play_command(heuristic: HeuristicType) -> Result<()> {
    use eight_puzzle::interactive::{App, run_tui};

    let app = App::new(heuristic, SearchOptions::default());
    run_tui(app)
}
