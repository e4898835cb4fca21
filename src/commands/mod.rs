//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_pair};
pub use benchmark::{BenchmarkResult, generate_puzzles, run_benchmark};
pub use simple::run_simple;
pub use solve::{SolveConfig, SolveResult, solve_boards, solve_puzzle};
