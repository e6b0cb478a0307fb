//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use simple::{play_session, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_number};
