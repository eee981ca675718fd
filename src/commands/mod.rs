//! Command implementations

pub mod benchmark;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark, sample_targets};
pub use simple::{PromptFeedback, run_simple};
pub use solve::{GuessStep, SolveEnd, SolveResult, solve_word};
pub use test_all::{TestAllStatistics, print_test_all_statistics, run_test_all};
