//! Benchmark command
//!
//! Tests solver performance across multiple words.

use super::solve::{SolveEnd, solve_word};
use crate::core::Word;
use crate::error::GameError;
use crate::session::SessionConfig;
use crate::solver::Strategy;
use crate::wordlists::WordCatalog;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess counts of solved games
    pub distribution: FxHashMap<usize, usize>,
    pub explored_games: usize,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick `count` distinct random targets from the catalog
#[must_use]
pub fn sample_targets(catalog: &WordCatalog, count: usize) -> Vec<Word> {
    catalog
        .words()
        .choose_multiple(&mut rand::rng(), count)
        .cloned()
        .collect()
}

/// Run benchmark on a set of target words
///
/// # Errors
///
/// Propagates session errors other than running out of candidates.
pub fn run_benchmark<S: Strategy + Clone>(
    catalog: &WordCatalog,
    strategy: &S,
    config: &SessionConfig,
    target_words: &[Word],
) -> Result<BenchmarkResult, GameError> {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut explored_games = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for target in target_words {
        let result = solve_word(
            catalog.clone(),
            strategy.clone(),
            config.clone(),
            target.clone(),
        )?;
        let guesses = result.guesses.len();

        if result.used_exploration() {
            explored_games += 1;
        }
        if result.end == SolveEnd::Solved {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);
    }

    let duration = start.elapsed();
    let total_words = target_words.len();

    Ok(BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: total_guesses as f64 / total_words.max(1) as f64,
        min_guesses: if total_words == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        explored_games,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
