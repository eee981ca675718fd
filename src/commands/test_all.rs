//! Test all words - comprehensive solver evaluation
//!
//! Plays one game for every catalog word as the answer and generates statistics.

use super::solve::{SolveEnd, SolveResult, solve_word};
use crate::error::GameError;
use crate::session::SessionConfig;
use crate::solver::Strategy;
use crate::wordlists::WordCatalog;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Statistics from testing all words
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_words: usize,
    pub solved: usize,
    pub out_of_rounds: usize,
    /// Games where the feedback ruled out every word (duplicate-letter over-exclusion)
    pub no_candidate: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub explored_games: usize,
    pub total_time: Duration,
    /// Average over solved games
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub failed_words: Vec<String>,
}

/// Run the solver against every catalog word (or the first `limit`)
///
/// Games are independent, so they run in parallel; each gets its own copy of
/// the catalog.
///
/// # Errors
///
/// Propagates session errors other than running out of candidates.
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_test_all<S: Strategy + Clone + Sync>(
    catalog: &WordCatalog,
    strategy: &S,
    config: &SessionConfig,
    limit: Option<usize>,
) -> Result<TestAllStatistics, GameError> {
    let targets = &catalog.words()[..limit.unwrap_or(usize::MAX).min(catalog.len())];

    println!("🎯 Testing {} words...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("valid progress template")
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let results: Vec<SolveResult> = targets
        .par_iter()
        .map(|target| {
            let result = solve_word(
                catalog.clone(),
                strategy.clone(),
                config.clone(),
                target.clone(),
            );
            pb.inc(1);
            result
        })
        .collect::<Result<_, _>>()?;
    pb.finish_with_message("done");

    Ok(summarize(&results, start.elapsed()))
}

fn summarize(results: &[SolveResult], total_time: Duration) -> TestAllStatistics {
    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut solved = 0;
    let mut out_of_rounds = 0;
    let mut no_candidate = 0;
    let mut solved_guesses = 0;
    let mut max_guesses = 0;
    let mut failed_words = Vec::new();

    for result in results {
        let guesses = result.guesses.len();
        match result.end {
            SolveEnd::Solved => {
                solved += 1;
                solved_guesses += guesses;
                max_guesses = max_guesses.max(guesses);
                *guess_distribution.entry(guesses).or_insert(0) += 1;
            }
            SolveEnd::OutOfRounds => {
                out_of_rounds += 1;
                failed_words.push(result.target.text().to_string());
            }
            SolveEnd::NoCandidate => {
                no_candidate += 1;
                failed_words.push(result.target.text().to_string());
            }
        }
    }

    TestAllStatistics {
        total_words: results.len(),
        solved,
        out_of_rounds,
        no_candidate,
        guess_distribution,
        explored_games: results.iter().filter(|r| r.used_exploration()).count(),
        total_time,
        average_guesses: solved_guesses as f64 / solved.max(1) as f64,
        max_guesses,
        failed_words,
    }
}

/// Print comprehensive statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70).bright_cyan());
    println!("{}", " RESULTS ".bright_cyan().bold());
    println!("{}", "═".repeat(70).bright_cyan());

    let pct = |n: usize| n as f64 / stats.total_words.max(1) as f64 * 100.0;

    println!("\n📊 {}", "Overall:".bright_cyan().bold());
    println!("   Words tested:    {}", stats.total_words);
    println!(
        "   Solved:          {} ({:.1}%)",
        stats.solved.to_string().green().bold(),
        pct(stats.solved)
    );
    println!(
        "   Out of rounds:   {} ({:.1}%)",
        stats.out_of_rounds.to_string().yellow(),
        pct(stats.out_of_rounds)
    );
    println!(
        "   No candidate:    {} ({:.1}%)",
        stats.no_candidate.to_string().red(),
        pct(stats.no_candidate)
    );
    println!(
        "   Average guesses: {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Worst solve:     {}", stats.max_guesses);
    println!(
        "   Explored games:  {} ({:.1}%)",
        stats.explored_games,
        pct(stats.explored_games)
    );
    println!("   Time taken:      {:.2}s", stats.total_time.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = stats.guess_distribution.iter().collect();
    counts.sort_unstable();
    for (guesses, &count) in counts {
        let share = pct(count);
        let bar_width = (share / 2.5) as usize;
        println!(
            "   {guesses}: {}{} {count:4} ({share:5.1}%)",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
    }

    if !stats.failed_words.is_empty() {
        println!("\n❌ {}", "Unsolved:".bright_red().bold());
        for chunk in stats.failed_words.chunks(10) {
            println!("   {}", chunk.join(" "));
        }
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{GreedyStrategy, StrategyType};
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn test_all_small_catalog() {
        let catalog = WordCatalog::new(words_from_slice(&[
            "tears", "crane", "about", "thing", "night", "light",
        ]));

        let stats =
            run_test_all(&catalog, &GreedyStrategy, &SessionConfig::default(), None).unwrap();

        assert_eq!(stats.total_words, 6);
        assert_eq!(
            stats.solved + stats.out_of_rounds + stats.no_candidate,
            stats.total_words
        );
        assert_eq!(stats.guess_distribution.get(&1), Some(&1));
    }

    #[test]
    fn test_all_respects_limit() {
        let catalog = WordCatalog::new(words_from_slice(&["tears", "crane", "about"]));

        let stats = run_test_all(
            &catalog,
            &StrategyType::default(),
            &SessionConfig::default(),
            Some(2),
        )
        .unwrap();
        assert_eq!(stats.total_words, 2);
    }
}
