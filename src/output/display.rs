//! Display functions for games and command results

use super::formatters::{colored_guess, plural, row_to_emoji, word_list};
use crate::commands::{BenchmarkResult, SolveEnd, SolveResult};
use crate::core::{Feedback, Word};
use crate::session::{GameEvent, GameObserver};
use colored::Colorize;

/// Prints game events to stdout as a text conversation
///
/// Letters the player typed are not echoed; letters the game filled in from
/// earlier rounds are shown as `A= g`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl ConsoleObserver {
    #[must_use]
    pub const fn interactive() -> Self {
        Self
    }
}

fn verbose_line(text: &str) -> String {
    format!("[*] {text}").bright_black().to_string()
}

/// Verbose report of the words still possible, as printed before a guess
#[must_use]
pub fn candidate_report(count: usize, preview: &[Word]) -> Vec<String> {
    let mut lines = vec![format!("{} possible from this point", plural(count, "word"))];
    if count > 1 {
        let prefix = if count > preview.len() {
            format!("First {}: ", preview.len())
        } else {
            String::new()
        };
        lines.push(format!("{prefix}[{}]", word_list(preview)));
    }
    lines
}

/// Console lines for one game event; empty for events that print nothing
#[must_use]
pub fn event_lines(event: &GameEvent) -> Vec<String> {
    match event {
        GameEvent::Guess {
            round,
            word,
            exploratory,
        } => {
            let marker = if *exploratory { " (exploring)" } else { "" };
            vec![format!(
                "\nGuess {round}: {}{}",
                word.text().to_uppercase().bright_yellow().bold(),
                marker.bright_black()
            )]
        }
        GameEvent::LetterFeedback {
            letter,
            feedback,
            inferred: true,
            ..
        } => vec![format!(
            "{}= {}",
            (*letter as char).to_ascii_uppercase(),
            feedback.code()
        )],
        GameEvent::LetterFeedback { .. } => Vec::new(),
        GameEvent::RoundComplete { row, .. } => vec![row_to_emoji(row)],
        GameEvent::InvalidWord { word } => {
            vec![format!("\"{word}\" marked as invalid word").yellow().to_string()]
        }
        GameEvent::Solved { .. } => vec![format!("\n{}", "Wordle solved!".green().bold())],
        GameEvent::Failed { .. } => vec![format!("\n{}", "Wordle failed :(".red().bold())],
        GameEvent::Candidates { count, preview } => candidate_report(*count, preview)
            .iter()
            .map(|line| verbose_line(line))
            .collect(),
        GameEvent::RoundsRemaining { remaining } => {
            vec![verbose_line(&format!("Only {} remaining", plural(*remaining, "guess")))]
        }
        GameEvent::Exploring { undetermined } => vec![verbose_line(&format!(
            "Finding the word that contains the most letters from [{undetermined}]"
        ))],
        GameEvent::ExplorationFound { word, matched } => {
            vec![verbose_line(&format!("Found: {word} with {}", plural(*matched, "letter")))]
        }
        GameEvent::ExplorationAbandoned => {
            vec![verbose_line("Not found. Guessing next most common possible word.")]
        }
    }
}

impl GameObserver for ConsoleObserver {
    fn on_event(&mut self, event: &GameEvent) {
        for line in event_lines(event) {
            println!("{line}");
        }
    }
}

/// Feedback keys accepted by the text mode
pub fn print_legend() {
    println!(
        "{}  {}  {}  {}",
        format!("{}:g", Feedback::Correct.emoji()),
        format!("{}:y", Feedback::Present.emoji()),
        format!("{}:↵", Feedback::Absent.emoji()),
        "🚫:x"
    );
    println!("{}", "Type 'quit' to stop.".bright_black());
}

pub fn print_no_candidate() {
    println!("\n{}", "No word found :(".red().bold());
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let marker = if step.exploratory {
            " (exploratory)".bright_black().to_string()
        } else {
            String::new()
        };
        println!(
            "\nTurn {}: {} {}{marker}",
            i + 1,
            colored_guess(&step.word, &step.row),
            row_to_emoji(&step.row)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    let count = result.guesses.len();
    match result.end {
        SolveEnd::Solved => println!(
            "{}",
            format!("✅ Solved in {}!", plural(count, "guess"))
                .green()
                .bold()
        ),
        SolveEnd::OutOfRounds => println!(
            "{}",
            format!("❌ Failed to solve in {count} guesses").red().bold()
        ),
        SolveEnd::NoCandidate => println!(
            "{}",
            format!(
                "❌ No word fits the feedback after {count} guesses (is {} in the list?)",
                result.target
            )
            .red()
            .bold()
        ),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Explored games:   {}", result.explored_games);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let mut counts: Vec<_> = result.distribution.iter().collect();
    counts.sort_unstable();
    for (guess_count, &count) in counts {
        let pct = (count as f64 / result.total_words.max(1) as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
    }
}
