//! Formatting utilities for terminal output

use crate::core::{Feedback, FeedbackRow, Word};
use colored::{ColoredString, Colorize};

/// Format a feedback row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &FeedbackRow) -> String {
    Feedback::row_to_emoji(row)
}

/// Upper-case letter tinted the way the game board shows it
#[must_use]
pub fn colored_letter(letter: u8, feedback: Feedback) -> ColoredString {
    let text = (letter as char).to_ascii_uppercase().to_string();
    match feedback {
        Feedback::Correct => text.black().on_green().bold(),
        Feedback::Present => text.black().on_yellow().bold(),
        Feedback::Absent => text.white().on_bright_black(),
    }
}

/// A guess rendered as colored tiles
#[must_use]
pub fn colored_guess(word: &Word, row: &FeedbackRow) -> String {
    word.chars()
        .iter()
        .zip(row)
        .map(|(&letter, &feedback)| format!("{}", colored_letter(letter, feedback)))
        .collect()
}

/// `"1 word"` / `"3 words"` / `"2 guesses"`
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    match count {
        1 => format!("{count} {noun}"),
        _ if noun.ends_with('s') => format!("{count} {noun}es"),
        _ => format!("{count} {noun}s"),
    }
}

/// Comma separated words, e.g. `light, might, fight`
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}
