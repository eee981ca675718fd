//! Core domain types for Wordle
//!
//! This module contains the fundamental value types shared by every other layer.
//! All types here are pure and cheap to test.

mod feedback;
mod letters;
mod word;

pub use feedback::{Feedback, FeedbackRow, LetterResponse, PartialRow};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
