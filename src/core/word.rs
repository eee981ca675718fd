//! Wordle word representation
//!
//! A Word stores a 5-letter word along with the set of letters it contains.

use super::LetterSet;
use std::fmt;
use thiserror::Error;

/// Number of letters in every Wordle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter Wordle word
///
/// Stores the word as bytes and caches its letter set for fast containment checks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
    letters: LetterSet,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    ///
    /// let word = Word::new("Tears").unwrap();
    /// assert_eq!(word.text(), "tears");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();
        let text = text.trim().to_lowercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_lowercase) {
            return Err(WordError::InvalidCharacters);
        }

        let letters = chars.iter().copied().collect();

        Ok(Self {
            text,
            chars,
            letters,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Distinct letters of the word
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> LetterSet {
        self.letters
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(letter)
    }

    /// True when some letter occurs more than once
    #[inline]
    #[must_use]
    pub const fn has_repeated_letters(&self) -> bool {
        self.letters.len() < WORD_LENGTH
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
