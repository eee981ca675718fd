//! Error types shared by the solver and the game session

use crate::core::WordError;
use thiserror::Error;

/// Errors that end or refuse a game step
#[derive(Debug, Error)]
pub enum GameError {
    /// No catalog word is consistent with the accumulated feedback
    #[error("no word in the list fits the feedback so far")]
    NoCandidate,

    /// A word supplied by the user is malformed or not in the word list
    #[error("invalid word '{word}': {reason}")]
    InvalidWord { word: String, reason: String },

    /// A session method was called in a state that does not accept it
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    /// The feedback source asked to stop the game
    #[error("game aborted by the player")]
    Quit,

    #[error("I/O error on the feedback channel")]
    Io(#[from] std::io::Error),
}

impl GameError {
    #[must_use]
    pub fn invalid_word(word: &str, err: &WordError) -> Self {
        Self::InvalidWord {
            word: word.to_string(),
            reason: err.to_string(),
        }
    }
}
