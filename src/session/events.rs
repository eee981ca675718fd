//! Render channel: what a game reports while it runs

use crate::core::{Feedback, FeedbackRow, LetterSet, Word};

/// Something worth showing to the player
///
/// Events marked *verbose* are only emitted when the session's `verbose`
/// flag is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A guess is being proposed for round `round` (1-based)
    Guess {
        round: usize,
        word: Word,
        exploratory: bool,
    },
    /// Feedback for one letter; `inferred` when earlier rounds already settled it
    LetterFeedback {
        position: usize,
        letter: u8,
        feedback: Feedback,
        inferred: bool,
    },
    RoundComplete {
        round: usize,
        word: Word,
        row: FeedbackRow,
    },
    /// The guess was rejected as not a word and dropped from the catalog
    InvalidWord { word: Word },
    Solved { rounds: usize },
    Failed { rounds: usize },
    /// *verbose*: candidates consistent with the feedback so far
    Candidates { count: usize, preview: Vec<Word> },
    /// *verbose*: more candidates than rounds left, so an exploratory guess is considered
    RoundsRemaining { remaining: usize },
    /// *verbose*: searching for a word covering these letters
    Exploring { undetermined: LetterSet },
    /// *verbose*
    ExplorationFound { word: Word, matched: usize },
    /// *verbose*: no word was useful enough; falling back to the top candidate
    ExplorationAbandoned,
}

impl GameEvent {
    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        matches!(
            self,
            Self::Candidates { .. }
                | Self::RoundsRemaining { .. }
                | Self::Exploring { .. }
                | Self::ExplorationFound { .. }
                | Self::ExplorationAbandoned
        )
    }
}

/// Receives game events as they happen
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event
impl GameObserver for () {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Records every event, mostly useful in tests and batch runs
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(event.clone());
    }
}
