//! Word solving command
//!
//! Plays a game against a known target word and returns the solution path.

use crate::core::{FeedbackRow, Word};
use crate::error::GameError;
use crate::session::{
    FeedbackSource, GameEvent, GameSession, KnownAnswer, SessionConfig, Transition,
};
use crate::solver::Strategy;
use crate::wordlists::WordCatalog;

/// How a simulated game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveEnd {
    Solved,
    OutOfRounds,
    /// Feedback ruled out every catalog word
    NoCandidate,
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub target: Word,
    pub guesses: Vec<GuessStep>,
    pub end: SolveEnd,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.end == SolveEnd::Solved
    }

    #[must_use]
    pub fn used_exploration(&self) -> bool {
        self.guesses.iter().any(|step| step.exploratory)
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: Word,
    pub row: FeedbackRow,
    pub exploratory: bool,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Play one game with `catalog` against `target`
///
/// The target does not have to be in the catalog; if it is not, the game
/// usually ends with [`SolveEnd::NoCandidate`].
///
/// # Errors
///
/// Only session misuse errors are returned; running out of candidates is
/// reported through [`SolveResult::end`].
pub fn solve_word<S: Strategy>(
    catalog: WordCatalog,
    strategy: S,
    config: SessionConfig,
    target: Word,
) -> Result<SolveResult, GameError> {
    let mut session = GameSession::new(catalog, strategy, config);
    let mut answer = KnownAnswer::new(target.clone());
    let (guesses, end) = record_game(&mut session, &mut answer)?;

    Ok(SolveResult {
        target,
        guesses,
        end,
    })
}

/// Play `session` to the end, keeping one step per completed round
fn record_game<S, F>(
    session: &mut GameSession<S>,
    source: &mut F,
) -> Result<(Vec<GuessStep>, SolveEnd), GameError>
where
    S: Strategy,
    F: FeedbackSource + ?Sized,
{
    let mut guesses = Vec::new();

    let end = loop {
        let candidates_before = session.candidates().len();
        let mut events: Vec<GameEvent> = Vec::new();

        let transition = match session.play_round(source, &mut events) {
            Ok(transition) => transition,
            Err(GameError::NoCandidate) => break SolveEnd::NoCandidate,
            Err(err) => return Err(err),
        };

        let exploratory = events.iter().any(|event| {
            matches!(
                event,
                GameEvent::Guess {
                    exploratory: true,
                    ..
                }
            )
        });

        // a rejected word leaves no history entry of its own
        if transition != Transition::InvalidWord
            && let Some((word, row)) = session.history().last()
        {
            guesses.push(GuessStep {
                word: word.clone(),
                row: *row,
                exploratory,
                candidates_before,
                candidates_after: session.candidates().len(),
            });
        }

        match transition {
            Transition::Solved { .. } => break SolveEnd::Solved,
            Transition::Failed { .. } => break SolveEnd::OutOfRounds,
            Transition::Continue | Transition::InvalidWord => {}
        }
    };

    Ok((guesses, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, LetterResponse};
    use crate::solver::{GreedyStrategy, StrategyType};
    use crate::wordlists::{embedded_catalog, loader::words_from_slice};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn solve_small_catalog() {
        let catalog = WordCatalog::new(words_from_slice(&[
            "tears", "crane", "about", "thing", "night", "light",
        ]));

        let result = solve_word(catalog, GreedyStrategy, SessionConfig::default(), word("light"))
            .unwrap();

        assert!(result.success());
        let path: Vec<&str> = result.guesses.iter().map(|s| s.word.text()).collect();
        assert_eq!(path, ["tears", "night", "light"]);
        assert!(Feedback::is_all_correct(&result.guesses[2].row));
        assert_eq!(result.guesses[0].candidates_before, 6);
        assert_eq!(result.guesses[0].candidates_after, 2);
    }

    #[test]
    fn solve_respects_max_rounds() {
        let config = SessionConfig {
            max_rounds: 2,
            ..SessionConfig::default()
        };
        let catalog = WordCatalog::new(words_from_slice(&[
            "tears", "crane", "about", "thing", "night", "light",
        ]));

        let result = solve_word(catalog, GreedyStrategy, config, word("light")).unwrap();
        assert_eq!(result.end, SolveEnd::OutOfRounds);
        assert_eq!(result.guesses.len(), 2);
    }

    #[test]
    fn rejected_word_is_not_recorded_as_a_step() {
        let catalog = WordCatalog::new(words_from_slice(&[
            "tears", "crane", "about", "thing", "night", "light",
        ]));
        let mut session = GameSession::new(catalog, GreedyStrategy, SessionConfig::default());
        let mut answer = KnownAnswer::new(word("light"));
        let mut source = |guess: &Word, position: usize| {
            if guess.text() == "night" {
                Ok(LetterResponse::InvalidWord)
            } else {
                answer.letter_feedback(guess, position)
            }
        };

        let (guesses, end) = record_game(&mut session, &mut source).unwrap();

        assert_eq!(end, SolveEnd::Solved);
        let path: Vec<&str> = guesses.iter().map(|s| s.word.text()).collect();
        assert_eq!(path, ["tears", "light"]);
        assert_eq!(guesses[1].candidates_before, 1);
        assert!(session.catalog().find("night").is_none());
    }

    #[test]
    fn target_outside_catalog_runs_dry() {
        let catalog = WordCatalog::new(words_from_slice(&["tears", "crane"]));
        let result =
            solve_word(catalog, GreedyStrategy, SessionConfig::default(), word("jumpy")).unwrap();
        assert_eq!(result.end, SolveEnd::NoCandidate);
    }

    #[test]
    fn solve_with_embedded_list() {
        let result = solve_word(
            embedded_catalog(),
            StrategyType::default(),
            SessionConfig::default(),
            word("about"),
        )
        .unwrap();

        // "about" is the most common word, so it is the opening guess
        assert!(result.success());
        assert_eq!(result.guesses.len(), 1);
    }
}
