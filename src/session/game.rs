//! One game of Wordle as an explicit state machine
//!
//! ```text
//! AwaitingGuess --next_guess--> AwaitingFeedback --submit_round--> AwaitingGuess
//!                                                              \-> Solved | Failed
//! ```
//!
//! An invalid-word report drops the guess from the catalog and returns to
//! `AwaitingGuess` without using up a round. Letters answered before the
//! report still count.

use super::events::{GameEvent, GameObserver};
use super::source::FeedbackSource;
use crate::core::{Feedback, FeedbackRow, LetterResponse, PartialRow, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::knowledge::KnowledgeBase;
use crate::solver::{Progress, Strategy};
use crate::wordlists::WordCatalog;
use log::{debug, info};

/// Number of candidates shown in the verbose preview
const PREVIEW_LEN: usize = 10;

/// Per-game settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_rounds: usize,
    /// Emit the verbose diagnostic events
    pub verbose: bool,
    /// Fixed first guess instead of asking the strategy
    pub opener: Option<Word>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_rounds: 6,
            verbose: false,
            opener: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingGuess,
    AwaitingFeedback,
    Solved,
    Failed,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Solved | Self::Failed)
    }

    const fn describe(self) -> &'static str {
        match self {
            Self::AwaitingGuess => "waiting for a guess",
            Self::AwaitingFeedback => "waiting for feedback",
            Self::Solved => "solved",
            Self::Failed => "failed",
        }
    }
}

/// Feedback for the pending guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundResponse {
    Marks(FeedbackRow),
    /// The guess is not a word; carries the letters answered before that
    InvalidWord(PartialRow),
}

/// Result of submitting a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Continue,
    InvalidWord,
    Solved { rounds: usize },
    Failed { rounds: usize },
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Solved { rounds: usize },
    Failed { rounds: usize },
}

/// A guess waiting for feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingGuess {
    pub word: Word,
    pub exploratory: bool,
}

/// State of a single game
pub struct GameSession<S: Strategy> {
    catalog: WordCatalog,
    kb: KnowledgeBase,
    strategy: S,
    config: SessionConfig,
    progress: Progress,
    state: GameState,
    pending: Option<PendingGuess>,
    history: Vec<(Word, FeedbackRow)>,
    /// A round was completed since the last guess was chosen
    round_completed: bool,
}

impl<S: Strategy> GameSession<S> {
    #[must_use]
    pub fn new(catalog: WordCatalog, strategy: S, config: SessionConfig) -> Self {
        let progress = Progress::new(config.max_rounds);
        Self {
            catalog,
            kb: KnowledgeBase::new(),
            strategy,
            config,
            progress,
            state: GameState::AwaitingGuess,
            pending: None,
            history: Vec::new(),
            round_completed: false,
        }
    }

    /// Start over with a fresh knowledge base, keeping catalog removals
    pub fn reset(&mut self) {
        self.kb = KnowledgeBase::new();
        self.progress = Progress::new(self.config.max_rounds);
        self.state = GameState::AwaitingGuess;
        self.pending = None;
        self.history.clear();
        self.round_completed = false;
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    #[must_use]
    pub const fn catalog(&self) -> &WordCatalog {
        &self.catalog
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Rounds played so far
    #[must_use]
    pub const fn rounds_played(&self) -> usize {
        self.progress.round
    }

    /// Whether the one exploratory guess of this game has been used
    #[must_use]
    pub const fn explored(&self) -> bool {
        self.progress.explored
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, FeedbackRow)] {
        &self.history
    }

    #[must_use]
    pub const fn pending(&self) -> Option<&PendingGuess> {
        self.pending.as_ref()
    }

    /// Catalog words consistent with the feedback so far
    #[must_use]
    pub fn candidates(&self) -> Vec<&Word> {
        crate::knowledge::consistent_words(&self.catalog, &self.kb)
    }

    /// Feedback for `position` of the pending guess already implied by earlier rounds
    #[must_use]
    pub fn known_feedback(&self, position: usize) -> Option<Feedback> {
        self.pending
            .as_ref()
            .and_then(|pending| self.kb.known_feedback(&pending.word, position))
    }

    fn expect_state(&self, expected: GameState, action: &'static str) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState {
                action,
                state: self.state.describe(),
            })
        }
    }

    fn emit_verbose<O: GameObserver>(&self, observer: &mut O, event: GameEvent) {
        if self.config.verbose {
            observer.on_event(&event);
        }
    }

    /// Choose the next guess and wait for its feedback
    ///
    /// # Errors
    /// - `GameError::NoCandidate` when nothing in the catalog fits the feedback
    /// - `GameError::InvalidState` unless a guess is expected
    pub fn next_guess<O: GameObserver>(&mut self, observer: &mut O) -> Result<&Word, GameError> {
        self.expect_state(GameState::AwaitingGuess, "choose a guess")?;

        let opener = self
            .config
            .opener
            .as_ref()
            .filter(|opener| self.progress.round == 0 && self.catalog.contains(opener))
            .cloned();

        let pending = if let Some(word) = opener {
            PendingGuess {
                word,
                exploratory: false,
            }
        } else {
            self.select(observer)?
        };

        if pending.exploratory {
            self.progress.explored = true;
        }

        observer.on_event(&GameEvent::Guess {
            round: self.progress.round + 1,
            word: pending.word.clone(),
            exploratory: pending.exploratory,
        });
        self.state = GameState::AwaitingFeedback;
        Ok(&self.pending.insert(pending).word)
    }

    fn select<O: GameObserver>(&mut self, observer: &mut O) -> Result<PendingGuess, GameError> {
        let report_candidates = std::mem::take(&mut self.round_completed);
        let selection = self
            .strategy
            .select_guess(&self.catalog, &self.kb, self.progress)?;

        if report_candidates {
            self.emit_verbose(
                observer,
                GameEvent::Candidates {
                    count: selection.candidates.len(),
                    preview: selection
                        .candidates
                        .iter()
                        .take(PREVIEW_LEN)
                        .map(|&w| w.clone())
                        .collect(),
                },
            );
        }

        if let Some(attempt) = &selection.exploration {
            self.emit_verbose(
                observer,
                GameEvent::RoundsRemaining {
                    remaining: self.progress.remaining_rounds(),
                },
            );
            self.emit_verbose(
                observer,
                GameEvent::Exploring {
                    undetermined: attempt.undetermined,
                },
            );
            let event = match attempt.accepted() {
                Some((word, matched)) => GameEvent::ExplorationFound {
                    word: word.clone(),
                    matched,
                },
                None => GameEvent::ExplorationAbandoned,
            };
            self.emit_verbose(observer, event);
        }

        Ok(PendingGuess {
            word: selection.word.clone(),
            exploratory: selection.is_exploratory(),
        })
    }

    /// Fold in the feedback for the pending guess
    ///
    /// # Errors
    /// Returns `GameError::InvalidState` unless a guess is waiting for feedback.
    pub fn submit_round<O: GameObserver>(
        &mut self,
        response: RoundResponse,
        observer: &mut O,
    ) -> Result<Transition, GameError> {
        self.expect_state(GameState::AwaitingFeedback, "submit feedback")?;
        let Some(pending) = self.pending.take() else {
            return Err(GameError::InvalidState {
                action: "submit feedback",
                state: "without a pending guess",
            });
        };

        let row = match response {
            RoundResponse::InvalidWord(answered) => {
                self.kb.apply_partial(&pending.word, &answered);
                self.catalog.remove(&pending.word);
                info!("'{}' rejected as not a word", pending.word);
                observer.on_event(&GameEvent::InvalidWord { word: pending.word });
                self.state = GameState::AwaitingGuess;
                return Ok(Transition::InvalidWord);
            }
            RoundResponse::Marks(row) => row,
        };

        self.kb.apply_feedback(&pending.word, &row);
        self.progress.round += 1;
        let rounds = self.progress.round;
        observer.on_event(&GameEvent::RoundComplete {
            round: rounds,
            word: pending.word.clone(),
            row,
        });
        self.history.push((pending.word, row));

        let transition = if self.kb.is_solved() {
            self.state = GameState::Solved;
            observer.on_event(&GameEvent::Solved { rounds });
            Transition::Solved { rounds }
        } else if rounds >= self.config.max_rounds {
            self.state = GameState::Failed;
            observer.on_event(&GameEvent::Failed { rounds });
            Transition::Failed { rounds }
        } else {
            self.state = GameState::AwaitingGuess;
            self.round_completed = true;
            Transition::Continue
        };
        debug!("round {rounds} -> {transition:?}");
        Ok(transition)
    }

    /// Play one round: guess, collect feedback letter by letter, apply it
    ///
    /// Letters settled by earlier rounds are filled in without asking. An
    /// invalid-word response stops the round at once; the letters answered
    /// before it are kept.
    ///
    /// # Errors
    /// Propagates strategy and feedback-channel errors.
    pub fn play_round<F, O>(&mut self, source: &mut F, observer: &mut O) -> Result<Transition, GameError>
    where
        F: FeedbackSource + ?Sized,
        O: GameObserver,
    {
        let guess = self.next_guess(observer)?.clone();
        let mut answered: PartialRow = [None; WORD_LENGTH];

        for position in 0..WORD_LENGTH {
            let letter = guess.char_at(position);
            let (feedback, inferred) = if let Some(known) = self.kb.known_feedback(&guess, position) {
                (known, true)
            } else {
                match source.letter_feedback(&guess, position)? {
                    LetterResponse::Mark(feedback) => (feedback, false),
                    LetterResponse::InvalidWord => {
                        return self.submit_round(RoundResponse::InvalidWord(answered), observer);
                    }
                }
            };
            answered[position] = Some(feedback);
            observer.on_event(&GameEvent::LetterFeedback {
                position,
                letter,
                feedback,
                inferred,
            });
        }

        let row = answered.map(|mark| mark.unwrap_or(Feedback::Absent));
        self.submit_round(RoundResponse::Marks(row), observer)
    }

    /// Play rounds until the game is solved or failed
    ///
    /// # Errors
    /// `GameError::NoCandidate` ends the game early, as do feedback-channel errors.
    pub fn run<F, O>(&mut self, source: &mut F, observer: &mut O) -> Result<Outcome, GameError>
    where
        F: FeedbackSource + ?Sized,
        O: GameObserver,
    {
        loop {
            match self.play_round(source, observer)? {
                Transition::Solved { rounds } => return Ok(Outcome::Solved { rounds }),
                Transition::Failed { rounds } => return Ok(Outcome::Failed { rounds }),
                Transition::Continue | Transition::InvalidWord => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{Absent, Correct, Present};
    use crate::session::KnownAnswer;
    use crate::solver::{GreedyStrategy, TwoTierStrategy};
    use crate::wordlists::loader::words_from_slice;
    use std::collections::VecDeque;

    fn catalog(words: &[&str]) -> WordCatalog {
        WordCatalog::new(words_from_slice(words))
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn session(words: &[&str]) -> GameSession<TwoTierStrategy> {
        GameSession::new(
            catalog(words),
            TwoTierStrategy::default(),
            SessionConfig::default(),
        )
    }

    /// Replays typed codes in order and counts how many were asked for
    struct Scripted {
        codes: VecDeque<&'static str>,
        asked: usize,
    }

    impl Scripted {
        fn new(codes: &[&'static str]) -> Self {
            Self {
                codes: codes.iter().copied().collect(),
                asked: 0,
            }
        }
    }

    impl FeedbackSource for Scripted {
        fn letter_feedback(&mut self, _: &Word, _: usize) -> Result<LetterResponse, GameError> {
            self.asked += 1;
            self.codes
                .pop_front()
                .map(LetterResponse::from_code)
                .ok_or(GameError::Quit)
        }
    }

    #[test]
    fn first_guess_is_most_common_word() {
        let mut game = session(&["about", "other", "which"]);
        let guess = game.next_guess(&mut ()).unwrap();
        assert_eq!(guess.text(), "about");
        assert_eq!(game.state(), GameState::AwaitingFeedback);
    }

    #[test]
    fn opener_overrides_first_guess_only() {
        let config = SessionConfig {
            opener: Some(word("tears")),
            ..SessionConfig::default()
        };
        let mut game = GameSession::new(
            catalog(&["about", "tears", "other"]),
            GreedyStrategy,
            config,
        );

        assert_eq!(game.next_guess(&mut ()).unwrap().text(), "tears");
        game.submit_round(RoundResponse::Marks([Absent; 5]), &mut ())
            .unwrap();
        // "about" has a t, "other" has t/e/r
        assert!(matches!(game.next_guess(&mut ()), Err(GameError::NoCandidate)));
    }

    #[test]
    fn invalid_word_removed_without_using_a_round() {
        let mut game = session(&["tears", "crane", "toast"]);
        let mut events = Vec::new();
        let mut source = Scripted::new(&["g", "", "x", "g"]);

        let transition = game.play_round(&mut source, &mut events).unwrap();

        assert_eq!(transition, Transition::InvalidWord);
        assert_eq!(game.rounds_played(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.state(), GameState::AwaitingGuess);
        assert!(game.catalog().find("tears").is_none());
        assert_eq!(source.asked, 3);
        assert!(events.contains(&GameEvent::InvalidWord { word: word("tears") }));

        // T green and E grey were answered before the x
        let kb = game.knowledge();
        assert_eq!(kb.confirmed(0), Some(b't'));
        assert!(kb.excluded().contains(b'e'));
        assert!(!kb.excluded().contains(b'a'));
        assert_eq!((kb.greys().previous(), kb.greys().current()), (0, 1));

        assert_eq!(game.next_guess(&mut ()).unwrap().text(), "toast");
    }

    #[test]
    fn invalid_word_at_first_letter_learns_nothing() {
        let mut game = session(&["tears", "crane"]);
        let mut source = Scripted::new(&["x"]);

        game.play_round(&mut source, &mut ()).unwrap();

        assert_eq!(game.knowledge().confirmed_pattern(), "_____");
        assert!(game.knowledge().excluded().is_empty());
        assert_eq!(game.next_guess(&mut ()).unwrap().text(), "crane");
    }

    #[test]
    fn candidates_reported_only_after_a_completed_round() {
        let mut game = GameSession::new(
            catalog(&["tears", "crane", "toast", "tough"]),
            TwoTierStrategy::default(),
            SessionConfig {
                verbose: true,
                ..SessionConfig::default()
            },
        );
        let mut events = Vec::new();
        let mut source = Scripted::new(&["g", "x"]);

        game.play_round(&mut source, &mut events).unwrap();
        game.next_guess(&mut events).unwrap();
        assert!(
            !events
                .iter()
                .any(|e| matches!(e, GameEvent::Candidates { .. }))
        );

        game.submit_round(
            RoundResponse::Marks([Correct, Correct, Absent, Absent, Absent]),
            &mut events,
        )
        .unwrap();
        game.next_guess(&mut events).unwrap();
        assert!(events.contains(&GameEvent::Candidates {
            count: 1,
            preview: vec![word("tough")],
        }));
    }

    #[test]
    fn all_green_solves_and_stops() {
        let mut game = session(&["tears", "crane"]);
        let mut source = Scripted::new(&["g", "g", "g", "g", "g"]);
        let mut events = Vec::new();

        let outcome = game.run(&mut source, &mut events).unwrap();

        assert_eq!(outcome, Outcome::Solved { rounds: 1 });
        assert_eq!(game.state(), GameState::Solved);
        assert!(matches!(
            game.next_guess(&mut ()),
            Err(GameError::InvalidState { .. })
        ));
        assert_eq!(events.last(), Some(&GameEvent::Solved { rounds: 1 }));
    }

    #[test]
    fn settled_letters_are_not_asked_again() {
        // Answer "tough": TEARS gives T green; THING keeps T, asks the rest
        let mut game = session(&["tears", "thing", "tough"]);
        let mut source = Scripted::new(&["g", "", "", "", "", "", "", "", "y"]);
        let mut events = Vec::new();

        game.play_round(&mut source, &mut events).unwrap();
        assert_eq!(source.asked, 5);

        game.play_round(&mut source, &mut events).unwrap();
        // T inferred, four letters asked
        assert_eq!(source.asked, 9);
        assert!(events.contains(&GameEvent::LetterFeedback {
            position: 0,
            letter: b't',
            feedback: Correct,
            inferred: true,
        }));
    }

    #[test]
    fn runs_out_of_rounds() {
        let config = SessionConfig {
            max_rounds: 2,
            ..SessionConfig::default()
        };
        let mut game = GameSession::new(
            catalog(&["tears", "tones", "tunes", "tubes"]),
            GreedyStrategy,
            config,
        );
        let mut source = |guess: &Word, position: usize| {
            let feedback = match (guess.char_at(position), position) {
                (b't', 0) | (b's', 4) => Correct,
                (b'e', _) => Present,
                _ => Absent,
            };
            Ok::<_, GameError>(LetterResponse::Mark(feedback))
        };

        let outcome = game.run(&mut source, &mut ()).unwrap();
        assert_eq!(outcome, Outcome::Failed { rounds: 2 });
        assert_eq!(game.state(), GameState::Failed);
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn contradictory_feedback_ends_with_no_candidate() {
        let mut game = session(&["tears", "other"]);
        let mut source = Scripted::new(&["", "", "", "", ""]);

        game.play_round(&mut source, &mut ()).unwrap();
        let err = game.play_round(&mut source, &mut ()).unwrap_err();
        assert!(matches!(err, GameError::NoCandidate));
    }

    #[test]
    fn exploratory_guess_when_progress_stalls() {
        let words = [
            "tears", "donut", "climb", "light", "might", "fight", "wight", "bight",
        ];
        let config = SessionConfig {
            opener: Some(word("tears")),
            verbose: true,
            ..SessionConfig::default()
        };
        let mut game = GameSession::new(catalog(&words), TwoTierStrategy::default(), config);
        let mut events = Vec::new();

        assert_eq!(game.next_guess(&mut events).unwrap().text(), "tears");
        game.submit_round(
            RoundResponse::Marks([Present, Absent, Absent, Absent, Absent]),
            &mut events,
        )
        .unwrap();

        // greys 0 -> 4: not stagnant, so the top candidate is guessed
        assert_eq!(game.next_guess(&mut events).unwrap().text(), "donut");
        assert!(!game.explored());
        game.submit_round(
            RoundResponse::Marks([Absent, Absent, Absent, Absent, Correct]),
            &mut events,
        )
        .unwrap();

        // greys 4 -> 4 with five candidates and four rounds left
        assert_eq!(game.next_guess(&mut events).unwrap().text(), "climb");
        assert!(game.explored());
        assert!(events.contains(&GameEvent::RoundsRemaining { remaining: 4 }));
        assert!(events.contains(&GameEvent::ExplorationFound {
            word: word("climb"),
            matched: 4,
        }));
        game.submit_round(
            RoundResponse::Marks([Absent, Absent, Present, Absent, Absent]),
            &mut events,
        )
        .unwrap();

        assert_eq!(game.next_guess(&mut events).unwrap().text(), "fight");
        assert_eq!(
            events.last(),
            Some(&GameEvent::Guess {
                round: 4,
                word: word("fight"),
                exploratory: false,
            })
        );
    }

    #[test]
    fn verbose_events_only_when_enabled() {
        let mut quiet = session(&["tears", "thing", "tough"]);
        let mut events = Vec::new();
        quiet.next_guess(&mut events).unwrap();
        quiet
            .submit_round(
                RoundResponse::Marks([Correct, Absent, Absent, Absent, Absent]),
                &mut events,
            )
            .unwrap();
        quiet.next_guess(&mut events).unwrap();
        assert!(events.iter().all(|e| !e.is_verbose()));

        let mut loud = GameSession::new(
            catalog(&["tears", "thing", "tough"]),
            TwoTierStrategy::default(),
            SessionConfig {
                verbose: true,
                ..SessionConfig::default()
            },
        );
        let mut events = Vec::new();
        loud.next_guess(&mut events).unwrap();
        loud.submit_round(
            RoundResponse::Marks([Correct, Absent, Absent, Absent, Absent]),
            &mut events,
        )
        .unwrap();
        loud.next_guess(&mut events).unwrap();
        assert!(events.contains(&GameEvent::Candidates {
            count: 2,
            preview: vec![word("thing"), word("tough")],
        }));
    }

    #[test]
    fn simulated_game_reaches_answer() {
        let mut game = session(&["tears", "crane", "about", "thing", "night", "light"]);
        let mut source = KnownAnswer::new(word("light"));

        let outcome = game.run(&mut source, &mut ()).unwrap();
        assert!(matches!(outcome, Outcome::Solved { .. }));
        assert_eq!(game.history().last().map(|(w, _)| w.text()), Some("light"));
    }

    #[test]
    fn reset_keeps_catalog_removals() {
        let mut game = session(&["tears", "crane"]);
        game.next_guess(&mut ()).unwrap();
        game.submit_round(RoundResponse::InvalidWord([None; 5]), &mut ())
            .unwrap();
        game.next_guess(&mut ()).unwrap();
        game.submit_round(RoundResponse::Marks([Absent; 5]), &mut ())
            .unwrap();

        game.reset();
        assert_eq!(game.rounds_played(), 0);
        assert_eq!(game.state(), GameState::AwaitingGuess);
        assert_eq!(game.next_guess(&mut ()).unwrap().text(), "crane");
    }

    #[test]
    fn submitting_without_a_guess_is_rejected() {
        let mut game = session(&["tears"]);
        let err = game
            .submit_round(RoundResponse::Marks([Correct; 5]), &mut ())
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidState { .. }));
    }
}
