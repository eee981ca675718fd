//! Accumulated letter constraints
//!
//! The knowledge base records everything learned from feedback so far:
//! - confirmed letters per position (green)
//! - letters present but not at a given position (yellow)
//! - letters absent from the word (grey)
//!
//! It only ever grows during a game.

pub mod matcher;

use crate::core::{Feedback, FeedbackRow, LetterSet, PartialRow, WORD_LENGTH, Word};
use log::debug;

pub use matcher::{consistent_words, is_consistent};

/// Grey-cell counts of the two most recent rounds
///
/// Two consecutive rounds with the same count means the default strategy has
/// stopped learning about absent letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreyTracker {
    previous: usize,
    current: usize,
}

impl Default for GreyTracker {
    // previous starts at WORD_LENGTH so a fresh game never looks stagnant
    fn default() -> Self {
        Self {
            previous: WORD_LENGTH,
            current: 0,
        }
    }
}

impl GreyTracker {
    /// Shift in the grey count of a just-completed round
    pub fn record(&mut self, greys: usize) {
        self.previous = self.current;
        self.current = greys;
    }

    #[must_use]
    pub const fn previous(&self) -> usize {
        self.previous
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn is_stagnant(&self) -> bool {
        self.previous == self.current
    }
}

fn partial_emoji(marks: &PartialRow) -> String {
    marks
        .iter()
        .map(|mark| mark.map_or('·', Feedback::emoji))
        .collect()
}

/// Constraint state built from every feedback round of a game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    confirmed: [Option<u8>; WORD_LENGTH],
    misplaced: [LetterSet; WORD_LENGTH],
    excluded: LetterSet,
    greys: GreyTracker,
}

impl KnowledgeBase {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one round of feedback into the knowledge base
    ///
    /// Returns the number of grey cells in the round, which is also recorded
    /// for stagnation detection. Contradictions with earlier rounds are not
    /// checked; they are simply accumulated.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    /// use wordle_assist::knowledge::KnowledgeBase;
    ///
    /// let mut kb = KnowledgeBase::new();
    /// let guess = Word::new("tears").unwrap();
    /// let greys = kb.apply_feedback(&guess, &[
    ///     Feedback::Correct,
    ///     Feedback::Absent,
    ///     Feedback::Present,
    ///     Feedback::Absent,
    ///     Feedback::Absent,
    /// ]);
    /// assert_eq!(greys, 3);
    /// assert_eq!(kb.confirmed(0), Some(b't'));
    /// ```
    pub fn apply_feedback(&mut self, guess: &Word, feedback: &FeedbackRow) -> usize {
        self.apply_partial(guess, &feedback.map(Some))
    }

    /// Fold in the letters answered before a round was cut short
    ///
    /// Positions left as `None` teach nothing. The grey count of the answered
    /// positions is recorded like a full round.
    pub fn apply_partial(&mut self, guess: &Word, marks: &PartialRow) -> usize {
        let mut greys = 0;

        for (position, (&letter, &mark)) in guess.chars().iter().zip(marks).enumerate() {
            match mark {
                Some(Feedback::Correct) => self.confirmed[position] = Some(letter),
                Some(Feedback::Present) => {
                    self.misplaced[position].insert(letter);
                }
                Some(Feedback::Absent) => {
                    self.excluded.insert(letter);
                    greys += 1;
                }
                None => {}
            }
        }

        self.greys.record(greys);
        debug!(
            "applied {guess} {}: confirmed={} excluded={} greys {}->{}",
            partial_emoji(marks),
            self.confirmed_pattern(),
            self.excluded,
            self.greys.previous(),
            self.greys.current(),
        );
        greys
    }

    /// Feedback already implied for `guess[position]` by earlier rounds
    ///
    /// A letter already confirmed at this position is green; a letter already
    /// known to be misplaced here is yellow. Everything else must be asked.
    #[must_use]
    pub fn known_feedback(&self, guess: &Word, position: usize) -> Option<Feedback> {
        let letter = guess.char_at(position);
        if self.confirmed[position] == Some(letter) {
            Some(Feedback::Correct)
        } else if self.misplaced[position].contains(letter) {
            Some(Feedback::Present)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub const fn confirmed(&self, position: usize) -> Option<u8> {
        self.confirmed[position]
    }

    #[inline]
    #[must_use]
    pub const fn misplaced(&self, position: usize) -> LetterSet {
        self.misplaced[position]
    }

    #[inline]
    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    #[inline]
    #[must_use]
    pub const fn greys(&self) -> &GreyTracker {
        &self.greys
    }

    /// True once every position has a confirmed letter
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.confirmed.iter().all(Option::is_some)
    }

    #[must_use]
    pub fn confirmed_letters(&self) -> LetterSet {
        self.confirmed.iter().flatten().copied().collect()
    }

    #[must_use]
    pub fn misplaced_letters(&self) -> LetterSet {
        self.misplaced
            .iter()
            .fold(LetterSet::EMPTY, |acc, &set| acc.union(set))
    }

    /// Every letter the feedback has said anything about
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        self.confirmed_letters()
            .union(self.misplaced_letters())
            .union(self.excluded)
    }

    /// Confirmed letters with `_` for open positions, e.g. `t__r_`
    #[must_use]
    pub fn confirmed_pattern(&self) -> String {
        self.confirmed
            .iter()
            .map(|c| c.map_or('_', char::from))
            .collect()
    }
}
