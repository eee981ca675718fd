//! Feedback channel: where per-letter feedback comes from

use crate::core::{Feedback, FeedbackRow, LetterResponse, Word};
use crate::error::GameError;

/// Supplies feedback one letter at a time
///
/// Only asked about letters that earlier rounds have not already settled.
pub trait FeedbackSource {
    /// Feedback for `guess[position]`
    ///
    /// # Errors
    /// Returns an error if the channel fails or the player quits.
    fn letter_feedback(&mut self, guess: &Word, position: usize)
    -> Result<LetterResponse, GameError>;
}

impl<F> FeedbackSource for F
where
    F: FnMut(&Word, usize) -> Result<LetterResponse, GameError>,
{
    fn letter_feedback(
        &mut self,
        guess: &Word,
        position: usize,
    ) -> Result<LetterResponse, GameError> {
        self(guess, position)
    }
}

/// Scores guesses against a known answer, as the real game would
#[derive(Debug, Clone)]
pub struct KnownAnswer {
    answer: Word,
    last: Option<(Word, FeedbackRow)>,
}

impl KnownAnswer {
    #[must_use]
    pub const fn new(answer: Word) -> Self {
        Self { answer, last: None }
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }
}

impl FeedbackSource for KnownAnswer {
    fn letter_feedback(
        &mut self,
        guess: &Word,
        position: usize,
    ) -> Result<LetterResponse, GameError> {
        let row = match &self.last {
            Some((scored, row)) if scored == guess => *row,
            _ => {
                let row = Feedback::score(guess, &self.answer);
                self.last = Some((guess.clone(), row));
                row
            }
        };
        Ok(LetterResponse::Mark(row[position]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_answer_scores_each_position() {
        let mut source = KnownAnswer::new(Word::new("slate").unwrap());
        let guess = Word::new("crane").unwrap();

        let marks: Vec<LetterResponse> = (0..5)
            .map(|p| source.letter_feedback(&guess, p).unwrap())
            .collect();
        assert_eq!(
            marks,
            [
                LetterResponse::Mark(Feedback::Absent),
                LetterResponse::Mark(Feedback::Absent),
                LetterResponse::Mark(Feedback::Correct),
                LetterResponse::Mark(Feedback::Absent),
                LetterResponse::Mark(Feedback::Correct),
            ]
        );
    }

    #[test]
    fn closures_are_sources() {
        let mut calls = 0;
        let mut source = |_: &Word, _: usize| {
            calls += 1;
            Ok::<_, GameError>(LetterResponse::InvalidWord)
        };
        let guess = Word::new("crane").unwrap();
        assert_eq!(
            source.letter_feedback(&guess, 0).unwrap(),
            LetterResponse::InvalidWord
        );
        assert_eq!(calls, 1);
    }
}
