//! Per-letter Wordle feedback
//!
//! A guess round produces one `Feedback` per position:
//! - Absent (grey): letter not in word
//! - Present (yellow): letter in word, wrong position
//! - Correct (green): letter in correct position

use super::{WORD_LENGTH, Word};

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Absent,
    Present,
    Correct,
}

/// Feedback for a whole guess, one entry per position
pub type FeedbackRow = [Feedback; WORD_LENGTH];

/// Feedback for the positions answered so far in an unfinished round
pub type PartialRow = [Option<Feedback>; WORD_LENGTH];

/// What the feedback channel reported for one letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterResponse {
    Mark(Feedback),
    /// The guessed word is not a recognised word
    InvalidWord,
}

impl LetterResponse {
    /// Interpret a typed feedback code
    ///
    /// `g` is green, `y` is yellow, `x` rejects the guessed word, and anything
    /// else (including an empty line) counts as grey.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, LetterResponse};
    ///
    /// assert_eq!(LetterResponse::from_code("g"), LetterResponse::Mark(Feedback::Correct));
    /// assert_eq!(LetterResponse::from_code("x"), LetterResponse::InvalidWord);
    /// assert_eq!(LetterResponse::from_code(""), LetterResponse::Mark(Feedback::Absent));
    /// ```
    #[must_use]
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "g" => Self::Mark(Feedback::Correct),
            "y" => Self::Mark(Feedback::Present),
            "x" => Self::InvalidWord,
            _ => Self::Mark(Feedback::Absent),
        }
    }

    /// Interpret a single key press, with the same vocabulary as [`from_code`](Self::from_code)
    #[must_use]
    pub fn from_key(key: char) -> Self {
        match key.to_ascii_lowercase() {
            'g' => Self::Mark(Feedback::Correct),
            'y' => Self::Mark(Feedback::Present),
            'x' => Self::InvalidWord,
            _ => Self::Mark(Feedback::Absent),
        }
    }
}

impl Feedback {
    /// Score `guess` against a known `answer`
    ///
    /// Implements Wordle's feedback rules, including duplicate letters:
    /// greens are assigned first and consume their letter, then yellows are
    /// assigned left to right while unmatched copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::{Feedback, Word};
    ///
    /// let row = Feedback::score(&Word::new("crane").unwrap(), &Word::new("slate").unwrap());
    /// assert_eq!(Feedback::row_to_emoji(&row), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> FeedbackRow {
        let mut result = [Self::Absent; WORD_LENGTH];
        let mut available = [0u8; 26];

        for (i, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[i] = Self::Correct;
            } else {
                available[usize::from(a - b'a')] += 1;
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == Self::Correct {
                continue;
            }
            let slot = &mut available[usize::from(g - b'a')];
            if *slot > 0 {
                result[i] = Self::Present;
                *slot -= 1;
            }
        }

        result
    }

    /// Square used to draw this feedback in a results grid
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Single-letter code, as typed on the feedback channel
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => '-',
        }
    }

    #[must_use]
    pub fn row_to_emoji(row: &FeedbackRow) -> String {
        row.iter().map(|f| f.emoji()).collect()
    }

    #[must_use]
    pub fn is_all_correct(row: &FeedbackRow) -> bool {
        row.iter().all(|&f| f == Self::Correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Absent, Correct, Present};

    fn score(guess: &str, answer: &str) -> FeedbackRow {
        Feedback::score(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn score_all_absent_and_all_correct() {
        assert_eq!(score("abcde", "fghij"), [Absent; 5]);
        assert_eq!(score("crane", "crane"), [Correct; 5]);
        assert!(Feedback::is_all_correct(&score("crane", "crane")));
    }

    #[test]
    fn score_duplicate_letters_yellow_limited_by_answer_copies() {
        // SPEED vs ERASE: S yellow, P grey, both Es yellow (two Es in ERASE)
        assert_eq!(
            score("speed", "erase"),
            [Present, Absent, Present, Present, Absent]
        );
        // SPEED vs ABIDE: only one E available, so the second E is grey
        assert_eq!(
            score("speed", "abide"),
            [Absent, Absent, Present, Absent, Present]
        );
    }

    #[test]
    fn score_green_takes_priority_over_yellow() {
        // ROBOT vs FLOOR: first O yellow, second O green
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn codes_are_permissive() {
        assert_eq!(LetterResponse::from_code(" G \n"), LetterResponse::Mark(Correct));
        assert_eq!(LetterResponse::from_code("y"), LetterResponse::Mark(Present));
        assert_eq!(LetterResponse::from_code("X"), LetterResponse::InvalidWord);
        assert_eq!(LetterResponse::from_code("green"), LetterResponse::Mark(Absent));
        assert_eq!(LetterResponse::from_code("?"), LetterResponse::Mark(Absent));
        assert_eq!(LetterResponse::from_key('Y'), LetterResponse::Mark(Present));
        assert_eq!(LetterResponse::from_key(' '), LetterResponse::Mark(Absent));
    }

    #[test]
    fn emoji_row() {
        assert_eq!(
            Feedback::row_to_emoji(&[Correct, Present, Absent, Correct, Present]),
            "🟩🟨⬜🟩🟨"
        );
    }
}
