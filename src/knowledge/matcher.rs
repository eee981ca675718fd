//! Consistency check of a word against the knowledge base

use super::KnowledgeBase;
use crate::core::Word;
use log::trace;

/// Placeholder written over confirmed positions before the exclusion check
const MASKED: u8 = b'-';

/// Check whether `word` could still be the answer
///
/// # Algorithm
/// 1. Every confirmed position must hold its letter. Those positions are then
///    masked out, so a letter that is both confirmed and excluded only rejects
///    words carrying an extra copy of it elsewhere.
/// 2. Every misplaced letter must appear in the word, but not at the position
///    where it was reported.
/// 3. No excluded letter may appear in the masked word.
///
/// # Examples
/// ```
/// use wordle_assist::core::{Feedback, Word};
/// use wordle_assist::knowledge::{KnowledgeBase, is_consistent};
///
/// let mut kb = KnowledgeBase::new();
/// kb.apply_feedback(&Word::new("tears").unwrap(), &[Feedback::Correct; 5]);
/// assert!(is_consistent(&Word::new("tears").unwrap(), &kb));
/// assert!(!is_consistent(&Word::new("teams").unwrap(), &kb));
/// ```
#[must_use]
pub fn is_consistent(word: &Word, kb: &KnowledgeBase) -> bool {
    let mut masked = *word.chars();

    for (position, slot) in masked.iter_mut().enumerate() {
        if let Some(letter) = kb.confirmed(position) {
            if *slot != letter {
                trace!("{word}: position {position} is not '{}'", letter as char);
                return false;
            }
            *slot = MASKED;
        }
    }

    for (position, &letter) in word.chars().iter().enumerate() {
        let misplaced = kb.misplaced(position);
        if misplaced.contains(letter) {
            trace!("{word}: '{}' already ruled out at {position}", letter as char);
            return false;
        }
        if let Some(missing) = misplaced.iter().find(|&l| !word.has_letter(l)) {
            trace!("{word}: lacks required letter '{}'", missing as char);
            return false;
        }
    }

    let excluded = kb.excluded();
    if let Some(&letter) = masked
        .iter()
        .find(|&&c| c != MASKED && excluded.contains(c))
    {
        trace!("{word}: contains excluded letter '{}'", letter as char);
        return false;
    }

    true
}

/// Words from `words` consistent with `kb`, in their original order
pub fn consistent_words<'a, I>(words: I, kb: &KnowledgeBase) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    words
        .into_iter()
        .filter(|word| is_consistent(word, kb))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Feedback::{self, Absent, Correct, Present};
    use crate::core::FeedbackRow;
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn kb_after(rounds: &[(&str, FeedbackRow)]) -> KnowledgeBase {
        let mut kb = KnowledgeBase::new();
        for (guess, row) in rounds {
            kb.apply_feedback(&word(guess), row);
        }
        kb
    }

    #[test]
    fn empty_knowledge_accepts_everything() {
        let kb = KnowledgeBase::new();
        for w in ["tears", "speed", "aaaaa", "zzzzz"] {
            assert!(is_consistent(&word(w), &kb));
        }
    }

    #[test]
    fn green_first_rest_grey() {
        let kb = kb_after(&[("tears", [Correct, Absent, Absent, Absent, Absent])]);

        assert!(is_consistent(&word("thing"), &kb));
        assert!(is_consistent(&word("tough"), &kb));
        // wrong first letter
        assert!(!is_consistent(&word("photo"), &kb));
        // contains an excluded letter
        assert!(!is_consistent(&word("those"), &kb));
        assert!(!is_consistent(&word("trick"), &kb));
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let kb = kb_after(&[("tears", [Absent, Present, Absent, Absent, Absent])]);

        assert!(is_consistent(&word("oxide"), &kb));
        // E still at the reported position
        assert!(!is_consistent(&word("helix"), &kb));
        // E missing entirely
        assert!(!is_consistent(&word("pound"), &kb));
    }

    #[test]
    fn confirmed_letter_masked_before_exclusion() {
        // Second E came back grey while the first was green
        let kb = kb_after(&[("eerie", [Correct, Absent, Absent, Absent, Absent])]);
        assert!(kb.excluded().contains(b'e'));

        // one E, at the confirmed position: still fine
        assert!(is_consistent(&word("extol"), &kb));
        // an extra E in an unconfirmed position is rejected
        assert!(!is_consistent(&word("exude"), &kb));
        // other excluded letters still apply
        assert!(!is_consistent(&word("ethic"), &kb));
    }

    #[test]
    fn misplaced_and_excluded_same_letter_rejects_everything_with_it() {
        // Known limitation: a yellow plus a grey copy of one letter excludes it
        // everywhere outside confirmed positions.
        let kb = kb_after(&[("speed", [Absent, Absent, Present, Absent, Present])]);
        assert!(!is_consistent(&word("abide"), &kb));
    }

    #[test]
    fn candidates_preserve_order() {
        let words = ["thing", "those", "tough", "photo", "tulip"].map(word);
        let kb = kb_after(&[("tears", [Correct, Absent, Absent, Absent, Absent])]);

        let found: Vec<&str> = consistent_words(&words, &kb)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(found, ["thing", "tough", "tulip"]);
    }

    fn arb_word() -> impl Strategy<Value = Word> {
        "[a-z]{5}".prop_map(|s| Word::new(s).unwrap())
    }

    fn arb_row() -> impl Strategy<Value = FeedbackRow> {
        prop::array::uniform5(prop_oneof![
            Just(Feedback::Absent),
            Just(Feedback::Present),
            Just(Feedback::Correct),
        ])
    }

    proptest! {
        #[test]
        fn confirmed_mismatch_always_rejected(
            guess in arb_word(),
            row in arb_row(),
            candidate in arb_word(),
        ) {
            let mut kb = KnowledgeBase::new();
            kb.apply_feedback(&guess, &row);

            let mismatch = (0..5).any(|p| {
                kb.confirmed(p).is_some_and(|c| candidate.char_at(p) != c)
            });
            if mismatch {
                prop_assert!(!is_consistent(&candidate, &kb));
            }
        }

        #[test]
        fn excluded_unconfirmed_letter_always_rejected(
            guess in arb_word(),
            row in arb_row(),
            candidate in arb_word(),
        ) {
            let mut kb = KnowledgeBase::new();
            kb.apply_feedback(&guess, &row);

            let confirmed = kb.confirmed_letters();
            let hit = candidate
                .letters()
                .intersection(kb.excluded())
                .difference(confirmed);
            if !hit.is_empty() {
                prop_assert!(!is_consistent(&candidate, &kb));
            }
        }

        #[test]
        fn repeated_feedback_does_not_change_verdict(
            guess in arb_word(),
            row in arb_row(),
            candidate in arb_word(),
        ) {
            let mut once = KnowledgeBase::new();
            once.apply_feedback(&guess, &row);
            let mut twice = once.clone();
            twice.apply_feedback(&guess, &row);

            prop_assert_eq!(is_consistent(&candidate, &once), is_consistent(&candidate, &twice));
        }

        #[test]
        fn answer_consistent_with_its_own_scoring_when_letters_unique(
            guess in arb_word(),
            answer in arb_word(),
        ) {
            // Duplicate letters in the guess can produce yellow+grey pairs that
            // over-exclude; with distinct guess letters the answer always survives.
            prop_assume!(!guess.has_repeated_letters());
            let mut kb = KnowledgeBase::new();
            kb.apply_feedback(&guess, &Feedback::score(&guess, &answer));
            prop_assert!(is_consistent(&answer, &kb));
        }
    }
}
