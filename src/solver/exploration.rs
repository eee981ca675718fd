//! Exploratory guess selection
//!
//! When ordinary guessing stalls, spend one turn on a word that tests as many
//! still-undetermined letters as possible, even if it cannot be the answer.

use crate::core::{LetterSet, Word};
use crate::knowledge::KnowledgeBase;
use crate::wordlists::WordCatalog;
use log::debug;

/// Outcome of one search for an exploratory word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplorationAttempt<'a> {
    /// Letters found among the candidates that feedback has said nothing about
    pub undetermined: LetterSet,
    /// Highest-scoring word with distinct letters and how many undetermined letters it tests
    pub best: Option<(&'a Word, usize)>,
    /// A word must test more than this many letters to be used
    pub min_letters: usize,
}

impl<'a> ExplorationAttempt<'a> {
    /// The chosen word, if it clears the usefulness threshold
    #[must_use]
    pub fn accepted(&self) -> Option<(&'a Word, usize)> {
        self.best.filter(|&(_, matched)| matched > self.min_letters)
    }
}

/// Letters appearing in `candidates` that are not yet known in any way
#[must_use]
pub fn undetermined_letters(candidates: &[&Word], kb: &KnowledgeBase) -> LetterSet {
    let seen = candidates
        .iter()
        .fold(LetterSet::EMPTY, |acc, word| acc.union(word.letters()));
    seen.difference(kb.known_letters())
}

/// Scan the whole catalog for the word testing the most `undetermined` letters
///
/// Words with a repeated letter are skipped. Ties go to the earlier (more
/// common) word. Returns `None` when no word tests any of the letters.
#[must_use]
pub fn best_probe(catalog: &WordCatalog, undetermined: LetterSet) -> Option<(&Word, usize)> {
    let mut best: Option<(&Word, usize)> = None;

    for word in catalog.iter().filter(|w| !w.has_repeated_letters()) {
        let matched = word.letters().intersection(undetermined).len();
        if matched > best.map_or(0, |(_, count)| count) {
            best = Some((word, matched));
        }
    }

    best
}

/// Look for an exploratory guess given the current candidates
#[must_use]
pub fn find_exploratory_guess<'a>(
    catalog: &'a WordCatalog,
    kb: &KnowledgeBase,
    candidates: &[&Word],
    min_letters: usize,
) -> ExplorationAttempt<'a> {
    let undetermined = undetermined_letters(candidates, kb);
    let best = best_probe(catalog, undetermined);

    debug!(
        "exploration over [{undetermined}]: best {:?}",
        best.map(|(word, count)| (word.text(), count))
    );

    ExplorationAttempt {
        undetermined,
        best,
        min_letters,
    }
}
