//! Ordered, shrink-only list of candidate words

use crate::core::Word;
use log::debug;
use rustc_hash::FxHashSet;

/// Candidate words ranked from most to least common
///
/// Built once per session. Words proven invalid can be removed; nothing is ever added.
#[derive(Debug, Clone, Default)]
pub struct WordCatalog {
    words: Vec<Word>,
}

impl WordCatalog {
    /// Build a catalog, keeping the first occurrence of any duplicate
    ///
    /// # Examples
    /// ```
    /// use wordle_assist::core::Word;
    /// use wordle_assist::wordlists::WordCatalog;
    ///
    /// let words = ["about", "other", "about"].map(|w| Word::new(w).unwrap());
    /// let catalog = WordCatalog::new(words);
    /// assert_eq!(catalog.len(), 2);
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut seen = FxHashSet::default();
        let words: Vec<Word> = words
            .into_iter()
            .filter(|word| seen.insert(word.text().to_string()))
            .collect();
        Self { words }
    }

    /// Permanently drop a word; returns `false` if it was not present
    pub fn remove(&mut self, word: &Word) -> bool {
        if let Some(index) = self.words.iter().position(|w| w == word) {
            self.words.remove(index);
            debug!("removed '{word}' from catalog, {} words left", self.words.len());
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Look a word up by its text
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.words.iter().find(|w| w.text() == text)
    }

    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Word> {
        self.words.first()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<'a> IntoIterator for &'a WordCatalog {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn catalog(words: &[&str]) -> WordCatalog {
        WordCatalog::new(words_from_slice(words))
    }

    #[test]
    fn duplicates_keep_first_position() {
        let catalog = catalog(&["tears", "crane", "tears", "slate", "crane"]);
        let texts: Vec<&str> = catalog.iter().map(Word::text).collect();
        assert_eq!(texts, ["tears", "crane", "slate"]);
    }

    #[test]
    fn remove_is_permanent_and_preserves_order() {
        let mut catalog = catalog(&["tears", "crane", "slate"]);
        let crane = Word::new("crane").unwrap();

        assert!(catalog.remove(&crane));
        assert!(!catalog.contains(&crane));
        assert!(!catalog.remove(&crane));

        let texts: Vec<&str> = catalog.iter().map(Word::text).collect();
        assert_eq!(texts, ["tears", "slate"]);
    }

    #[test]
    fn find_and_first() {
        let catalog = catalog(&["tears", "crane"]);
        assert_eq!(catalog.first().map(Word::text), Some("tears"));
        assert!(catalog.find("crane").is_some());
        assert!(catalog.find("slate").is_none());
        assert!(WordCatalog::default().first().is_none());
    }
}
