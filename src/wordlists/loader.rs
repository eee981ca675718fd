//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a newline-delimited file, preserving file order
///
/// Blank lines and entries that are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_assist::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content);
    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Parse newline-delimited words, skipping blank and malformed lines
#[must_use]
pub fn parse_words(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::new(line) {
            Ok(word) => Some(word),
            Err(err) => {
                debug!("skipping word list entry '{line}': {err}");
                None
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_assist::wordlists::loader::words_from_slice;
/// use wordle_assist::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn parse_words_keeps_file_order() {
        let words = parse_words("tears\n\n  crane  \nbad\nSLATE\r\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["tears", "crane", "slate"]);
    }

    #[test]
    fn load_from_missing_file_errors() {
        assert!(load_from_file("/definitely/not/here/words.txt").is_err());
    }

    #[test]
    fn load_from_embedded_words() {
        use crate::wordlists::WORDS;

        let words = words_from_slice(WORDS);
        assert_eq!(words.len(), WORDS.len());
    }
}
