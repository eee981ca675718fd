//! Word lists for Wordle solving
//!
//! Provides the embedded commonality-ordered word list and the runtime catalog built from it.

mod catalog;
pub mod loader;

pub use catalog::WordCatalog;

// `WORDS` and `WORDS_COUNT`, generated from data/words.txt
include!(concat!(env!("OUT_DIR"), "/words.rs"));

/// Catalog built from the embedded word list
#[must_use]
pub fn embedded_catalog() -> WordCatalog {
    WordCatalog::new(loader::words_from_slice(WORDS))
}
