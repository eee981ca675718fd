//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::exploration::{ExplorationAttempt, find_exploratory_guess};
use crate::core::Word;
use crate::error::GameError;
use crate::knowledge::{KnowledgeBase, consistent_words};
use crate::wordlists::WordCatalog;
use log::debug;

/// Default usefulness threshold: an exploratory word must test more than this many letters
pub const DEFAULT_MIN_EXPLORATORY_LETTERS: usize = 2;

/// Game counters a strategy needs besides the knowledge base
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// Rounds already played (0 before the first guess)
    pub round: usize,
    pub max_rounds: usize,
    /// Whether an exploratory guess has already been spent this game
    pub explored: bool,
}

impl Progress {
    #[must_use]
    pub const fn new(max_rounds: usize) -> Self {
        Self {
            round: 0,
            max_rounds,
            explored: false,
        }
    }

    #[must_use]
    pub const fn remaining_rounds(&self) -> usize {
        self.max_rounds.saturating_sub(self.round)
    }
}

/// A chosen guess together with the reasoning behind it
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    pub word: &'a Word,
    /// Catalog words still consistent with the feedback, most common first
    pub candidates: Vec<&'a Word>,
    /// Present when the exploratory tier was tried
    pub exploration: Option<ExplorationAttempt<'a>>,
}

impl Selection<'_> {
    /// True when `word` was picked for information rather than as a candidate
    #[must_use]
    pub fn is_exploratory(&self) -> bool {
        self.exploration
            .as_ref()
            .and_then(ExplorationAttempt::accepted)
            .is_some()
    }
}

/// A strategy for selecting the next guess from the catalog
pub trait Strategy {
    /// Select the next guess
    ///
    /// # Errors
    /// Returns `GameError::NoCandidate` when no catalog word fits the feedback.
    fn select_guess<'a>(
        &self,
        catalog: &'a WordCatalog,
        kb: &KnowledgeBase,
        progress: Progress,
    ) -> Result<Selection<'a>, GameError>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyType {
    /// Most common candidate, with exploratory guesses when progress stalls (default)
    TwoTier(TwoTierStrategy),
    /// Always the most common candidate
    Greedy(GreedyStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        catalog: &'a WordCatalog,
        kb: &KnowledgeBase,
        progress: Progress,
    ) -> Result<Selection<'a>, GameError> {
        match self {
            Self::TwoTier(s) => s.select_guess(catalog, kb, progress),
            Self::Greedy(s) => s.select_guess(catalog, kb, progress),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "two-tier", "greedy". Defaults to two-tier if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, min_exploratory_letters: usize) -> Self {
        match name {
            "greedy" | "common" => Self::Greedy(GreedyStrategy),
            _ => Self::TwoTier(TwoTierStrategy::new(min_exploratory_letters)),
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::TwoTier(TwoTierStrategy::default())
    }
}

/// Always guess the most common word still consistent with the feedback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreedyStrategy;

impl Strategy for GreedyStrategy {
    fn select_guess<'a>(
        &self,
        catalog: &'a WordCatalog,
        kb: &KnowledgeBase,
        _progress: Progress,
    ) -> Result<Selection<'a>, GameError> {
        let candidates = consistent_words(catalog, kb);
        let word = *candidates.first().ok_or(GameError::NoCandidate)?;
        Ok(Selection {
            word,
            candidates,
            exploration: None,
        })
    }
}

/// Greedy guessing with a one-off exploratory guess when progress stalls
///
/// The exploratory tier is tried only when all of these hold:
/// - at least two rounds remain after the one just played
/// - the last two rounds produced the same number of grey letters
/// - no exploratory guess has been made yet this game
/// - more candidates remain than rounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoTierStrategy {
    /// An exploratory word must test more than this many undetermined letters
    pub min_exploratory_letters: usize,
}

impl TwoTierStrategy {
    #[must_use]
    pub const fn new(min_exploratory_letters: usize) -> Self {
        Self {
            min_exploratory_letters,
        }
    }

    /// Whether the exploratory tier should be attempted
    #[must_use]
    pub fn should_explore(kb: &KnowledgeBase, progress: Progress, candidate_count: usize) -> bool {
        progress.round + 1 < progress.max_rounds
            && kb.greys().is_stagnant()
            && !progress.explored
            && candidate_count > progress.remaining_rounds()
    }
}

impl Default for TwoTierStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_EXPLORATORY_LETTERS)
    }
}

impl Strategy for TwoTierStrategy {
    fn select_guess<'a>(
        &self,
        catalog: &'a WordCatalog,
        kb: &KnowledgeBase,
        progress: Progress,
    ) -> Result<Selection<'a>, GameError> {
        let candidates = consistent_words(catalog, kb);

        let exploration = Self::should_explore(kb, progress, candidates.len()).then(|| {
            find_exploratory_guess(catalog, kb, &candidates, self.min_exploratory_letters)
        });

        if let Some((word, matched)) = exploration.as_ref().and_then(ExplorationAttempt::accepted)
        {
            debug!("round {}: exploring with '{word}' ({matched} letters)", progress.round);
            return Ok(Selection {
                word,
                candidates,
                exploration,
            });
        }

        let word = *candidates.first().ok_or(GameError::NoCandidate)?;
        debug!(
            "round {}: guessing '{word}' from {} candidates",
            progress.round,
            candidates.len()
        );
        Ok(Selection {
            word,
            candidates,
            exploration,
        })
    }
}
