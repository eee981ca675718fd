//! Guess selection
//!
//! Strategies read the catalog and knowledge base and never modify either.

pub mod exploration;
pub mod strategy;

pub use exploration::ExplorationAttempt;
pub use strategy::{
    DEFAULT_MIN_EXPLORATORY_LETTERS, GreedyStrategy, Progress, Selection, Strategy, StrategyType,
    TwoTierStrategy,
};
