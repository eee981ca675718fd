//! Wordle Assistant
//!
//! Plays Wordle by accumulating letter constraints from feedback and guessing the
//! most common word that still fits, with a one-off exploratory guess when
//! progress stalls.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_assist::core::Word;
//! use wordle_assist::session::{GameSession, KnownAnswer, Outcome, SessionConfig};
//! use wordle_assist::solver::TwoTierStrategy;
//! use wordle_assist::wordlists::embedded_catalog;
//!
//! let mut game = GameSession::new(
//!     embedded_catalog(),
//!     TwoTierStrategy::default(),
//!     SessionConfig::default(),
//! );
//! let mut answer = KnownAnswer::new(Word::new("light").unwrap());
//! let outcome = game.run(&mut answer, &mut ());
//! println!("{outcome:?}");
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Constraint knowledge base and consistency check
pub mod knowledge;

// Guess selection
pub mod solver;

// Game state machine
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::GameError;
