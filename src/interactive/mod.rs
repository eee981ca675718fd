//! Interactive TUI interface
//!
//! The game proposes guesses; the player answers one key per letter.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
