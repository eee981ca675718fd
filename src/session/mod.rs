//! Game session: the guess/feedback loop around the solver
//!
//! The session owns the catalog and knowledge base for one game and talks to
//! the outside world only through [`FeedbackSource`] and [`GameObserver`].

mod events;
mod game;
mod source;

pub use events::{GameEvent, GameObserver};
pub use game::{
    GameSession, GameState, Outcome, PendingGuess, RoundResponse, SessionConfig, Transition,
};
pub use source::{FeedbackSource, KnownAnswer};
