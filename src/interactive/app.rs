//! TUI application state and logic

use crate::core::{Feedback, FeedbackRow, LetterResponse, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::output::formatters::{plural, word_list};
use crate::session::{GameEvent, GameSession, RoundResponse, SessionConfig, Transition};
use crate::solver::StrategyType;
use crate::wordlists::WordCatalog;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::warn;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 8;

/// Application state
pub struct App {
    pub session: GameSession<StrategyType>,
    pub input_mode: InputMode,
    /// Marks collected so far for the pending guess
    pub marks: [Option<Feedback>; WORD_LENGTH],
    /// Positions filled in from earlier rounds rather than typed
    pub inferred: [bool; WORD_LENGTH],
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Detail,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index is the number of rounds a won game took
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, won: Option<usize>) {
        self.total_games += 1;
        if let Some(rounds) = won {
            self.games_won += 1;
            if self.guess_distribution.len() <= rounds {
                self.guess_distribution.resize(rounds + 1, 0);
            }
            self.guess_distribution[rounds] += 1;
        }
    }
}

impl App {
    #[must_use]
    pub fn new(catalog: WordCatalog, strategy: StrategyType, config: SessionConfig) -> Self {
        let mut app = Self {
            session: GameSession::new(catalog, strategy, config),
            input_mode: InputMode::Feedback,
            marks: [None; WORD_LENGTH],
            inferred: [false; WORD_LENGTH],
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            "Type g (green), y (yellow) or any other key (grey) for each letter.",
            MessageStyle::Info,
        );
        app.add_message("x marks the guess as not a word.", MessageStyle::Info);
        app.next_round();
        app
    }

    /// Word waiting for feedback, if any
    #[must_use]
    pub fn current_guess(&self) -> Option<&Word> {
        self.session.pending().map(|pending| &pending.word)
    }

    /// Position the next key press applies to
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.marks.iter().position(Option::is_none)
    }

    fn next_round(&mut self) {
        self.marks = [None; WORD_LENGTH];
        self.inferred = [false; WORD_LENGTH];

        let mut events = Vec::new();
        let result = self.session.next_guess(&mut events).map(|_| ());
        self.absorb(&events);

        match result {
            Ok(()) => {
                for position in 0..WORD_LENGTH {
                    if let Some(known) = self.session.known_feedback(position) {
                        self.marks[position] = Some(known);
                        self.inferred[position] = true;
                    }
                }
                self.submit_if_complete();
            }
            Err(GameError::NoCandidate) => {
                self.add_message("No word found :(", MessageStyle::Error);
                self.finish(None);
            }
            Err(err) => {
                warn!("could not pick a guess: {err}");
                self.add_message(&err.to_string(), MessageStyle::Error);
                self.finish(None);
            }
        }
    }

    /// Apply one feedback key to the letter under the cursor
    pub fn handle_letter(&mut self, response: LetterResponse) {
        let Some(position) = self.cursor() else {
            return;
        };
        match response {
            LetterResponse::InvalidWord => {
                let mut answered = self.marks;
                answered[position..].fill(None);
                self.submit(RoundResponse::InvalidWord(answered));
            }
            LetterResponse::Mark(feedback) => {
                self.marks[position] = Some(feedback);
                self.submit_if_complete();
            }
        }
    }

    /// Undo the last typed mark of the current row
    pub fn undo_mark(&mut self) {
        if let Some(position) = (0..WORD_LENGTH)
            .rev()
            .find(|&p| self.marks[p].is_some() && !self.inferred[p])
        {
            self.marks[position] = None;
        }
    }

    fn submit_if_complete(&mut self) {
        if self.input_mode != InputMode::Feedback {
            return;
        }
        let mut row: FeedbackRow = [Feedback::Absent; WORD_LENGTH];
        for (slot, mark) in row.iter_mut().zip(self.marks) {
            match mark {
                Some(feedback) => *slot = feedback,
                None => return,
            }
        }
        self.submit(RoundResponse::Marks(row));
    }

    fn submit(&mut self, response: RoundResponse) {
        let mut events = Vec::new();
        let result = self.session.submit_round(response, &mut events);
        self.absorb(&events);

        match result {
            Ok(Transition::Continue | Transition::InvalidWord) => self.next_round(),
            Ok(Transition::Solved { rounds }) => {
                let celebration = match rounds {
                    1 => "🎯 Hole in one!",
                    2 => "🔥 Magnificent! Two guesses!",
                    3 => "✨ Splendid! Three guesses!",
                    4 => "👏 Great job! Four guesses!",
                    5 => "🎉 Nice work! Five guesses!",
                    _ => "😅 Phew!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.finish(Some(rounds));
            }
            Ok(Transition::Failed { .. }) => self.finish(None),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn finish(&mut self, won: Option<usize>) {
        self.stats.record(won);
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.next_round();
    }

    fn absorb(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some((text, style)) = describe(event) {
                self.add_message(&text, style);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Route a key press; returns false for keys that are ignored
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (self.input_mode, key.code) {
            (_, KeyCode::Char('c')) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (_, KeyCode::Char('q') | KeyCode::Esc) => self.should_quit = true,
            (_, KeyCode::Char('n')) => self.new_game(),
            (InputMode::GameOver, _) => return false,
            (InputMode::Feedback, KeyCode::Backspace) => self.undo_mark(),
            (InputMode::Feedback, KeyCode::Char(c)) => {
                self.handle_letter(LetterResponse::from_key(c));
            }
            (InputMode::Feedback, KeyCode::Enter) => {
                self.handle_letter(LetterResponse::Mark(Feedback::Absent));
            }
            _ => return false,
        }
        true
    }
}

/// Message log text for a game event
fn describe(event: &GameEvent) -> Option<(String, MessageStyle)> {
    let message = match event {
        GameEvent::Guess {
            round,
            word,
            exploratory,
        } => {
            let marker = if *exploratory { " (exploring)" } else { "" };
            (
                format!("Guess {round}: {}{marker}", word.text().to_uppercase()),
                MessageStyle::Info,
            )
        }
        GameEvent::LetterFeedback { .. } | GameEvent::Solved { .. } => return None,
        GameEvent::RoundComplete { row, .. } => {
            (Feedback::row_to_emoji(row), MessageStyle::Info)
        }
        GameEvent::InvalidWord { word } => (
            format!("\"{word}\" marked as invalid word"),
            MessageStyle::Error,
        ),
        GameEvent::Failed { .. } => ("Wordle failed :(".to_string(), MessageStyle::Error),
        GameEvent::Candidates { count, preview } => (
            format!("{} possible: {}", plural(*count, "word"), word_list(preview)),
            MessageStyle::Detail,
        ),
        GameEvent::RoundsRemaining { remaining } => (
            format!("Only {} remaining", plural(*remaining, "guess")),
            MessageStyle::Detail,
        ),
        GameEvent::Exploring { undetermined } => (
            format!("Looking for a word covering [{undetermined}]"),
            MessageStyle::Detail,
        ),
        GameEvent::ExplorationFound { word, matched } => (
            format!("Found: {word} with {}", plural(*matched, "letter")),
            MessageStyle::Detail,
        ),
        GameEvent::ExplorationAbandoned => (
            "Not found. Guessing next most common possible word.".to_string(),
            MessageStyle::Detail,
        ),
    };
    Some(message)
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
