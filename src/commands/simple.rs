//! Simple interactive CLI mode
//!
//! Text-based interactive solver without TUI: the program guesses, the player
//! types one feedback code per letter.

use crate::core::{LetterResponse, Word};
use crate::error::GameError;
use crate::output::ConsoleObserver;
use crate::output::display::{print_legend, print_no_candidate};
use crate::session::{FeedbackSource, GameSession, SessionConfig};
use crate::solver::Strategy;
use crate::wordlists::WordCatalog;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Asks for each letter's feedback on a line of its own
pub struct PromptFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, GameError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> FeedbackSource for PromptFeedback<R, W> {
    fn letter_feedback(
        &mut self,
        guess: &Word,
        position: usize,
    ) -> Result<LetterResponse, GameError> {
        let letter = (guess.char_at(position) as char).to_ascii_uppercase();
        match self.read_line(&format!("{letter}? "))? {
            None => Err(GameError::Quit),
            Some(code) if matches!(code.as_str(), "quit" | "exit") => Err(GameError::Quit),
            Some(code) => Ok(LetterResponse::from_code(&code)),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading player input.
pub fn run_simple<S: Strategy>(
    catalog: WordCatalog,
    strategy: S,
    config: SessionConfig,
) -> Result<(), GameError> {
    let stdin = io::stdin();
    let mut feedback = PromptFeedback::new(stdin.lock(), io::stdout());
    let mut observer = ConsoleObserver::interactive();
    let verbose = config.verbose;
    let mut session = GameSession::new(catalog, strategy, config);

    print_legend();

    loop {
        if verbose {
            println!(
                "{}",
                format!("[*] {} words in the list", session.catalog().len()).bright_black()
            );
        }

        match session.run(&mut feedback, &mut observer) {
            Ok(_) => {}
            Err(GameError::NoCandidate) => print_no_candidate(),
            Err(GameError::Quit) => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Err(err) => return Err(err),
        }

        match feedback.read_line("\nPlay again? (yes/no) ")?.as_deref() {
            Some("yes" | "y") => {
                session.reset();
                println!();
            }
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}
