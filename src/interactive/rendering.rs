//! TUI rendering with ratatui
//!
//! Board, candidate list, message log and status bar.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, WORD_LENGTH, Word};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Candidates listed by name before the panel falls back to a count
const CANDIDATE_ROWS: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input hint
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Board
            Constraint::Percentage(60), // Candidates and messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSISTANT - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn tile_style(feedback: Option<Feedback>) -> Style {
    let style = Style::new().add_modifier(Modifier::BOLD);
    match feedback {
        Some(Feedback::Correct) => style.fg(Color::Black).bg(Color::Green),
        Some(Feedback::Present) => style.fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Absent) => style.fg(Color::White).bg(Color::DarkGray),
        None => style.fg(Color::White),
    }
}

fn tile(letter: u8, feedback: Option<Feedback>) -> Span<'static> {
    Span::styled(
        format!(" {} ", (letter as char).to_ascii_uppercase()),
        tile_style(feedback),
    )
}

fn board_row(
    word: &Word,
    marks: &[Option<Feedback>; WORD_LENGTH],
    cursor: Option<usize>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(WORD_LENGTH * 2);
    for (position, (&letter, &mark)) in word.chars().iter().zip(marks).enumerate() {
        let mut span = tile(letter, mark);
        if cursor == Some(position) {
            span.style = span.style.add_modifier(Modifier::REVERSED);
        }
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let max_rounds = app.session.config().max_rounds;
    let mut lines = Vec::with_capacity(max_rounds * 2);

    for (word, row) in app.session.history() {
        lines.push(board_row(word, &row.map(Some), None));
        lines.push(Line::default());
    }

    if let Some(guess) = app.current_guess() {
        lines.push(board_row(guess, &app.marks, app.cursor()));
        lines.push(Line::default());
    }

    while lines.len() < max_rounds * 2 {
        lines.push(Line::styled(
            " ·   ·   ·   ·   · ",
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::default());
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(
                " Round {}/{} ",
                (app.session.rounds_played() + 1).min(max_rounds),
                max_rounds
            ))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45), // Candidates
            Constraint::Percentage(55), // Messages
        ])
        .split(area);

    render_candidates(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let kb = app.session.knowledge();

    let mut content = vec![
        Line::from(vec![
            Span::raw("Pattern: "),
            Span::styled(
                kb.confirmed_pattern().to_uppercase(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  Misplaced: "),
            Span::styled(
                kb.misplaced_letters().to_string().to_uppercase(),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("  Excluded: "),
            Span::styled(
                kb.excluded().to_string().to_uppercase(),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::default(),
    ];

    if candidates.is_empty() {
        content.push(Line::from("No word fits the feedback"));
    } else {
        let names: Vec<&str> = candidates
            .iter()
            .take(CANDIDATE_ROWS)
            .map(|w| w.text())
            .collect();
        content.push(Line::from(names.join(" ").to_uppercase()));
        if candidates.len() > CANDIDATE_ROWS {
            content.push(Line::styled(
                format!("… and {} more", candidates.len() - CANDIDATE_ROWS),
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(format!(" Candidates ({}) ", candidates.len()))
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Detail => Style::default().fg(Color::DarkGray),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match (app.input_mode, app.current_guess(), app.cursor()) {
        (InputMode::Feedback, Some(guess), Some(position)) => (
            format!(
                "Feedback for {}: g=green  y=yellow  other=grey  x=not a word  ⌫=undo",
                (guess.char_at(position) as char).to_ascii_uppercase()
            ),
            Color::Yellow,
        ),
        (InputMode::Feedback, ..) => ("Thinking…".to_string(), Color::Yellow),
        (InputMode::GameOver, ..) => (
            "Game over | Press 'n' for new game or 'q' to quit".to_string(),
            Color::Green,
        ),
    };

    let input = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(area);

    let words = Paragraph::new(format!("Words: {}", app.session.catalog().len()))
        .alignment(Alignment::Center);
    f.render_widget(words, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("q: Quit | n: New Game | ⌫: Undo letter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
