//! TUI rendering with ratatui
//!
//! Gallows, word and guess panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{GameStatus, Letter, MAX_GUESSES, PLACEHOLDER};
use crate::output::formatters::gallows;
use crate::persistence::SaveGateway;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<G: SaveGateway>(f: &mut Frame, app: &App<G>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35), // Gallows
            Constraint::Percentage(65), // Word and guesses
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_word_panel(f, app, main_chunks[1]);

    render_messages(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
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

fn render_gallows<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let color = match app.session.guesses_remaining() {
        0..=1 => Color::Red,
        2..=3 => Color::Yellow,
        _ => Color::White,
    };

    let lines: Vec<Line> = gallows(app.session.guesses_remaining())
        .iter()
        .map(|&line| Line::from(Span::styled(line, Style::default().fg(color))))
        .collect();

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Gallows ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_word_panel<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Secret word
            Constraint::Min(4),    // Letters tried
            Constraint::Length(3), // Guesses left
        ])
        .split(area);

    render_secret_word(f, app, chunks[0]);
    render_letters(f, app, chunks[1]);
    render_guesses_gauge(f, app, chunks[2]);
}

fn render_secret_word<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let session = &app.session;
    let lost = session.status() == GameStatus::Lost;

    // Once lost, hidden cells show the missing letters in red
    let spans: Vec<Span> = session
        .revealed()
        .iter()
        .enumerate()
        .flat_map(|(i, cell)| {
            let cell = match cell {
                Some(letter) => Span::styled(
                    letter.as_char().to_ascii_uppercase().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                None if lost => Span::styled(
                    session
                        .secret()
                        .letter_at(i)
                        .as_char()
                        .to_ascii_uppercase()
                        .to_string(),
                    Style::default().fg(Color::Red),
                ),
                None => Span::raw(PLACEHOLDER.to_string()),
            };
            [cell, Span::raw(" ")]
        })
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(spans),
        Line::from(Span::styled(
            format!(
                "{} letters, {} hidden",
                session.word_length(),
                session.render().hidden_count()
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Secret Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_letters<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let session = &app.session;

    let alphabet: Vec<Span> = ('a'..='z')
        .filter_map(|c| Letter::new(c).ok())
        .map(|letter| {
            let style = if session.correct_guesses().contains(&letter) {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else if session.incorrect_guesses().contains(&letter) {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(Color::White)
            };
            Span::styled(format!("{letter} "), style)
        })
        .collect();

    let content = vec![
        Line::from(alphabet),
        Line::from(""),
        Line::from(format!(
            "Incorrect Guesses: {}",
            session.render().incorrect_list()
        )),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn render_guesses_gauge<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let remaining = app.session.guesses_remaining();
    let percent = u16::from(remaining) * 100 / u16::from(MAX_GUESSES);
    let color = if remaining <= 1 { Color::Red } else { Color::Cyan };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{remaining}/{MAX_GUESSES}"));

    f.render_widget(gauge, area);
}

fn render_messages<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
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

fn render_status<G: SaveGateway>(f: &mut Frame, app: &App<G>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(30),
            Constraint::Percentage(50),
        ])
        .split(area);

    let mode_text = match app.input_mode {
        InputMode::Guessing => "Mode: Playing",
        InputMode::GameOver => "Mode: Game Over",
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::Guessing => "a-z: Guess | Ctrl+S: Save | Ctrl+L: Load | Esc: Quit",
        InputMode::GameOver => "n: New Game | q: Quit | Ctrl+L: Load",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
