//! TUI application state and logic

use crate::core::{GameSession, GameStatus, GuessOutcome, Letter};
use crate::persistence::SaveGateway;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Application state
pub struct App<'a, G: SaveGateway> {
    pub words: &'a [String],
    pub rng: StdRng,
    pub store: G,
    pub session: GameSession,
    pub input_mode: InputMode,
    pub last_guess: Option<(Letter, GuessOutcome)>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
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
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
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
}

impl<'a, G: SaveGateway> App<'a, G> {
    /// Create the app with a fresh game drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns an error if `words` is empty.
    pub fn new(words: &'a [String], store: G, mut rng: StdRng) -> Result<Self> {
        let session = GameSession::new(words, &mut rng)?;

        Ok(Self {
            words,
            rng,
            store,
            session,
            input_mode: InputMode::Guessing,
            last_guess: None,
            messages: vec![
                Message {
                    text: "Welcome! Type a letter to guess.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Ctrl+S saves, Ctrl+L loads the saved game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        })
    }

    /// Dispatch a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('s') if ctrl => self.save_game(),
            KeyCode::Char('l') if ctrl => self.load_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c) => match self.input_mode {
                InputMode::Guessing => self.handle_guess(c),
                InputMode::GameOver => match c {
                    'n' => self.new_game(),
                    'q' => self.should_quit = true,
                    _ => {}
                },
            },
            _ => {}
        }
    }

    pub fn handle_guess(&mut self, c: char) {
        let Ok(letter) = Letter::new(c.to_ascii_lowercase()) else {
            self.add_message("Letters only! Type a-z to guess.", MessageStyle::Error);
            return;
        };

        let outcome = match self.session.make_guess(letter) {
            Ok(outcome) => outcome,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        self.last_guess = Some((letter, outcome));

        match outcome {
            GuessOutcome::Hit { revealed } => self.add_message(
                &format!("'{letter}' is in the word ({revealed}x)"),
                MessageStyle::Success,
            ),
            GuessOutcome::Miss => {
                self.add_message(&format!("No '{letter}' in the word"), MessageStyle::Error);
            }
            GuessOutcome::RepeatedHit | GuessOutcome::RepeatedMiss => self.add_message(
                &format!("Already guessed '{letter}', no guess used"),
                MessageStyle::Info,
            ),
        }

        if self.session.is_over() {
            self.finish_game();
        }
    }

    fn finish_game(&mut self) {
        self.stats.total_games += 1;
        if self.session.status() == GameStatus::Won {
            self.stats.games_won += 1;
        }
        self.announce_result();
    }

    /// Disclose the word and switch to game-over mode
    fn announce_result(&mut self) {
        let word = self.session.secret().capitalized();

        if self.session.status() == GameStatus::Won {
            self.add_message(&format!("🎉 You guessed it: {word}!"), MessageStyle::Success);
        } else {
            self.add_message(
                &format!("Out of guesses. The word was: {word}"),
                MessageStyle::Error,
            );
        }

        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        match GameSession::new(self.words, &mut self.rng) {
            Ok(session) => {
                self.session = session;
                self.last_guess = None;
                self.input_mode = InputMode::Guessing;
                self.messages.clear();
                self.add_message("New game started! Type a letter.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn save_game(&mut self) {
        match self.store.save(&self.session.snapshot()) {
            Ok(()) => self.add_message("Game saved successfully!", MessageStyle::Success),
            Err(e) => {
                warn!(error = %e, "could not save game");
                self.add_message(&format!("Save failed: {e}"), MessageStyle::Error);
            }
        }
    }

    /// Replace the active session with the saved one
    pub fn load_game(&mut self) {
        let snapshot = match self.store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => {
                self.add_message("No saved game found.", MessageStyle::Info);
                return;
            }
            Err(e) => {
                warn!(error = %e, "could not load saved game");
                self.add_message(&format!("Load failed: {e}"), MessageStyle::Error);
                return;
            }
        };

        match GameSession::restore(&snapshot) {
            Ok(session) => {
                info!("active session replaced by saved game");
                self.session = session;
                self.last_guess = None;
                self.input_mode = InputMode::Guessing;
                self.add_message("Game loaded successfully!", MessageStyle::Success);
                if self.session.is_over() {
                    self.announce_result();
                }
            }
            Err(e) => {
                warn!(error = %e, "saved game rejected");
                self.add_message(&format!("Load failed: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<G: SaveGateway>(app: App<'_, G>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, G>(terminal: &mut Terminal<B>, mut app: App<'_, G>) -> Result<()>
where
    B: ratatui::backend::Backend,
    G: SaveGateway,
{
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
