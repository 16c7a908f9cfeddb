//! Hangman
//!
//! A terminal word-guessing game with save and load support.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{GameSession, GameStatus};
//!
//! let mut game = GameSession::with_secret("hello").unwrap();
//! game.make_guess_char('l').unwrap();
//! game.make_guess_char('z').unwrap();
//!
//! assert_eq!(game.render().pattern(), "_ _ l l _");
//! assert_eq!(game.guesses_remaining(), 5);
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

// Core domain types
pub mod core;

// Save slot and snapshot format
pub mod persistence;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
