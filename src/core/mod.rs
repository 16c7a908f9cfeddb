//! Core domain types for Hangman
//!
//! This module contains the gameplay state machine and the small value types it is built
//! from. Nothing here performs I/O; drivers feed letters in and read the board back out.

mod board;
mod error;
mod letter;
mod secret;
mod session;

pub use board::Board;
pub use error::GameError;
pub use letter::Letter;
pub use secret::SecretWord;
pub use session::{GameSession, GameStatus, GuessOutcome};

/// Number of incorrect guesses a player may make before losing
pub const MAX_GUESSES: u8 = 6;

/// Symbol shown in place of a letter that has not been revealed yet
pub const PLACEHOLDER: char = '_';
