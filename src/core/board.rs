//! Display-ready view of a game in progress

use super::{Letter, PLACEHOLDER};
use std::fmt;

/// Snapshot of everything the player is allowed to see
///
/// Produced by [`GameSession::render`](super::GameSession::render). The secret word itself
/// is not part of the board; only its revealed cells are.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// One cell per letter of the secret word, `None` while hidden
    pub cells: Vec<Option<Letter>>,
    /// Wrong guesses in the order they were made
    pub incorrect: Vec<Letter>,
    pub guesses_remaining: u8,
}

impl Board {
    /// The revealed pattern with hidden cells shown as the placeholder, space separated
    ///
    /// # Examples
    /// ```
    /// use hangman::core::GameSession;
    ///
    /// let mut game = GameSession::with_secret("hello").unwrap();
    /// game.make_guess_char('l').unwrap();
    /// assert_eq!(game.render().pattern(), "_ _ l l _");
    /// ```
    #[must_use]
    pub fn pattern(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.map_or(PLACEHOLDER, Letter::as_char).to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Wrong guesses joined with commas
    #[must_use]
    pub fn incorrect_list(&self) -> String {
        self.incorrect
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Number of cells still hidden
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret Word: {}", self.pattern())?;
        writeln!(f, "Incorrect Guesses: {}", self.incorrect_list())?;
        write!(f, "Guesses Left: {}", self.guesses_remaining)
    }
}
