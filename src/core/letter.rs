//! Guess letter representation

use super::GameError;
use std::fmt;

/// A single lowercase ASCII letter
///
/// Every guess and every revealed cell of the board is a `Letter`, so once a value of this
/// type exists it is known to be in `a..=z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// Create a letter from a character
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` unless `ch` is in `a..=z`.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Letter;
    ///
    /// assert_eq!(Letter::new('q').unwrap().as_char(), 'q');
    /// assert!(Letter::new('Q').is_err());
    /// assert!(Letter::new('7').is_err());
    /// ```
    pub fn new(ch: char) -> Result<Self, GameError> {
        if ch.is_ascii_lowercase() {
            Ok(Self(ch as u8))
        } else {
            Err(GameError::InvalidInput(ch.to_string()))
        }
    }

    /// Parse a line of player input as a single letter
    ///
    /// The input must be exactly one lowercase letter; callers that accept uppercase input
    /// lowercase it first.
    ///
    /// # Errors
    /// Returns `GameError::InvalidInput` carrying the original input otherwise.
    pub fn parse(input: &str) -> Result<Self, GameError> {
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) if ch.is_ascii_lowercase() => Ok(Self(ch as u8)),
            _ => Err(GameError::InvalidInput(input.to_string())),
        }
    }

    /// Build a letter from a byte already known to be in `a..=z`
    pub(crate) const fn from_byte(byte: u8) -> Self {
        debug_assert!(byte.is_ascii_lowercase());
        Self(byte)
    }

    #[inline]
    #[must_use]
    pub const fn byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
