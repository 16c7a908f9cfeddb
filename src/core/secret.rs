//! Secret word representation
//!
//! A `SecretWord` stores the word to be guessed along with letter position indices so a
//! guess can be revealed without rescanning the word.

use super::{GameError, Letter};
use rustc_hash::FxHashMap;
use std::fmt;

/// The hidden word of a game with letter position tracking
///
/// The `Debug` output only reports the length so the word does not leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    letter_positions: FxHashMap<u8, Vec<usize>>,
}

impl SecretWord {
    /// Create a secret word from a string
    ///
    /// The text is lowercased before validation.
    ///
    /// # Errors
    /// Returns `GameError::InvalidWord` if the word is empty or contains anything other than
    /// ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(SecretWord::new("e-mail").is_err());
    /// assert!(SecretWord::new("").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, GameError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(GameError::InvalidWord(text));
        }

        let mut letter_positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.bytes().enumerate() {
            letter_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            letter_positions,
        })
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false; construction rejects empty words
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: usize) -> Letter {
        Letter::from_byte(self.text.as_bytes()[position])
    }

    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: Letter) -> bool {
        self.letter_positions.contains_key(&letter.byte())
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    #[must_use]
    pub fn positions_of(&self, letter: Letter) -> &[usize] {
        self.letter_positions
            .get(&letter.byte())
            .map_or(&[], Vec::as_slice)
    }

    /// The word with its first letter uppercased, as shown at game end
    #[must_use]
    pub fn capitalized(&self) -> String {
        let mut chars = self.text.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        })
    }
}

impl fmt::Debug for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretWord")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
