//! Word lists for choosing secret words
//!
//! Provides the embedded dictionary and the length filter every word source goes through.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Shortest word eligible as a secret word
pub const MIN_WORD_LEN: usize = 5;

/// Longest word eligible as a secret word
pub const MAX_WORD_LEN: usize = 12;

/// Check whether a word may be used as a secret word
///
/// Eligible words are 5 to 12 ASCII letters long. Case is ignored here; loaders lowercase
/// the words they keep.
///
/// # Examples
/// ```
/// use hangman::wordlists::is_candidate;
///
/// assert!(is_candidate("garden"));
/// assert!(is_candidate("Washington"));
/// assert!(!is_candidate("the"));
/// assert!(!is_candidate("e-mail"));
/// assert!(!is_candidate("internationally"));
/// ```
#[must_use]
pub fn is_candidate(word: &str) -> bool {
    (MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len())
        && word.bytes().all(|b| b.is_ascii_alphabetic())
}
