//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded dictionary. Every
//! loader trims, filters with [`is_candidate`] and lowercases.

use super::is_candidate;
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Load candidate words from a newline-separated file
///
/// Lines that are not eligible secret words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("google-10000-english-no-swears.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = filter_words(content.lines());

    debug!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Convert an embedded string slice to candidate words
///
/// # Examples
/// ```
/// use hangman::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["the", "Garden", "kitchen"]);
/// assert_eq!(words, ["garden", "kitchen"]);
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    filter_words(slice.iter().copied())
}

fn filter_words<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    lines
        .map(str::trim)
        .filter(|word| is_candidate(word))
        .map(str::to_ascii_lowercase)
        .collect()
}
