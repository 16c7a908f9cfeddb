//! Formatting utilities for terminal output

use crate::core::MAX_GUESSES;

/// Gallows drawings, indexed by the number of wrong guesses so far
const GALLOWS: [[&str; 6]; 7] = [
    ["  +---+", "  |   |", "      |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "      |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", "  |   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|   |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", "      |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " /    |", "========="],
    ["  +---+", "  |   |", "  O   |", " /|\\  |", " / \\  |", "========="],
];

/// The gallows drawing for a given number of remaining guesses
#[must_use]
pub fn gallows(guesses_remaining: u8) -> &'static [&'static str; 6] {
    let wrong = MAX_GUESSES.saturating_sub(guesses_remaining);
    &GALLOWS[usize::from(wrong.min(MAX_GUESSES))]
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 { 0 } else { value * width / max };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the guess budget is left
#[must_use]
pub fn guesses_bar(guesses_remaining: u8, width: usize) -> String {
    create_progress_bar(
        usize::from(guesses_remaining),
        usize::from(MAX_GUESSES),
        width,
    )
}
