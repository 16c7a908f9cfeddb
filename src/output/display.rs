//! Display functions for the text driver

use super::formatters::{gallows, guesses_bar};
use crate::core::{Board, GameSession, GuessOutcome, Letter};
use colored::Colorize;
use std::io::{self, Write};

/// Print the gallows and the three-line board
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    writeln!(out)?;
    for line in gallows(board.guesses_remaining) {
        writeln!(out, "{}", line.bright_black())?;
    }

    writeln!(out, "\nSecret Word: {}", board.pattern().bright_yellow().bold())?;
    writeln!(out, "Incorrect Guesses: {}", board.incorrect_list().red())?;

    let remaining = board.guesses_remaining.to_string();
    let remaining = match board.guesses_remaining {
        0..=1 => remaining.red().bold(),
        2..=3 => remaining.yellow(),
        _ => remaining.green(),
    };
    writeln!(
        out,
        "Guesses Left: {remaining} {}",
        guesses_bar(board.guesses_remaining, 12).bright_black()
    )
}

/// Print a one-line reaction to a guess
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_guess_feedback(
    out: &mut impl Write,
    letter: Letter,
    outcome: GuessOutcome,
) -> io::Result<()> {
    let text = match outcome {
        GuessOutcome::Hit { revealed: 1 } => format!("Yes! '{letter}' is in the word.").green(),
        GuessOutcome::Hit { revealed } => {
            format!("Yes! '{letter}' appears {revealed} times.").green()
        }
        GuessOutcome::Miss => format!("No '{letter}' in the word.").red(),
        GuessOutcome::RepeatedHit => {
            format!("You already found '{letter}'. No guess used.").bright_black()
        }
        GuessOutcome::RepeatedMiss => {
            format!("You already tried '{letter}'. No guess used.").bright_black()
        }
    };
    writeln!(out, "{text}")
}

/// Print the end-of-game message, disclosing the secret word
///
/// # Errors
/// Returns an error if writing to `out` fails.
pub fn print_final_message(out: &mut impl Write, session: &GameSession) -> io::Result<()> {
    let word = session.secret().capitalized();

    if session.has_won() {
        writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
        writeln!(
            out,
            "{}",
            format!("Congratulations! You've guessed the word: {word}")
                .bright_green()
                .bold()
        )?;
        writeln!(out, "{}", "═".repeat(50).bright_cyan())
    } else {
        writeln!(
            out,
            "\n{}",
            format!("Sorry, you've run out of guesses. The word was: {word}")
                .red()
                .bold()
        )
    }
}
