//! Simple interactive CLI mode
//!
//! Line-based game loop: one prompt per turn, a letter or `save` per line.

use crate::core::{GameSession, Letter};
use crate::output::{print_board, print_final_message, print_guess_feedback};
use crate::persistence::SaveGateway;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

/// How a driver run finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    /// Input ran out before the game finished
    Abandoned,
}

/// Run the simple interactive CLI mode
///
/// Asks whether to load the saved game, then loops until the active session is won or
/// lost. The driver owns exactly one session; a successful load replaces it.
///
/// # Errors
///
/// Returns an error if a new game has to be started from an empty word pool or if
/// reading input / writing output fails. Save and load failures are reported to the player
/// and do not end the run.
pub fn run_simple<R, W, G, Rn>(
    words: &[String],
    store: &mut G,
    rng: &mut Rn,
    mut input: R,
    mut output: W,
) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    G: SaveGateway,
    Rn: Rng + ?Sized,
{
    writeln!(output, "\n╔══════════════════════════════════════╗")?;
    writeln!(output, "║         Welcome to Hangman!          ║")?;
    writeln!(output, "╚══════════════════════════════════════╝\n")?;
    writeln!(
        output,
        "Type 'load' to load a saved game or any other key to start a new game."
    )?;

    let Some(choice) = get_user_input(&mut input, &mut output)? else {
        return Ok(SessionEnd::Abandoned);
    };

    let mut session = if choice == "load" {
        load_or_new(words, store, rng, &mut output)?
    } else {
        GameSession::new(words, rng)?
    };

    while !session.is_over() {
        print_board(&mut output, &session.render())?;
        writeln!(output, "\nMake a guess (or type 'save' to save the game):")?;

        let Some(line) = get_user_input(&mut input, &mut output)? else {
            info!("input closed before the game finished");
            return Ok(SessionEnd::Abandoned);
        };

        if line == "save" {
            save_game(&session, store, &mut output)?;
            continue;
        }

        let Ok(letter) = Letter::parse(&line) else {
            writeln!(
                output,
                "{}",
                "Invalid input! Please enter a single letter.".red()
            )?;
            continue;
        };

        let outcome = session.make_guess(letter)?;
        print_guess_feedback(&mut output, letter, outcome)?;
    }

    print_board(&mut output, &session.render())?;
    print_final_message(&mut output, &session)?;

    let end = if session.has_won() {
        SessionEnd::Won
    } else {
        SessionEnd::Lost
    };
    info!(?end, "game finished");
    Ok(end)
}

/// Load the saved game, falling back to a fresh one on any failure
fn load_or_new<G, Rn>(
    words: &[String],
    store: &G,
    rng: &mut Rn,
    output: &mut impl Write,
) -> Result<GameSession>
where
    G: SaveGateway,
    Rn: Rng + ?Sized,
{
    match store.load() {
        Ok(Some(snapshot)) => match GameSession::restore(&snapshot) {
            Ok(session) => {
                writeln!(output, "{}", "Game loaded successfully!".green())?;
                return Ok(session);
            }
            Err(e) => {
                warn!(error = %e, "saved game rejected");
                writeln!(
                    output,
                    "{}",
                    format!("Saved game is corrupt ({e}). Starting a new game.").yellow()
                )?;
            }
        },
        Ok(None) => {
            writeln!(output, "No saved game found. Starting a new game.")?;
        }
        Err(e) => {
            warn!(error = %e, "could not load saved game");
            writeln!(
                output,
                "{}",
                format!("Could not load the saved game ({e}). Starting a new game.").yellow()
            )?;
        }
    }

    Ok(GameSession::new(words, rng)?)
}

fn save_game<G: SaveGateway>(
    session: &GameSession,
    store: &mut G,
    output: &mut impl Write,
) -> io::Result<()> {
    match store.save(&session.snapshot()) {
        Ok(()) => writeln!(output, "{}", "Game saved successfully!".green()),
        Err(e) => {
            warn!(error = %e, "could not save game");
            writeln!(output, "{}", format!("Could not save the game: {e}").red())
        }
    }
}

/// Prompt and read one line, trimmed and lowercased; `None` at end of input
fn get_user_input(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<Option<String>> {
    write!(output, "> ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_lowercase()))
}
