//! Hangman - CLI
//!
//! Terminal hangman with a line-based mode (default) and a full-screen TUI mode.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    commands::run_simple,
    interactive::{App, run_tui},
    logging::init_tracing,
    persistence::{DEFAULT_SAVE_PATH, JsonFileStore},
    wordlists::{
        DICTIONARY,
        loader::{load_from_file, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::fmt::writer::BoxMakeWriter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the secret word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-separated file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// File holding the saved game
    #[arg(short = 's', long, global = true, default_value = DEFAULT_SAVE_PATH)]
    save_file: PathBuf,

    /// Seed for choosing secret words (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write logs to this file instead of stderr (play mode discards them otherwise)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based mode (default): type a letter or 'save' at each prompt
    Simple,

    /// Full-screen TUI mode
    Play,
}

/// Load the word pool based on the -w flag
///
/// Either way only words of 5 to 12 letters are kept.
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<String>> {
    match wordlist_mode {
        "embedded" => Ok(words_from_slice(DICTIONARY)),
        path => load_from_file(path).with_context(|| format!("failed to read word list {path}")),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(
        || StdRng::from_rng(&mut rand::rng()),
        StdRng::seed_from_u64,
    )
}

/// Set up logging for the chosen mode
///
/// The TUI owns the terminal, so without a log file its logs are dropped.
fn start_logging(log_file: Option<&Path>, command: &Commands) -> Result<()> {
    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        init_tracing(BoxMakeWriter::new(Mutex::new(file)), false);
        return Ok(());
    }

    match command {
        Commands::Simple => init_tracing(BoxMakeWriter::new(io::stderr), true),
        Commands::Play => init_tracing(BoxMakeWriter::new(io::sink), false),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Default to the line-based mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);
    start_logging(cli.log_file.as_deref(), &command)?;

    let words = load_wordlist(&cli.wordlist)?;
    info!(count = words.len(), source = %cli.wordlist, "word pool ready");

    let store = JsonFileStore::new(cli.save_file);
    debug!(path = %store.path().display(), "save slot");
    let rng = make_rng(cli.seed);

    match command {
        Commands::Simple => run_simple_command(&words, store, rng),
        Commands::Play => run_play_command(&words, store, rng),
    }
}

fn run_simple_command(words: &[String], mut store: JsonFileStore, mut rng: StdRng) -> Result<()> {
    let end = run_simple(
        words,
        &mut store,
        &mut rng,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    debug!(?end, "simple mode finished");
    Ok(())
}

fn run_play_command(words: &[String], store: JsonFileStore, rng: StdRng) -> Result<()> {
    let app = App::new(words, store, rng)?;
    run_tui(app)
}
