//! Log output setup

use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, fmt::writer::BoxMakeWriter, prelude::*};

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "hangman=warn";

/// Build the subscriber: a fmt layer writing to `writer`, filtered by `RUST_LOG` or
/// [`DEFAULT_FILTER`]
pub fn subscriber(writer: BoxMakeWriter, ansi: bool) -> impl Subscriber + Send + Sync + 'static {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(ansi)
                .with_target(false),
        )
        .with(filter)
}

/// Install the global tracing subscriber writing to `writer`
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_tracing(writer: BoxMakeWriter, ansi: bool) {
    let _ = subscriber(writer, ansi).try_init();
}
