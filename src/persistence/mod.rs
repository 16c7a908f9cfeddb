//! Saving and loading games
//!
//! A game is persisted as a [`Snapshot`]: the five data fields of a session and nothing
//! derived. Storage goes through the [`SaveGateway`] trait so the drivers do not care where
//! the bytes end up; [`JsonFileStore`] keeps a single save slot in a JSON file.

mod error;
mod snapshot;
mod store;

pub use error::{CorruptSave, SaveError};
pub use snapshot::Snapshot;
pub use store::{DEFAULT_SAVE_PATH, JsonFileStore, SaveGateway};

#[cfg(test)]
pub(crate) use store::MemoryStore;
