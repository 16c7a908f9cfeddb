//! Save slot storage backends

use super::{SaveError, Snapshot};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File used when no save path is configured
pub const DEFAULT_SAVE_PATH: &str = "saved_game.json";

/// A single save slot
pub trait SaveGateway {
    /// Store a snapshot, replacing whatever was saved before
    ///
    /// # Errors
    /// Returns `SaveError::Encode` if the snapshot cannot be encoded and `SaveError::Io` if
    /// the underlying storage fails.
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError>;

    /// Fetch the saved snapshot, or `None` if nothing has been saved
    ///
    /// # Errors
    /// Returns `SaveError::Io` if the storage cannot be read and `SaveError::Corrupt` if the
    /// stored data is not a snapshot.
    fn load(&self) -> Result<Option<Snapshot>, SaveError>;
}

/// Save slot backed by a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_PATH)
    }
}

impl SaveGateway for JsonFileStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        let mut json = snapshot.to_json()?;
        json.push('\n');
        fs::write(&self.path, json)?;

        info!(path = %self.path.display(), "game saved");
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SaveError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved game");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot = Snapshot::from_json(&content)?;
        info!(path = %self.path.display(), "game loaded");
        Ok(Some(snapshot))
    }
}

/// In-memory save slot for driver tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub slot: Option<Snapshot>,
    /// When set, every request fails with this I/O error kind
    pub fail_with: Option<io::ErrorKind>,
}

#[cfg(test)]
impl SaveGateway for MemoryStore {
    fn save(&mut self, snapshot: &Snapshot) -> Result<(), SaveError> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::from(kind).into());
        }
        self.slot = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<Snapshot>, SaveError> {
        if let Some(kind) = self.fail_with {
            return Err(io::Error::from(kind).into());
        }
        Ok(self.slot.clone())
    }
}
