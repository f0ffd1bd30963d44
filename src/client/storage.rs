// Local cache storage for the notebook.
//
// Purpose
// - One named slot holding the whole entry list serialized as JSON, the
//   local-storage analog the notebook reads at startup and overwrites on
//   every mutation.
//
// Testing guidance
// - Use the in-memory adapter; the file adapter exists for real use.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the single slot the notebook persists under.
pub const STORAGE_KEY: &str = "stage-notes-entries";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub trait CacheStorage {
    /// `Ok(None)` when the slot has never been written.
    fn load(&self) -> Result<Option<String>, CacheError>;
    fn save(&self, payload: &str) -> Result<(), CacheError>;
}

/// File-backed slot: `<dir>/stage-notes-entries.json`.
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(format!("{STORAGE_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CacheStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, CacheError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(CacheError::Unavailable(format!(
                "failed to read '{}': {err}",
                self.path.display()
            ))),
        }
    }

    fn save(&self, payload: &str) -> Result<(), CacheError> {
        fs::write(&self.path, payload).map_err(|err| {
            CacheError::Unavailable(format!("failed to write '{}': {err}", self.path.display()))
        })
    }
}

#[derive(Default)]
pub struct InMemoryStorage {
    slot: RefCell<Option<String>>,
    is_offline: bool,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the slot as if a previous session had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(payload.into())),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

impl CacheStorage for InMemoryStorage {
    fn load(&self) -> Result<Option<String>, CacheError> {
        if self.is_offline {
            return Err(CacheError::Unavailable("storage offline".to_string()));
        }
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &str) -> Result<(), CacheError> {
        if self.is_offline {
            return Err(CacheError::Unavailable("storage offline".to_string()));
        }
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
