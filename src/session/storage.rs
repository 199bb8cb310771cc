use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read session state: {0}")]
    Read(#[source] std::io::Error),

    #[error("failed to write session state: {0}")]
    Write(#[source] std::io::Error),

    #[error("failed to encode session state: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Key/value persistence behind the session store. Two entries are kept
/// (authentication flag as a string, role as a string), mirroring what a
/// browser front-end would put in localStorage.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// File-backed storage: a flat JSON object of string entries. An
/// unreadable or corrupt file is treated as empty, so a damaged state
/// file can only ever log a user out, never in.
pub struct FileStorage {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileStorage {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<HashMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Session state file {} is corrupt, starting empty: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) => {
                debug!("No session state at {} ({})", path.display(), e);
                HashMap::new()
            }
        };
        Self { path, entries }
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StorageError::Write)?;
            }
        }
        let raw = serde_json::to_string_pretty(&self.entries).map_err(StorageError::Encode)?;
        fs::write(&self.path, raw).map_err(StorageError::Write)
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        self.persist()
    }
}

/// Volatile storage for ephemeral sessions (and tests): same contract as
/// [`FileStorage`] minus the file.
#[derive(Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_storage_round_trips_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path);
        storage.set("isAuthenticated", "true").unwrap();
        storage.set("userRole", "hospital").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("isAuthenticated").as_deref(), Some("true"));
        assert_eq!(reopened.get("userRole").as_deref(), Some("hospital"));
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(dir.path().join("nope.json"));
        assert_eq!(storage.get("isAuthenticated"), None);
    }

    #[test]
    fn corrupt_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let storage = FileStorage::open(&path);
        assert_eq!(storage.get("isAuthenticated"), None);
        assert_eq!(storage.get("userRole"), None);
    }

    #[test]
    fn remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut storage = FileStorage::open(&path);
        storage.set("userRole", "insurance").unwrap();
        storage.remove("userRole").unwrap();

        let reopened = FileStorage::open(&path);
        assert_eq!(reopened.get("userRole"), None);
    }
}
