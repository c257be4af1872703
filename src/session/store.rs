//! Snapshot storage backends.
//!
//! A store maps a key to one JSON blob, the way browser local storage
//! does. Stores never interpret the blob.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::core::PersistenceError;

/// Keyed blob storage for snapshots.
pub trait SnapshotStore {
    /// Write `blob` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError>;

    /// Read the blob under `key`, or `None` if nothing was saved.
    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Remove the blob under `key`. Missing keys are not an error.
    fn clear(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// Store that keeps nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullStore;

impl SnapshotStore for NullStore {
    fn save(&mut self, _key: &str, _blob: &str) -> Result<(), PersistenceError> {
        Ok(())
    }

    fn load(&self, _key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(None)
    }

    fn clear(&mut self, _key: &str) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// In-memory store. Clones share the same map, so a second session can
/// reload what the first one saved.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    blobs: Rc<RefCell<FxHashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw blob under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.blobs.borrow().get(key).cloned()
    }

    /// Overwrite the raw blob under `key`.
    pub fn put(&self, key: &str, blob: impl Into<String>) {
        self.blobs.borrow_mut().insert(key.to_string(), blob.into());
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        self.put(key, blob);
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.get(key))
    }

    fn clear(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.blobs.borrow_mut().remove(key);
        Ok(())
    }
}

/// One `<key>.json` file per key inside a directory.
///
/// Writes go to a temporary file that is then renamed over the target, so
/// a crash mid-write leaves the previous snapshot intact.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store snapshots under `dir`, creating it on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileStore {
    fn save(&mut self, key: &str, blob: &str) -> Result<(), PersistenceError> {
        fs::create_dir_all(&self.dir)?;
        let target = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, blob)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&mut self, key: &str) -> Result<(), PersistenceError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load("k").unwrap(), None);

        store.save("k", "{}").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("{}"));

        let other = store.clone();
        assert_eq!(other.get("k").as_deref(), Some("{}"));

        store.clear("k").unwrap();
        assert_eq!(other.get("k"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("saves"));

        assert_eq!(store.load("game").unwrap(), None);
        store.save("game", r#"{"a":1}"#).unwrap();
        store.save("game", r#"{"a":2}"#).unwrap();
        assert_eq!(store.load("game").unwrap().as_deref(), Some(r#"{"a":2}"#));
        assert!(!dir.path().join("saves/game.json.tmp").exists());

        store.clear("game").unwrap();
        store.clear("game").unwrap();
        assert_eq!(store.load("game").unwrap(), None);
    }

    #[test]
    fn test_null_store() {
        let mut store = NullStore;
        store.save("k", "x").unwrap();
        assert_eq!(store.load("k").unwrap(), None);
    }
}
