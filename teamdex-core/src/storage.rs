///! Key-value storage port.
///!
///! The browser original kept everything in `localStorage`; here the same
///! contract is a small trait so the store can run against a real data
///! directory or an in-memory map in tests.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Storage key for the serialized user-team collection.
pub const USER_TEAMS_KEY: &str = "user_teams";
/// Storage key for the display theme preference.
pub const THEME_KEY: &str = "theme";

/// Durable string-to-string storage. `load` of an absent key is `Ok(None)`,
/// never an error; callers supply their own defaults.
pub trait KvStore {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
}

impl<T: KvStore + ?Sized> KvStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        (**self).save(key, value)
    }
}

/// File-backed storage: one `<key>.json` file per key under a data directory.
pub struct FileKvStore {
    data_dir: PathBuf,
}

impl FileKvStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl KvStore for FileKvStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            debug!("Storage key '{}' has no file at {:?}", key, path);
            return Ok(None);
        }
        let value = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read storage file {:?}", path))?;
        Ok(Some(value))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        if !self.data_dir.exists() {
            std::fs::create_dir_all(&self.data_dir)
                .with_context(|| format!("Failed to create data directory {:?}", self.data_dir))?;
        }
        let path = self.key_path(key);
        std::fs::write(&path, value)
            .with_context(|| format!("Failed to write storage file {:?}", path))?;
        debug!("Saved {} bytes under storage key '{}'", value.len(), key);
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Default)]
pub struct MemoryKvStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, e.g. with a corrupted value in fallback tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KvStore for MemoryKvStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.map.lock().unwrap().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.map
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKvStore::new(temp_dir.path());

        assert!(store.load(USER_TEAMS_KEY).unwrap().is_none());
        store.save(USER_TEAMS_KEY, "[]").unwrap();
        assert_eq!(store.load(USER_TEAMS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_creates_data_dir() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("data").join("teamdex");
        let store = FileKvStore::new(&nested);

        store.save(THEME_KEY, "dark").unwrap();
        assert_eq!(store.load(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryKvStore::new();
        assert!(store.load("missing").unwrap().is_none());
        store.save("k", "v").unwrap();
        assert_eq!(store.load("k").unwrap().as_deref(), Some("v"));
    }
}
