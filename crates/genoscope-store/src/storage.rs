//! Storage port for the favorites blob.
//!
//! The store never touches a backend directly; it goes through this
//! trait so tests run against an in-memory map and a real session runs
//! against one JSON file per key.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use genoscope_common::Result;
use tracing::debug;

/// Keyed string-blob storage.
///
/// Implementations can use:
/// - a directory of JSON files (local sessions)
/// - an in-memory map (testing)
pub trait StorageBackend {
    /// Read the blob at `key`. `Ok(None)` when the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write the blob at `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

// ── In-memory backend ───────────────────────────────────────────────────────

/// In-memory backend for unit tests. Writes can be made to fail so
/// persistence-failure paths are testable.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, builder style.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.blobs.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every subsequent write return an error.
    pub fn fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Direct peek at a stored blob, for assertions.
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.blobs.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "injected write failure",
            )
            .into());
        }
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

// ── File backend ────────────────────────────────────────────────────────────

/// One `<key>.json` file per key under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory.
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        debug!(dir = %data_dir.display(), "file storage ready");
        Ok(Self { data_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_read_write_delete() {
        let mut storage = MemoryStorage::new();
        assert!(storage.read("k").unwrap().is_none());

        storage.write("k", "v").unwrap();
        assert_eq!(storage.read("k").unwrap().as_deref(), Some("v"));

        storage.delete("k").unwrap();
        assert!(storage.read("k").unwrap().is_none());
        // Deleting again is fine.
        storage.delete("k").unwrap();
    }

    #[test]
    fn test_memory_injected_write_failure() {
        let mut storage = MemoryStorage::new();
        storage.fail_writes(true);
        assert!(storage.write("k", "v").is_err());
        assert!(storage.read("k").unwrap().is_none());
    }

    #[test]
    fn test_file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        assert!(storage.read("favoriteGenes").unwrap().is_none());
        storage.write("favoriteGenes", "[]").unwrap();
        assert_eq!(
            storage.read("favoriteGenes").unwrap().as_deref(),
            Some("[]")
        );
        assert!(dir.path().join("favoriteGenes.json").exists());

        storage.delete("favoriteGenes").unwrap();
        assert!(storage.read("favoriteGenes").unwrap().is_none());
        storage.delete("favoriteGenes").unwrap();
    }
}
