//! One-file-per-key state storage

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SkError};

/// Durable string-to-string mapping
pub trait KeyValueStore {
    /// Make sure the backing storage exists
    fn ensure_directory(&self) -> Result<()>;

    /// Read a value; an absent key reads as an empty string
    fn read(&self, key: &str) -> Result<String>;

    /// Create or truncate the value stored under `key`
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Stored keys starting with `prefix`, sorted
    fn list_keys(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Stores each key as a plain-text file in a directory
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn ensure_directory(&self) -> Result<()> {
        match fs::create_dir(&self.dir) {
            Ok(()) => {
                debug!("Created state directory {}", self.dir.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists && self.dir.is_dir() => Ok(()),
            Err(e) => Err(SkError::Storage(format!(
                "Failed to create state directory {}: {}",
                self.dir.display(),
                e
            ))),
        }
    }

    fn read(&self, key: &str) -> Result<String> {
        let path = self.key_path(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(value),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No value stored for '{}'", key);
                Ok(String::new())
            }
            Err(e) => Err(SkError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key);
        fs::write(&path, value).map_err(|e| {
            SkError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
        debug!("Stored '{}' = '{}'", key, value);
        Ok(())
    }

    fn list_keys(&self, prefix: &str) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir).map_err(|e| {
            SkError::Storage(format!(
                "Failed to read state directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                SkError::Storage(format!(
                    "Failed to read state directory {}: {}",
                    self.dir.display(),
                    e
                ))
            })?;
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if name.starts_with(prefix) {
                    keys.push(name.to_string());
                }
            }
        }

        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_store(dir: &TempDir) -> FileStore {
        let store = FileStore::new(dir.path().join(".sk"));
        store.ensure_directory().unwrap();
        store
    }

    #[test]
    fn test_read_missing_key_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        assert_eq!(store.read("previous_context").unwrap(), "");
    }

    #[test]
    fn test_write_then_read() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.write("testing", "value1").unwrap();
        assert_eq!(store.read("testing").unwrap(), "value1");
    }

    #[test]
    fn test_write_truncates() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.write("k", "a-much-longer-value").unwrap();
        store.write("k", "short").unwrap();
        assert_eq!(store.read("k").unwrap(), "short");
    }

    #[test]
    fn test_value_is_raw_file_content() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.write("previous_namespace", "kube-system").unwrap();
        let raw = fs::read_to_string(store.dir().join("previous_namespace")).unwrap();
        assert_eq!(raw, "kube-system");
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join(".sk"));
        store.ensure_directory().unwrap();
        store.ensure_directory().unwrap();
        assert!(store.dir().is_dir());
    }

    #[test]
    fn test_ensure_directory_fails_on_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".sk");
        fs::write(&path, "not a dir").unwrap();
        let store = FileStore::new(path);
        let err = store.ensure_directory().unwrap_err();
        assert!(matches!(err, SkError::Storage(_)));
    }

    #[test]
    fn test_ensure_directory_fails_without_parent() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("missing").join(".sk"));
        assert!(store.ensure_directory().is_err());
    }

    #[test]
    fn test_list_keys_filters_prefix_and_dirs() {
        let dir = TempDir::new().unwrap();
        let store = test_store(&dir);
        store.write("favorite_context_b", "ctx2").unwrap();
        store.write("favorite_context_a", "ctx1").unwrap();
        store.write("previous_context", "dev").unwrap();
        fs::create_dir(store.dir().join("favorite_context_dir")).unwrap();

        let keys = store.list_keys("favorite_context_").unwrap();
        assert_eq!(keys, vec!["favorite_context_a", "favorite_context_b"]);
    }

    #[test]
    fn test_list_keys_missing_dir_errors() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("nope"));
        assert!(matches!(store.list_keys(""), Err(SkError::Storage(_))));
    }
}
