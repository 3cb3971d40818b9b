use crate::domain::{DomainError, repositories::KeyValueStore};
use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Key-value store backed by a single JSON object on disk.
///
/// The whole map is read once at open and kept in memory; every `set`
/// rewrites the file so a crash never loses an acknowledged write.
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let entries = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read store file {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse store file {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };

        tracing::debug!("Opened store {} with {} keys", path.display(), entries.len());

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create store directory")?;
        }

        let content =
            serde_json::to_string_pretty(entries).context("Failed to serialize store")?;

        fs::write(&self.path, content).context("Failed to write store file")?;

        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Storage(format!("store lock poisoned: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomainError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| DomainError::Storage(format!("store lock poisoned: {}", e)))?;

        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
            .map_err(|e| DomainError::Storage(format!("{:#}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("favorites").unwrap(), None);
        store.set("favorites", r#"["52977"]"#).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("favorites").unwrap().as_deref(),
            Some(r#"["52977"]"#)
        );
    }

    #[test]
    fn empty_file_opens_as_empty_store() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let store = JsonFileStore::open(file.path()).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_reported() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "not json").unwrap();
        assert!(JsonFileStore::open(file.path()).is_err());
    }
}
