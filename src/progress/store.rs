//! Key-value backends for saved progress.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub const DEFAULT_PROGRESS_PATH: &str = "quiz-progress.json";

/// Errors surfaced by a key-value backend.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    #[error("store io error: {0}")]
    Io(#[from] io::Error),

    #[error("store serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Durable integer values keyed by name.
pub trait KeyValueStore {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<i64>, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError`] if the value cannot be written.
    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// In-memory backend. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, i64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.values.get(key).copied())
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        self.values.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.values.remove(key);
        Ok(())
    }
}

/// A single JSON object on disk, rewritten on every change.
///
/// A missing file reads as an empty store. Writes go through a sibling
/// temp file that is renamed into place, and a file that no longer parses is
/// replaced by the next write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, i64>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Current values for a read-modify-write, and whether the file must be
    /// rewritten because it was corrupt.
    fn read_for_update(&self) -> Result<(BTreeMap<String, i64>, bool), StoreError> {
        match self.read_all() {
            Ok(values) => Ok((values, false)),
            Err(StoreError::Serialization(err)) => {
                log::warn!("replacing corrupt progress file {}: {err}", self.path.display());
                Ok((BTreeMap::new(), true))
            }
            Err(err) => Err(err),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_all(&self, values: &BTreeMap<String, i64>) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(values)?;
        let temp = self.temp_path();
        fs::write(&temp, content)?;
        if let Err(err) = fs::rename(&temp, &self.path) {
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn set(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        let (mut values, _) = self.read_for_update()?;
        values.insert(key.to_owned(), value);
        self.write_all(&values)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let (mut values, corrupt) = self.read_for_update()?;
        if values.remove(key).is_some() || corrupt {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> JsonFileStore {
        let name = format!("quiz-store-{}.json", uuid::Uuid::new_v4());
        JsonFileStore::new(std::env::temp_dir().join(name))
    }

    #[test]
    fn test_memory_store_get_set_remove() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", 3).unwrap();
        store.set("a", 4).unwrap();
        assert_eq!(store.get("a").unwrap(), Some(4));

        store.remove("a").unwrap();
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_file_store_persists_between_handles() {
        let mut store = temp_store();
        assert_eq!(store.get("NumberCorrectKey").unwrap(), None);

        store.set("NumberCorrectKey", 2).unwrap();
        store.set("QuestionIndexKey", 5).unwrap();

        let reopened = JsonFileStore::new(store.path());
        assert_eq!(reopened.get("NumberCorrectKey").unwrap(), Some(2));
        assert_eq!(reopened.get("QuestionIndexKey").unwrap(), Some(5));

        store.remove("NumberCorrectKey").unwrap();
        assert_eq!(reopened.get("NumberCorrectKey").unwrap(), None);
        assert_eq!(reopened.get("QuestionIndexKey").unwrap(), Some(5));

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_json_file_store_reports_corrupt_file() {
        let store = temp_store();
        fs::write(store.path(), "[1, 2").unwrap();

        let result = store.get("QuestionIndexKey");
        fs::remove_file(store.path()).unwrap();

        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn test_json_file_store_overwrites_half_written_file() {
        let mut store = temp_store();
        fs::write(store.path(), r#"{"NumberCorrectKey": 1, "Quest"#).unwrap();

        store.set("QuestionIndexKey", 1).unwrap();
        assert_eq!(store.get("QuestionIndexKey").unwrap(), Some(1));
        assert_eq!(store.get("NumberCorrectKey").unwrap(), None);
        assert!(!store.temp_path().exists());

        fs::remove_file(store.path()).unwrap();
    }

    #[test]
    fn test_json_file_store_remove_repairs_corrupt_file() {
        let mut store = temp_store();
        fs::write(store.path(), "not json").unwrap();

        store.remove("NumberCorrectKey").unwrap();
        let content = fs::read_to_string(store.path()).unwrap();
        fs::remove_file(store.path()).unwrap();

        assert_eq!(content, "{}");
    }
}
