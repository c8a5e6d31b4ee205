//! Saved quiz progress.
//!
//! Progress is two integers stored under independent keys. Persistence is
//! best effort: write failures are logged and otherwise ignored so the quiz
//! keeps running in memory, and anything short of a complete, sane snapshot
//! reads back as "nothing saved".

mod store;

pub use store::{JsonFileStore, KeyValueStore, MemoryStore, StoreError, DEFAULT_PROGRESS_PATH};

pub const NUM_CORRECT_KEY: &str = "NumberCorrectKey";
pub const QUESTION_INDEX_KEY: &str = "QuestionIndexKey";

/// Minimal saved state needed to resume a quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub num_correct: usize,
    pub question_index: usize,
}

/// Persistence used by the quiz machine.
pub trait ProgressStore {
    /// Overwrite the saved progress.
    fn save(&mut self, num_correct: usize, question_index: usize);

    /// The saved progress, or `None` when there is no complete snapshot.
    fn load(&self) -> Option<Snapshot>;

    /// Forget the saved progress.
    fn clear(&mut self);
}

impl<P: ProgressStore + ?Sized> ProgressStore for &mut P {
    fn save(&mut self, num_correct: usize, question_index: usize) {
        (**self).save(num_correct, question_index);
    }

    fn load(&self) -> Option<Snapshot> {
        (**self).load()
    }

    fn clear(&mut self) {
        (**self).clear();
    }
}

/// [`ProgressStore`] on top of any [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct KeyValueProgress<S> {
    backend: S,
}

impl<S: KeyValueStore> KeyValueProgress<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    fn read(&self, key: &str) -> Option<usize> {
        let value = match self.backend.get(key) {
            Ok(value) => value?,
            Err(err) => {
                log::warn!("could not read {key}: {err}");
                return None;
            }
        };

        match usize::try_from(value) {
            Ok(value) => Some(value),
            Err(_) => {
                log::warn!("ignoring negative saved value for {key}: {value}");
                None
            }
        }
    }

    fn write(&mut self, key: &str, value: usize) {
        let value = i64::try_from(value).unwrap_or(i64::MAX);
        if let Err(err) = self.backend.set(key, value) {
            log::warn!("could not save {key}: {err}");
        }
    }

    fn remove(&mut self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            log::warn!("could not clear {key}: {err}");
        }
    }
}

impl<S: KeyValueStore> ProgressStore for KeyValueProgress<S> {
    fn save(&mut self, num_correct: usize, question_index: usize) {
        self.write(NUM_CORRECT_KEY, num_correct);
        self.write(QUESTION_INDEX_KEY, question_index);
    }

    fn load(&self) -> Option<Snapshot> {
        let num_correct = self.read(NUM_CORRECT_KEY);
        let question_index = self.read(QUESTION_INDEX_KEY);

        match (num_correct, question_index) {
            (Some(num_correct), Some(question_index)) => Some(Snapshot {
                num_correct,
                question_index,
            }),
            (None, None) => None,
            _ => {
                log::warn!("ignoring partial progress snapshot");
                None
            }
        }
    }

    fn clear(&mut self) {
        self.remove(NUM_CORRECT_KEY);
        self.remove(QUESTION_INDEX_KEY);
    }
}

/// Progress kept only for the lifetime of the process.
pub type MemoryProgress = KeyValueProgress<MemoryStore>;

/// Progress kept in a JSON file.
pub type FileProgress = KeyValueProgress<JsonFileStore>;

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend whose every operation fails.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<i64>, StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }

        fn set(&mut self, _key: &str, _value: i64) -> Result<(), StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(std::io::Error::other("unavailable").into())
        }
    }

    #[test]
    fn test_save_then_load() {
        let mut progress = MemoryProgress::default();
        assert_eq!(progress.load(), None);

        progress.save(1, 2);
        progress.save(2, 3);
        assert_eq!(
            progress.load(),
            Some(Snapshot {
                num_correct: 2,
                question_index: 3
            })
        );
        assert_eq!(progress.backend().get(NUM_CORRECT_KEY).unwrap(), Some(2));
        assert_eq!(progress.backend().get(QUESTION_INDEX_KEY).unwrap(), Some(3));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut progress = MemoryProgress::default();
        progress.save(1, 1);
        progress.clear();
        progress.clear();
        assert_eq!(progress.load(), None);
        assert!(progress.backend().is_empty());
    }

    #[test]
    fn test_partial_snapshot_is_no_snapshot() {
        let mut backend = MemoryStore::new();
        backend.set(QUESTION_INDEX_KEY, 2).unwrap();
        assert_eq!(KeyValueProgress::new(backend).load(), None);

        let mut backend = MemoryStore::new();
        backend.set(NUM_CORRECT_KEY, 2).unwrap();
        assert_eq!(KeyValueProgress::new(backend).load(), None);
    }

    #[test]
    fn test_negative_values_are_no_snapshot() {
        let mut backend = MemoryStore::new();
        backend.set(NUM_CORRECT_KEY, -1).unwrap();
        backend.set(QUESTION_INDEX_KEY, 2).unwrap();
        assert_eq!(KeyValueProgress::new(backend).load(), None);
    }

    #[test]
    fn test_unavailable_backend_is_silent() {
        let mut progress = KeyValueProgress::new(BrokenStore);
        progress.save(1, 1);
        progress.clear();
        assert_eq!(progress.load(), None);
    }
}
