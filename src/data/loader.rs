use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::QuestionRecord;

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Errors reading a question file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can hand over the quiz's question records.
pub trait QuestionSource {
    /// Fetch the records in the order they should be asked.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] if the records cannot be read.
    fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, LoadError>;
}

/// Questions stored as a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileSource {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTIONS_PATH)
    }
}

impl QuestionSource for JsonFileSource {
    fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        load_questions_from_json(&self.path)
    }
}

/// Questions held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<QuestionRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self { records }
    }
}

impl QuestionSource for StaticSource {
    fn fetch_questions(&self) -> Result<Vec<QuestionRecord>, LoadError> {
        Ok(self.records.clone())
    }
}

/// Read question records from a JSON file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] when the file cannot be read and
/// [`LoadError::Parse`] when it is not a JSON array of question objects.
pub fn load_questions_from_json<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<QuestionRecord>, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Fetch from `source`, treating any failure as "no questions available".
pub fn fetch_or_empty<S: QuestionSource + ?Sized>(source: &S) -> Vec<QuestionRecord> {
    match source.fetch_questions() {
        Ok(records) => {
            log::debug!("fetched {} question records", records.len());
            records
        }
        Err(err) => {
            log::warn!("no questions available: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("quiz-loader-{}-{name}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_loads_records_from_json_array() {
        let path = temp_path("ok.json");
        fs::write(
            &path,
            r#"[{"question": "Q1", "answers": ["a", "b"], "correctAnswerIndex": 0, "feedback": "f"},
                {"question": "Q2"}]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(&path).fetch_questions().unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text.as_deref(), Some("Q1"));
        assert_eq!(records[1].answers, None);
    }

    #[test]
    fn test_failures_become_an_empty_set() {
        let missing = JsonFileSource::new(temp_path("does-not-exist.json"));
        assert!(matches!(missing.fetch_questions(), Err(LoadError::Io { .. })));
        assert!(fetch_or_empty(&missing).is_empty());

        let path = temp_path("garbage.json");
        fs::write(&path, "{ not json").unwrap();
        let garbage = JsonFileSource::new(&path);
        let result = garbage.fetch_questions();
        fs::remove_file(&path).unwrap();
        assert!(matches!(result, Err(LoadError::Parse { .. })));
    }

    #[test]
    fn test_static_source_returns_its_records() {
        let source = StaticSource::new(vec![QuestionRecord::new("q", ["a"], 0, "f")]);
        assert_eq!(fetch_or_empty(&source).len(), 1);
    }
}
