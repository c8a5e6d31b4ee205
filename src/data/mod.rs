mod loader;

pub use loader::{
    fetch_or_empty, load_questions_from_json, JsonFileSource, LoadError, QuestionSource,
    StaticSource, DEFAULT_QUESTIONS_PATH,
};
