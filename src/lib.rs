//! # quiz-progress
//!
//! A single-screen multiple-choice quiz that remembers where you left off.
//!
//! The core is [`QuizMachine`]: it scores answers, advances through the
//! questions and saves progress to a [`ProgressStore`] after every
//! acknowledged answer, so a relaunch resumes at the same question.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quiz_progress::{FileProgress, JsonFileSource, JsonFileStore, Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     let progress = FileProgress::new(JsonFileStore::new("quiz-progress.json"));
//!     let quiz = Quiz::load_from(progress, &JsonFileSource::new("questions.json"));
//!     quiz.run()
//! }
//! ```

mod app;
mod data;
mod error;
mod machine;
mod models;
pub mod progress;
pub mod terminal;
mod ui;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::{App, Dialog};
pub use data::{
    fetch_or_empty, load_questions_from_json, JsonFileSource, LoadError, QuestionSource,
    StaticSource, DEFAULT_QUESTIONS_PATH,
};
pub use error::{QuizError, Result};
pub use machine::QuizMachine;
pub use models::{
    AnswerFeedback, LoadOutcome, Question, QuestionError, QuestionRecord, QuizState, QuizSummary,
    Transition,
};
pub use progress::{
    FileProgress, JsonFileStore, KeyValueProgress, KeyValueStore, MemoryProgress, MemoryStore,
    ProgressStore, Snapshot,
};

/// A quiz ready to be played in the terminal.
pub struct Quiz<P> {
    app: App<P>,
}

impl<P: ProgressStore> Quiz<P> {
    /// Create a quiz over the given progress store; questions come later via
    /// [`Quiz::load`].
    pub fn new(store: P) -> Self {
        Self {
            app: App::new(store),
        }
    }

    /// Create a quiz and fill it from `source`.
    ///
    /// A source that cannot be read gives an empty quiz, and a malformed
    /// question set gives an empty quiz with the reason on screen.
    pub fn load_from<S: QuestionSource + ?Sized>(store: P, source: &S) -> Self {
        let mut quiz = Self::new(store);
        if let Err(err) = quiz.load(fetch_or_empty(source)) {
            log::error!("{err}");
        }
        quiz
    }

    /// Hand a question set to a freshly created quiz.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidStateTransition`] if questions were
    /// already loaded.
    pub fn load(&mut self, records: Vec<QuestionRecord>) -> Result<LoadOutcome> {
        self.app.load(records)
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<()> {
        let mut term = terminal::TerminalGuard::enter()?;
        run_event_loop(&mut term, &mut self.app)
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App<P> {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App<P> {
        &mut self.app
    }
}

fn run_event_loop<P: ProgressStore>(
    terminal: &mut terminal::AppTerminal,
    app: &mut App<P>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match handle_input(app, key.code) {
                Ok(true) => break,
                Ok(false) => {}
                Err(err) => log::error!("ignoring input: {err}"),
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input<P: ProgressStore>(app: &mut App<P>, key: KeyCode) -> Result<bool> {
    if matches!(key, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc) {
        return Ok(true);
    }

    if app.dialog().is_some() {
        handle_dialog_input(app, key)?;
        return Ok(false);
    }

    match app.state() {
        QuizState::AwaitingAnswer => handle_quiz_input(app, key)?,
        QuizState::Loading
        | QuizState::Empty
        | QuizState::ShowingFeedback
        | QuizState::Completed => {}
    }
    Ok(false)
}

fn handle_dialog_input<P: ProgressStore>(app: &mut App<P>, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Enter | KeyCode::Char(' ') => app.dismiss_dialog(),
        _ => Ok(()),
    }
}

fn handle_quiz_input<P: ProgressStore>(app: &mut App<P>, key: KeyCode) -> Result<()> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_option(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.submit_answer()?,
        KeyCode::Char('r') | KeyCode::Char('R') => app.restart()?,
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz() -> Quiz<MemoryProgress> {
        let source = StaticSource::new(vec![
            QuestionRecord::new("first", ["a", "b"], 1, "b it is"),
            QuestionRecord::new("second", ["a", "b"], 0, "a it is"),
        ]);
        Quiz::load_from(MemoryProgress::default(), &source)
    }

    #[test]
    fn test_keys_drive_a_full_run() {
        let mut quiz = quiz();
        let app = quiz.app_mut();

        assert!(!handle_input(app, KeyCode::Char('j')).unwrap());
        assert!(!handle_input(app, KeyCode::Enter).unwrap());
        assert_eq!(app.dialog().unwrap().title, "Correct!");

        // Navigation keys are swallowed by the dialog.
        assert!(!handle_input(app, KeyCode::Char('j')).unwrap());
        assert_eq!(app.selected_option(), 1);

        assert!(!handle_input(app, KeyCode::Enter).unwrap());
        assert!(!handle_input(app, KeyCode::Char(' ')).unwrap());
        assert!(!handle_input(app, KeyCode::Enter).unwrap());
        assert_eq!(
            app.dialog().unwrap().body,
            "You got 2 correct out of 2 questions"
        );

        assert!(handle_input(app, KeyCode::Char('q')).unwrap());
    }

    #[test]
    fn test_restart_key_resets_progress() {
        let mut quiz = quiz();
        let app = quiz.app_mut();

        handle_input(app, KeyCode::Enter).unwrap();
        handle_input(app, KeyCode::Enter).unwrap();
        assert_eq!(app.current_question_number(), 2);

        handle_input(app, KeyCode::Char('r')).unwrap();
        assert_eq!(app.current_question_number(), 1);
        assert_eq!(app.machine().store().load(), None);
    }

    #[test]
    fn test_unreadable_source_gives_empty_quiz() {
        let quiz = Quiz::load_from(
            MemoryProgress::default(),
            &JsonFileSource::new("/nonexistent/questions.json"),
        );
        assert_eq!(quiz.app().state(), QuizState::Empty);
        assert!(quiz.app().notice().is_none());
    }
}
