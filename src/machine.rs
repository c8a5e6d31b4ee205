//! Quiz progression.
//!
//! [`QuizMachine`] owns the question set, the current position and the score.
//! Every transition is a synchronous call made by the presentation layer:
//! `submit_answer` scores the current question, and `acknowledge_feedback`
//! moves on once the user has dismissed the feedback (or the summary).

use crate::error::{QuizError, Result};
use crate::models::{
    AnswerFeedback, LoadOutcome, Question, QuestionRecord, QuizState, QuizSummary, Transition,
};
use crate::progress::ProgressStore;

pub struct QuizMachine<P> {
    store: P,
    state: QuizState,
    questions: Vec<Question>,
    current_index: usize,
    num_correct: usize,
}

impl<P: ProgressStore> QuizMachine<P> {
    pub fn new(store: P) -> Self {
        Self {
            store,
            state: QuizState::Loading,
            questions: Vec::new(),
            current_index: 0,
            num_correct: 0,
        }
    }

    /// Validate the question set and pick up any saved progress.
    ///
    /// A single malformed record rejects the whole set and leaves the quiz
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidStateTransition`] if questions were already
    /// loaded, or [`QuizError::MalformedQuestionData`] for the first record
    /// that fails validation.
    pub fn load(&mut self, records: Vec<QuestionRecord>) -> Result<LoadOutcome> {
        self.require("load", |state| state == QuizState::Loading)?;

        let questions = match validate(records) {
            Ok(questions) => questions,
            Err(err) => {
                self.state = QuizState::Empty;
                return Err(err);
            }
        };
        self.questions = questions;

        if self.questions.is_empty() {
            log::info!("quiz has no questions");
            self.state = QuizState::Empty;
            return Ok(LoadOutcome::NoQuestions);
        }

        self.state = QuizState::AwaitingAnswer;

        match self.store.load() {
            Some(snapshot)
                if snapshot.question_index < self.questions.len()
                    && snapshot.num_correct <= snapshot.question_index =>
            {
                self.current_index = snapshot.question_index;
                self.num_correct = snapshot.num_correct;
                log::info!(
                    "resuming at question {} with {} correct",
                    self.current_index + 1,
                    self.num_correct
                );
                Ok(LoadOutcome::Resumed {
                    question_index: self.current_index,
                    num_correct: self.num_correct,
                })
            }
            Some(snapshot) => {
                log::info!("discarding stale progress {snapshot:?}");
                Ok(LoadOutcome::Fresh)
            }
            None => Ok(LoadOutcome::Fresh),
        }
    }

    /// Score `selected` against the current question.
    ///
    /// An index that names no answer is simply wrong.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidStateTransition`] unless a question is
    /// waiting for an answer.
    pub fn submit_answer(&mut self, selected: usize) -> Result<AnswerFeedback> {
        self.require("submit an answer", |state| state == QuizState::AwaitingAnswer)?;

        let question = &self.questions[self.current_index];
        let is_correct = question.is_correct(selected);
        if is_correct {
            self.num_correct += 1;
        }
        let feedback = AnswerFeedback {
            is_correct,
            feedback_text: question.feedback().to_owned(),
        };

        log::debug!(
            "question {} answered with {selected}: {}",
            self.current_index + 1,
            if is_correct { "correct" } else { "wrong" }
        );
        self.state = QuizState::ShowingFeedback;
        Ok(feedback)
    }

    /// Dismiss the feedback or summary dialog.
    ///
    /// After feedback this advances to the next question (saving progress) or
    /// completes the quiz (clearing progress). After the summary it restarts
    /// from the first question.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidStateTransition`] unless feedback or the
    /// summary is being shown.
    pub fn acknowledge_feedback(&mut self) -> Result<Transition> {
        self.require("acknowledge feedback", |state| {
            matches!(state, QuizState::ShowingFeedback | QuizState::Completed)
        })?;

        if self.state == QuizState::Completed {
            self.reset();
            log::debug!("summary acknowledged, restarting");
            return Ok(Transition::Restarted);
        }

        self.current_index += 1;

        if self.current_index == self.questions.len() {
            let summary = self.completed_summary();
            self.store.clear();
            self.state = QuizState::Completed;
            log::info!("quiz completed: {summary}");
            Ok(Transition::Completed(summary))
        } else {
            self.store.save(self.num_correct, self.current_index);
            self.state = QuizState::AwaitingAnswer;
            log::debug!("moving to question {}", self.current_index + 1);
            Ok(Transition::NextQuestion {
                index: self.current_index,
            })
        }
    }

    /// Start over from the first question and forget saved progress.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::InvalidStateTransition`] before questions are
    /// loaded or when there are none.
    pub fn restart(&mut self) -> Result<()> {
        self.require("restart", |state| {
            state.is_in_progress() || state == QuizState::Completed
        })?;

        self.reset();
        self.store.clear();
        log::debug!("quiz restarted");
        Ok(())
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn num_correct(&self) -> usize {
        self.num_correct
    }

    /// Questions scored so far, including one whose feedback is on screen.
    pub fn answered(&self) -> usize {
        match self.state {
            QuizState::ShowingFeedback => self.current_index + 1,
            _ => self.current_index,
        }
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// The final score, once the quiz is completed.
    pub fn summary(&self) -> Option<QuizSummary> {
        (self.state == QuizState::Completed).then(|| self.completed_summary())
    }

    pub fn store(&self) -> &P {
        &self.store
    }

    fn completed_summary(&self) -> QuizSummary {
        QuizSummary {
            num_correct: self.num_correct,
            total: self.questions.len(),
        }
    }

    fn reset(&mut self) {
        self.current_index = 0;
        self.num_correct = 0;
        self.state = QuizState::AwaitingAnswer;
    }

    fn require(&self, operation: &'static str, allowed: impl Fn(QuizState) -> bool) -> Result<()> {
        if allowed(self.state) {
            Ok(())
        } else {
            Err(QuizError::InvalidStateTransition {
                operation,
                state: self.state,
            })
        }
    }
}

fn validate(records: Vec<QuestionRecord>) -> Result<Vec<Question>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record)
                .map_err(|source| QuizError::MalformedQuestionData { index, source })
        })
        .collect()
}
