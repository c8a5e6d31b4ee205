use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a question record cannot be turned into a playable [`Question`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionError {
    #[error("question text is missing")]
    MissingText,
    #[error("question has no answers")]
    NoAnswers,
    #[error("correct answer index is missing")]
    MissingCorrectIndex,
    #[error("correct answer index {index} is out of range for {len} answers")]
    CorrectIndexOutOfRange { index: i64, len: usize },
    #[error("feedback text is missing")]
    MissingFeedback,
}

/// A question as it appears in the question file. Every field is optional
/// here; [`Question::try_from`] decides whether the record is playable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(rename = "question")]
    pub text: Option<String>,
    pub answers: Option<Vec<String>>,
    pub correct_answer_index: Option<i64>,
    pub feedback: Option<String>,
}

impl QuestionRecord {
    /// Build a fully populated record.
    pub fn new<T, A, F>(text: T, answers: A, correct_answer_index: i64, feedback: F) -> Self
    where
        T: Into<String>,
        A: IntoIterator,
        A::Item: Into<String>,
        F: Into<String>,
    {
        Self {
            text: Some(text.into()),
            answers: Some(answers.into_iter().map(Into::into).collect()),
            correct_answer_index: Some(correct_answer_index),
            feedback: Some(feedback.into()),
        }
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answers: Vec<String>,
    correct_answer_index: usize,
    feedback: String,
}

impl Question {
    /// Create a question, checking that it has answers and that the correct
    /// index points at one of them.
    ///
    /// # Errors
    ///
    /// Returns [`QuestionError::NoAnswers`] or
    /// [`QuestionError::CorrectIndexOutOfRange`].
    pub fn new(
        text: impl Into<String>,
        answers: Vec<String>,
        correct_answer_index: usize,
        feedback: impl Into<String>,
    ) -> Result<Self, QuestionError> {
        if answers.is_empty() {
            return Err(QuestionError::NoAnswers);
        }
        if correct_answer_index >= answers.len() {
            return Err(QuestionError::CorrectIndexOutOfRange {
                index: i64::try_from(correct_answer_index).unwrap_or(i64::MAX),
                len: answers.len(),
            });
        }

        Ok(Self {
            text: text.into(),
            answers,
            correct_answer_index,
            feedback: feedback.into(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn correct_answer_index(&self) -> usize {
        self.correct_answer_index
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_answer_index
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        let text = record.text.ok_or(QuestionError::MissingText)?;
        let answers = record.answers.ok_or(QuestionError::NoAnswers)?;
        let raw_index = record
            .correct_answer_index
            .ok_or(QuestionError::MissingCorrectIndex)?;
        let feedback = record.feedback.ok_or(QuestionError::MissingFeedback)?;

        let index =
            usize::try_from(raw_index).map_err(|_| QuestionError::CorrectIndexOutOfRange {
                index: raw_index,
                len: answers.len(),
            })?;

        Self::new(text, answers, index, feedback)
    }
}
