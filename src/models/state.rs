use std::fmt;

/// Where the quiz currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    /// Waiting for the question set.
    Loading,
    /// Loaded, but there is nothing to ask.
    Empty,
    /// A question is shown and no answer has been given yet.
    AwaitingAnswer,
    /// The answer was scored and its feedback is shown.
    ShowingFeedback,
    /// Every question has been answered and the summary is shown.
    Completed,
}

impl QuizState {
    /// True while a question is on screen.
    pub fn is_in_progress(self) -> bool {
        matches!(self, Self::AwaitingAnswer | Self::ShowingFeedback)
    }
}

impl fmt::Display for QuizState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Loading => "loading",
            Self::Empty => "empty",
            Self::AwaitingAnswer => "awaiting answer",
            Self::ShowingFeedback => "showing feedback",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Result of scoring one answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub feedback_text: String,
}

/// Final score once every question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizSummary {
    pub num_correct: usize,
    pub total: usize,
}

impl fmt::Display for QuizSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You got {} correct out of {} questions",
            self.num_correct, self.total
        )
    }
}

/// What acknowledging a dialog led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved on to the question at `index`.
    NextQuestion { index: usize },
    /// The last question was acknowledged.
    Completed(QuizSummary),
    /// The summary was acknowledged and the quiz starts over.
    Restarted,
}

/// How `load` set up the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Fresh,
    Resumed {
        question_index: usize,
        num_correct: usize,
    },
    NoQuestions,
}
