mod question;
mod state;

pub use question::{Question, QuestionError, QuestionRecord};
pub use state::{AnswerFeedback, LoadOutcome, QuizState, QuizSummary, Transition};
