use crate::error::{QuizError, Result};
use crate::machine::QuizMachine;
use crate::models::{LoadOutcome, QuestionRecord, QuizState, Transition};
use crate::progress::ProgressStore;

/// Modal shown over the question after an answer and at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub body: String,
    pub button: &'static str,
}

impl Dialog {
    fn feedback(is_correct: bool, body: String) -> Self {
        Self {
            title: if is_correct { "Correct!" } else { "Wrong!" }.to_string(),
            body,
            button: "Next",
        }
    }

    fn summary(body: String) -> Self {
        Self {
            title: "Summary".to_string(),
            body,
            button: "Restart",
        }
    }
}

/// Presentation state around a [`QuizMachine`].
///
/// Input that arrives while a dialog is open is dropped, so the machine
/// never sees a second answer for the same question.
pub struct App<P> {
    machine: QuizMachine<P>,
    selected_option: usize,
    dialog: Option<Dialog>,
    notice: Option<String>,
}

impl<P: ProgressStore> App<P> {
    pub fn new(store: P) -> Self {
        Self {
            machine: QuizMachine::new(store),
            selected_option: 0,
            dialog: None,
            notice: None,
        }
    }

    /// Hand the question set to the machine.
    ///
    /// A rejected set leaves the quiz empty with the reason kept as a notice.
    pub fn load(&mut self, records: Vec<QuestionRecord>) -> Result<LoadOutcome> {
        match self.machine.load(records) {
            Ok(outcome) => Ok(outcome),
            Err(err @ QuizError::MalformedQuestionData { .. }) => {
                log::warn!("refusing to start: {err}");
                self.notice = Some(err.to_string());
                Ok(LoadOutcome::NoQuestions)
            }
            Err(err) => Err(err),
        }
    }

    pub fn machine(&self) -> &QuizMachine<P> {
        &self.machine
    }

    pub fn state(&self) -> QuizState {
        self.machine.state()
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn current_question_number(&self) -> usize {
        self.machine.current_index() + 1
    }

    pub fn total_questions(&self) -> usize {
        self.machine.total()
    }

    fn num_options(&self) -> usize {
        self.machine
            .current_question()
            .map_or(0, |question| question.answers().len())
    }

    pub fn select_next_option(&mut self) {
        let count = self.num_options();
        if self.dialog.is_none() && count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.num_options();
        if self.dialog.is_none() && count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Answer with the highlighted option and show its feedback.
    pub fn submit_answer(&mut self) -> Result<()> {
        if self.dialog.is_some() || self.state() != QuizState::AwaitingAnswer {
            return Ok(());
        }

        let feedback = self.machine.submit_answer(self.selected_option)?;
        self.dialog = Some(Dialog::feedback(feedback.is_correct, feedback.feedback_text));
        Ok(())
    }

    /// Close the open dialog and let the machine move on.
    pub fn dismiss_dialog(&mut self) -> Result<()> {
        if self.dialog.is_none() {
            return Ok(());
        }

        self.dialog = match self.machine.acknowledge_feedback()? {
            Transition::NextQuestion { .. } | Transition::Restarted => {
                self.selected_option = 0;
                None
            }
            Transition::Completed(summary) => Some(Dialog::summary(summary.to_string())),
        };
        Ok(())
    }

    /// Throw away the current run and saved progress.
    pub fn restart(&mut self) -> Result<()> {
        if self.state() != QuizState::AwaitingAnswer || self.dialog.is_some() {
            return Ok(());
        }

        self.machine.restart()?;
        self.selected_option = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::MemoryProgress;

    fn app(correct: &[i64]) -> App<MemoryProgress> {
        let records = correct
            .iter()
            .map(|&c| QuestionRecord::new("q", ["a", "b", "c"], c, "because"))
            .collect();
        let mut app = App::new(MemoryProgress::default());
        app.load(records).unwrap();
        app
    }

    #[test]
    fn test_option_selection_wraps() {
        let mut app = app(&[0]);
        app.select_previous_option();
        assert_eq!(app.selected_option(), 2);
        app.select_next_option();
        assert_eq!(app.selected_option(), 0);
    }

    #[test]
    fn test_feedback_dialog_then_summary() {
        let mut app = app(&[1, 0]);

        app.select_next_option();
        app.submit_answer().unwrap();
        let dialog = app.dialog().unwrap();
        assert_eq!(dialog.title, "Correct!");
        assert_eq!(dialog.body, "because");
        assert_eq!(dialog.button, "Next");

        // Input during feedback is ignored.
        app.select_next_option();
        app.submit_answer().unwrap();
        assert_eq!(app.selected_option(), 1);
        assert_eq!(app.machine().num_correct(), 1);

        app.dismiss_dialog().unwrap();
        assert!(app.dialog().is_none());
        assert_eq!(app.selected_option(), 0);
        assert_eq!(app.current_question_number(), 2);

        app.select_next_option();
        app.submit_answer().unwrap();
        assert_eq!(app.dialog().unwrap().title, "Wrong!");

        app.dismiss_dialog().unwrap();
        let summary = app.dialog().unwrap();
        assert_eq!(summary.title, "Summary");
        assert_eq!(summary.body, "You got 1 correct out of 2 questions");
        assert_eq!(summary.button, "Restart");

        app.dismiss_dialog().unwrap();
        assert!(app.dialog().is_none());
        assert_eq!(app.state(), QuizState::AwaitingAnswer);
        assert_eq!(app.current_question_number(), 1);
    }

    #[test]
    fn test_malformed_set_leaves_a_notice() {
        let mut app = App::new(MemoryProgress::default());
        let outcome = app
            .load(vec![QuestionRecord::new("q", ["a"], 3, "f")])
            .unwrap();

        assert_eq!(outcome, LoadOutcome::NoQuestions);
        assert_eq!(app.state(), QuizState::Empty);
        assert!(app.notice().unwrap().contains("question 1 is malformed"));
    }
}
