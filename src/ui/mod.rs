mod dialog;
mod empty;
mod quiz;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::QuizState;
use crate::progress::ProgressStore;

pub fn render<P: ProgressStore>(frame: &mut Frame, app: &App<P>) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state() {
        QuizState::Empty => empty::render(frame, area, app.notice()),
        QuizState::AwaitingAnswer | QuizState::ShowingFeedback => quiz::render(frame, area, app),
        QuizState::Loading | QuizState::Completed => {}
    }

    if let Some(dialog) = app.dialog() {
        dialog::render(frame, area, dialog);
    }
}
