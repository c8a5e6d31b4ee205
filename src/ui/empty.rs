use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, notice: Option<&str>) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "NO QUESTIONS AVAILABLE",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
    ];
    if let Some(notice) = notice {
        content.push(Line::from(notice.fg(Color::DarkGray)));
    }
    content.push(Line::from(""));
    content.push(Line::from("q to quit".fg(Color::DarkGray)));

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray),
        );

    frame.render_widget(widget, chunks[1]);
}
