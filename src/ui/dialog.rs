use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::Dialog;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 11;

pub fn render(frame: &mut Frame, area: Rect, dialog: &Dialog) {
    let popup = centered(area, DIALOG_WIDTH, DIALOG_HEIGHT);
    let title_color = match dialog.title.as_str() {
        "Correct!" => Color::Green,
        "Wrong!" => Color::Red,
        _ => Color::Cyan,
    };

    let content = vec![
        Line::from(Span::styled(
            dialog.title.as_str(),
            Style::default().fg(title_color).bold(),
        )),
        Line::from(""),
        Line::from(dialog.body.as_str().fg(Color::White)),
        Line::from(""),
        Line::from(Span::styled(
            format!("[ {} ]", dialog.button),
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("enter to continue".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );

    frame.render_widget(Clear, popup);
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered(area, 50, 11), Rect::new(15, 6, 50, 11));

        let small = Rect::new(2, 1, 20, 5);
        assert_eq!(centered(small, 50, 11), small);
    }
}
