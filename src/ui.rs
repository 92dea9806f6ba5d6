use ratatui::{prelude::*, widgets::*};

use crate::app::Outcome;
use crate::models::NoticeKind;

/// Renders a single-line form field
pub fn render_field<'a>(content: &'a str, placeholder: &'a str, title: String, is_focused: bool, is_editing: bool) -> Paragraph<'a> {
    let border_style = if is_focused && is_editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    if content.is_empty() && !is_editing {
        Paragraph::new(Span::styled(placeholder, Style::default().fg(Color::DarkGray))).block(block)
    } else {
        Paragraph::new(content).block(block)
    }
}

/// Color for an activity outcome
pub fn outcome_color(outcome: Outcome) -> Color {
    match outcome {
        Outcome::Success => Color::Green,
        Outcome::Conflict => Color::Yellow,
        Outcome::Failure => Color::Red,
    }
}

pub fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Failure => Color::Red,
    }
}

/// Rect of the given percentage size centered in `r`
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 20, area);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 20);
    }
}
