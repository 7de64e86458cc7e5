use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

/// Key hints for the current mode
pub fn key_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space toggle  e edit  d delete  ? help  q quit",
        Mode::Add => "Enter add  Esc done",
        Mode::Edit => "Enter save  Esc cancel  ^D delete",
        Mode::Confirm => "y yes  n no  \u{2190}\u{2192} choose  Enter select",
        Mode::Notice => "Enter ok",
    }
}

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            format!(" {}", unicode::truncate_to_width(msg, width.saturating_sub(1))),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    } else if app.show_key_hints {
        let hint = unicode::truncate_to_width(key_hints(app.mode), width.saturating_sub(1));
        Line::from(Span::styled(
            format!(" {}", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
