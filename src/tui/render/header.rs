use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

/// "You have N tasks", singular for one
pub fn task_counter_label(count: usize) -> String {
    match count {
        1 => "You have 1 task".to_string(),
        n => format!("You have {} tasks", n),
    }
}

/// Render the header bar: app name on the left, task counter on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.highlight);
    let name = " taskpad";
    let counter = task_counter_label(app.tasks.len());

    let mut spans = vec![Span::styled(name, style.add_modifier(Modifier::BOLD))];
    let used = unicode::display_width(name) + unicode::display_width(&counter);
    let width = area.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
        spans.push(Span::styled(counter, style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(style), area);
}
