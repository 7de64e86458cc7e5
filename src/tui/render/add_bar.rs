use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::tui::focus::FocusTarget;

const PLACEHOLDER: &str = "Add a new task...";

/// Render the add control: a bordered single-line field
pub fn render_add_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let focused = app.focus.is_focused(FocusTarget::AddInput);
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(" New task ", Style::default().fg(border_color).bg(bg)))
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let (line, cursor_col) = if app.add_input.is_empty() && !focused {
        let placeholder = Span::styled(PLACEHOLDER, Style::default().fg(app.theme.dim).bg(bg));
        (Line::from(placeholder), 0)
    } else {
        let (visible, col) = app.add_input.visible_window(inner.width as usize);
        let text = Span::styled(
            visible.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        );
        (Line::from(text), col)
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), inner);

    if focused {
        frame.set_cursor_position((inner.x + cursor_col as u16, inner.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_placeholder_when_unfocused() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(30, 3, |frame, area| {
            render_add_bar(frame, &app, area);
        });
        assert!(output.contains("New task"));
        assert!(output.contains("Add a new task..."));
    }

    #[test]
    fn test_typed_text_when_focused() {
        let mut app = app_with_tasks(&[]);
        app.focus_add_input();
        app.add_input.insert_str("Buy milk");
        let output = render_to_string(30, 3, |frame, area| {
            render_add_bar(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│Buy milk                    │");
    }

    #[test]
    fn test_long_text_scrolls_to_cursor() {
        let mut app = app_with_tasks(&[]);
        app.focus_add_input();
        app.add_input.insert_str("0123456789abcdef");
        let output = render_to_string(12, 3, |frame, area| {
            render_add_bar(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[1], "│789abcdef │");
    }
}
