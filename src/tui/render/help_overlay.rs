use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect_fixed;

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "List",
        &[
            ("\u{2191}\u{2193}/jk", "Move cursor up/down"),
            ("g/G", "Jump to top/bottom"),
            ("Space/Enter", "Toggle done"),
            ("e", "Edit title"),
            ("d/Del", "Remove task"),
            ("a/i", "Add a task"),
            ("q", "Quit"),
        ],
    ),
    (
        "Editing",
        &[
            ("Enter", "Save"),
            ("Esc", "Cancel / leave field"),
            ("^D", "Remove the task being edited"),
        ],
    ),
];

/// Render the help overlay (toggled with ?)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(" Key Bindings", header_style)),
        Line::from(""),
    ];
    for (section, bindings) in BINDINGS {
        lines.push(Line::from(Span::styled(format!(" {}", section), header_style)));
        for (key, desc) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!(" {:<14}", key), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        " ? or Esc to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let overlay_area = centered_rect_fixed(48, lines.len() as u16 + 2, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.highlight).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn test_help_lists_bindings() {
        let app = app_with_tasks(&[]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        assert!(output.contains("Key Bindings"));
        assert!(output.contains("Toggle done"));
        assert!(output.contains("Remove the task being edited"));
    }
}
