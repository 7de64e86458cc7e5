use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::task_ops::Answer;
use crate::tui::app::App;
use crate::util::unicode;

use super::centered_rect_fixed;

/// Render the yes/no removal prompt
pub fn render_confirm_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(cs) = &app.confirm else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let bright_style = Style::default().fg(app.theme.text_bright).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2));
    let inner_w = (popup_w as usize).saturating_sub(4);

    let button = |label: &'static str, answer: Answer| {
        if cs.selected == answer {
            Span::styled(
                label,
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.highlight)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, text_style)
        }
    };

    let lines = vec![
        Line::from(Span::styled(" Remove item", header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(
            " Are you sure you want to remove this item?",
            text_style,
        )),
        Line::from(Span::styled(
            format!(
                "   \"{}\"",
                unicode::truncate_to_width(cs.request.title(), inner_w.saturating_sub(2))
            ),
            bright_style,
        )),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled("   ", text_style),
            button(" No ", Answer::No),
            Span::styled("   ", text_style),
            button(" Yes ", Answer::Yes),
        ]),
    ];

    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
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
    fn test_prompt_text_and_choices() {
        let mut app = app_with_tasks(&["Buy milk"]);
        app.request_remove();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert!(output.contains("Remove item"));
        assert!(output.contains("Are you sure you want to remove this item?"));
        assert!(output.contains("\"Buy milk\""));
        assert!(output.contains(" No "));
        assert!(output.contains(" Yes "));
    }

    #[test]
    fn test_nothing_without_pending_prompt() {
        let app = app_with_tasks(&["Buy milk"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_popup(frame, &app, area);
        });
        assert_eq!(output, "");
    }
}
