use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

use super::centered_rect_fixed;

/// Render a blocking notice (e.g. duplicate task title)
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(notice) = &app.notice else {
        return;
    };

    let bg = app.theme.background;
    let header_style = Style::default()
        .fg(app.theme.red)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let lines = vec![
        Line::from(Span::styled(format!(" {}", notice.title), header_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(Span::styled(format!(" {}", notice.body), text_style)),
        Line::from(Span::styled("", text_style)),
        Line::from(vec![
            Span::styled(" Enter", dim_style),
            Span::styled(" ok", text_style),
        ]),
    ];

    let popup_w: u16 = 52.min(area.width.saturating_sub(2));
    let popup_h = (lines.len() as u16) + 2;
    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, overlay_area);
}
