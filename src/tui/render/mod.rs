pub mod add_bar;
pub mod confirm_popup;
pub mod header;
pub mod help_overlay;
pub mod notice_popup;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (1 row) | add control (3 rows) | task rows | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    add_bar::render_add_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    status_row::render_status_row(frame, app, chunks[3]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_popup::render_confirm_popup(frame, app, area);
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, area);
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to fit
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
