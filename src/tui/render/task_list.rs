use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::tui::focus::FocusTarget;
use crate::tui::row::RowController;
use crate::util::unicode;

const EDIT_ICON: &str = "\u{270E}"; // ✎
const CANCEL_ICON: &str = "\u{2715}"; // ✕
const DELETE_ICON: &str = "\u{2716}"; // ✖

/// Cells used by everything on a row except the title:
/// " [x] " before it and " ✎ │ ✖ " after it
const ROW_CHROME: usize = 12;
const TITLE_COL: u16 = 5;

/// Marker shown before the title
fn done_marker(done: bool) -> &'static str {
    if done { "[x]" } else { "[ ]" }
}

/// Keep the cursor row inside the visible window
fn adjust_scroll(app: &mut App, height: usize) {
    if height == 0 {
        return;
    }
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
}

/// Render the task rows
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;

    if app.rows.is_empty() {
        let empty = Paragraph::new(" No tasks yet. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    adjust_scroll(app, height);

    let title_w = (area.width as usize).saturating_sub(ROW_CHROME);
    let mut lines: Vec<Line> = Vec::new();
    let mut cursor_pos = None;

    let visible = app
        .tasks
        .tasks()
        .iter()
        .zip(&app.rows)
        .enumerate()
        .skip(app.scroll_offset)
        .take(height);

    for (i, (task, row)) in visible {
        let is_cursor = i == app.cursor;
        let (line, cursor_col) = task_row_line(app, task, row, is_cursor, title_w);
        if let Some(col) = cursor_col
            && app.focus.is_focused(FocusTarget::Row(row.id()))
        {
            let y = area.y + (i - app.scroll_offset) as u16;
            cursor_pos = Some((area.x + TITLE_COL + col as u16, y));
        }
        lines.push(line);
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);

    if let Some(pos) = cursor_pos {
        frame.set_cursor_position(pos);
    }
}

/// Build one row. Returns the line and, while editing, the cursor column
/// within the title.
fn task_row_line<'a>(
    app: &App,
    task: &Task,
    row: &'a RowController,
    is_cursor: bool,
    title_w: usize,
) -> (Line<'a>, Option<usize>) {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let marker_color = if task.done { theme.green } else { theme.dim };
    let mut spans = vec![
        Span::styled(" ", base),
        Span::styled(done_marker(task.done), base.fg(marker_color)),
        Span::styled(" ", base),
    ];

    let (title, cursor_col) = if row.is_editing() {
        let (visible, col) = row.working().visible_window(title_w);
        (visible.to_string(), Some(col))
    } else {
        (unicode::truncate_to_width(row.working().text(), title_w), None)
    };
    let mut title_style = base.fg(theme.title_color(task.done));
    if task.done {
        title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
    }
    if row.is_editing() {
        title_style = title_style
            .fg(theme.text_bright)
            .add_modifier(Modifier::UNDERLINED);
    }
    let pad = title_w.saturating_sub(unicode::display_width(&title));
    spans.push(Span::styled(title, title_style));
    spans.push(Span::styled(" ".repeat(pad), base));

    // Affordances are dimmed while editing; delete still works
    let dimmed = row.affordances_dimmed();
    let (edit_icon, edit_color, delete_color) = if dimmed {
        (CANCEL_ICON, theme.dim, theme.dim)
    } else {
        (EDIT_ICON, theme.text, theme.red)
    };
    spans.push(Span::styled(" ", base));
    spans.push(Span::styled(edit_icon, base.fg(edit_color)));
    spans.push(Span::styled(" \u{2502} ", base.fg(theme.dim)));
    spans.push(Span::styled(DELETE_ICON, base.fg(delete_color)));
    spans.push(Span::styled(" ", base));

    (Line::from(spans), cursor_col)
}
