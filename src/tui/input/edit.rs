use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::edit_text;

/// Inline title editing for the row in edit mode
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) => app.commit_edit(),
        (_, KeyCode::Esc) => app.cancel_edit(),
        // Delete stays available while editing
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => app.request_remove(),
        _ => {
            if let Some(field) = app.editing_row_mut().and_then(|row| row.working_mut()) {
                edit_text(field, key);
            }
        }
    }
}
