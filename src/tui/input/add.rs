use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

use super::edit_text;

pub(super) fn handle_add(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_add(),
        KeyCode::Esc => app.leave_add_input(),
        _ => {
            edit_text(&mut app.add_input, key);
        }
    }
}
