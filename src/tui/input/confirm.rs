use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops::Answer;
use crate::tui::app::App;

/// Yes/No removal prompt: nothing else gets through until it's answered
pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.answer_confirm(Answer::Yes),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('q') | KeyCode::Esc => {
            app.answer_confirm(Answer::No)
        }
        KeyCode::Left
        | KeyCode::Right
        | KeyCode::Tab
        | KeyCode::BackTab
        | KeyCode::Char('h')
        | KeyCode::Char('l') => app.toggle_confirm_choice(),
        KeyCode::Enter => {
            let selected = app.confirm.as_ref().map_or(Answer::No, |cs| cs.selected);
            app.answer_confirm(selected);
        }
        _ => {}
    }
}

pub(super) fn handle_notice(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
        app.dismiss_notice();
    }
}
