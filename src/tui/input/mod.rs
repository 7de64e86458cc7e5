mod add;
mod confirm;
mod edit;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::text_field::TextField;

use add::handle_add;
use confirm::{handle_confirm, handle_notice};
use edit::handle_edit;
use navigate::handle_navigate;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Add => handle_add(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Notice => handle_notice(app, key),
    }
}

/// Handle a bracketed paste. Only the focused text field receives it.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.mode {
        Mode::Add => app.add_input.insert_str(text),
        Mode::Edit => {
            if let Some(field) = app.editing_row_mut().and_then(|row| row.working_mut()) {
                field.insert_str(text);
            }
        }
        _ => {}
    }
}

/// Shared line-editing keys. Returns false if the key isn't an editing key.
fn edit_text(field: &mut TextField, key: KeyEvent) -> bool {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => field.insert_char(c),
        (_, KeyCode::Backspace) => field.backspace(),
        (_, KeyCode::Delete) => field.delete(),
        (_, KeyCode::Left) => field.move_left(),
        (_, KeyCode::Right) => field.move_right(),
        (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => field.move_home(),
        (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => field.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Config;
    use crate::ops::task_ops::TaskList;
    use pretty_assertions::assert_eq;

    pub(super) fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub(super) fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub(super) fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    pub(super) fn app_with(titles: &[&str]) -> App {
        let mut tasks = TaskList::new();
        for title in titles {
            tasks.add(title).unwrap();
        }
        App::with_tasks(tasks, &Config::default())
    }

    fn titles(app: &App) -> Vec<String> {
        app.tasks.tasks().iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Edit);
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_key_press_clears_status_message() {
        let mut app = app_with(&["a"]);
        app.status_message = Some("hello".into());
        handle_key(&mut app, key(KeyCode::Char('j')));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_paste_goes_to_focused_field() {
        let mut app = app_with(&["a"]);
        handle_paste(&mut app, "ignored");
        assert!(app.add_input.is_empty());

        handle_key(&mut app, key(KeyCode::Char('a')));
        handle_paste(&mut app, "Buy\nmilk");
        assert_eq!(app.add_input.text(), "Buy milk");

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char('e')));
        handle_paste(&mut app, "!");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(titles(&app), vec!["a!"]);
    }

    #[test]
    fn test_buy_milk_by_keyboard() {
        let mut app = app_with(&[]);

        handle_key(&mut app, key(KeyCode::Char('a')));
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(titles(&app), vec!["Buy milk"]);

        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Notice);
        assert_eq!(app.tasks.len(), 1);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode, Mode::Add);

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.tasks.tasks()[0].done);

        handle_key(&mut app, key(KeyCode::Char('d')));
        assert_eq!(app.mode, Mode::Confirm);
        handle_key(&mut app, key(KeyCode::Char('y')));
        assert!(app.tasks.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
    }
}
