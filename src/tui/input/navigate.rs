use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    // Help overlay intercepts ? and Esc, swallows everything else
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.jump_cursor(false),
        KeyCode::Char('G') | KeyCode::End => app.jump_cursor(true),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_cursor(),
        KeyCode::Char('e') => app.start_edit_cursor(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_remove(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_add_input(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::super::handle_key;
    use super::super::tests::{app_with, key};
    use crate::tui::app::Mode;
    use crossterm::event::KeyCode;

    #[test]
    fn test_cursor_keys() {
        let mut app = app_with(&["a", "b", "c"]);
        handle_key(&mut app, key(KeyCode::Char('j')));
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, key(KeyCode::Down));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, key(KeyCode::Char('k')));
        assert_eq!(app.cursor, 1);
        handle_key(&mut app, key(KeyCode::Char('g')));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::Char('G')));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_enter_toggles_twice_back() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.tasks.tasks()[0].done);
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.tasks.tasks()[0].done);
    }

    #[test]
    fn test_keys_on_empty_list_are_harmless() {
        let mut app = app_with(&[]);
        for code in [
            KeyCode::Char('j'),
            KeyCode::Char(' '),
            KeyCode::Char('e'),
            KeyCode::Char('d'),
        ] {
            handle_key(&mut app, key(code));
        }
        assert!(app.tasks.is_empty());
        assert_eq!(app.mode, Mode::Navigate);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_delete_key_opens_prompt() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Delete));
        assert_eq!(app.mode, Mode::Confirm);
    }
}
