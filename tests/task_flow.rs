//! End-to-end walkthroughs of the task list and row editing, driven the
//! way the TUI drives them: key events into an `App`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use taskpad::model::Config;
use taskpad::ops::task_ops::{Answer, TaskError, TaskList};
use taskpad::tui::app::{App, Mode};
use taskpad::tui::input::handle_key;

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn titles(app: &App) -> Vec<&str> {
    app.tasks.tasks().iter().map(|t| t.title.as_str()).collect()
}

#[test]
fn buy_milk_scenario_through_the_store() {
    let mut list = TaskList::new();
    let id = list.add("Buy milk").unwrap();
    assert_eq!(list.len(), 1);
    assert!(!list.get(id).unwrap().done);

    assert_eq!(
        list.add("Buy milk"),
        Err(TaskError::DuplicateTitle("Buy milk".into()))
    );
    assert_eq!(list.len(), 1);

    list.toggle_done(id);
    assert!(list.get(id).unwrap().done);

    let request = list.request_removal(id).unwrap();
    assert!(request.resolve(&mut list, Answer::Yes).is_some());
    assert!(list.is_empty());
}

#[test]
fn buy_milk_scenario_through_the_keyboard() {
    let mut app = App::new(&Config::default());

    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(titles(&app), vec!["Buy milk"]);

    type_str(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.mode, Mode::Notice);
    assert_eq!(app.tasks.len(), 1);
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Char(' '));
    assert!(app.tasks.tasks()[0].done);

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert!(app.tasks.is_empty());
}

#[test]
fn declined_removal_keeps_everything() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    for title in ["one", "two", "three"] {
        type_str(&mut app, title);
        press(&mut app, KeyCode::Enter);
    }
    press(&mut app, KeyCode::Esc);
    let before = app.tasks.tasks().to_vec();

    press(&mut app, KeyCode::Char('k'));
    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.tasks.tasks(), before.as_slice());

    press(&mut app, KeyCode::Char('d'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(titles(&app), vec!["one", "three"]);
}

#[test]
fn edit_cancel_then_commit() {
    let mut app = App::new(&Config::default());
    press(&mut app, KeyCode::Char('a'));
    type_str(&mut app, "Walk dog");
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    let id = app.tasks.tasks()[0].id;

    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, " twice");
    press(&mut app, KeyCode::Esc);
    assert_eq!(titles(&app), vec!["Walk dog"]);

    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, " twice");
    press(&mut app, KeyCode::Enter);

    let task = app.tasks.get(id).unwrap();
    assert_eq!(task.title, "Walk dog twice");
    assert!(task.done);
    assert_eq!(app.mode, Mode::Navigate);
    assert_eq!(app.focus.holder(), None);
}
