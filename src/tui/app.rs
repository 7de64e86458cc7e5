use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{debug, info};

use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::task_ops::{Answer, RemovalRequest, TaskError, TaskList};

use super::focus::{FieldFocus, FocusTarget};
use super::input;
use super::render;
use super::row::{FocusEffect, RowController};
use super::text_field::TextField;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving between rows
    Navigate,
    /// Typing into the add control
    Add,
    /// Inline-editing the title of a row
    Edit,
    /// Waiting on a yes/no removal prompt
    Confirm,
    /// A blocking notice is shown
    Notice,
}

/// Pending removal prompt
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub request: RemovalRequest,
    /// Highlighted choice; Enter activates it
    pub selected: Answer,
    /// Mode to go back to once answered
    pub return_mode: Mode,
}

/// A blocking, dismiss-only message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub return_mode: Mode,
}

impl Notice {
    fn duplicate_title(return_mode: Mode) -> Self {
        Notice {
            title: "Task already registered".into(),
            body: "You cannot register a task with the same name".into(),
            return_mode,
        }
    }
}

/// Main application state
pub struct App {
    pub tasks: TaskList,
    /// One controller per task, in list order
    pub rows: Vec<RowController>,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub show_key_hints: bool,
    /// Index of the selected row
    pub cursor: usize,
    /// First visible row in the list area
    pub scroll_offset: usize,
    /// Text of the add control
    pub add_input: TextField,
    pub focus: FieldFocus,
    pub confirm: Option<ConfirmState>,
    pub notice: Option<Notice>,
    /// Transient message for the status row, cleared on the next key press
    pub status_message: Option<String>,
    pub show_help: bool,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App::with_tasks(TaskList::new(), config)
    }

    pub fn with_tasks(tasks: TaskList, config: &Config) -> Self {
        let mut app = App {
            tasks,
            rows: Vec::new(),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            add_input: TextField::default(),
            focus: FieldFocus::default(),
            confirm: None,
            notice: None,
            status_message: None,
            show_help: false,
        };
        app.reconcile_rows();
        app
    }

    /// Rebuild row controllers against the store's current snapshot.
    /// Existing rows (matched by id) keep their edit state; rows for removed
    /// tasks are dropped along with any focus they held.
    pub fn reconcile_rows(&mut self) {
        let mut old = std::mem::take(&mut self.rows);
        let mut rows = Vec::with_capacity(self.tasks.len());
        for task in self.tasks.tasks() {
            match old.iter().position(|r| r.id() == task.id) {
                Some(i) => {
                    let mut row = old.swap_remove(i);
                    row.sync(task);
                    rows.push(row);
                }
                None => rows.push(RowController::new(task)),
            }
        }
        for gone in old {
            self.focus.release(FocusTarget::Row(gone.id()));
        }
        self.rows = rows;
        self.clamp_cursor();
    }

    fn clamp_cursor(&mut self) {
        if self.rows.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.rows.len() - 1);
        }
    }

    pub fn cursor_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.cursor)
    }

    pub fn editing_row(&self) -> Option<&RowController> {
        self.rows.iter().find(|r| r.is_editing())
    }

    pub fn editing_row_mut(&mut self) -> Option<&mut RowController> {
        self.rows.iter_mut().find(|r| r.is_editing())
    }

    fn row_mut(&mut self, id: TaskId) -> Option<&mut RowController> {
        self.rows.iter_mut().find(|r| r.id() == id)
    }

    fn apply_focus(&mut self, id: TaskId, effect: FocusEffect) {
        let target = FocusTarget::Row(id);
        match effect {
            FocusEffect::Focus => {
                if let Some(prev) = self.focus.acquire(target) {
                    debug!(?prev, ?target, "focus moved");
                }
            }
            FocusEffect::Blur => {
                self.focus.release(target);
            }
        }
    }

    // ---------------------------------------------------------------------
    // Add control

    pub fn focus_add_input(&mut self) {
        self.focus.acquire(FocusTarget::AddInput);
        self.mode = Mode::Add;
    }

    pub fn leave_add_input(&mut self) {
        self.focus.release(FocusTarget::AddInput);
        self.mode = Mode::Navigate;
    }

    /// Submit the add control. The field is cleared only on success.
    pub fn submit_add(&mut self) {
        let title = self.add_input.text().to_string();
        match self.tasks.add(&title) {
            Ok(id) => {
                self.add_input.clear();
                self.reconcile_rows();
                if let Some(index) = self.tasks.position(id) {
                    self.cursor = index;
                }
            }
            Err(TaskError::DuplicateTitle(_)) => {
                self.notice = Some(Notice::duplicate_title(self.mode));
                self.mode = Mode::Notice;
            }
            Err(e @ TaskError::EmptyTitle) => {
                self.status_message = Some(e.to_string());
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        let return_mode = self.notice.take().map_or(Mode::Navigate, |n| n.return_mode);
        self.mode = return_mode;
    }

    // ---------------------------------------------------------------------
    // Row intents

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn jump_cursor(&mut self, to_end: bool) {
        self.cursor = if to_end {
            self.rows.len().saturating_sub(1)
        } else {
            0
        };
    }

    /// Row tap: flip done for the selected task
    pub fn toggle_cursor(&mut self) {
        let Some(id) = self.cursor_task().map(|t| t.id) else {
            return;
        };
        if self.tasks.toggle_done(id) {
            self.reconcile_rows();
        }
    }

    /// Put the selected row into edit mode. Any other row still editing is
    /// cancelled first so only one field holds focus.
    pub fn start_edit_cursor(&mut self) {
        let Some(id) = self.cursor_task().map(|t| t.id) else {
            return;
        };
        if let Some(other) = self.editing_row_mut()
            && other.id() != id
        {
            let other_id = other.id();
            if let Some(effect) = other.cancel() {
                self.apply_focus(other_id, effect);
            }
        }
        let effect = self.row_mut(id).and_then(RowController::start_edit);
        if let Some(effect) = effect {
            self.apply_focus(id, effect);
        }
        self.mode = Mode::Edit;
    }

    pub fn cancel_edit(&mut self) {
        let cancelled = self
            .editing_row_mut()
            .and_then(|row| Some((row.id(), row.cancel()?)));
        if let Some((id, effect)) = cancelled {
            self.apply_focus(id, effect);
        }
        self.mode = Mode::Navigate;
    }

    /// Commit the editing row's working title to the store
    pub fn commit_edit(&mut self) {
        let committed = self.editing_row_mut().and_then(RowController::commit);
        if let Some((intent, effect)) = committed {
            self.tasks.rename(intent.id, &intent.new_title);
            self.apply_focus(intent.id, effect);
            self.reconcile_rows();
        }
        self.mode = Mode::Navigate;
    }

    // ---------------------------------------------------------------------
    // Removal

    /// Ask for confirmation before removing a task. While editing, the row
    /// being edited is the target.
    pub fn request_remove(&mut self) {
        let id = match self.mode {
            Mode::Edit => self.editing_row().map(|r| r.id()),
            _ => self.cursor_task().map(|t| t.id),
        };
        let Some(request) = id.and_then(|id| self.tasks.request_removal(id)) else {
            return;
        };
        self.confirm = Some(ConfirmState {
            request,
            selected: Answer::No,
            return_mode: self.mode,
        });
        self.mode = Mode::Confirm;
    }

    pub fn toggle_confirm_choice(&mut self) {
        if let Some(cs) = &mut self.confirm {
            cs.selected = match cs.selected {
                Answer::No => Answer::Yes,
                Answer::Yes => Answer::No,
            };
        }
    }

    pub fn answer_confirm(&mut self, answer: Answer) {
        let Some(state) = self.confirm.take() else {
            self.mode = Mode::Navigate;
            return;
        };
        if let Some(task) = state.request.resolve(&mut self.tasks, answer) {
            info!(id = %task.id, "removed from ui");
            self.status_message = Some(format!("removed \"{}\"", task.title));
            self.reconcile_rows();
        }
        self.mode = match state.return_mode {
            Mode::Edit if self.editing_row().is_none() => Mode::Navigate,
            mode => mode,
        };
    }
}

/// Run the TUI application
pub fn run(config: &Config) -> io::Result<()> {
    let mut app = App::new(config);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(remaining = app.tasks.len(), "session ended");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
