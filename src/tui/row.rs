//! Inline-edit state for a single task row.
//!
//! A row is either viewing its task or editing a working copy of the title.
//! Transitions report a [`FocusEffect`] on the edge only; re-syncing a row
//! with a fresh task snapshot never does.

use crate::model::task::{Task, TaskId};

use super::text_field::TextField;

/// Whether a row is showing its committed title or editing a working copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Viewing,
    Editing,
}

/// Focus change to apply to the row's text field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusEffect {
    Focus,
    Blur,
}

/// Request to rename a task, produced by committing an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameIntent {
    pub id: TaskId,
    pub new_title: String,
}

#[derive(Debug, Clone)]
pub struct RowController {
    id: TaskId,
    committed: String,
    working: TextField,
    state: RowState,
}

impl RowController {
    pub fn new(task: &Task) -> Self {
        RowController {
            id: task.id,
            committed: task.title.clone(),
            working: TextField::with_text(&task.title),
            state: RowState::Viewing,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn state(&self) -> RowState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == RowState::Editing
    }

    /// Committed title as last seen from the store
    pub fn committed_title(&self) -> &str {
        &self.committed
    }

    /// Text shown in the row's field (the working copy while editing)
    pub fn working(&self) -> &TextField {
        &self.working
    }

    /// Mutable access to the working text; `None` unless editing
    pub fn working_mut(&mut self) -> Option<&mut TextField> {
        match self.state {
            RowState::Editing => Some(&mut self.working),
            RowState::Viewing => None,
        }
    }

    /// Edit and delete affordances are dimmed (never disabled) while editing
    pub fn affordances_dimmed(&self) -> bool {
        self.is_editing()
    }

    pub fn start_edit(&mut self) -> Option<FocusEffect> {
        if self.is_editing() {
            return None;
        }
        self.working.set(&self.committed);
        self.state = RowState::Editing;
        Some(FocusEffect::Focus)
    }

    /// Drop the working copy. The store is never touched.
    pub fn cancel(&mut self) -> Option<FocusEffect> {
        if !self.is_editing() {
            return None;
        }
        self.working.set(&self.committed);
        self.state = RowState::Viewing;
        Some(FocusEffect::Blur)
    }

    /// Leave edit mode and hand back the rename to apply. The working text
    /// is kept as-is rather than re-read from the store.
    pub fn commit(&mut self) -> Option<(RenameIntent, FocusEffect)> {
        if !self.is_editing() {
            return None;
        }
        self.state = RowState::Viewing;
        let intent = RenameIntent {
            id: self.id,
            new_title: self.working.text().to_string(),
        };
        Some((intent, FocusEffect::Blur))
    }

    /// Refresh from the store's current snapshot of this row's task.
    pub fn sync(&mut self, task: &Task) {
        debug_assert_eq!(task.id, self.id);
        if self.committed != task.title {
            self.committed.clone_from(&task.title);
            if !self.is_editing() {
                self.working.set(&task.title);
            }
        }
    }
}
