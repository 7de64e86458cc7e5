use tracing::{debug, info, warn};

use crate::model::task::{Clock, IdGenerator, Task, TaskId};

/// Error type for task operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("a task named \"{0}\" is already registered")]
    DuplicateTitle(String),
    #[error("task title cannot be empty")]
    EmptyTitle,
}

/// The user's answer to a removal prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    No,
    Yes,
}

/// The ordered, in-memory collection of tasks.
///
/// All mutation goes through the named intents below; every successful
/// intent replaces the affected task with a new record carrying the same id.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskList {
    pub fn new() -> Self {
        TaskList::default()
    }

    /// Build a list whose ids are seeded from `clock` instead of the wall clock
    pub fn with_clock(clock: Clock) -> Self {
        TaskList {
            tasks: Vec::new(),
            ids: IdGenerator::new(clock),
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Append a new task. Rejected when the title is blank or exactly
    /// matches an existing title; the list is untouched in that case.
    pub fn add(&mut self, title: &str) -> Result<TaskId, TaskError> {
        if title.trim().is_empty() {
            warn!("rejected task with empty title");
            return Err(TaskError::EmptyTitle);
        }
        if self.tasks.iter().any(|t| t.title == title) {
            warn!(title, "rejected duplicate task title");
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }

        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, title));
        info!(%id, title, count = self.tasks.len(), "task added");
        Ok(id)
    }

    /// Flip the done flag of the matching task. Returns false if `id` is absent.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        *slot = slot.toggled();
        debug!(%id, done = slot.done, "task toggled");
        true
    }

    /// Replace the title of the matching task. No uniqueness check is made
    /// against other titles. Returns false if `id` is absent.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> bool {
        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return false;
        };
        *slot = slot.retitled(new_title);
        debug!(%id, title = new_title, "task renamed");
        true
    }

    /// Begin the confirmation-gated removal of `id`.
    pub fn request_removal(&self, id: TaskId) -> Option<RemovalRequest> {
        self.get(id).map(|task| RemovalRequest {
            id,
            title: task.title.clone(),
        })
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        info!(%id, title = %task.title, count = self.tasks.len(), "task removed");
        Some(task)
    }
}

/// A removal waiting on the user's answer. Consumed when resolved, so a
/// single prompt can remove at most one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    id: TaskId,
    title: String,
}

impl RemovalRequest {
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Title of the task at the time the prompt was raised
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Apply the user's answer. Only `Answer::Yes` touches the list.
    pub fn resolve(self, list: &mut TaskList, answer: Answer) -> Option<Task> {
        match answer {
            Answer::No => {
                debug!(id = %self.id, "removal declined");
                None
            }
            Answer::Yes => list.remove(self.id),
        }
    }
}
