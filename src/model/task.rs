use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a task, unique for the lifetime of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    /// Create a new, not-yet-done task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with `done` flipped
    pub fn toggled(&self) -> Self {
        Task {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Copy of this task with a new title; id and done state are kept
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            ..self.clone()
        }
    }
}

/// Source of wall-clock milliseconds used to seed task ids
pub type Clock = fn() -> u64;

/// Milliseconds since the Unix epoch, clamped at zero
pub fn system_clock() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Hands out task ids derived from the creation timestamp.
///
/// Ids follow the clock, but never repeat: when two tasks are created in the
/// same millisecond (or the clock steps backwards) the next id is bumped to
/// one past the last id issued.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    clock: Clock,
    last: Option<u64>,
}

impl IdGenerator {
    pub fn new(clock: Clock) -> Self {
        IdGenerator { clock, last: None }
    }

    pub fn next_id(&mut self) -> TaskId {
        let now = (self.clock)();
        let id = match self.last {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last = Some(id);
        TaskId(id)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::new(system_clock)
    }
}
