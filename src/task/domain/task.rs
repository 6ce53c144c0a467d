//! Checklist task entity.

use super::TaskId;
use serde::Serialize;

/// A single checklist entry.
///
/// Tasks are only ever mutated through the owning
/// [`TaskList`](super::TaskList).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: TaskId,
    title: String,
    done: bool,
}

impl Task {
    /// Creates a pending task.
    pub(crate) const fn new(id: TaskId, title: String) -> Self {
        Self {
            id,
            title,
            done: false,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the committed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns whether the task is marked done.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    pub(crate) fn rename(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) const fn toggle_done(&mut self) {
        self.done = !self.done;
    }
}
