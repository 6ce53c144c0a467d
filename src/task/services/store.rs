//! Task list store: the single owner of the checklist's tasks.

use mockable::Clock;
use tracing::{debug, info, warn};

use crate::task::domain::{
    DuplicateTitleError, NotFoundError, Task, TaskId, TaskIdSequence, TaskList,
};

/// Owns the ordered task collection and applies every mutation to it.
///
/// Identifiers come from the injected clock's millisecond reading at the
/// moment a task is added.
#[derive(Debug, Clone)]
pub struct TaskListStore<C>
where
    C: Clock,
{
    list: TaskList,
    ids: TaskIdSequence,
    clock: C,
}

impl<C> TaskListStore<C>
where
    C: Clock,
{
    /// Creates an empty store.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            list: TaskList::new(),
            ids: TaskIdSequence::new(),
            clock,
        }
    }

    /// Adds a pending task at the end of the list.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateTitleError`] when a task with exactly the same
    /// title exists; nothing is changed in that case.
    pub fn add(&mut self, title: impl Into<String>) -> Result<Task, DuplicateTitleError> {
        let clock = &self.clock;
        let ids = &mut self.ids;
        let result = self.list.add(title.into(), || ids.next_id(clock.utc()));
        match &result {
            Ok(task) => info!(task_id = %task.id(), count = self.list.len(), "task added"),
            Err(err) => warn!(title = %err.title, "duplicate task title rejected"),
        }
        result
    }

    /// Replaces a task's title. Titles are not checked for duplicates here.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task is not in the list.
    pub fn edit(
        &mut self,
        id: TaskId,
        new_title: impl Into<String>,
    ) -> Result<(), NotFoundError> {
        self.list.rename(id, new_title.into())?;
        debug!(task_id = %id, "task title edited");
        Ok(())
    }

    /// Flips a task's done flag.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task is not in the list.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), NotFoundError> {
        self.list.toggle_done(id)?;
        debug!(task_id = %id, "task done flag toggled");
        Ok(())
    }

    /// Removes a task. Removing an absent task does nothing.
    pub fn remove(&mut self, id: TaskId) {
        if self.list.remove(id).is_some() {
            info!(task_id = %id, count = self.list.len(), "task removed");
        }
    }

    /// Returns the task list.
    #[must_use]
    pub const fn list(&self) -> &TaskList {
        &self.list
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.list.get(id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` when there are no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}
