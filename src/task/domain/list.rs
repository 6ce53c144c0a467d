//! Ordered task collection.

use super::{DuplicateTitleError, NotFoundError, Task, TaskId};
use serde::Serialize;

/// Ordered checklist tasks.
///
/// New tasks are appended; editing and toggling keep positions, and removal
/// keeps the relative order of the remaining tasks. Titles are unique at
/// the moment a task is added. Renaming does not re-check uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the tasks in display order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when the list holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with exactly this title exists.
    ///
    /// The comparison is case-sensitive and does not trim whitespace.
    #[must_use]
    pub fn contains_title(&self, title: &str) -> bool {
        self.tasks.iter().any(|task| task.title() == title)
    }

    /// Appends a new pending task.
    ///
    /// `next_id` is only called once the title has been accepted, so a
    /// rejected add never consumes an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateTitleError`] when the title is already present;
    /// the list is left unchanged.
    pub fn add(
        &mut self,
        title: String,
        next_id: impl FnOnce() -> TaskId,
    ) -> Result<Task, DuplicateTitleError> {
        if self.contains_title(&title) {
            return Err(DuplicateTitleError { title });
        }
        let task = Task::new(next_id(), title);
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replaces the title of a task in place.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no task has the identifier.
    pub fn rename(&mut self, id: TaskId, title: String) -> Result<(), NotFoundError> {
        self.find_mut(id)?.rename(title);
        Ok(())
    }

    /// Flips the done flag of a task.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when no task has the identifier.
    pub fn toggle_done(&mut self, id: TaskId) -> Result<(), NotFoundError> {
        self.find_mut(id)?.toggle_done();
        Ok(())
    }

    /// Removes a task, returning it if it was present.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|task| task.id() == id)?;
        Some(self.tasks.remove(position))
    }

    fn find_mut(&mut self, id: TaskId) -> Result<&mut Task, NotFoundError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(NotFoundError(id))
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}
