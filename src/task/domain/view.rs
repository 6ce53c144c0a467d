//! Derived view state for rendering layers.

use super::{EditMode, EditSession, Task, TaskId};
use serde::Serialize;

/// Render-ready state of one task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskView {
    /// Task identifier.
    pub id: TaskId,
    /// Title to display: the edit buffer while editing, else the committed
    /// title.
    pub title: String,
    /// Whether the task is done.
    pub done: bool,
    /// Current row mode.
    pub mode: EditMode,
    /// Zero-based position in the list.
    pub row: usize,
    /// Whether the row carries the alternate-row decoration (even rows).
    pub striped: bool,
    /// Whether the title field accepts input.
    pub title_editable: bool,
    /// Whether tapping the row toggles completion.
    pub toggle_enabled: bool,
    /// Whether the delete control is shown.
    pub remove_visible: bool,
}

impl TaskView {
    /// Builds the view of a task at a list position.
    #[must_use]
    pub fn new(task: &Task, session: &EditSession, row: usize) -> Self {
        let editing = session.mode().is_editing();
        Self {
            id: task.id(),
            title: session.displayed_title(task.title()).to_owned(),
            done: task.is_done(),
            mode: session.mode(),
            row,
            striped: row.is_multiple_of(2),
            title_editable: editing,
            toggle_enabled: !editing,
            remove_visible: !editing,
        }
    }
}

/// Render-ready state of the whole checklist.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChecklistView {
    /// Number of tasks, shown in the header counter.
    pub count: usize,
    /// Rows in display order.
    pub tasks: Vec<TaskView>,
}

impl ChecklistView {
    /// Finds the row for a task.
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&TaskView> {
        self.tasks.iter().find(|view| view.id == id)
    }
}
