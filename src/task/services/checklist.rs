//! Checklist façade tying the store, row controllers and host ports
//! together.

use std::collections::HashMap;

use mockable::Clock;
use tracing::debug;

use crate::task::{
    config::ChecklistConfig,
    domain::{
        ChecklistView, ConfirmationTicket, DuplicateTitleError, EditSession, ItemIntent,
        NotFoundError, Task, TaskId, TaskView,
    },
    ports::{ConfirmationChoice, ConfirmationPort, Notice, NoticePort},
};

use super::{FocusEffect, RemovalOutcome, TaskItemController, TaskListStore};

/// Entry point for a rendering layer.
///
/// Owns the task store, one [`TaskItemController`] per task, and the
/// injected notice and confirmation ports. Intents are processed one at a
/// time; after each call the host re-reads [`Checklist::view`].
///
/// # Examples
///
/// ```
/// use checklist::task::{
///     adapters::memory::{RecordingConfirmationPort, RecordingNoticePort},
///     ports::ConfirmationChoice,
///     services::{Checklist, RemovalOutcome},
/// };
/// use mockable::DefaultClock;
///
/// let confirmations = RecordingConfirmationPort::new();
/// let mut checklist = Checklist::new(
///     DefaultClock,
///     RecordingNoticePort::new(),
///     confirmations.clone(),
/// );
///
/// let task = checklist.add_task("Buy milk").expect("new title");
/// assert_eq!(checklist.count(), 1);
///
/// checklist.remove_task(task.id()).expect("task exists");
/// let ticket = confirmations.last_ticket().expect("prompt shown");
/// let outcome = checklist.resolve_confirmation(ticket, ConfirmationChoice::Affirm);
///
/// assert_eq!(outcome, RemovalOutcome::Removed);
/// assert_eq!(checklist.count(), 0);
/// ```
pub struct Checklist<C, N, P>
where
    C: Clock,
    N: NoticePort,
    P: ConfirmationPort,
{
    store: TaskListStore<C>,
    controllers: HashMap<TaskId, TaskItemController>,
    notices: N,
    confirmations: P,
    config: ChecklistConfig,
}

impl<C, N, P> Checklist<C, N, P>
where
    C: Clock,
    N: NoticePort,
    P: ConfirmationPort,
{
    /// Creates an empty checklist with default texts.
    #[must_use]
    pub fn new(clock: C, notices: N, confirmations: P) -> Self {
        Self::with_config(clock, notices, confirmations, ChecklistConfig::default())
    }

    /// Creates an empty checklist with custom texts.
    #[must_use]
    pub fn with_config(clock: C, notices: N, confirmations: P, config: ChecklistConfig) -> Self {
        Self {
            store: TaskListStore::new(clock),
            controllers: HashMap::new(),
            notices,
            confirmations,
            config,
        }
    }

    /// Returns the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskListStore<C> {
        &self.store
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ChecklistConfig {
        &self.config
    }

    /// Returns the notice port.
    #[must_use]
    pub const fn notices(&self) -> &N {
        &self.notices
    }

    /// Returns the confirmation port.
    #[must_use]
    pub const fn confirmations(&self) -> &P {
        &self.confirmations
    }

    /// Returns the controller of a task row.
    #[must_use]
    pub fn controller(&self, id: TaskId) -> Option<&TaskItemController> {
        self.controllers.get(&id)
    }

    /// Returns the number of tasks.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Adds a task, showing the duplicate notice when the title is taken.
    ///
    /// # Errors
    ///
    /// Returns [`DuplicateTitleError`] after notifying the user; the list is
    /// unchanged.
    pub fn add_task(&mut self, title: impl Into<String>) -> Result<Task, DuplicateTitleError> {
        match self.store.add(title) {
            Ok(task) => {
                self.controllers
                    .insert(task.id(), TaskItemController::new(&task));
                Ok(task)
            }
            Err(err) => {
                self.notices
                    .notify(&Notice::new(self.config.duplicate_notice.as_str()));
                Err(err)
            }
        }
    }

    /// Replaces a task's title directly.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task is not in the list.
    pub fn edit_task(
        &mut self,
        id: TaskId,
        new_title: impl Into<String>,
    ) -> Result<(), NotFoundError> {
        self.store.edit(id, new_title)
    }

    /// Flips a task's done flag directly.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task is not in the list.
    pub fn toggle_task_done(&mut self, id: TaskId) -> Result<(), NotFoundError> {
        self.store.toggle_done(id)
    }

    /// Asks the user to confirm removing a task.
    ///
    /// The task stays in the list until the prompt is affirmed through
    /// [`Self::resolve_confirmation`]. Ignored while the row is editing.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task has no row.
    pub fn remove_task(&mut self, id: TaskId) -> Result<(), NotFoundError> {
        self.dispatch(id, ItemIntent::RemoveRequested).map(|_| ())
    }

    /// Routes a row intent to its controller and returns focus changes.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when the task has no row.
    pub fn dispatch(
        &mut self,
        id: TaskId,
        intent: ItemIntent,
    ) -> Result<Vec<FocusEffect>, NotFoundError> {
        let controller = self.controllers.get_mut(&id).ok_or(NotFoundError(id))?;
        Ok(controller.handle(
            intent,
            &mut self.store,
            &self.confirmations,
            &self.config.removal_prompt,
        ))
    }

    /// Applies the user's answer to a removal prompt.
    ///
    /// Unknown or superseded tickets are ignored and reported as
    /// [`RemovalOutcome::Stale`].
    pub fn resolve_confirmation(
        &mut self,
        ticket: ConfirmationTicket,
        choice: ConfirmationChoice,
    ) -> RemovalOutcome {
        let Some((task_id, controller)) = self
            .controllers
            .iter_mut()
            .find(|(_, controller)| controller.pending_removal() == Some(ticket))
        else {
            debug!(%ticket, "confirmation for unknown ticket ignored");
            return RemovalOutcome::Stale;
        };
        let removed_id = *task_id;
        let outcome = controller.resolve_removal(ticket, choice, &mut self.store);
        if outcome == RemovalOutcome::Removed {
            self.controllers.remove(&removed_id);
        }
        outcome
    }

    /// Derives the render-ready state of the checklist.
    #[must_use]
    pub fn view(&self) -> ChecklistView {
        let tasks = self
            .store
            .tasks()
            .iter()
            .enumerate()
            .map(|(row, task)| {
                self.controllers.get(&task.id()).map_or_else(
                    || TaskView::new(task, &EditSession::new(task), row),
                    |controller| TaskView::new(task, controller.session(), row),
                )
            })
            .collect();
        ChecklistView {
            count: self.store.len(),
            tasks,
        }
    }
}
