//! Per-row controller driving an [`EditSession`] against the store.

use mockable::Clock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::task::{
    config::RemovalPromptText,
    domain::{
        ConfirmationTicket, EditMode, EditSession, ItemEffect, ItemIntent, Task, TaskId,
        Transition,
    },
    ports::{ConfirmationChoice, ConfirmationPort},
};

use super::TaskListStore;

/// Focus change the rendering layer applies to the row's title field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusEffect {
    /// Focus the title field.
    Focus,
    /// Blur the title field.
    Blur,
}

/// Result of resolving a removal confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalOutcome {
    /// The user affirmed and the task was removed.
    Removed,
    /// The user declined; the task is untouched.
    Declined,
    /// The ticket is not the row's outstanding prompt.
    Stale,
}

/// Interaction controller of one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItemController {
    session: EditSession,
    pending_removal: Option<ConfirmationTicket>,
}

impl TaskItemController {
    /// Creates a controller in viewing mode.
    #[must_use]
    pub fn new(task: &Task) -> Self {
        Self {
            session: EditSession::new(task),
            pending_removal: None,
        }
    }

    /// Returns the identifier of the controlled task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.session.task_id()
    }

    /// Returns the edit session.
    #[must_use]
    pub const fn session(&self) -> &EditSession {
        &self.session
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.session.mode()
    }

    /// Returns the ticket of the outstanding removal prompt, if any.
    #[must_use]
    pub const fn pending_removal(&self) -> Option<ConfirmationTicket> {
        self.pending_removal
    }

    /// Handles one intent and returns the focus changes to apply.
    ///
    /// Commits and toggles go straight to `store`. A removal request only
    /// displays a prompt; the task is removed later through
    /// [`Self::resolve_removal`]. A commit for a task that has disappeared
    /// is dropped and the row still returns to viewing.
    pub fn handle<C, P>(
        &mut self,
        intent: ItemIntent,
        store: &mut TaskListStore<C>,
        confirmations: &P,
        prompt: &RemovalPromptText,
    ) -> Vec<FocusEffect>
    where
        C: Clock,
        P: ConfirmationPort + ?Sized,
    {
        let task_id = self.task_id();
        let committed_title = store.get(task_id).map_or_else(
            || self.session.buffered_title().to_owned(),
            |task| task.title().to_owned(),
        );
        let Transition { next, effects } = self.session.apply(intent, &committed_title);
        self.session = next;

        let mut focus = Vec::new();
        for effect in effects {
            match effect {
                ItemEffect::Focus => focus.push(FocusEffect::Focus),
                ItemEffect::Blur => focus.push(FocusEffect::Blur),
                ItemEffect::CommitTitle(title) => {
                    if let Err(err) = store.edit(task_id, title) {
                        warn!(%err, "title commit dropped");
                    }
                }
                ItemEffect::ToggleDone => {
                    if let Err(err) = store.toggle_done(task_id) {
                        warn!(%err, "toggle dropped");
                    }
                }
                ItemEffect::RequestRemoval => self.request_removal(confirmations, prompt),
            }
        }
        focus
    }

    /// Applies the user's answer to the outstanding removal prompt.
    ///
    /// Only an affirmative answer to the current ticket removes the task.
    pub fn resolve_removal<C>(
        &mut self,
        ticket: ConfirmationTicket,
        choice: ConfirmationChoice,
        store: &mut TaskListStore<C>,
    ) -> RemovalOutcome
    where
        C: Clock,
    {
        if self.pending_removal != Some(ticket) {
            debug!(%ticket, task_id = %self.task_id(), "stale confirmation ignored");
            return RemovalOutcome::Stale;
        }
        self.pending_removal = None;
        match choice {
            ConfirmationChoice::Affirm => {
                store.remove(self.task_id());
                RemovalOutcome::Removed
            }
            ConfirmationChoice::Decline => {
                debug!(task_id = %self.task_id(), "removal declined");
                RemovalOutcome::Declined
            }
        }
    }

    fn request_removal<P>(&mut self, confirmations: &P, prompt: &RemovalPromptText)
    where
        P: ConfirmationPort + ?Sized,
    {
        let ticket = ConfirmationTicket::new();
        if let Some(previous) = self.pending_removal.replace(ticket) {
            debug!(%previous, "outstanding removal prompt superseded");
        }
        confirmations.request_confirmation(&prompt.prompt_for(ticket, self.task_id()));
    }
}
