//! Recording confirmation adapter.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::task::{
    domain::ConfirmationTicket,
    ports::{ConfirmationPort, ConfirmationPrompt},
};

/// Confirmation port that keeps every prompt it is asked to display.
///
/// The host (or a test) reads the prompts back and resolves them through
/// [`Checklist::resolve_confirmation`](crate::task::services::Checklist::resolve_confirmation).
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingConfirmationPort {
    prompts: Arc<Mutex<Vec<ConfirmationPrompt>>>,
}

impl RecordingConfirmationPort {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all prompts displayed so far.
    #[must_use]
    pub fn prompts(&self) -> Vec<ConfirmationPrompt> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent prompt.
    #[must_use]
    pub fn last(&self) -> Option<ConfirmationPrompt> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    /// Returns the ticket of the most recent prompt.
    #[must_use]
    pub fn last_ticket(&self) -> Option<ConfirmationTicket> {
        self.last().map(|prompt| prompt.ticket)
    }
}

impl ConfirmationPort for RecordingConfirmationPort {
    fn request_confirmation(&self, prompt: &ConfirmationPrompt) {
        debug!(ticket = %prompt.ticket, task_id = %prompt.task_id, "confirmation requested");
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.clone());
    }
}
