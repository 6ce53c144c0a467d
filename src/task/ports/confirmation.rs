//! Confirmation port for destructive actions.
//!
//! Issuing a prompt and resolving it are separate events: the port only
//! displays the prompt, and the host later reports the user's choice back
//! with the prompt's ticket. A prompt dismissed without a choice is simply
//! never resolved.

use crate::task::domain::{ConfirmationTicket, TaskId};

/// Parameters of a two-choice confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    /// Ticket the host must pass back when the user chooses.
    pub ticket: ConfirmationTicket,
    /// Task the prompt is about.
    pub task_id: TaskId,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the affirmative choice.
    pub affirm_label: String,
    /// Label of the declining choice.
    pub decline_label: String,
}

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmationChoice {
    /// Proceed with the action.
    Affirm,
    /// Keep things as they are.
    Decline,
}

/// Host capability that displays confirmation dialogs.
pub trait ConfirmationPort {
    /// Displays a confirmation dialog.
    fn request_confirmation(&self, prompt: &ConfirmationPrompt);
}
