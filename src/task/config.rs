//! Checklist configuration.
//!
//! Holds the user-facing texts the core hands to its ports. Hosts either
//! use a preset or deserialize a JSON document; missing fields fall back to
//! the defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::task::{
    domain::{ConfirmationTicket, TaskId},
    ports::ConfirmationPrompt,
};

/// User-facing texts of the checklist.
///
/// # Examples
///
/// ```
/// use checklist::task::config::ChecklistConfig;
///
/// let config = ChecklistConfig::default();
/// assert_eq!(config.duplicate_notice, "task already added");
///
/// let custom = ChecklistConfig::from_json_str(r#"{"duplicate_notice": "already there"}"#)
///     .expect("valid configuration");
/// assert_eq!(custom.duplicate_notice, "already there");
/// assert_eq!(custom.removal_prompt.affirm_label, "Yes");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistConfig {
    /// Notice shown when a task with the same title already exists.
    pub duplicate_notice: String,
    /// Texts of the removal confirmation dialog.
    pub removal_prompt: RemovalPromptText,
}

impl Default for ChecklistConfig {
    fn default() -> Self {
        Self {
            duplicate_notice: "task already added".to_owned(),
            removal_prompt: RemovalPromptText::default(),
        }
    }
}

impl ChecklistConfig {
    /// Brazilian Portuguese texts.
    #[must_use]
    pub fn brazilian_portuguese() -> Self {
        Self {
            duplicate_notice: "Essa tarefa já foi adicionada.".to_owned(),
            removal_prompt: RemovalPromptText {
                title: "Remover tarefa".to_owned(),
                message: "Tem certeza que você deseja remover essa tarefa?".to_owned(),
                affirm_label: "Sim".to_owned(),
                decline_label: "Não".to_owned(),
            },
        }
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the document is not valid JSON or
    /// a field has the wrong type.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Texts of the removal confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemovalPromptText {
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the button that removes the task.
    pub affirm_label: String,
    /// Label of the button that keeps the task.
    pub decline_label: String,
}

impl Default for RemovalPromptText {
    fn default() -> Self {
        Self {
            title: "Remove task".to_owned(),
            message: "Are you sure you want to remove this task?".to_owned(),
            affirm_label: "Yes".to_owned(),
            decline_label: "No".to_owned(),
        }
    }
}

impl RemovalPromptText {
    /// Builds the prompt asking to remove `task_id`.
    #[must_use]
    pub fn prompt_for(&self, ticket: ConfirmationTicket, task_id: TaskId) -> ConfirmationPrompt {
        ConfirmationPrompt {
            ticket,
            task_id,
            title: self.title.clone(),
            message: self.message.clone(),
            affirm_label: self.affirm_label.clone(),
            decline_label: self.decline_label.clone(),
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document could not be parsed.
    #[error("invalid checklist configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
