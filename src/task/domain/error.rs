//! Error types for task list mutations.

use super::TaskId;
use thiserror::Error;

/// Returned when a task is added with a title already present in the list.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("task already added: {title}")]
pub struct DuplicateTitleError {
    /// The rejected title.
    pub title: String,
}

/// Returned when a mutation references a task that is not in the list.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("task not found: {0}")]
pub struct NotFoundError(pub TaskId);
