//! Identifier types for the task domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of a task in a checklist.
///
/// Values are millisecond timestamps taken when the task was added, so
/// identifiers order tasks by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a task identifier from a millisecond timestamp.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Issues strictly increasing task identifiers from clock readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskIdSequence {
    last: Option<TaskId>,
}

impl TaskIdSequence {
    /// Creates a sequence that has not issued any identifier yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns the identifier for a task created at `now`.
    ///
    /// A reading that does not advance past the last issued identifier (two
    /// adds within one millisecond, or a clock stepping backwards) yields
    /// `last + 1` instead.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let millis = now.timestamp_millis();
        let id = match self.last {
            Some(last) if millis <= last.0 => TaskId(last.0.saturating_add(1)),
            _ => TaskId(millis),
        };
        self.last = Some(id);
        id
    }

    /// Returns the most recently issued identifier.
    #[must_use]
    pub const fn last_issued(&self) -> Option<TaskId> {
        self.last
    }
}

/// Identifier of one outstanding removal confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfirmationTicket(Uuid);

impl ConfirmationTicket {
    /// Creates a new random ticket.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a ticket from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ConfirmationTicket {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConfirmationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
