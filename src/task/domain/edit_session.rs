//! Per-item edit-mode state machine.
//!
//! Each rendered task row owns one [`EditSession`]. Intents raised by the
//! rendering layer are folded into the session by [`EditSession::apply`],
//! which returns the next session together with the effects the caller has
//! to carry out. The session never touches the task list or an input widget
//! itself.

use super::{Task, TaskId};
use serde::{Deserialize, Serialize};

/// Interaction mode of a task row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditMode {
    /// The committed title is shown and row controls are active.
    #[default]
    Viewing,
    /// The title field holds a local buffer being composed.
    Editing,
}

impl EditMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Viewing => "viewing",
            Self::Editing => "editing",
        }
    }

    /// Returns `true` in [`EditMode::Editing`].
    #[must_use]
    pub const fn is_editing(self) -> bool {
        matches!(self, Self::Editing)
    }
}

/// User intent targeting one task row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemIntent {
    /// Edit/cancel toggle pressed.
    RequestEdit,
    /// Title field text changed.
    TitleChanged(String),
    /// Title field submitted.
    SubmitEdit,
    /// Row tapped to flip completion.
    ToggleDone,
    /// Delete control pressed.
    RemoveRequested,
}

/// Effect produced by a transition, to be applied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemEffect {
    /// Move input focus to the title field.
    Focus,
    /// Release input focus from the title field.
    Blur,
    /// Commit this title to the task.
    CommitTitle(String),
    /// Flip the task's done flag.
    ToggleDone,
    /// Ask the user to confirm removing the task.
    RequestRemoval,
}

/// Result of applying an intent to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Session state after the intent.
    pub next: EditSession,
    /// Effects to apply, in order.
    pub effects: Vec<ItemEffect>,
}

/// Transient edit state of one task row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditSession {
    task_id: TaskId,
    mode: EditMode,
    buffered_title: String,
}

impl EditSession {
    /// Creates a viewing session for a task.
    #[must_use]
    pub fn new(task: &Task) -> Self {
        Self {
            task_id: task.id(),
            mode: EditMode::Viewing,
            buffered_title: task.title().to_owned(),
        }
    }

    /// Returns the identifier of the task this session belongs to.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the current mode.
    #[must_use]
    pub const fn mode(&self) -> EditMode {
        self.mode
    }

    /// Returns the buffered title.
    #[must_use]
    pub fn buffered_title(&self) -> &str {
        &self.buffered_title
    }

    /// Returns the title a row should display: the buffer while editing,
    /// otherwise the committed title.
    #[must_use]
    pub fn displayed_title<'a>(&'a self, committed_title: &'a str) -> &'a str {
        if self.mode.is_editing() {
            &self.buffered_title
        } else {
            committed_title
        }
    }

    /// Applies an intent, given the task's current committed title.
    ///
    /// Intents that are not valid in the current mode leave the session
    /// unchanged and produce no effects.
    #[must_use]
    pub fn apply(&self, intent: ItemIntent, committed_title: &str) -> Transition {
        match (self.mode, intent) {
            (EditMode::Viewing, ItemIntent::RequestEdit) => self.move_to(
                EditMode::Editing,
                committed_title.to_owned(),
                vec![ItemEffect::Focus],
            ),
            (EditMode::Editing, ItemIntent::RequestEdit) => self.move_to(
                EditMode::Viewing,
                committed_title.to_owned(),
                vec![ItemEffect::Blur],
            ),
            (EditMode::Editing, ItemIntent::SubmitEdit) => {
                let title = self.buffered_title.clone();
                self.move_to(
                    EditMode::Viewing,
                    title.clone(),
                    vec![ItemEffect::CommitTitle(title), ItemEffect::Blur],
                )
            }
            (EditMode::Editing, ItemIntent::TitleChanged(text)) => {
                self.move_to(EditMode::Editing, text, Vec::new())
            }
            (EditMode::Viewing, ItemIntent::ToggleDone) => self.stay(vec![ItemEffect::ToggleDone]),
            (EditMode::Viewing, ItemIntent::RemoveRequested) => {
                self.stay(vec![ItemEffect::RequestRemoval])
            }
            (
                EditMode::Viewing,
                ItemIntent::TitleChanged(_) | ItemIntent::SubmitEdit,
            )
            | (EditMode::Editing, ItemIntent::ToggleDone | ItemIntent::RemoveRequested) => {
                self.stay(Vec::new())
            }
        }
    }

    fn move_to(
        &self,
        mode: EditMode,
        buffered_title: String,
        effects: Vec<ItemEffect>,
    ) -> Transition {
        Transition {
            next: Self {
                task_id: self.task_id,
                mode,
                buffered_title,
            },
            effects,
        }
    }

    fn stay(&self, effects: Vec<ItemEffect>) -> Transition {
        Transition {
            next: self.clone(),
            effects,
        }
    }
}
