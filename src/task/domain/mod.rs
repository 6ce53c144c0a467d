//! Domain model for the checklist.
//!
//! Tasks, their ordered list, and the per-row edit session state machine.
//! Nothing here performs I/O or reads the clock directly.

mod edit_session;
mod error;
mod ids;
mod list;
mod task;
mod view;

pub use edit_session::{EditMode, EditSession, ItemEffect, ItemIntent, Transition};
pub use error::{DuplicateTitleError, NotFoundError};
pub use ids::{ConfirmationTicket, TaskId, TaskIdSequence};
pub use list::TaskList;
pub use task::Task;
pub use view::{ChecklistView, TaskView};
