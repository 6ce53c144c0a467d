//! Application services for the checklist.

mod checklist;
mod item_controller;
mod store;

pub use checklist::Checklist;
pub use item_controller::{FocusEffect, RemovalOutcome, TaskItemController};
pub use store::TaskListStore;
