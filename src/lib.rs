//! Checklist: task list state and per-row interaction core.
//!
//! This crate holds the state behind a mobile checklist screen: an ordered
//! list of tasks that can be added, renamed, completed and removed, and the
//! per-row edit mode that decides when typed titles are committed or
//! discarded and when a removal needs the user's confirmation. It renders
//! nothing; a host forwards user intents in and reads derived view state
//! back out.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure state and transitions with no host dependencies
//! - **Ports**: Traits for the host capabilities the core calls (notices,
//!   confirmation dialogs)
//! - **Adapters**: Concrete port implementations
//! - **Services**: The task store, row controllers and the checklist façade
//!
//! # Modules
//!
//! - [`task`]: Task list, edit sessions and confirmation-gated removal

pub mod task;
