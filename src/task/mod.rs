//! Checklist task management.
//!
//! The ordered task list, the per-row edit-mode state machine, and the
//! confirmation-gated removal flow. Rendering is left to the host, which
//! forwards intents and reads back derived view state. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - User-facing texts in [`config`]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
