//! Port contracts for the checklist.
//!
//! Ports describe the capabilities the host environment injects: showing a
//! notice and asking the user to confirm a removal.

pub mod confirmation;
pub mod notice;

pub use confirmation::{ConfirmationChoice, ConfirmationPort, ConfirmationPrompt};
pub use notice::{Notice, NoticePort};
