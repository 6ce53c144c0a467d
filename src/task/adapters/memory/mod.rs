//! In-memory port adapters that record what the core asked the host to do.
//!
//! Headless hosts and tests use these to inspect notices and prompts and to
//! answer prompts later.

mod confirmation;
mod notice;

pub use confirmation::RecordingConfirmationPort;
pub use notice::RecordingNoticePort;
