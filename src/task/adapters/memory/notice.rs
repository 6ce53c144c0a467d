//! Recording notice adapter.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

use crate::task::ports::{Notice, NoticePort};

/// Notice port that keeps every notice it is given.
///
/// Clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct RecordingNoticePort {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl RecordingNoticePort {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all notices received so far.
    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recent notice.
    #[must_use]
    pub fn last(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl NoticePort for RecordingNoticePort {
    fn notify(&self, notice: &Notice) {
        info!(message = notice.message(), "notice shown");
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
