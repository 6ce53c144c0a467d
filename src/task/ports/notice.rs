//! Notice port for transient user-facing messages.

/// A message shown to the user without asking for a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
}

impl Notice {
    /// Creates a notice with the given text.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the notice text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Host capability that displays notices.
pub trait NoticePort {
    /// Shows a notice to the user.
    fn notify(&self, notice: &Notice);
}
