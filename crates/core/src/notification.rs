//! User-facing notification model.
//!
//! The client shows at most one pending message at a time; pushing a new
//! notification replaces whatever was there. This mirrors the single-slot
//! snackbar the UI layer renders.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Holder for the single pending notification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot(Option<Notification>);

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending notification, if any.
    pub fn push(&mut self, notification: Notification) {
        self.0 = Some(notification);
    }

    /// Peek at the pending notification without consuming it.
    pub fn current(&self) -> Option<&Notification> {
        self.0.as_ref()
    }

    /// Consume the pending notification (the UI dismissing it).
    pub fn take(&mut self) -> Option<Notification> {
        self.0.take()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }
}
