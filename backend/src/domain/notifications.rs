//! User-facing notifications and their toast presentation.
use shared::{Notification, NotificationSeverity};

pub const TRANSACTION_ADDED: &str = "Transaction added!";
pub const TRANSACTION_DELETED: &str = "Transaction deleted.";
pub const INVALID_FORM: &str = "Please fill all fields correctly!";
pub const STORAGE_UNAVAILABLE: &str = "Saved for this session only: storage is unavailable.";

pub fn transaction_added() -> Notification {
    notification(TRANSACTION_ADDED, NotificationSeverity::Success)
}

pub fn transaction_deleted() -> Notification {
    notification(TRANSACTION_DELETED, NotificationSeverity::Info)
}

pub fn invalid_form() -> Notification {
    notification(INVALID_FORM, NotificationSeverity::Error)
}

pub fn storage_unavailable() -> Notification {
    notification(STORAGE_UNAVAILABLE, NotificationSeverity::Error)
}

fn notification(message: &str, severity: NotificationSeverity) -> Notification {
    Notification {
        message: message.to_string(),
        severity,
    }
}

/// How a toast for a given severity looks and how long it stays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastStyle {
    pub background: &'static str,
    pub foreground: &'static str,
    /// Time fully visible before fading out
    pub display_ms: u64,
    pub fade_ms: u64,
}

impl ToastStyle {
    pub fn for_severity(severity: NotificationSeverity) -> Self {
        let background = match severity {
            NotificationSeverity::Success => "#00b894",
            NotificationSeverity::Info => "#6c5ce7",
            NotificationSeverity::Error => "#e17055",
        };
        Self {
            background,
            foreground: "#fff",
            display_ms: 1500,
            fade_ms: 250,
        }
    }
}
