//! Traits implemented by the presentation side of the application.
use shared::{LedgerViewResponse, Notification};

/// Draws the transaction list and totals.
pub trait LedgerRenderer: Send {
    /// Called after every state change with a fresh projection
    fn render(&mut self, view: &LedgerViewResponse);
}

/// Shows transient messages (toasts).
pub trait Notifier: Send {
    fn notify(&mut self, notification: &Notification);
}
