//! Notification badge state fed by the websocket subscriber and the
//! REST seed/reset calls.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use crate::net::types::Notification;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NotificationsState {
    pub unread_count: i64,
    pub latest: Option<Notification>,
}

impl NotificationsState {
    /// Register a pushed notification: it becomes the latest one and the
    /// unread badge grows.
    pub fn record(&mut self, notification: Notification) {
        self.unread_count += 1;
        self.latest = Some(notification);
    }

    /// Seed the badge from the backend's unread count.
    pub fn set_unread(&mut self, count: i64) {
        self.unread_count = count.max(0);
    }

    /// One notification read; the badge never goes negative.
    pub fn decrement(&mut self) {
        self.unread_count = (self.unread_count - 1).max(0);
    }

    /// All read (after a successful `read-all` call).
    pub fn mark_all_read(&mut self) {
        self.unread_count = 0;
    }
}
