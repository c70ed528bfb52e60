// SPDX-License-Identifier: MPL-2.0
//! In-memory notification feed.
//!
//! Stands in for the host's notification overlay in the demo binary and in
//! tests. Notifications keep insertion order, which is the enumeration order
//! the mirror treats as authoritative.

use crate::application::port::NotificationFeed;
use crate::domain::notification::{Notification, ProgressReport, SourceId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryFeed {
    notifications: Vec<Notification>,
    progress: HashMap<SourceId, ProgressReport>,
    unread: usize,
}

impl InMemoryFeed {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Posts a notification and counts it as unread.
    ///
    /// A notification with the same id is replaced in place.
    pub fn push(&mut self, notification: Notification) {
        if let Some(existing) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == notification.id)
        {
            *existing = notification;
        } else {
            self.notifications.push(notification);
        }
        self.unread += 1;
    }

    /// Closes a notification. Returns whether it was present.
    pub fn remove(&mut self, id: SourceId) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.progress.remove(&id);

        let removed = self.notifications.len() != before;
        if removed {
            self.unread = self.unread.saturating_sub(1);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
        self.progress.clear();
        self.unread = 0;
    }

    /// Sets the live progress reading of a notification.
    pub fn set_progress(&mut self, id: SourceId, report: ProgressReport) {
        self.progress.insert(id, report);
    }

    pub fn mark_all_read(&mut self) {
        self.unread = 0;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl NotificationFeed for InMemoryFeed {
    fn all_notifications(&self) -> Vec<Notification> {
        self.notifications.clone()
    }

    fn unread_count(&self) -> usize {
        self.unread
    }

    fn progress(&self, id: SourceId) -> Option<ProgressReport> {
        if !self.notifications.iter().any(|n| n.id == id) {
            return None;
        }
        self.progress.get(&id).copied()
    }
}
