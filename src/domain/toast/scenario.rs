// SPDX-License-Identifier: MPL-2.0
//! Toast priority classification.

use crate::domain::notification::{Notification, NotificationKind};

/// Priority classification of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scenario {
    /// Not urgent; goes through the single-slot default lane.
    #[default]
    Default,
    /// Important; shown directly, bypassing the default lane.
    Reminder,
}

impl Scenario {
    /// Classifies a notification.
    ///
    /// Important, non-transient notifications become reminders, except plain
    /// [`NotificationKind::Simple`] ones. Chat messages and mentions always
    /// use the default lane; multiplayer invitations are always reminders.
    #[must_use]
    pub fn classify(notification: &Notification) -> Self {
        match notification.kind {
            NotificationKind::Message(_) | NotificationKind::Mention { .. } => Scenario::Default,
            NotificationKind::Invitation { .. } => Scenario::Reminder,
            NotificationKind::Simple => Scenario::Default,
            _ if notification.is_important && !notification.is_transient => Scenario::Reminder,
            _ => Scenario::Default,
        }
    }

    #[must_use]
    pub fn is_default(self) -> bool {
        self == Scenario::Default
    }
}
