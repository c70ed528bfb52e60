// SPDX-License-Identifier: MPL-2.0
//! Notification feed port.

use crate::domain::notification::{Notification, ProgressReport, SourceId};

/// The host application's live notification collection.
///
/// # Example
///
/// ```
/// use toast_mirror::application::port::NotificationFeed;
/// use toast_mirror::domain::notification::{Notification, ProgressReport, SourceId};
///
/// struct Empty;
///
/// impl NotificationFeed for Empty {
///     fn all_notifications(&self) -> Vec<Notification> {
///         Vec::new()
///     }
///     fn unread_count(&self) -> usize {
///         0
///     }
///     fn progress(&self, _id: SourceId) -> Option<ProgressReport> {
///         None
///     }
/// }
///
/// assert!(Empty.all_notifications().is_empty());
/// ```
pub trait NotificationFeed {
    /// Current membership of the feed, in the feed's own enumeration order.
    fn all_notifications(&self) -> Vec<Notification>;

    /// Number of unread notifications.
    ///
    /// The mirror treats any change of this value as a refresh signal.
    fn unread_count(&self) -> usize;

    /// Live progress reading of a notification, if it is still in the feed
    /// and reports progress.
    fn progress(&self, id: SourceId) -> Option<ProgressReport>;
}
