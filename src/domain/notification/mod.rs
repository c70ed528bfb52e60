// SPDX-License-Identifier: MPL-2.0
//! Snapshots of application notifications as exposed by the feed.
//!
//! Each notification subtype exposes a typed payload through
//! [`NotificationKind`], so the mirror never needs to look at private
//! state of the host's notification objects.

mod types;

pub use types::{
    Callback, MessagePayload, Notification, NotificationKind, ProgressReport, ProgressState,
    SourceId,
};
