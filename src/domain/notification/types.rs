// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Callback invoked on the mirror's logic thread.
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Stable identity of a notification inside the feed.
///
/// The mirror only keeps this key, never the notification itself, so the
/// feed stays in charge of notification lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SourceId(u64);

impl SourceId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// State reported by a progress-capable notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressState {
    #[default]
    Queued,
    Active,
    Completed,
    Cancelled,
    /// Any state the host adds that has no status label.
    Other,
}

/// Live progress reading for a notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressReport {
    /// Raw progress fraction; not necessarily clamped.
    pub value: f32,
    pub state: ProgressState,
    /// `false` once the operation reached a terminal state.
    pub ongoing: bool,
}

impl ProgressReport {
    #[must_use]
    pub fn new(value: f32, state: ProgressState) -> Self {
        Self {
            value,
            state,
            ongoing: matches!(state, ProgressState::Queued | ProgressState::Active),
        }
    }
}

/// Sender and body of a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessagePayload {
    pub sender: String,
    pub content: String,
}

/// Typed payload of a notification subtype.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NotificationKind {
    /// Plain informational notification. Never promoted to a reminder.
    Simple,
    /// Any other notification without extra payload.
    #[default]
    General,
    /// Private message addressed to the user.
    Message(MessagePayload),
    /// The user was mentioned in a channel.
    Mention {
        message: MessagePayload,
        channel: String,
    },
    /// Invitation to join a multiplayer room.
    Invitation { password: Option<String> },
    /// Long-running operation; live values come from the feed.
    Progress,
    /// Notification about another user, optionally with a cached avatar.
    UserAvatar {
        user_id: Option<u64>,
        avatar: Option<PathBuf>,
    },
}

/// A snapshot of one notification in the feed.
#[derive(Clone)]
pub struct Notification {
    pub id: SourceId,
    pub text: String,
    pub is_important: bool,
    pub is_transient: bool,
    pub kind: NotificationKind,
    /// Invoked when the toast body (or a button forwarding to it) is activated.
    pub on_activate: Option<Callback>,
}

impl Notification {
    pub fn new(id: SourceId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_important: false,
            is_transient: false,
            kind: NotificationKind::General,
            on_activate: None,
        }
    }

    #[must_use]
    pub fn important(mut self) -> Self {
        self.is_important = true;
        self
    }

    #[must_use]
    pub fn transient(mut self) -> Self {
        self.is_transient = true;
        self
    }

    #[must_use]
    pub fn with_kind(mut self, kind: NotificationKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn on_activate(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(callback));
        self
    }

    /// Returns whether the feed should be polled for progress on this notification.
    #[must_use]
    pub fn reports_progress(&self) -> bool {
        matches!(self.kind, NotificationKind::Progress)
    }
}

impl fmt::Debug for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notification")
            .field("id", &self.id)
            .field("text", &self.text)
            .field("is_important", &self.is_important)
            .field("is_transient", &self.is_transient)
            .field("kind", &self.kind)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}
