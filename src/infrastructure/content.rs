// SPDX-License-Identifier: MPL-2.0
//! Standard per-kind toast content.
//!
//! The first line is always the notification text. Subtypes add to it:
//!
//! | Kind | Additions |
//! |------|-----------|
//! | `Message` | message body, "Message from {sender}" |
//! | `Mention` | message body, "{sender} mentioned you in {channel}" |
//! | `Invitation` with password | "Password: {password}", Copy Password / Join / dismiss buttons, kept on screen |
//! | `Progress` | progress bar, "Hide" dismiss button |
//! | `UserAvatar` with cached avatar | circular logo override |
//!
//! Avatars are expected to be on disk already; this builder never performs
//! I/O and always returns [`BuildOutcome::Ready`].

use crate::application::port::{
    BuildOutcome, ContentBuilder, LogoOverride, ToastButton, ToastContent, ToastDuration,
};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::toast::ToastId;
use std::fmt;
use std::sync::Arc;

/// Writes text to the system clipboard.
pub type ClipboardWriter = Arc<dyn Fn(&str) + Send + Sync>;

#[derive(Clone, Default)]
pub struct StandardContentBuilder {
    clipboard: Option<ClipboardWriter>,
}

impl fmt::Debug for StandardContentBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StandardContentBuilder")
            .field("clipboard", &self.clipboard.is_some())
            .finish()
    }
}

impl StandardContentBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the writer used by the "Copy Password" button of invitations.
    #[must_use]
    pub fn with_clipboard(mut self, writer: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.clipboard = Some(Arc::new(writer));
        self
    }

    /// Builds the content of `notification` synchronously.
    #[must_use]
    pub fn content_for(&self, notification: &Notification) -> ToastContent {
        let mut content = ToastContent {
            lines: vec![notification.text.clone()],
            duration: ToastDuration::Short,
            ..ToastContent::default()
        };

        match &notification.kind {
            NotificationKind::Message(message) => {
                content.lines.push(message.content.clone());
                content.attribution = Some(format!("Message from {}", message.sender));
            }
            NotificationKind::Mention { message, channel } => {
                content.lines.push(message.content.clone());
                content.attribution =
                    Some(format!("{} mentioned you in {}", message.sender, channel));
            }
            NotificationKind::Invitation {
                password: Some(password),
            } if !password.is_empty() => {
                content.attribution = Some(format!("Password: {password}"));
                content.buttons.push(self.copy_button(password));
                content.buttons.push(ToastButton::body("Join"));
                content.buttons.push(ToastButton::dismiss(None));
                content.keep_on_screen = true;
            }
            NotificationKind::Progress => {
                content.progress_bar = true;
                content
                    .buttons
                    .push(ToastButton::dismiss(Some("Hide".to_string())));
            }
            NotificationKind::UserAvatar {
                avatar: Some(path), ..
            } => {
                content.logo = Some(LogoOverride {
                    path: path.clone(),
                    circle_crop: true,
                });
            }
            _ => {}
        }

        content
    }

    fn copy_button(&self, password: &str) -> ToastButton {
        let writer = self.clipboard.clone();
        let password = password.to_string();
        ToastButton::invoke(
            "Copy Password",
            Arc::new(move || {
                if let Some(writer) = &writer {
                    writer(&password);
                }
            }),
        )
    }
}

impl ContentBuilder for StandardContentBuilder {
    fn build(&mut self, notification: &Notification, _toast: ToastId) -> BuildOutcome {
        BuildOutcome::Ready(self.content_for(notification))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ButtonActivation;
    use crate::domain::notification::{MessagePayload, SourceId};
    use std::path::PathBuf;
    use std::sync::Mutex;

    fn note(kind: NotificationKind) -> Notification {
        Notification::new(SourceId::new(1), "headline").with_kind(kind)
    }

    fn payload() -> MessagePayload {
        MessagePayload {
            sender: "peppy".to_string(),
            content: "hello there".to_string(),
        }
    }

    #[test]
    fn general_notification_has_single_line() {
        let content = StandardContentBuilder::new().content_for(&note(NotificationKind::General));
        assert_eq!(content.lines, vec!["headline"]);
        assert!(content.attribution.is_none());
        assert!(content.buttons.is_empty());
        assert_eq!(content.duration, ToastDuration::Short);
    }

    #[test]
    fn message_adds_body_and_sender() {
        let content =
            StandardContentBuilder::new().content_for(&note(NotificationKind::Message(payload())));
        assert_eq!(content.lines, vec!["headline", "hello there"]);
        assert_eq!(content.attribution.as_deref(), Some("Message from peppy"));
    }

    #[test]
    fn mention_names_channel() {
        let content = StandardContentBuilder::new().content_for(&note(NotificationKind::Mention {
            message: payload(),
            channel: "#osu".to_string(),
        }));
        assert_eq!(
            content.attribution.as_deref(),
            Some("peppy mentioned you in #osu")
        );
    }

    #[test]
    fn invitation_with_password_stays_on_screen() {
        let copied = Arc::new(Mutex::new(String::new()));
        let sink = Arc::clone(&copied);
        let builder = StandardContentBuilder::new().with_clipboard(move |text| {
            *sink.lock().unwrap() = text.to_string();
        });

        let content = builder.content_for(&note(NotificationKind::Invitation {
            password: Some("hunter2".to_string()),
        }));

        assert!(content.keep_on_screen);
        assert_eq!(content.attribution.as_deref(), Some("Password: hunter2"));
        let labels: Vec<_> = content.buttons.iter().map(|b| b.label.clone()).collect();
        assert_eq!(
            labels,
            vec![Some("Copy Password".to_string()), Some("Join".to_string()), None]
        );
        assert!(matches!(content.buttons[1].activation, ButtonActivation::Body));
        assert!(matches!(content.buttons[2].activation, ButtonActivation::Dismiss));

        let ButtonActivation::Invoke(copy) = &content.buttons[0].activation else {
            panic!("copy button should invoke a callback");
        };
        copy();
        assert_eq!(*copied.lock().unwrap(), "hunter2");
    }

    #[test]
    fn invitation_without_password_is_plain() {
        let content = StandardContentBuilder::new()
            .content_for(&note(NotificationKind::Invitation { password: None }));
        assert!(!content.keep_on_screen);
        assert!(content.buttons.is_empty());
    }

    #[test]
    fn progress_gets_bar_and_hide_button() {
        let content = StandardContentBuilder::new().content_for(&note(NotificationKind::Progress));
        assert!(content.progress_bar);
        assert_eq!(content.buttons.len(), 1);
        assert_eq!(content.buttons[0].label.as_deref(), Some("Hide"));
        assert!(matches!(content.buttons[0].activation, ButtonActivation::Dismiss));
    }

    #[test]
    fn avatar_becomes_circular_logo() {
        let content = StandardContentBuilder::new().content_for(&note(NotificationKind::UserAvatar {
            user_id: Some(2),
            avatar: Some(PathBuf::from("/tmp/avatars/2.png")),
        }));
        let logo = content.logo.expect("logo override");
        assert!(logo.circle_crop);
        assert_eq!(logo.path, PathBuf::from("/tmp/avatars/2.png"));
    }
}
