// SPDX-License-Identifier: MPL-2.0
//! Toast sink port.
//!
//! The sink is the platform presentation layer: it pops up toasts, updates
//! them in place by `(tag, group)`, hides them and keeps a history
//! (notification center) of past toasts.

use super::content::RenderedContent;
use crate::domain::toast::{ProgressValue, SequenceNumber};
use crate::mirror::MirrorHandle;
use std::fmt;
use std::sync::Arc;

/// Errors reported by a toast sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkError {
    /// The platform notifier is not available (not registered, unsupported OS).
    Unavailable,
    /// The platform refused the request.
    Rejected(String),
    /// Any other platform failure.
    Platform(String),
}

impl fmt::Display for SinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkError::Unavailable => write!(f, "Toast notifier unavailable"),
            SinkError::Rejected(msg) => write!(f, "Toast rejected: {msg}"),
            SinkError::Platform(msg) => write!(f, "Platform error: {msg}"),
        }
    }
}

impl std::error::Error for SinkError {}

/// Why the platform dismissed a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    UserCanceled,
    ApplicationHidden,
    TimedOut,
}

/// Platform display priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastPriority {
    #[default]
    Default,
    High,
}

/// Bindable progress values of a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressData {
    pub value: ProgressValue,
    pub value_string: String,
    pub status: String,
    pub sequence: SequenceNumber,
}

/// A toast ready to be handed to the sink.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastNotification {
    pub tag: String,
    pub group: String,
    pub content: Arc<RenderedContent>,
    pub priority: ToastPriority,
    pub suppress_popup: bool,
    pub data: Option<ProgressData>,
    pub expires_on_reboot: bool,
}

/// The platform toast presentation layer.
pub trait ToastSink {
    /// Shows (or replaces, by tag and group) a toast.
    fn show(&mut self, toast: &ToastNotification) -> Result<(), SinkError>;

    /// Updates the progress values of a toast in place.
    fn update(&mut self, data: &ProgressData, tag: &str, group: &str) -> Result<(), SinkError>;

    /// Removes a toast from the screen.
    fn hide(&mut self, toast: &ToastNotification) -> Result<(), SinkError>;

    /// Removes a toast from the notification history.
    fn remove_history(&mut self, tag: &str, group: &str) -> Result<(), SinkError>;

    /// Starts forwarding platform activation and dismissal events to `handle`.
    fn connect(&mut self, _handle: MirrorHandle) {}

    /// Stops forwarding platform events.
    fn disconnect(&mut self) {}
}
