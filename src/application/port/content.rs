// SPDX-License-Identifier: MPL-2.0
//! Toast content port.
//!
//! A [`ContentBuilder`] produces a [`ToastContent`] for each surfaced
//! notification. Buttons that invoke callbacks are turned into registered
//! actions by the mirror, which then renders the content into the
//! callback-free [`RenderedContent`] handed to the sink.

use crate::domain::notification::{Callback, Notification};
use crate::domain::toast::{Scenario, ToastId};
use std::fmt;
use std::path::PathBuf;

/// How long the platform keeps the popup on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastDuration {
    #[default]
    Short,
    Long,
}

/// Image shown in place of the application logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoOverride {
    pub path: PathBuf,
    pub circle_crop: bool,
}

/// What happens when a button is pressed.
#[derive(Clone)]
pub enum ButtonActivation {
    /// Runs a callback of its own.
    Invoke(Callback),
    /// Behaves like activating the toast body.
    Body,
    /// Platform dismiss button; reported as a dismissal, not an activation.
    Dismiss,
}

impl fmt::Debug for ButtonActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ButtonActivation::Invoke(_) => write!(f, "Invoke(..)"),
            ButtonActivation::Body => write!(f, "Body"),
            ButtonActivation::Dismiss => write!(f, "Dismiss"),
        }
    }
}

/// A button as described by the content builder.
#[derive(Debug, Clone)]
pub struct ToastButton {
    /// Label; `None` uses the platform's default dismiss label.
    pub label: Option<String>,
    pub activation: ButtonActivation,
}

impl ToastButton {
    pub fn invoke(label: impl Into<String>, callback: Callback) -> Self {
        Self {
            label: Some(label.into()),
            activation: ButtonActivation::Invoke(callback),
        }
    }

    pub fn body(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            activation: ButtonActivation::Body,
        }
    }

    #[must_use]
    pub fn dismiss(label: Option<String>) -> Self {
        Self {
            label,
            activation: ButtonActivation::Dismiss,
        }
    }
}

/// Visual content of a toast plus the flags that drive its lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ToastContent {
    pub lines: Vec<String>,
    pub attribution: Option<String>,
    pub logo: Option<LogoOverride>,
    pub buttons: Vec<ToastButton>,
    pub progress_bar: bool,
    /// Re-display the toast after activation instead of retiring it.
    pub keep_on_screen: bool,
    pub duration: ToastDuration,
}

/// A button after its action has been registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedButton {
    pub label: Option<String>,
    /// Activation argument string; `None` for dismiss buttons.
    pub arguments: Option<String>,
}

/// Callback-free content handed to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedContent {
    pub lines: Vec<String>,
    pub attribution: Option<String>,
    pub logo: Option<LogoOverride>,
    pub buttons: Vec<RenderedButton>,
    pub progress_bar: bool,
    pub scenario: Scenario,
    pub duration: ToastDuration,
    /// Activation argument string of the toast body.
    pub launch: String,
}

/// Result of asking a builder for content.
#[derive(Debug)]
pub enum BuildOutcome {
    /// Content is available right away.
    Ready(ToastContent),
    /// The builder delivers content later through
    /// [`MirrorHandle::content_ready`](crate::mirror::MirrorHandle::content_ready).
    Deferred,
}

/// Builds toast content for notifications.
pub trait ContentBuilder {
    /// Starts building content for `notification`, which will be surfaced as
    /// toast `toast`.
    ///
    /// Builders that need I/O (avatar downloads and the like) return
    /// [`BuildOutcome::Deferred`] and must not block.
    fn build(&mut self, notification: &Notification, toast: ToastId) -> BuildOutcome;
}
