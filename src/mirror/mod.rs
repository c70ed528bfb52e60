// SPDX-License-Identifier: MPL-2.0
//! Mirror core: mirrors the notification feed onto platform toasts.
//!
//! - [`store`] keeps one record per surfaced notification.
//! - [`actions`] maps activation identifiers to callbacks.
//! - [`reconcile`] diffs successive feed snapshots.
//! - [`default_lane`] serializes default-scenario toasts through one slot.
//! - [`progress`] throttles progress pushes.
//! - [`service`] ties them together behind [`ToastMirror`].

pub mod actions;
pub mod arguments;
pub mod default_lane;
pub mod inbox;
pub mod presentation;
pub mod progress;
pub mod reconcile;
pub mod service;
pub mod store;

pub use actions::{ActionRegistry, RegisteredAction};
pub use arguments::ToastArguments;
pub use default_lane::{DefaultLane, LaneContext, LaneEffect, LaneState};
pub use inbox::{MirrorEvent, MirrorHandle};
pub use presentation::{MirrorSettings, PresentationMode};
pub use progress::ProgressTracker;
pub use reconcile::{GenerationDiff, MembershipDiff};
pub use service::ToastMirror;
pub use store::{ToastRecord, ToastStore};
