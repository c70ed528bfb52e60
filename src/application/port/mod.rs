// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for the mirror's collaborators.
//!
//! # Available Ports
//!
//! - [`content`]: Turning a notification into toast content
//! - [`feed`]: The live notification collection of the host
//! - [`sink`]: The platform toast presentation layer
//!
//! # Design Notes
//!
//! - All traits use domain types only (no platform handles)
//! - Calls happen on the mirror's logic thread; no port needs to be `Sync`
//! - The sink is fallible and every call into it is best-effort

pub mod content;
pub mod feed;
pub mod sink;

pub use content::{
    BuildOutcome, ButtonActivation, ContentBuilder, LogoOverride, RenderedButton, RenderedContent,
    ToastButton, ToastContent, ToastDuration,
};
pub use feed::NotificationFeed;
pub use sink::{
    DismissReason, ProgressData, SinkError, ToastNotification, ToastPriority, ToastSink,
};
