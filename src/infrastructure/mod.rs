// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`feed`]: In-memory notification feed (implements [`NotificationFeed`])
//! - [`sink`]: Recording, logging toast sink (implements [`ToastSink`])
//! - [`content`]: Per-kind toast content rules (implements [`ContentBuilder`])
//!
//! Platform toast bindings live outside this crate; they implement the same
//! traits and forward platform callbacks through a
//! [`MirrorHandle`](crate::mirror::MirrorHandle).
//!
//! [`NotificationFeed`]: crate::application::port::NotificationFeed
//! [`ToastSink`]: crate::application::port::ToastSink
//! [`ContentBuilder`]: crate::application::port::ContentBuilder

pub mod content;
pub mod feed;
pub mod sink;

pub use content::{ClipboardWriter, StandardContentBuilder};
pub use feed::InMemoryFeed;
pub use sink::{RecordingSink, SinkCall};
