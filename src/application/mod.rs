// SPDX-License-Identifier: MPL-2.0
//! Application layer - collaborator interfaces of the mirror.
//!
//! - [`port`]: Trait definitions the host application and platform adapters
//!   implement (feed, toast sink, content builder)
//!
//! # Dependency Rule
//!
//! - Ports use domain types only
//! - Platform adapters implement the ports
//! - The [`mirror`](crate::mirror) core drives the ports and never reaches
//!   past them into host internals
//!
//! # Example
//!
//! ```ignore
//! use toast_mirror::application::port::{NotificationFeed, ToastSink};
//!
//! struct OverlayFeed { /* ... */ }
//! impl NotificationFeed for OverlayFeed { /* ... */ }
//! ```

pub mod port;
