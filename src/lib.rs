// SPDX-License-Identifier: MPL-2.0
//! `toast_mirror` mirrors an application's in-app notification feed onto
//! platform toast notifications.
//!
//! Important notifications are shown right away as reminders. Everything
//! else goes through a single-slot default lane, so a burst of low-priority
//! toasts is shown one at a time while the earlier ones are filed into the
//! platform history. Progress notifications are updated in place with
//! throttled, sequence-numbered pushes.
//!
//! The platform is reached through the traits in [`application::port`];
//! [`mirror::ToastMirror`] is the entry point.

#![doc(html_root_url = "https://docs.rs/toast_mirror/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod mirror;

#[cfg(test)]
pub(crate) mod test_utils;
