// SPDX-License-Identifier: MPL-2.0
//! Domain layer - value types shared by the mirror and its collaborators.
//!
//! Apart from `uuid` for identifier generation, this layer depends only on
//! `std`.
//!
//! # Modules
//!
//! - [`notification`]: Feed-side snapshots ([`Notification`](notification::Notification),
//!   [`NotificationKind`](notification::NotificationKind),
//!   [`ProgressReport`](notification::ProgressReport))
//! - [`toast`]: Toast-side identity and progress types ([`ToastId`](toast::ToastId),
//!   [`ActionId`](toast::ActionId), [`ProgressValue`](toast::ProgressValue))

pub mod notification;
pub mod toast;
