// SPDX-License-Identifier: MPL-2.0
//! Toast identity, classification and progress value types.

pub mod ids;
pub mod progress;
pub mod scenario;

pub use ids::{ActionId, ToastId};
pub use progress::{status_label, ProgressValue, SequenceNumber, PROGRESS_EPSILON};
pub use scenario::Scenario;
