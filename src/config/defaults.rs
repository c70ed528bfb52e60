// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Default lane**: Dwell time of the single default-scenario slot
//! - **Sink**: Toast group shared by every toast of the mirror
//! - **Inbox**: Backlog size of the cross-thread event inbox that triggers a warning

// ==========================================================================
// Default Lane Defaults
// ==========================================================================

/// Time a default-scenario toast keeps the slot before it may be rotated out
/// (in milliseconds).
pub const DEFAULT_DWELL_MS: u64 = 600;

/// Minimum dwell time (in milliseconds).
pub const MIN_DWELL_MS: u64 = 100;

/// Maximum dwell time (in milliseconds).
pub const MAX_DWELL_MS: u64 = 60_000;

// ==========================================================================
// Sink Defaults
// ==========================================================================

/// Group name all toasts are filed under in the platform sink.
pub const DEFAULT_TOAST_GROUP: &str = "toast-mirror";

/// Whether popups are suppressed while the host runs fullscreen.
pub const DEFAULT_SUPPRESS_POPUPS_WHEN_FULLSCREEN: bool = true;

// ==========================================================================
// Inbox Defaults
// ==========================================================================

/// Pending platform events at which the inbox logs a backlog warning.
/// Events past it are still delivered.
pub const DEFAULT_INBOX_CAPACITY: usize = 256;

/// Minimum inbox capacity.
pub const MIN_INBOX_CAPACITY: usize = 8;

/// Maximum inbox capacity.
pub const MAX_INBOX_CAPACITY: usize = 65_536;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dwell_default_within_bounds() {
        assert!(DEFAULT_DWELL_MS >= MIN_DWELL_MS);
        assert!(DEFAULT_DWELL_MS <= MAX_DWELL_MS);
    }

    #[test]
    fn inbox_default_within_bounds() {
        assert!(DEFAULT_INBOX_CAPACITY >= MIN_INBOX_CAPACITY);
        assert!(DEFAULT_INBOX_CAPACITY <= MAX_INBOX_CAPACITY);
    }

    #[test]
    fn toast_group_is_not_empty() {
        assert!(!DEFAULT_TOAST_GROUP.is_empty());
    }
}
