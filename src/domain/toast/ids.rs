// SPDX-License-Identifier: MPL-2.0
//! Process-unique identifiers for toasts and toast actions.
//!
//! Both identifiers are random 128-bit values so they can be embedded in
//! platform activation arguments without colliding across restarts of the
//! mirror.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a surfaced toast. Primary key of the toast store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(Uuid);

impl ToastId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the platform dedup tag derived from this identifier.
    #[must_use]
    pub fn tag(&self) -> String {
        self.0.to_string()
    }

    /// The action identifier used for the toast body.
    ///
    /// Activating the body of a toast reports the toast's own identifier.
    #[must_use]
    pub fn body_action(&self) -> ActionId {
        ActionId(self.0)
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToastId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Identifier of a callback reachable from a toast body or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(Uuid);

impl ActionId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ActionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ActionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}
