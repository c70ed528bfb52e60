// SPDX-License-Identifier: MPL-2.0
//! Host presentation state and mirror settings.

use crate::config::Config;
use std::time::Duration;

/// How the host application is currently presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    #[default]
    Windowed,
    Borderless {
        focused: bool,
    },
    Fullscreen,
}

impl PresentationMode {
    /// Whether toast popups would cover the host.
    ///
    /// Suppressed toasts still land in the notification history.
    #[must_use]
    pub fn covers_screen(self) -> bool {
        matches!(
            self,
            PresentationMode::Fullscreen | PresentationMode::Borderless { focused: true }
        )
    }
}

/// Runtime settings of a mirror, usually derived from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSettings {
    pub dwell: Duration,
    pub toast_group: String,
    pub suppress_popups_when_fullscreen: bool,
    pub inbox_capacity: usize,
}

impl Default for MirrorSettings {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

impl From<&Config> for MirrorSettings {
    fn from(config: &Config) -> Self {
        Self {
            dwell: config.dwell(),
            toast_group: config.toast_group(),
            suppress_popups_when_fullscreen: config.suppress_popups_when_fullscreen(),
            inbox_capacity: config.inbox_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::{DEFAULT_DWELL_MS, DEFAULT_TOAST_GROUP};

    #[test]
    fn only_covering_modes_suppress() {
        assert!(!PresentationMode::Windowed.covers_screen());
        assert!(!PresentationMode::Borderless { focused: false }.covers_screen());
        assert!(PresentationMode::Borderless { focused: true }.covers_screen());
        assert!(PresentationMode::Fullscreen.covers_screen());
    }

    #[test]
    fn default_settings_follow_default_config() {
        let settings = MirrorSettings::default();
        assert_eq!(settings.dwell, Duration::from_millis(DEFAULT_DWELL_MS));
        assert_eq!(settings.toast_group, DEFAULT_TOAST_GROUP);
        assert!(settings.suppress_popups_when_fullscreen);
    }
}
