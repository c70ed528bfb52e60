// SPDX-License-Identifier: MPL-2.0
//! This module handles the mirror's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use toast_mirror::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.dwell_ms = Some(1_500);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.dwell_ms, Some(1_500));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

use crate::error::Result;
use defaults::{
    DEFAULT_DWELL_MS, DEFAULT_INBOX_CAPACITY, DEFAULT_SUPPRESS_POPUPS_WHEN_FULLSCREEN,
    DEFAULT_TOAST_GROUP, MAX_DWELL_MS, MAX_INBOX_CAPACITY, MIN_DWELL_MS, MIN_INBOX_CAPACITY,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "ToastMirror";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dwell_ms: Option<u64>,
    #[serde(default)]
    pub toast_group: Option<String>,
    #[serde(default)]
    pub suppress_popups_when_fullscreen: Option<bool>,
    #[serde(default)]
    pub inbox_capacity: Option<usize>,
    #[serde(default)]
    pub debug_logging: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dwell_ms: Some(DEFAULT_DWELL_MS),
            toast_group: Some(DEFAULT_TOAST_GROUP.to_string()),
            suppress_popups_when_fullscreen: Some(DEFAULT_SUPPRESS_POPUPS_WHEN_FULLSCREEN),
            inbox_capacity: Some(DEFAULT_INBOX_CAPACITY),
            debug_logging: Some(false),
        }
    }
}

impl Config {
    /// Dwell time of the default lane, clamped to the supported range.
    #[must_use]
    pub fn dwell(&self) -> Duration {
        let ms = self
            .dwell_ms
            .unwrap_or(DEFAULT_DWELL_MS)
            .clamp(MIN_DWELL_MS, MAX_DWELL_MS);
        Duration::from_millis(ms)
    }

    #[must_use]
    pub fn toast_group(&self) -> String {
        self.toast_group
            .as_deref()
            .map(str::trim)
            .filter(|group| !group.is_empty())
            .unwrap_or(DEFAULT_TOAST_GROUP)
            .to_string()
    }

    #[must_use]
    pub fn suppress_popups_when_fullscreen(&self) -> bool {
        self.suppress_popups_when_fullscreen
            .unwrap_or(DEFAULT_SUPPRESS_POPUPS_WHEN_FULLSCREEN)
    }

    #[must_use]
    pub fn inbox_capacity(&self) -> usize {
        self.inbox_capacity
            .unwrap_or(DEFAULT_INBOX_CAPACITY)
            .clamp(MIN_INBOX_CAPACITY, MAX_INBOX_CAPACITY)
    }

    #[must_use]
    pub fn debug_logging(&self) -> bool {
        self.debug_logging.unwrap_or(false)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Invalid TOML falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "invalid settings file, using defaults");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
