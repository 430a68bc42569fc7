// SPDX-License-Identifier: MPL-2.0
//! Loading and saving of user preferences in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[motion]` - Reduced-motion preference and hero rotation interval
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set `ICED_FOLIO_CONFIG_DIR` or pass `--config-dir`
//! 3. Falls back to the platform-specific config directory

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Default hero rotation interval in milliseconds.
pub const DEFAULT_HERO_INTERVAL_MS: u64 = 5200;

/// Shortest accepted hero rotation interval; faster values would race the
/// cross-fade.
pub const MIN_HERO_INTERVAL_MS: u64 = 1000;

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en", "nl").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Motion and animation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MotionConfig {
    /// Suppresses non-essential animation: reveal stagger, hero rotation,
    /// and the pointer tilt. End states are unaffected.
    #[serde(default)]
    pub reduce: bool,

    /// Hero rotation interval in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_interval_ms: Option<u64>,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            reduce: false,
            hero_interval_ms: None,
        }
    }
}

impl MotionConfig {
    /// Effective hero interval, with the configured value clamped to the
    /// supported minimum.
    #[must_use]
    pub fn hero_interval_ms(&self) -> u64 {
        self.hero_interval_ms
            .unwrap_or(DEFAULT_HERO_INTERVAL_MS)
            .max(MIN_HERO_INTERVAL_MS)
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub motion: MotionConfig,
}

fn config_file_path(dir: Option<&PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(dir).map(|d| d.join(CONFIG_FILE))
}

/// Loads the configuration from the resolved location.
///
/// A missing file yields the default configuration. A present-but-invalid
/// file also yields the default configuration plus a human-readable warning,
/// so a corrupt config never prevents startup.
pub fn load() -> (Config, Option<String>) {
    load_with_dir(None)
}

/// Loads the configuration with an explicit directory override (for tests).
pub fn load_with_dir(dir: Option<&PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_file_path(dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => (
            Config::default(),
            Some(format!("{}: {err}", path.display())),
        ),
    }
}

/// Loads the configuration from an explicit file path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| Error::Config(e.to_string()))?;
    toml::from_str(&text).map_err(|e| Error::Config(e.to_string()))
}

/// Saves the configuration to the resolved location, creating the directory
/// if needed.
pub fn save(config: &Config) -> Result<()> {
    let path = config_file_path(None)
        .ok_or_else(|| Error::Config("no configuration directory available".to_string()))?;
    save_to_path(config, &path)
}

/// Saves the configuration to an explicit file path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::Config(e.to_string()))?;
    }
    let text = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    fs::write(path, text).map_err(|e| Error::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!(!config.motion.reduce);
        assert_eq!(config.motion.hero_interval_ms(), DEFAULT_HERO_INTERVAL_MS);
        assert_eq!(config.general.language, None);
    }

    #[test]
    fn hero_interval_is_clamped() {
        let motion = MotionConfig {
            reduce: false,
            hero_interval_ms: Some(10),
        };
        assert_eq!(motion.hero_interval_ms(), MIN_HERO_INTERVAL_MS);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");

        let mut config = Config::default();
        config.general.language = Some("nl".to_string());
        config.motion.reduce = true;
        config.motion.hero_interval_ms = Some(4000);

        save_to_path(&config, &path).expect("save failed");
        let loaded = load_from_path(&path).expect("load failed");
        assert_eq!(loaded, config);
    }

    #[test]
    fn invalid_file_falls_back_with_warning() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(&path, "general = \"not a table\"").expect("write failed");

        let dir_buf = dir.path().to_path_buf();
        let (config, warning) = load_with_dir(Some(&dir_buf));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn missing_file_is_silent_default() {
        let dir = tempdir().expect("failed to create temp dir");
        let dir_buf = dir.path().to_path_buf();
        let (config, warning) = load_with_dir(Some(&dir_buf));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
