// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the configuration directory.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `config_dir_with_override()` (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_FOLIO_CONFIG_DIR`)
//! 4. **Platform default** - via the `dirs` crate
//!
//! CLI overrides should be initialized once at startup, before any path
//! resolution functions are called.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// Later calls are ignored; the first value set wins. This is called once
/// from `main` before the application loop starts.
pub fn init_cli_overrides(config_dir: Option<String>) {
    let _ = CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from));
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().cloned().flatten()
}

/// Resolves the configuration directory with an optional explicit override.
pub fn config_dir_with_override(explicit: Option<&PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = explicit {
        return Some(dir.clone());
    }
    if let Some(dir) = cli_config_dir() {
        return Some(dir);
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|base| base.join(APP_NAME))
}

/// Resolves the configuration directory using the standard order.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let explicit = PathBuf::from("/tmp/folio-test-config");
        let resolved = config_dir_with_override(Some(&explicit));
        assert_eq!(resolved, Some(explicit));
    }

    #[test]
    fn default_resolution_returns_some_path() {
        // Either a CLI/env override or the platform default should apply on
        // any supported desktop platform.
        if std::env::var(ENV_CONFIG_DIR).is_err() {
            if let Some(dir) = config_dir() {
                assert!(!dir.as_os_str().is_empty());
            }
        }
    }
}
