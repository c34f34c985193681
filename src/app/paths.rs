// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions
//!    (CLI `--config-dir`, tests)
//! 2. **Environment variable** (`CARD_GALLERY_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "CardGallery";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "CARD_GALLERY_CONFIG_DIR";

/// Returns the application config directory path with an optional override.
///
/// Without override or environment variable:
/// - Linux: `~/.config/CardGallery/`
/// - macOS: `~/Library/Application Support/CardGallery/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\CardGallery\`
///
/// Returns `None` if the config directory cannot be determined.
pub fn get_app_config_dir_with_override(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(dir) = override_dir {
        return Some(dir);
    }

    resolve_config_dir(std::env::var(ENV_CONFIG_DIR).ok(), dirs::config_dir())
}

/// Picks the environment value when it is non-empty, otherwise the platform
/// directory joined with the application name.
fn resolve_config_dir(env_value: Option<String>, platform_dir: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }

    platform_dir.map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
