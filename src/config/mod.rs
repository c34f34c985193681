// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file in the application config directory.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Catalog generation (count, directory, naming) and thumbnails
//! - `[lightbox]` - Zoom sequence and swipe detection
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Pass a directory to `load_with_override()` (CLI `--config-dir`)
//! 3. Set `CARD_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to the platform-specific config directory
//!
//! The gallery never writes this file: preferences are read-only input.
//!
//! # Examples
//!
//! ```no_run
//! use card_gallery::config;
//!
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("falling back to defaults: {key}");
//! }
//! let count = config.gallery.image_count();
//! assert!(count >= config::MIN_IMAGE_COUNT);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be used.
pub const CONFIG_LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ja").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Catalog and grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Number of images in the catalog.
    #[serde(default = "default_image_count", skip_serializing_if = "Option::is_none")]
    pub image_count: Option<usize>,

    /// Directory holding the images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_dir: Option<PathBuf>,

    /// File name prefix of each image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_stem: Option<String>,

    /// File extension of each image (without the dot).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Thumbnail height in logical pixels.
    #[serde(
        default = "default_thumbnail_height",
        skip_serializing_if = "Option::is_none"
    )]
    pub thumbnail_height: Option<f32>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            asset_dir: None,
            file_stem: None,
            extension: None,
            thumbnail_height: default_thumbnail_height(),
        }
    }
}

impl GalleryConfig {
    /// Image count clamped to the supported range.
    #[must_use]
    pub fn image_count(&self) -> usize {
        self.image_count
            .unwrap_or(DEFAULT_IMAGE_COUNT)
            .clamp(MIN_IMAGE_COUNT, MAX_IMAGE_COUNT)
    }

    /// Thumbnail height clamped to the supported range.
    #[must_use]
    pub fn thumbnail_height(&self) -> f32 {
        let height = self.thumbnail_height.unwrap_or(DEFAULT_THUMBNAIL_HEIGHT);
        if height.is_finite() {
            height.clamp(MIN_THUMBNAIL_HEIGHT, MAX_THUMBNAIL_HEIGHT)
        } else {
            DEFAULT_THUMBNAIL_HEIGHT
        }
    }
}

/// Lightbox interaction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Zoom factors cycled by the zoom button. Must start at 1.0.
    #[serde(default = "default_zoom_levels", skip_serializing_if = "Option::is_none")]
    pub zoom_levels: Option<Vec<f32>>,

    /// Minimum horizontal travel for a swipe, in pixels.
    #[serde(
        default = "default_swipe_threshold",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            zoom_levels: default_zoom_levels(),
            swipe_threshold_px: default_swipe_threshold(),
        }
    }
}

impl LightboxConfig {
    /// Swipe threshold clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold_px(&self) -> f32 {
        let threshold = self.swipe_threshold_px.unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX);
        if threshold.is_finite() {
            threshold.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX)
        } else {
            DEFAULT_SWIPE_THRESHOLD_PX
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Catalog and grid settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Lightbox interaction settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_image_count() -> Option<usize> {
    Some(DEFAULT_IMAGE_COUNT)
}

fn default_thumbnail_height() -> Option<f32> {
    Some(DEFAULT_THUMBNAIL_HEIGHT)
}

fn default_zoom_levels() -> Option<Vec<f32>> {
    Some(DEFAULT_ZOOM_LEVELS.to_vec())
}

fn default_swipe_threshold() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional directory override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    eprintln!("Failed to load config {}: {}", path.display(), err);
                    return (Config::default(), Some(CONFIG_LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
