// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::{grid, lightbox};
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Grid(grid::Message),
    Lightbox(lightbox::Message),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale override (BCP-47 tag).
    pub lang: Option<String>,
    /// Overrides `gallery.image_count`.
    pub count: Option<usize>,
    /// Overrides `gallery.asset_dir`.
    pub assets: Option<PathBuf>,
    /// Directory holding `settings.toml`, overriding the platform default.
    pub config_dir: Option<PathBuf>,
    /// Echo every recorded action to stderr.
    pub verbose: bool,
}
