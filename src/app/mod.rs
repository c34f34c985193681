// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and the lightbox.
//!
//! The `App` struct owns the catalog, localization and activity log, and
//! forwards component messages to their handlers. Startup problems never
//! abort: each one falls back to a default and is recorded as a warning.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{Catalog, CatalogSpec};
use crate::config::{self, Config};
use crate::diagnostics::{BufferCapacity, DiagnosticsCollector};
use crate::i18n::fluent::I18n;
use crate::ui::state::ZoomSteps;
use crate::ui::{grid, lightbox};
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    /// One handle per record, shared by the grid and the lightbox so each
    /// file is decoded once.
    thumbnails: Vec<image::Handle>,
    grid_reveal: grid::Reveal,
    lightbox: lightbox::State,
    theme_mode: ThemeMode,
    /// Resolved once at startup; `System` mode is not re-queried per frame.
    theme: Theme,
    colors: ColorScheme,
    thumbnail_height: f32,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.catalog.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;
pub const MIN_WINDOW_HEIGHT: f32 = 420.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: &mut Config, flags: &Flags) {
    if let Some(count) = flags.count {
        config.gallery.image_count = Some(count);
    }
    if let Some(assets) = &flags.assets {
        config.gallery.asset_dir = Some(assets.clone());
    }
}

impl App {
    /// Builds the application from configuration and command-line flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        (Self::from_flags(flags), Task::none())
    }

    /// Everything `new` does, without the runtime task.
    pub fn from_flags(flags: Flags) -> Self {
        let (mut config, config_warning) = config::load_with_override(flags.config_dir.clone());
        apply_overrides(&mut config, &flags);

        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut diagnostics = DiagnosticsCollector::new(BufferCapacity::default(), flags.verbose);

        if let Some(key) = config_warning {
            diagnostics.log_warning(i18n.tr(&key));
        }

        let catalog = match Catalog::generate(&CatalogSpec::from_config(&config.gallery)) {
            Ok(catalog) => catalog,
            Err(err) => {
                diagnostics.log_warning(format!("{err}; using the built-in catalog"));
                Catalog::default()
            }
        };

        if let Some(dir) = catalog.asset_dir() {
            if !dir.is_dir() {
                let path = dir.display().to_string();
                diagnostics.log_warning(
                    i18n.tr_with_args("notification-assets-missing", &[("path", path.as_str())]),
                );
            }
        }

        let levels = config
            .lightbox
            .zoom_levels
            .clone()
            .unwrap_or_else(|| config::DEFAULT_ZOOM_LEVELS.to_vec());
        let steps = ZoomSteps::new(levels).unwrap_or_else(|err| {
            diagnostics.log_warning(format!("invalid zoom levels: {err}; using defaults"));
            ZoomSteps::default()
        });

        let thumbnails = catalog
            .iter()
            .map(|record| image::Handle::from_path(&record.path))
            .collect();

        let lightbox = lightbox::State::new(
            catalog.len(),
            steps,
            config.lightbox.swipe_threshold_px(),
        );

        let theme_mode = config.general.theme_mode;

        App {
            i18n,
            catalog,
            thumbnails,
            grid_reveal: grid::Reveal::default(),
            lightbox,
            theme_mode,
            theme: theme_mode.iced_theme(),
            colors: theme_mode.colors(),
            thumbnail_height: config.gallery.thumbnail_height(),
            diagnostics,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(&self.lightbox)
    }

    /// Handles a top-level message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            grid_reveal: &mut self.grid_reveal,
            lightbox: &mut self.lightbox,
            diagnostics: &mut self.diagnostics,
        };
        update::update(&mut ctx, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            colors: &self.colors,
            catalog: &self.catalog,
            thumbnails: &self.thumbnails,
            thumbnail_height: self.thumbnail_height,
            grid_reveal: self.grid_reveal,
            lightbox: &self.lightbox,
        })
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn grid_reveal(&self) -> grid::Reveal {
        self.grid_reveal
    }

    #[must_use]
    pub fn lightbox(&self) -> &lightbox::State {
        &self.lightbox
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }
}
