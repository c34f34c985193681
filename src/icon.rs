// SPDX-License-Identifier: MPL-2.0
//! Window icon, rasterized at runtime from the embedded branding SVG.

use iced::window::{icon, Icon};
use resvg::usvg;

const ICON_SVG: &str = include_str!("../assets/branding/card_gallery.svg");

/// Edge length of the rasterized icon, in pixels.
const ICON_SIZE: u32 = 128;

/// Returns the window icon, or `None` if the SVG cannot be rendered.
pub fn load_window_icon() -> Option<Icon> {
    let pixmap = rasterize(ICON_SIZE)?;
    icon::from_rgba(pixmap.take(), ICON_SIZE, ICON_SIZE).ok()
}

/// Renders the branding SVG into a square RGBA pixmap.
fn rasterize(size: u32) -> Option<tiny_skia::Pixmap> {
    let tree = usvg::Tree::from_data(ICON_SVG.as_bytes(), &usvg::Options::default()).ok()?;

    let source = tree.size();
    #[allow(clippy::cast_precision_loss)]
    let edge = size as f32;
    let transform =
        tiny_skia::Transform::from_scale(edge / source.width(), edge / source.height());

    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());
    Some(pixmap)
}
