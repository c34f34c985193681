// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Gallery**: Catalog generation and thumbnail sizing
//! - **Lightbox**: Zoom sequence, swipe detection, slide transition
//! - **Diagnostics**: Activity log capacity

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of cards shipped with the gallery.
pub const DEFAULT_IMAGE_COUNT: usize = 35;

/// Minimum number of images (the lightbox needs at least one record).
pub const MIN_IMAGE_COUNT: usize = 1;

/// Maximum number of images.
pub const MAX_IMAGE_COUNT: usize = 10_000;

/// Directory holding the card images, relative to the working directory.
pub const DEFAULT_ASSET_DIR: &str = "assets/cards";

/// File name prefix; records are named `<stem><id>.<extension>`.
pub const DEFAULT_FILE_STEM: &str = "card";

/// File extension of the card images.
pub const DEFAULT_EXTENSION: &str = "png";

/// Default thumbnail height in logical pixels.
pub const DEFAULT_THUMBNAIL_HEIGHT: f32 = 220.0;

/// Minimum thumbnail height.
pub const MIN_THUMBNAIL_HEIGHT: f32 = 80.0;

/// Maximum thumbnail height.
pub const MAX_THUMBNAIL_HEIGHT: f32 = 600.0;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Zoom factors cycled by the zoom button, in order.
pub const DEFAULT_ZOOM_LEVELS: [f32; 4] = [1.0, 1.5, 2.0, 2.5];

/// Largest zoom factor accepted in a custom zoom sequence.
pub const MAX_ZOOM_FACTOR: f32 = 8.0;

/// Horizontal travel (px) a press/release pair needs to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Minimum swipe threshold.
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 1.0;

/// Maximum swipe threshold.
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

/// Duration of the slide-in cue after navigation (milliseconds).
pub const SLIDE_DURATION_MS: u64 = 300;

/// Distance the incoming image travels during the slide-in cue (px).
pub const SLIDE_DISTANCE_PX: f32 = 60.0;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of events kept in the activity log.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum activity log capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum activity log capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

const _: () = {
    assert!(MIN_IMAGE_COUNT >= 1);
    assert!(DEFAULT_IMAGE_COUNT >= MIN_IMAGE_COUNT && DEFAULT_IMAGE_COUNT <= MAX_IMAGE_COUNT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT >= MIN_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_THUMBNAIL_HEIGHT <= MAX_THUMBNAIL_HEIGHT);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_ZOOM_LEVELS[0] == 1.0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
