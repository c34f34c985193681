// SPDX-License-Identifier: MPL-2.0
//! Pointer gesture interpretation for the lightbox.
//!
//! Translates raw press/move/release positions into either a pan (when the
//! image is zoomed) or a horizontal swipe (when it is not).

use crate::config::DEFAULT_SWIPE_THRESHOLD_PX;
use iced::Point;

/// Horizontal swipe outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    /// Pointer travelled right to left: show the next image.
    Left,
    /// Pointer travelled left to right: show the previous image.
    Right,
}

/// Tracks a single press-to-release stroke while unzoomed.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SwipeTracker {
    origin: Option<Point>,
}

impl SwipeTracker {
    pub fn start(&mut self, pointer: Point) {
        self.origin = Some(pointer);
    }

    pub fn cancel(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Ends the stroke at `pointer` and classifies it.
    ///
    /// A swipe needs at least `threshold` pixels of horizontal travel, and
    /// the horizontal component has to dominate the vertical one.
    pub fn finish(&mut self, pointer: Point, threshold: f32) -> Option<Swipe> {
        let origin = self.origin.take()?;
        let dx = pointer.x - origin.x;
        let dy = pointer.y - origin.y;

        if dx.abs() < threshold || dx.abs() <= dy.abs() {
            return None;
        }

        Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
    }
}

/// Pointer bookkeeping shared by the lightbox stage.
///
/// Keeps the swipe stroke in progress and where the pointer was last seen
/// during it (releases carry no coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureAdapter {
    threshold: f32,
    pointer: Option<Point>,
    swipe: SwipeTracker,
}

impl Default for GestureAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

impl GestureAdapter {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            pointer: None,
            swipe: SwipeTracker::default(),
        }
    }

    /// Starts a swipe stroke at `position`.
    pub fn begin_swipe(&mut self, position: Point) {
        self.pointer = Some(position);
        self.swipe.start(position);
    }

    /// Records the pointer position during a stroke.
    pub fn pointer_moved(&mut self, position: Point) {
        if self.swipe.is_tracking() {
            self.pointer = Some(position);
        }
    }

    /// Ends the swipe stroke where the pointer was last seen.
    pub fn end_swipe(&mut self) -> Option<Swipe> {
        match self.pointer.take() {
            Some(position) => self.swipe.finish(position, self.threshold),
            None => {
                self.swipe.cancel();
                None
            }
        }
    }

    pub fn cancel(&mut self) {
        self.pointer = None;
        self.swipe.cancel();
    }

    #[must_use]
    pub fn is_tracking_swipe(&self) -> bool {
        self.swipe.is_tracking()
    }
}
