// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine.
//!
//! Two top-level states, closed and open. While open the zoom level cycles
//! through a fixed sequence and, when zoomed, a drag can pan the image.
//!
//! Invariants held after every operation:
//! - `current_index < len`
//! - the pan offset is zero whenever the zoom factor is 1.0
//! - a drag is only in progress while zoomed

use crate::ui::state::{DragState, ZoomState, ZoomSteps};
use iced::{Point, Vector};
use std::num::NonZeroUsize;

/// Which way the incoming image slides in after navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    /// Produced by `next()`: the new image enters from the right.
    Left,
    /// Produced by `prev()`: the new image enters from the left.
    Right,
}

/// Outcome of a `next()` / `prev()` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigation {
    pub from: usize,
    pub to: usize,
    pub direction: SlideDirection,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    len: NonZeroUsize,
    is_open: bool,
    current_index: usize,
    zoom: ZoomState,
    pan: Vector,
    drag: DragState,
}

impl Controller {
    /// Creates a closed lightbox over `len` images.
    #[must_use]
    pub fn new(len: NonZeroUsize, steps: ZoomSteps) -> Self {
        Self {
            len,
            is_open: false,
            current_index: 0,
            zoom: ZoomState::new(steps),
            pan: Vector::ZERO,
            drag: DragState::default(),
        }
    }

    /// Opens the lightbox on `index`. Out-of-range indices are ignored and
    /// reported by returning `false`.
    pub fn open(&mut self, index: usize) -> bool {
        if index >= self.len.get() {
            return false;
        }
        self.current_index = index;
        self.is_open = true;
        true
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.reset_view();
    }

    /// Moves to the following image, wrapping to the first.
    pub fn next(&mut self) -> Navigation {
        let from = self.current_index;
        self.current_index = (from + 1) % self.len.get();
        self.reset_view();
        Navigation {
            from,
            to: self.current_index,
            direction: SlideDirection::Left,
        }
    }

    /// Moves to the preceding image, wrapping to the last.
    pub fn prev(&mut self) -> Navigation {
        let from = self.current_index;
        let len = self.len.get();
        self.current_index = (from + len - 1) % len;
        self.reset_view();
        Navigation {
            from,
            to: self.current_index,
            direction: SlideDirection::Right,
        }
    }

    /// Rotates to the next zoom factor and recenters the image.
    /// Returns the new factor.
    pub fn toggle_zoom(&mut self) -> f32 {
        let factor = self.zoom.toggle();
        self.pan = Vector::ZERO;
        self.drag.stop();
        factor
    }

    /// Starts panning from `pointer`. Has no effect at 1.0; returns whether a
    /// drag started.
    pub fn begin_drag(&mut self, pointer: Point) -> bool {
        if !self.zoom.is_zoomed() {
            return false;
        }
        self.drag.start(pointer, self.pan);
        true
    }

    /// Moves the image so the grabbed spot follows `pointer`.
    pub fn update_drag(&mut self, pointer: Point) {
        if let Some(offset) = self.drag.calculate_offset(pointer) {
            self.pan = offset;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag.stop();
    }

    fn reset_view(&mut self) {
        self.zoom.reset();
        self.pan = Vector::ZERO;
        self.drag.stop();
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> NonZeroUsize {
        self.len
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom.factor()
    }

    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    #[must_use]
    pub fn pan_offset(&self) -> Vector {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn drag_anchor(&self) -> Option<Point> {
        self.drag.anchor()
    }
}
