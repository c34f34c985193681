// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Handles grab-and-drag interaction state for panning a zoomed image.
//! A drag is in progress exactly when an anchor is stored, so the two can
//! never disagree.

use iced::{Point, Vector};

/// Manages grab-and-drag state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    /// Pointer position minus the pan offset at the moment the drag started.
    anchor: Option<Point>,
}

impl DragState {
    /// Starts a drag operation at `pointer` while the image is shifted by `pan`.
    pub fn start(&mut self, pointer: Point, pan: Vector) {
        self.anchor = Some(Point::new(pointer.x - pan.x, pointer.y - pan.y));
    }

    /// Stops the drag operation
    pub fn stop(&mut self) {
        self.anchor = None;
    }

    /// Whether a drag operation is currently active
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.anchor.is_some()
    }

    /// The stored anchor, present only while dragging.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Calculates the pan offset that keeps the grabbed spot under `pointer`.
    #[must_use]
    pub fn calculate_offset(&self, pointer: Point) -> Option<Vector> {
        let anchor = self.anchor?;
        Some(Vector::new(pointer.x - anchor.x, pointer.y - anchor.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_drag_state_is_not_dragging() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert!(state.anchor().is_none());
    }

    #[test]
    fn start_drag_stores_anchor_relative_to_pan() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));

        assert!(state.is_dragging());
        assert_eq!(state.anchor(), Some(Point::new(80.0, 40.0)));
    }

    #[test]
    fn stop_drag_clears_state() {
        let mut state = DragState::default();
        state.start(Point::new(100.0, 50.0), Vector::new(20.0, 10.0));
        state.stop();

        assert!(!state.is_dragging());
        assert!(state.anchor().is_none());
    }

    #[test]
    fn calculate_offset_returns_none_when_not_dragging() {
        let state = DragState::default();
        assert!(state.calculate_offset(Point::new(100.0, 50.0)).is_none());
    }

    #[test]
    fn calculate_offset_follows_pointer() {
        let mut state = DragState::default();
        state.start(Point::new(200.0, 150.0), Vector::new(50.0, 30.0));

        // Pointer moved left/up by 20 pixels, so the image follows
        let offset = state.calculate_offset(Point::new(180.0, 130.0));

        assert_eq!(offset, Some(Vector::new(30.0, 10.0)));
    }

    #[test]
    fn resuming_drag_continues_from_current_pan() {
        let mut state = DragState::default();
        state.start(Point::new(0.0, 0.0), Vector::new(0.0, 0.0));
        let pan = state
            .calculate_offset(Point::new(40.0, 0.0))
            .expect("dragging");
        state.stop();

        state.start(Point::new(10.0, 10.0), pan);
        assert_eq!(
            state.calculate_offset(Point::new(10.0, 10.0)),
            Some(Vector::new(40.0, 0.0))
        );
    }
}
