// SPDX-License-Identifier: MPL-2.0
//! Slide-in cue played after navigating between images.
//!
//! Purely visual: the controller has already moved to the new index when
//! the slide starts, and nothing waits for it to finish.

use super::controller::SlideDirection;
use crate::config::{SLIDE_DISTANCE_PX, SLIDE_DURATION_MS};
use std::time::{Duration, Instant};

/// Duration of the slide-in cue.
pub const SLIDE_DURATION: Duration = Duration::from_millis(SLIDE_DURATION_MS);

/// An in-flight slide-in animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideIn {
    direction: SlideDirection,
    started_at: Instant,
    progress: f32,
}

impl SlideIn {
    #[must_use]
    pub fn start(direction: SlideDirection, now: Instant) -> Self {
        Self {
            direction,
            started_at: now,
            progress: 0.0,
        }
    }

    /// Advances the animation. Returns `false` once it has completed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);
        self.progress = (elapsed.as_secs_f32() / SLIDE_DURATION.as_secs_f32()).min(1.0);
        self.progress < 1.0
    }

    #[must_use]
    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Linear progress in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Horizontal offset of the incoming image, easing out to zero.
    #[must_use]
    pub fn offset_x(&self) -> f32 {
        let remaining = 1.0 - self.progress;
        // Cubic ease-out
        let eased = remaining * remaining * remaining;
        let sign = match self.direction {
            SlideDirection::Left => 1.0,
            SlideDirection::Right => -1.0,
        };
        sign * SLIDE_DISTANCE_PX * eased
    }

    /// Opacity of the incoming image.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        0.4 + 0.6 * self.progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_enters_from_the_right() {
        let slide = SlideIn::start(SlideDirection::Left, Instant::now());
        assert!((slide.offset_x() - SLIDE_DISTANCE_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn prev_enters_from_the_left() {
        let slide = SlideIn::start(SlideDirection::Right, Instant::now());
        assert!((slide.offset_x() + SLIDE_DISTANCE_PX).abs() < f32::EPSILON);
    }

    #[test]
    fn tick_reports_completion() {
        let start = Instant::now();
        let mut slide = SlideIn::start(SlideDirection::Left, start);

        assert!(slide.tick(start + SLIDE_DURATION / 2));
        assert!(slide.progress() > 0.0 && slide.progress() < 1.0);

        assert!(!slide.tick(start + SLIDE_DURATION));
        assert!((slide.progress() - 1.0).abs() < f32::EPSILON);
        assert!(slide.offset_x().abs() < f32::EPSILON);
        assert!((slide.opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn tick_before_start_stays_at_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut slide = SlideIn::start(SlideDirection::Right, start);
        assert!(slide.tick(Instant::now()));
        assert_eq!(slide.progress(), 0.0);
    }

    #[test]
    fn offset_shrinks_monotonically() {
        let start = Instant::now();
        let mut slide = SlideIn::start(SlideDirection::Left, start);
        let mut last = slide.offset_x();
        for step in 1..=10 {
            slide.tick(start + SLIDE_DURATION * step / 10);
            let offset = slide.offset_x();
            assert!(offset <= last);
            last = offset;
        }
    }
}
