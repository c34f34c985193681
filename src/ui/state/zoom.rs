// SPDX-License-Identifier: MPL-2.0
//! Zoom state management
//!
//! The lightbox zooms in discrete steps. The steps form a fixed, ordered
//! sequence that always starts at 1.0 (unzoomed); toggling rotates through
//! it and wraps back to the first entry.

use crate::config::{DEFAULT_ZOOM_LEVELS, MAX_ZOOM_FACTOR};
use crate::error::Error;
use std::fmt;

/// Reasons a zoom sequence is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoomStepsError {
    /// No levels were given.
    Empty,
    /// The first level is not 1.0.
    MustStartAtOne(f32),
    /// A level is not strictly greater than the previous one.
    NotIncreasing { index: usize },
    /// A level is not finite or exceeds [`MAX_ZOOM_FACTOR`].
    OutOfRange(f32),
}

impl fmt::Display for ZoomStepsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoomStepsError::Empty => write!(f, "zoom levels must not be empty"),
            ZoomStepsError::MustStartAtOne(first) => {
                write!(f, "zoom levels must start at 1.0, got {}", first)
            }
            ZoomStepsError::NotIncreasing { index } => {
                write!(f, "zoom level at position {} is not increasing", index)
            }
            ZoomStepsError::OutOfRange(value) => {
                write!(f, "zoom level {} is outside 1.0..={}", value, MAX_ZOOM_FACTOR)
            }
        }
    }
}

impl From<ZoomStepsError> for Error {
    fn from(err: ZoomStepsError) -> Self {
        Error::Config(err.to_string())
    }
}

/// Ordered zoom factors, guaranteed to start at 1.0 and strictly increase.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomSteps(Vec<f32>);

impl ZoomSteps {
    /// Validates and wraps a zoom sequence.
    pub fn new(levels: Vec<f32>) -> Result<Self, ZoomStepsError> {
        let Some(&first) = levels.first() else {
            return Err(ZoomStepsError::Empty);
        };

        for &level in &levels {
            if !level.is_finite() || level > MAX_ZOOM_FACTOR {
                return Err(ZoomStepsError::OutOfRange(level));
            }
        }

        if (first - 1.0).abs() > f32::EPSILON {
            return Err(ZoomStepsError::MustStartAtOne(first));
        }

        if let Some(index) = levels
            .windows(2)
            .position(|pair| pair[1] <= pair[0])
        {
            return Err(ZoomStepsError::NotIncreasing { index: index + 1 });
        }

        Ok(Self(levels))
    }

    /// Returns the factors in cycle order.
    #[must_use]
    pub fn levels(&self) -> &[f32] {
        &self.0
    }

    /// Number of steps in the cycle.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: a sequence holds at least the unzoomed level.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ZoomSteps {
    fn default() -> Self {
        Self(DEFAULT_ZOOM_LEVELS.to_vec())
    }
}

/// Position within a [`ZoomSteps`] cycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ZoomState {
    steps: ZoomSteps,
    position: usize,
}

impl ZoomState {
    /// Creates an unzoomed state over the given sequence.
    #[must_use]
    pub fn new(steps: ZoomSteps) -> Self {
        Self { steps, position: 0 }
    }

    /// Current zoom factor.
    #[must_use]
    pub fn factor(&self) -> f32 {
        self.steps.0[self.position]
    }

    /// Whether the current factor is above 1.0.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.position > 0
    }

    /// Advances to the next step, wrapping to 1.0 after the last one.
    /// Returns the new factor.
    pub fn toggle(&mut self) -> f32 {
        self.position = (self.position + 1) % self.steps.len();
        self.factor()
    }

    /// Returns to 1.0.
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Formats a number for display (removes unnecessary decimal places)
#[must_use]
pub fn format_number(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unzoomed() {
        let state = ZoomState::default();
        assert_eq!(state.factor(), 1.0);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn toggle_cycles_through_default_levels() {
        let mut state = ZoomState::default();
        assert_eq!(state.toggle(), 1.5);
        assert_eq!(state.toggle(), 2.0);
        assert_eq!(state.toggle(), 2.5);
        assert_eq!(state.toggle(), 1.0);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn custom_sequence_generalizes_cycle() {
        let steps = ZoomSteps::new(vec![1.0, 3.0]).expect("valid steps");
        let mut state = ZoomState::new(steps);
        assert_eq!(state.toggle(), 3.0);
        assert_eq!(state.toggle(), 1.0);
    }

    #[test]
    fn single_step_sequence_never_zooms() {
        let steps = ZoomSteps::new(vec![1.0]).expect("valid steps");
        let mut state = ZoomState::new(steps);
        assert_eq!(state.toggle(), 1.0);
        assert!(!state.is_zoomed());
    }

    #[test]
    fn reset_returns_to_one() {
        let mut state = ZoomState::default();
        state.toggle();
        state.toggle();
        state.reset();
        assert_eq!(state.factor(), 1.0);
    }

    #[test]
    fn invalid_sequences_are_rejected() {
        assert_eq!(ZoomSteps::new(vec![]), Err(ZoomStepsError::Empty));
        assert_eq!(
            ZoomSteps::new(vec![1.5, 2.0]),
            Err(ZoomStepsError::MustStartAtOne(1.5))
        );
        assert_eq!(
            ZoomSteps::new(vec![1.0, 2.0, 2.0]),
            Err(ZoomStepsError::NotIncreasing { index: 2 })
        );
        assert_eq!(
            ZoomSteps::new(vec![1.0, 20.0]),
            Err(ZoomStepsError::OutOfRange(20.0))
        );
        assert!(matches!(
            ZoomSteps::new(vec![1.0, f32::NAN]),
            Err(ZoomStepsError::OutOfRange(_))
        ));
    }

    #[test]
    fn zoom_steps_error_converts_to_config_error() {
        let err: Error = ZoomStepsError::Empty.into();
        assert!(matches!(err, Error::Config(msg) if msg.contains("empty")));
    }

    #[test]
    fn format_number_trims_decimals() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(2.25), "2.25");
    }
}
