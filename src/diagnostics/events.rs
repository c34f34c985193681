// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use crate::ui::lightbox::{Navigation, SlideDirection, Swipe};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Instant;

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    /// Lightbox opened from the grid.
    OpenLightbox { index: usize },

    CloseLightbox,

    /// Next/previous via button or keyboard.
    Navigate {
        from: usize,
        to: usize,
        forward: bool,
    },

    /// Next/previous via a horizontal swipe.
    Swipe {
        from: usize,
        to: usize,
        leftward: bool,
    },

    /// Zoom button or `Z` key; carries the new factor.
    ToggleZoom { factor: f32 },

    PanStarted,
    PanEnded,

    ScrollToTop,
    ScrollToBottom,
}

impl UserAction {
    #[must_use]
    pub fn navigate(navigation: Navigation) -> Self {
        UserAction::Navigate {
            from: navigation.from,
            to: navigation.to,
            forward: navigation.direction == SlideDirection::Left,
        }
    }

    #[must_use]
    pub fn swipe(swipe: Swipe, navigation: Navigation) -> Self {
        UserAction::Swipe {
            from: navigation.from,
            to: navigation.to,
            leftward: swipe == Swipe::Left,
        }
    }
}

impl fmt::Display for UserAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserAction::OpenLightbox { index } => write!(f, "open lightbox at {index}"),
            UserAction::CloseLightbox => write!(f, "close lightbox"),
            UserAction::Navigate { from, to, forward } => {
                let verb = if *forward { "next" } else { "previous" };
                write!(f, "{verb}: {from} -> {to}")
            }
            UserAction::Swipe { from, to, leftward } => {
                let side = if *leftward { "left" } else { "right" };
                write!(f, "swipe {side}: {from} -> {to}")
            }
            UserAction::ToggleZoom { factor } => write!(f, "zoom {factor}x"),
            UserAction::PanStarted => write!(f, "pan started"),
            UserAction::PanEnded => write!(f, "pan ended"),
            UserAction::ScrollToTop => write!(f, "scroll to top"),
            UserAction::ScrollToBottom => write!(f, "scroll to bottom"),
        }
    }
}

/// The type and data of a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction { action: UserAction },
    /// Recoverable problem, usually during startup.
    Warning { message: String },
}

impl fmt::Display for DiagnosticEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticEventKind::UserAction { action } => write!(f, "action: {action}"),
            DiagnosticEventKind::Warning { message } => write!(f, "warning: {message}"),
        }
    }
}

/// A recorded event with both clocks: monotonic for ordering and durations,
/// wall clock for display.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub recorded_at: DateTime<Utc>,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            recorded_at: Utc::now(),
            kind,
        }
    }
}

impl fmt::Display for DiagnosticEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}",
            self.recorded_at.format("%H:%M:%S%.3f"),
            self.kind
        )
    }
}
