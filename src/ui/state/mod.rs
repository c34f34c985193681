// SPDX-License-Identifier: MPL-2.0
//! UI state primitives shared by the lightbox.

pub mod drag;
pub mod zoom;

pub use drag::DragState;
pub use zoom::{ZoomState, ZoomSteps, ZoomStepsError};
