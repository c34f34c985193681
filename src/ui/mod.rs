// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`grid`] - Scrollable thumbnail grid with header and scroll shortcuts
//! - [`lightbox`] - Full-window viewer with navigation, zoom, pan and swipe
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Zoom sequence and drag state primitives
//! - [`styles`] - Centralized styling (buttons, overlays, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod grid;
pub mod lightbox;
pub mod state;
pub mod styles;
pub mod theming;
