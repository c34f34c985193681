// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the grid and lightbox widgets.

pub mod button;
pub mod overlay;
pub mod tooltip;
